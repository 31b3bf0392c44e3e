//! Transaction ledger
//!
//! The ledger is the sole owner of the in-memory transaction collection for
//! one user/session. It is constructed once with an injected persistent
//! store, validates every candidate before accepting it, and rewrites the
//! whole collection through the store after each mutation (write-through,
//! no batching). Store failures are propagated, never swallowed.
//!
//! The sequence is kept most-recent-first; that order matters only for
//! display, aggregation is order-independent.

use tracing::debug;

use crate::error::{FinoraError, FinoraResult};
use crate::models::{
    KindFilter, Totals, Transaction, TransactionDraft, TransactionId, TransactionKind,
};
use crate::storage::TransactionStore;

/// The authoritative transaction collection with its mutation contract
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    store: Box<dyn TransactionStore>,
}

impl Ledger {
    /// Open a ledger, hydrating it from the injected store
    ///
    /// Absence of previously saved data yields an empty ledger. The id
    /// counter resumes past the highest persisted id so ids are never reused.
    pub fn open(store: Box<dyn TransactionStore>) -> FinoraResult<Self> {
        let transactions = store.load()?;
        let next_id = transactions
            .iter()
            .map(|t| t.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(TransactionId::new(1));

        debug!(count = transactions.len(), "ledger hydrated");

        Ok(Self {
            transactions,
            next_id,
            store,
        })
    }

    /// Add a new transaction from candidate fields
    ///
    /// Validates the draft, assigns a fresh unique id and prepends the
    /// resulting transaction to the sequence, then persists. On validation
    /// failure the ledger is unchanged.
    pub fn add(&mut self, draft: TransactionDraft) -> FinoraResult<Transaction> {
        draft.validate()?;

        let id = self.next_id;
        self.next_id = id.next();

        let txn = draft.into_transaction(id);
        self.transactions.insert(0, txn.clone());
        self.persist()?;

        Ok(txn)
    }

    /// Replace the transaction with `id` wholesale
    ///
    /// The entry keeps its position in the sequence. Fails with
    /// [`FinoraError::NotFound`] when no transaction has that id (e.g. it was
    /// removed since the caller last looked).
    pub fn update(&mut self, id: TransactionId, draft: TransactionDraft) -> FinoraResult<Transaction> {
        draft.validate()?;

        let position = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(FinoraError::NotFound(id))?;

        let txn = draft.into_transaction(id);
        self.transactions[position] = txn.clone();
        self.persist()?;

        Ok(txn)
    }

    /// Remove the transaction with `id` if present
    ///
    /// Removing an absent id is a no-op, not an error, so the call is
    /// idempotent. The collection is persisted either way.
    pub fn remove(&mut self, id: TransactionId) -> FinoraResult<()> {
        self.transactions.retain(|t| t.id != id);
        self.persist()
    }

    /// Lazy, restartable view of transactions passing `filter`
    pub fn filtered(&self, filter: KindFilter) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter().filter(move |t| filter.matches(t.kind))
    }

    /// Income and expense sums over the whole ledger
    ///
    /// Consistent with `filtered(KindFilter::All)` at the same instant;
    /// mutations require `&mut self`, so no interleaving is observable.
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for txn in &self.transactions {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expense += txn.amount,
            }
        }
        totals
    }

    /// The full sequence, most recent first
    ///
    /// Export callers aggregate over this snapshot slice; the borrow pins the
    /// ledger for the duration, so the input cannot mutate mid-aggregation.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn persist(&self) -> FinoraResult<()> {
        self.store.save(&self.transactions)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::JsonFileStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn open_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("transactions.json"));
        let ledger = Ledger::open(Box::new(store)).unwrap();
        (temp_dir, ledger)
    }

    fn income(description: &str, amount: Decimal) -> TransactionDraft {
        TransactionDraft::new(
            description,
            amount,
            TransactionKind::Income,
            Category::Other,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    fn expense(description: &str, amount: Decimal, category: Category) -> TransactionDraft {
        TransactionDraft::new(
            description,
            amount,
            TransactionKind::Expense,
            category,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_add_prepends_and_assigns_increasing_ids() {
        let (_temp_dir, mut ledger) = open_test_ledger();

        let first = ledger.add(income("Salary", dec!(3000))).unwrap();
        let second = ledger
            .add(expense("Groceries", dec!(200), Category::Food))
            .unwrap();

        assert!(second.id > first.id);
        // Most recent first
        assert_eq!(ledger.transactions()[0].id, second.id);
        assert_eq!(ledger.transactions()[1].id, first.id);
    }

    #[test]
    fn test_add_validation_failure_leaves_ledger_unchanged() {
        let (_temp_dir, mut ledger) = open_test_ledger();
        ledger.add(income("Salary", dec!(3000))).unwrap();

        let err = ledger.add(income("  ", dec!(100))).unwrap_err();
        assert!(matches!(err, FinoraError::EmptyDescription));
        assert_eq!(ledger.len(), 1);

        let err = ledger.add(income("Bonus", dec!(0))).unwrap_err();
        assert!(matches!(err, FinoraError::NonPositiveAmount(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_update_preserves_position() {
        let (_temp_dir, mut ledger) = open_test_ledger();
        let a = ledger.add(income("Salary", dec!(3000))).unwrap();
        let b = ledger
            .add(expense("Groceries", dec!(200), Category::Food))
            .unwrap();
        let c = ledger
            .add(expense("Bus pass", dec!(50), Category::Transport))
            .unwrap();

        // b sits in the middle; edit it and check its neighbours stay put
        let updated = ledger
            .update(b.id, expense("Groceries and snacks", dec!(220), Category::Food))
            .unwrap();

        assert_eq!(updated.id, b.id);
        let ids: Vec<_> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
        assert_eq!(ledger.transactions()[1].description, "Groceries and snacks");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (_temp_dir, mut ledger) = open_test_ledger();

        let err = ledger
            .update(TransactionId::new(999), income("Salary", dec!(3000)))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_temp_dir, mut ledger) = open_test_ledger();
        let txn = ledger.add(income("Salary", dec!(3000))).unwrap();

        ledger.remove(txn.id).unwrap();
        assert!(ledger.is_empty());

        // Second removal of the same id is a no-op, not an error
        ledger.remove(txn.id).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let (_temp_dir, mut ledger) = open_test_ledger();
        let a = ledger.add(income("Salary", dec!(3000))).unwrap();
        ledger.remove(a.id).unwrap();

        let b = ledger.add(income("Bonus", dec!(500))).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_filtered_views() {
        let (_temp_dir, mut ledger) = open_test_ledger();
        ledger.add(income("Salary", dec!(3000))).unwrap();
        ledger
            .add(expense("Groceries", dec!(200), Category::Food))
            .unwrap();
        ledger
            .add(expense("Bus pass", dec!(50), Category::Transport))
            .unwrap();

        assert_eq!(ledger.filtered(KindFilter::All).count(), 3);
        assert_eq!(ledger.filtered(KindFilter::Income).count(), 1);
        assert_eq!(ledger.filtered(KindFilter::Expense).count(), 2);

        // The view is restartable
        let view = ledger.filtered(KindFilter::Expense);
        assert_eq!(view.count(), 2);
        assert_eq!(ledger.filtered(KindFilter::Expense).count(), 2);
    }

    #[test]
    fn test_totals_match_signed_sum_after_interleaved_mutations() {
        let (_temp_dir, mut ledger) = open_test_ledger();

        let salary = ledger.add(income("Salary", dec!(3000))).unwrap();
        let rent = ledger
            .add(expense("Rent", dec!(1200), Category::Housing))
            .unwrap();
        ledger
            .add(expense("Groceries", dec!(200.50), Category::Food))
            .unwrap();
        ledger
            .update(rent.id, expense("Rent", dec!(1250), Category::Housing))
            .unwrap();
        ledger.remove(salary.id).unwrap();
        ledger.add(income("Freelance", dec!(800.25))).unwrap();

        let totals = ledger.totals();
        let signed_sum: Decimal = ledger
            .transactions()
            .iter()
            .map(|t| match t.kind {
                TransactionKind::Income => t.amount,
                TransactionKind::Expense => -t.amount,
            })
            .sum();

        assert_eq!(totals.balance(), signed_sum);
        assert_eq!(totals.income, dec!(800.25));
        assert_eq!(totals.expense, dec!(1450.50));
    }

    #[test]
    fn test_mutations_write_through_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        let mut ledger = Ledger::open(Box::new(JsonFileStore::new(path.clone()))).unwrap();
        let kept = ledger.add(income("Salary", dec!(3000))).unwrap();
        let gone = ledger
            .add(expense("Groceries", dec!(200), Category::Food))
            .unwrap();
        ledger.remove(gone.id).unwrap();

        // A fresh ledger over the same file sees the settled state
        let reloaded = Ledger::open(Box::new(JsonFileStore::new(path))).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.transactions()[0].description, "Salary");

        // And the id counter resumes past the persisted ids
        let mut reloaded = reloaded;
        let next = reloaded.add(income("Bonus", dec!(100))).unwrap();
        assert!(next.id > kept.id);
    }

    #[test]
    fn test_store_failure_is_propagated() {
        struct FailingStore;

        impl TransactionStore for FailingStore {
            fn load(&self) -> FinoraResult<Vec<Transaction>> {
                Ok(Vec::new())
            }

            fn save(&self, _transactions: &[Transaction]) -> FinoraResult<()> {
                Err(FinoraError::Storage("disk full".into()))
            }
        }

        let mut ledger = Ledger::open(Box::new(FailingStore)).unwrap();
        let err = ledger.add(income("Salary", dec!(3000))).unwrap_err();
        assert!(matches!(err, FinoraError::Storage(_)));
    }
}
