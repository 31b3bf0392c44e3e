//! Transaction model
//!
//! A transaction is an immutable value once created: edits replace the whole
//! record under the same id. Direction is carried by [`TransactionKind`],
//! never by the sign of the amount, so `amount` is always strictly positive.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use crate::error::{FinoraError, FinoraResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(FinoraError::UnknownVariant {
                field: "kind",
                value: s.to_string(),
            }),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the ledger at creation time
    pub id: TransactionId,

    /// Non-empty trimmed description
    pub description: String,

    /// Strictly positive amount; direction lives in `kind`
    pub amount: Decimal,

    /// Income or expense
    pub kind: TransactionKind,

    /// Expense category (present for income too, ignored by aggregation)
    #[serde(default)]
    pub category: Category,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.kind
        )
    }
}

/// Candidate field values for a new or edited transaction
///
/// The form UI hands these over already coerced to the right primitive types;
/// the ledger still re-validates via [`TransactionDraft::validate`] rather
/// than trusting the caller.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Category,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Create a draft
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        kind: TransactionKind,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            category,
            date,
        }
    }

    /// Validate the candidate fields
    ///
    /// Fails with [`FinoraError::EmptyDescription`] when the trimmed
    /// description is empty, and [`FinoraError::NonPositiveAmount`] when the
    /// amount is zero or negative.
    pub fn validate(&self) -> FinoraResult<()> {
        if self.description.trim().is_empty() {
            return Err(FinoraError::EmptyDescription);
        }
        if self.amount <= Decimal::ZERO {
            return Err(FinoraError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Turn a validated draft into a transaction with the given id
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description.trim().to_string(),
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date: self.date,
        }
    }
}

/// Income and expense sums over a transaction set
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    /// Balance is income minus expense
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Predicate for the ledger's filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Every transaction
    #[default]
    All,
    /// Only income transactions
    Income,
    /// Only expense transactions
    Expense,
}

impl KindFilter {
    /// Whether a transaction of `kind` passes this filter
    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(description: &str, amount: Decimal) -> TransactionDraft {
        TransactionDraft::new(
            description,
            amount,
            TransactionKind::Expense,
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        )
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft("Groceries", dec!(42.50)).validate().is_ok());
    }

    #[test]
    fn test_empty_description_fails() {
        let err = draft("", dec!(10)).validate().unwrap_err();
        assert!(matches!(err, FinoraError::EmptyDescription));
    }

    #[test]
    fn test_whitespace_description_fails_for_any_amount() {
        for amount in [dec!(0.01), dec!(10), dec!(99999.99)] {
            let err = draft("   \t", amount).validate().unwrap_err();
            assert!(matches!(err, FinoraError::EmptyDescription));
        }
    }

    #[test]
    fn test_non_positive_amount_fails_regardless_of_description() {
        for amount in [dec!(0), dec!(-0.01), dec!(-100)] {
            let err = draft("Perfectly fine description", amount)
                .validate()
                .unwrap_err();
            assert!(matches!(err, FinoraError::NonPositiveAmount(_)));
        }
    }

    #[test]
    fn test_into_transaction_trims_description() {
        let txn = draft("  Groceries  ", dec!(42.50)).into_transaction(TransactionId::new(1));
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, dec!(42.50));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_totals_balance() {
        let totals = Totals {
            income: dec!(3000),
            expense: dec!(250),
        };
        assert_eq!(totals.balance(), dec!(2750));
    }

    #[test]
    fn test_kind_filter() {
        assert!(KindFilter::All.matches(TransactionKind::Income));
        assert!(KindFilter::All.matches(TransactionKind::Expense));
        assert!(KindFilter::Income.matches(TransactionKind::Income));
        assert!(!KindFilter::Income.matches(TransactionKind::Expense));
        assert!(KindFilter::Expense.matches(TransactionKind::Expense));
        assert!(!KindFilter::Expense.matches(TransactionKind::Income));
    }

    #[test]
    fn test_serialization_round_trip() {
        let txn = draft("Groceries", dec!(42.50)).into_transaction(TransactionId::new(3));
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_missing_category_defaults_to_other() {
        // Older records without a category field still deserialize
        let json = r#"{
            "id": 1,
            "description": "Salary",
            "amount": "3000.00",
            "kind": "income",
            "date": "2025-03-01"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.category, Category::Other);
    }
}
