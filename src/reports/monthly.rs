//! Monthly aggregation
//!
//! Folds an arbitrary transaction set into a fixed-shape monthly matrix:
//! one income bucket and one bucket per expense category for each of the 12
//! calendar months. Bucketing uses the calendar month only — the year is
//! discarded, so transactions from different years sharing a month merge
//! into one bucket. That is documented source behavior, kept deliberately.
//!
//! The fold is pure and order-independent; output is restricted to "active"
//! months (any non-zero figure) in ascending calendar order.

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FinoraError, FinoraResult};
use crate::models::{Category, Transaction, TransactionKind};

/// Number of calendar months
pub const MONTH_COUNT: usize = 12;

/// Report column labels for the 12 calendar months
pub const MONTH_LABELS: [&str; MONTH_COUNT] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Label of the income row
pub const TOTAL_INCOME_LABEL: &str = "Total Income";
/// Label of the summed-expenses row
pub const TOTAL_EXPENSES_LABEL: &str = "Total Expenses";
/// Label of the income-minus-expenses row
pub const BALANCE_LABEL: &str = "Balance";

/// Round a currency figure to 2 decimal places, half away from zero
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// One row of the report: a label, one figure per active month, and the
/// yearly total (exact sum of the unrounded figures, rounded last)
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: &'static str,
    pub monthly: Vec<Decimal>,
    pub yearly_total: Decimal,
}

/// The monthly aggregation matrix, restricted to months with data
///
/// Derived and transient — recomputed from the ledger on every export,
/// never persisted.
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    income: [Decimal; MONTH_COUNT],
    expenses: [[Decimal; MONTH_COUNT]; Category::COUNT],
    active_months: Vec<usize>,
}

impl MonthlySummary {
    /// Fold a transaction set into the monthly matrix
    ///
    /// Fails with [`FinoraError::EmptyReport`] when no month ends up with a
    /// non-zero figure; callers must not build a zero-column report.
    pub fn aggregate(transactions: &[Transaction]) -> FinoraResult<Self> {
        let mut income = [Decimal::ZERO; MONTH_COUNT];
        let mut expenses = [[Decimal::ZERO; MONTH_COUNT]; Category::COUNT];

        for txn in transactions {
            let month = txn.date.month0() as usize;
            match txn.kind {
                TransactionKind::Income => income[month] += txn.amount,
                TransactionKind::Expense => {
                    expenses[txn.category.index()][month] += txn.amount;
                }
            }
        }

        let active_months: Vec<usize> = (0..MONTH_COUNT)
            .filter(|&m| {
                !income[m].is_zero() || Category::ALL.iter().any(|c| !expenses[c.index()][m].is_zero())
            })
            .collect();

        if active_months.is_empty() {
            return Err(FinoraError::EmptyReport);
        }

        Ok(Self {
            income,
            expenses,
            active_months,
        })
    }

    /// Active months as 0-based calendar indices, ascending
    pub fn active_months(&self) -> &[usize] {
        &self.active_months
    }

    /// Column labels for the active months, ascending
    pub fn month_labels(&self) -> Vec<&'static str> {
        self.active_months.iter().map(|&m| MONTH_LABELS[m]).collect()
    }

    /// The report rows in fixed order: Total Income, one row per category in
    /// declared order, Total Expenses, Balance
    ///
    /// Monthly figures are rounded to 2 decimal places; each yearly total is
    /// the exact pre-rounding sum of that row's active-month figures.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = Vec::with_capacity(Category::COUNT + 3);

        rows.push(self.build_row(TOTAL_INCOME_LABEL, |m| self.income[m]));

        for category in Category::ALL {
            rows.push(
                self.build_row(category.display_name(), |m| self.expenses[category.index()][m]),
            );
        }

        rows.push(self.build_row(TOTAL_EXPENSES_LABEL, |m| self.month_expenses(m)));
        rows.push(self.build_row(BALANCE_LABEL, |m| self.income[m] - self.month_expenses(m)));

        rows
    }

    /// Unrounded expense total across all categories for one month
    fn month_expenses(&self, month: usize) -> Decimal {
        Category::ALL
            .iter()
            .map(|c| self.expenses[c.index()][month])
            .sum()
    }

    fn build_row<F>(&self, label: &'static str, figure: F) -> ReportRow
    where
        F: Fn(usize) -> Decimal,
    {
        let monthly: Vec<Decimal> = self
            .active_months
            .iter()
            .map(|&m| round_currency(figure(m)))
            .collect();
        let exact_total: Decimal = self.active_months.iter().map(|&m| figure(m)).sum();

        ReportRow {
            label,
            monthly,
            yearly_total: round_currency(exact_total),
        }
    }
}
