//! Report computation for Finora
//!
//! Pure derivations over a snapshot of the transaction set; nothing here
//! touches the ledger or the store.

pub mod monthly;

pub use monthly::{
    round_currency, MonthlySummary, ReportRow, BALANCE_LABEL, MONTH_COUNT, MONTH_LABELS,
    TOTAL_EXPENSES_LABEL, TOTAL_INCOME_LABEL,
};
