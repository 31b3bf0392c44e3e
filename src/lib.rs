//! Finora - personal income/expense ledger with spreadsheet reports
//!
//! This library provides the core pipeline of the Finora budgeting
//! application: an in-memory transaction ledger with write-through JSON
//! persistence, a pure monthly aggregation over income and per-category
//! expenses, and a styled xlsx report generator. Form handling, icons and
//! the download trigger live in the consuming UI shell, not here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, kinds, categories)
//! - `storage`: JSON file storage layer
//! - `ledger`: The transaction ledger and its mutation contract
//! - `reports`: Monthly aggregation
//! - `export`: Spreadsheet serialization
//!
//! # Example
//!
//! ```rust,no_run
//! use finora::config::FinoraPaths;
//! use finora::export::export_monthly_report;
//! use finora::ledger::Ledger;
//! use finora::storage::JsonFileStore;
//!
//! # fn main() -> Result<(), finora::FinoraError> {
//! let paths = FinoraPaths::new()?;
//! let store = JsonFileStore::from_paths(&paths);
//! let ledger = Ledger::open(Box::new(store))?;
//!
//! let workbook = export_monthly_report(ledger.transactions())?;
//! # let _ = workbook;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinoraError, FinoraResult};
pub use ledger::Ledger;
pub use models::{
    Category, KindFilter, Totals, Transaction, TransactionDraft, TransactionId, TransactionKind,
};
pub use reports::MonthlySummary;
