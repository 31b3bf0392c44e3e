//! Core data models for Finora
//!
//! This module contains the data structures that represent the ledger
//! domain: transactions, their kinds and categories, filters and totals.

pub mod category;
pub mod ids;
pub mod transaction;

pub use category::Category;
pub use ids::TransactionId;
pub use transaction::{KindFilter, Totals, Transaction, TransactionDraft, TransactionKind};
