//! Storage layer for Finora
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The ledger sees only the [`TransactionStore`] trait, so tests
//! and alternative backends can be injected in its place.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::{JsonFileStore, TransactionStore};
