//! Custom error types for Finora
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::TransactionId;

/// The main error type for Finora operations
#[derive(Error, Debug)]
pub enum FinoraError {
    /// A candidate transaction had an empty (or whitespace-only) description
    #[error("Transaction description must not be empty")]
    EmptyDescription,

    /// A candidate transaction had an amount that was zero or negative
    #[error("Transaction amount must be greater than zero, got {0}")]
    NonPositiveAmount(rust_decimal::Decimal),

    /// An unrecognized transaction kind or category value
    #[error("Unknown {field} value: {value}")]
    UnknownVariant { field: &'static str, value: String },

    /// The targeted transaction no longer exists
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    /// The transaction set yields no active months, so no report can be built
    #[error("No transaction data to export")]
    EmptyReport,

    /// Persistent store failures (reads and write-through saves)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Spreadsheet serialization failures
    #[error("Export error: {0}")]
    Export(String),

    /// Path/configuration resolution failures
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FinoraError {
    /// Check if this is a validation error (`EmptyDescription`, `NonPositiveAmount`
    /// or an unrecognized enum value)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyDescription | Self::NonPositiveAmount(_) | Self::UnknownVariant { .. }
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is the "nothing to export" signal
    pub fn is_empty_report(&self) -> bool {
        matches!(self, Self::EmptyReport)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinoraError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FinoraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for FinoraError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Finora operations
pub type FinoraResult<T> = Result<T, FinoraError>;
