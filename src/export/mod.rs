//! Export module for Finora
//!
//! Serializes derived reports into downloadable artifacts. Only the byte
//! buffer is produced here; offering it to the user as a file download is
//! the consumer's concern.

pub mod xlsx;

pub use xlsx::{export_monthly_report, write_report, REPORT_FILE_NAME, SHEET_NAME};
