//! Strongly-typed transaction identifier
//!
//! Ids are plain sequence numbers handed out by the ledger: strictly
//! increasing, assigned at creation time, never reused. The newtype keeps
//! them from being confused with other integers at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier for a [`Transaction`](super::Transaction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create an id from a raw sequence number
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw sequence number
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one in the sequence
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
