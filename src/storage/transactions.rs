//! Persistent store for the transaction collection
//!
//! The ledger delegates durability to a [`TransactionStore`]: the whole
//! collection is read once at startup and rewritten wholesale after every
//! mutation. [`JsonFileStore`] is the production implementation, keeping the
//! collection as a single JSON document under a well-known path.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FinoraPaths;
use crate::error::FinoraResult;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Durability collaborator for the ledger
///
/// Implementations persist the full transaction sequence; partial updates are
/// never issued. Absence of previously saved data is not an error.
pub trait TransactionStore {
    /// Read the entire persisted collection, empty if nothing was ever saved
    fn load(&self) -> FinoraResult<Vec<Transaction>>;

    /// Rewrite the entire persisted collection
    fn save(&self, transactions: &[Transaction]) -> FinoraResult<()>;
}

/// On-disk representation of the persisted collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// JSON-file-backed [`TransactionStore`]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the standard location resolved by [`FinoraPaths`]
    pub fn from_paths(paths: &FinoraPaths) -> Self {
        Self::new(paths.transactions_file())
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TransactionStore for JsonFileStore {
    fn load(&self) -> FinoraResult<Vec<Transaction>> {
        let data: TransactionData = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = data.transactions.len(),
            "loaded transactions"
        );
        Ok(data.transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> FinoraResult<()> {
        let data = TransactionData {
            transactions: transactions.to_vec(),
        };
        write_json_atomic(&self.path, &data)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
