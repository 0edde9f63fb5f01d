pub mod json_backend;

use crate::errors::Result;
use crate::ledger::Transaction;

/// Abstraction over persistence backends for the transaction sequence.
pub trait StorageBackend: Send + Sync {
    /// Returns the previously persisted sequence; empty when none exists.
    fn load(&self) -> Result<Vec<Transaction>>;

    /// Rewrites the full sequence. Overwrite semantics, not incremental.
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

pub use json_backend::JsonStorage;
