use thiserror::Error;

use crate::ledger::TransactionKind;

/// Error type that captures ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid transaction type: {0}")]
    InvalidType(String),
    #[error("invalid category `{category}` for {kind}")]
    InvalidCategory {
        category: String,
        kind: TransactionKind,
    },
    #[error("invalid date: {0}")]
    DateParse(String),
    #[error("persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
