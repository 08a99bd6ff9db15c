//! Store error types.

use olooh_shared::AppError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Snapshot data is malformed.
    #[error("Malformed snapshot: {0}")]
    Snapshot(String),

    /// A record creation rule was violated.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(what),
            StoreError::Ledger(e) if e.is_catalog_conflict() => Self::BusinessRule(e.to_string()),
            StoreError::Ledger(e) => Self::Validation(e.to_string()),
            StoreError::Snapshot(_) | StoreError::Io(_) => Self::Store(err.to_string()),
        }
    }
}
