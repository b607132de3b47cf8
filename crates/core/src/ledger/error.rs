//! Ledger error types.

use thiserror::Error;
use washledger_shared::AppError;

use crate::filter::FilterError;
use crate::storage::StorageError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No record at the given position.
    #[error("No record at index {index} (ledger holds {len} records)")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of stored records.
        len: usize,
    },

    /// Invalid filter.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::IndexOutOfRange { .. } => Self::NotFound(err.to_string()),
            LedgerError::Filter(e) => Self::Validation(e.to_string()),
            LedgerError::Storage(e) => e.into(),
        }
    }
}
