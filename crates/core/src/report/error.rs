//! Report error types.

use thiserror::Error;
use washledger_shared::AppError;

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Nothing to export.
    #[error("No records to export")]
    NoRecords,
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
