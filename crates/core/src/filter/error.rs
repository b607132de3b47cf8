//! Filter error types.

use chrono::NaiveDate;
use thiserror::Error;
use washledger_shared::AppError;

/// Errors building a record filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        Self::Validation(err.to_string())
    }
}
