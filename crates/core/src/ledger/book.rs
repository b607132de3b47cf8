//! In-memory ledger: the record set plus the employee-count setting.

use chrono::{DateTime, Local};
use washledger_shared::types::EmployeeCount;

use super::error::LedgerError;
use crate::distribution::{RevenueBreakdown, RevenueDistributor};
use crate::filter::{FilterError, FilteredView, RecordFilter};
use crate::record::{NewRecord, RecordEdit, TransactionRecord};

/// Stored records in insertion order and the configured employee count.
///
/// Records are addressed by their position in the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
    employee_count: EmployeeCount,
}

impl Ledger {
    /// Creates a ledger from loaded state.
    #[must_use]
    pub fn new(records: Vec<TransactionRecord>, employee_count: EmployeeCount) -> Self {
        Self {
            records,
            employee_count,
        }
    }

    /// Stored records.
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Configured employee count.
    #[must_use]
    pub const fn employee_count(&self) -> EmployeeCount {
        self.employee_count
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IndexOutOfRange` if there is no such record.
    pub fn get(&self, index: usize) -> Result<&TransactionRecord, LedgerError> {
        let len = self.records.len();
        self.records
            .get(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })
    }

    /// Appends a record stamped with `now` and returns its index.
    pub fn add(&mut self, input: NewRecord, now: DateTime<Local>) -> usize {
        self.records.push(TransactionRecord::create(input, now));
        self.records.len() - 1
    }

    /// Replaces the editable fields of the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IndexOutOfRange` if there is no such record.
    pub fn edit(&mut self, index: usize, edit: RecordEdit) -> Result<&TransactionRecord, LedgerError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        record.apply_edit(edit);
        Ok(record)
    }

    /// Removes and returns the record at `index`; later records shift down.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IndexOutOfRange` if there is no such record.
    pub fn delete(&mut self, index: usize) -> Result<TransactionRecord, LedgerError> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Changes the configured employee count.
    pub fn set_employee_count(&mut self, count: EmployeeCount) {
        self.employee_count = count;
    }

    /// Records selected by `filter`, with their stored indices.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDateRange` for an inverted date range.
    pub fn view(&self, filter: &RecordFilter) -> Result<FilteredView<'_>, FilterError> {
        filter.apply(&self.records)
    }

    /// Breakdown over every stored record.
    #[must_use]
    pub fn breakdown(&self) -> RevenueBreakdown {
        RevenueDistributor::compute(&self.records, self.employee_count)
    }

    /// Breakdown over the records in `view`.
    #[must_use]
    pub fn breakdown_for(&self, view: &FilteredView<'_>) -> RevenueBreakdown {
        RevenueDistributor::compute(view.records(), self.employee_count)
    }
}
