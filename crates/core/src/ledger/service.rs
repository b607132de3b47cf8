//! Ledger service: load, mutate, save.
//!
//! Every action reloads from the store, applies one change, and persists the
//! whole list, so what is on disk is always what the next refresh reads.

use chrono::{DateTime, Local};
use tracing::{debug, info};
use washledger_shared::types::EmployeeCount;

use super::book::Ledger;
use super::error::LedgerError;
use crate::distribution::RevenueBreakdown;
use crate::filter::RecordFilter;
use crate::record::{NewRecord, RecordEdit, TransactionRecord};
use crate::storage::RecordStore;

/// Ledger workflows over a record store.
pub struct LedgerService<S> {
    store: S,
}

impl<S: RecordStore> LedgerService<S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Loads records and the employee-count setting.
    pub async fn load(&self) -> Result<Ledger, LedgerError> {
        let records = self.store.load_records().await?;
        let employee_count = self.store.load_employee_count().await?;
        debug!(records = records.len(), employees = employee_count.get(), "ledger loaded");
        Ok(Ledger::new(records, employee_count))
    }

    /// Adds a record and returns its index.
    pub async fn add_record(
        &self,
        input: NewRecord,
        now: DateTime<Local>,
    ) -> Result<usize, LedgerError> {
        let mut ledger = self.load().await?;
        let index = ledger.add(input, now);
        self.store.save_records(ledger.records()).await?;
        info!(index, "record added");
        Ok(index)
    }

    /// Replaces the editable fields of the record at `index`.
    pub async fn edit_record(
        &self,
        index: usize,
        edit: RecordEdit,
    ) -> Result<TransactionRecord, LedgerError> {
        let mut ledger = self.load().await?;
        let edited = ledger.edit(index, edit)?.clone();
        self.store.save_records(ledger.records()).await?;
        info!(index, "record edited");
        Ok(edited)
    }

    /// Deletes the record at `index` and returns it.
    pub async fn delete_record(&self, index: usize) -> Result<TransactionRecord, LedgerError> {
        let mut ledger = self.load().await?;
        let removed = ledger.delete(index)?;
        self.store.save_records(ledger.records()).await?;
        info!(index, "record deleted");
        Ok(removed)
    }

    /// Stores a new employee-count setting.
    pub async fn set_employee_count(&self, count: EmployeeCount) -> Result<(), LedgerError> {
        self.store.save_employee_count(count).await?;
        info!(employees = count.get(), "employee count updated");
        Ok(())
    }

    /// Fresh breakdown over the records selected by `filter`.
    pub async fn breakdown(&self, filter: &RecordFilter) -> Result<RevenueBreakdown, LedgerError> {
        let ledger = self.load().await?;
        let view = ledger.view(filter)?;
        Ok(ledger.breakdown_for(&view))
    }
}
