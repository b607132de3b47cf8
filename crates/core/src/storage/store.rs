//! Record store abstraction.

use async_trait::async_trait;
use washledger_shared::types::EmployeeCount;

use super::error::StorageError;
use crate::record::TransactionRecord;

/// Persistence for the record list and the employee-count setting.
///
/// Missing data is not an error: an absent list loads as empty and an
/// absent setting loads as one employee.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads every stored record in stored order.
    async fn load_records(&self) -> Result<Vec<TransactionRecord>, StorageError>;

    /// Replaces the stored list with `records`.
    async fn save_records(&self, records: &[TransactionRecord]) -> Result<(), StorageError>;

    /// Loads the configured employee count.
    async fn load_employee_count(&self) -> Result<EmployeeCount, StorageError>;

    /// Stores the configured employee count.
    async fn save_employee_count(&self, count: EmployeeCount) -> Result<(), StorageError>;
}
