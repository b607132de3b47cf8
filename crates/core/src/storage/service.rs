//! Record store implementation using Apache OpenDAL.

use async_trait::async_trait;
use opendal::{ErrorKind, Operator, services};
use tracing::{debug, info};
use washledger_shared::types::EmployeeCount;

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;
use super::store::RecordStore;
use crate::record::TransactionRecord;

/// Key-value record store backed by an OpenDAL operator.
#[derive(Clone)]
pub struct OpendalRecordStore {
    operator: Operator,
    config: StorageConfig,
}

impl OpendalRecordStore {
    /// Create a new record store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::Memory => Ok(Operator::new(services::Memory::default())
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish()),
        }
    }

    /// Reads `key`, returning `None` when nothing is stored there.
    async fn read_optional(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match self.operator.read(key).await {
            Ok(buffer) => Ok(Some(buffer.to_vec())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes an exported report under the reports directory.
    ///
    /// Returns the storage path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after sanitizing or the write fails.
    pub async fn save_report(&self, file_name: &str, contents: &str) -> Result<String, StorageError> {
        let sanitized = sanitize_filename(file_name);
        if sanitized.trim_matches(['.', '_']).is_empty() {
            return Err(StorageError::InvalidKey(file_name.to_string()));
        }

        let path = format!("{}{sanitized}", StorageConfig::REPORTS_DIR);
        self.operator
            .write(&path, contents.as_bytes().to_vec())
            .await?;

        info!(path = %path, bytes = contents.len(), "report saved");
        Ok(path)
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }
}

#[async_trait]
impl RecordStore for OpendalRecordStore {
    async fn load_records(&self) -> Result<Vec<TransactionRecord>, StorageError> {
        let key = self.config.records_key();
        let Some(bytes) = self.read_optional(key).await? else {
            debug!(key, "no stored records");
            return Ok(Vec::new());
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records: Vec<TransactionRecord> =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::decode(key, &e))?;
        debug!(key, records = records.len(), "records loaded");
        Ok(records)
    }

    async fn save_records(&self, records: &[TransactionRecord]) -> Result<(), StorageError> {
        let key = self.config.records_key();
        let payload =
            serde_json::to_vec(records).map_err(|e| StorageError::Encode(e.to_string()))?;

        self.operator.write(key, payload).await?;
        debug!(key, records = records.len(), "records saved");
        Ok(())
    }

    async fn load_employee_count(&self) -> Result<EmployeeCount, StorageError> {
        let key = self.config.employees_key();
        let count = self
            .read_optional(key)
            .await?
            .map_or(EmployeeCount::ONE, |bytes| {
                EmployeeCount::parse_lenient(&String::from_utf8_lossy(&bytes))
            });
        Ok(count)
    }

    async fn save_employee_count(&self, count: EmployeeCount) -> Result<(), StorageError> {
        let key = self.config.employees_key();
        self.operator
            .write(key, count.to_string().into_bytes())
            .await?;
        debug!(key, employees = count.get(), "employee count saved");
        Ok(())
    }
}

/// Sanitize filename for storage key.
///
/// Only allows ASCII alphanumeric characters, dots, hyphens, and underscores.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
