//! Storage configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use washledger_shared::{AppConfig, LedgerVariant};

/// Storage provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// Local filesystem.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// Process memory; contents vanish with the process.
    Memory,
}

impl StorageProvider {
    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Which record list to read and write.
    pub variant: LedgerVariant,
}

impl StorageConfig {
    /// Directory, relative to the storage root, holding exported reports.
    pub const REPORTS_DIR: &'static str = "reports/";

    /// Create a new storage config for the advanced record list.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            variant: LedgerVariant::default(),
        }
    }

    /// Select the record list.
    #[must_use]
    pub const fn with_variant(mut self, variant: LedgerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Storage config described by the application configuration.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(StorageProvider::local_fs(&config.storage.root))
            .with_variant(config.ledger.variant)
    }

    /// Key of the record list.
    #[must_use]
    pub const fn records_key(&self) -> &'static str {
        self.variant.records_key()
    }

    /// Key of the employee-count setting.
    #[must_use]
    pub const fn employees_key(&self) -> &'static str {
        LedgerVariant::EMPLOYEES_KEY
    }
}
