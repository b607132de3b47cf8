//! Application configuration management.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Record storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Ledger behaviour.
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Record storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Root directory holding the records, the employee setting, and reports.
    #[serde(default = "default_storage_root")]
    pub root: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

fn default_storage_root() -> String {
    "./data".to_string()
}

/// Ledger behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerSettings {
    /// Which record set to work on.
    #[serde(default)]
    pub variant: LedgerVariant,
}

/// Which of the two record sets is in use.
///
/// Both variants share one record model and one distribution rule; the
/// variant only selects the storage key and the report heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerVariant {
    /// Plain vehicle log.
    Baseline,
    /// Log with employee tracking, phone, and photo fields.
    #[default]
    Advanced,
}

impl LedgerVariant {
    /// Storage key of the record list.
    #[must_use]
    pub const fn records_key(self) -> &'static str {
        match self {
            Self::Baseline => "registrosVehiculos",
            Self::Advanced => "registrosVehiculosAvanzado",
        }
    }

    /// Storage key of the employee-count setting, shared by both variants.
    pub const EMPLOYEES_KEY: &'static str = "numEmpleadosActual";
}

impl std::fmt::Display for LedgerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    /// Prefix printed before every amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{RUN_MODE}.toml`, then `WASHLEDGER__SECTION__KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WASHLEDGER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.root, "./data");
        assert_eq!(config.ledger.variant, LedgerVariant::Advanced);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_variant_keys() {
        assert_eq!(LedgerVariant::Baseline.records_key(), "registrosVehiculos");
        assert_eq!(
            LedgerVariant::Advanced.records_key(),
            "registrosVehiculosAvanzado"
        );
        assert_eq!(LedgerVariant::EMPLOYEES_KEY, "numEmpleadosActual");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "WASHLEDGER__STORAGE__ROOT",
                "WASHLEDGER__LEDGER__VARIANT",
                "WASHLEDGER__DISPLAY__CURRENCY_SYMBOL",
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.storage.root, "./data");
                assert_eq!(config.ledger.variant, LedgerVariant::Advanced);
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("WASHLEDGER__STORAGE__ROOT", Some("/tmp/ledger")),
                ("WASHLEDGER__LEDGER__VARIANT", Some("baseline")),
                ("WASHLEDGER__DISPLAY__CURRENCY_SYMBOL", Some("MX$")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.storage.root, "/tmp/ledger");
                assert_eq!(config.ledger.variant, LedgerVariant::Baseline);
                assert_eq!(config.display.currency_symbol, "MX$");
            },
        );
    }
}
