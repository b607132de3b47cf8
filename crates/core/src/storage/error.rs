//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),

    /// Stored data is not a valid record list.
    #[error("stored data under '{key}' could not be decoded: {message}")]
    Decode {
        /// Storage key that held the bad data.
        key: String,
        /// Decoder message.
        message: String,
    },

    /// Records could not be encoded.
    #[error("records could not be encoded: {0}")]
    Encode(String),

    /// Invalid storage key format.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a decode error for `key`.
    #[must_use]
    pub fn decode(key: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Decode {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            _ => Self::Operation(err.to_string()),
        }
    }
}

impl From<StorageError> for washledger_shared::AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
