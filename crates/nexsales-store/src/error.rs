//! Storage-layer error types and conversions.

use nexsales_core::error::NexsalesError;

/// Key/value backend error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl From<StorageError> for NexsalesError {
    fn from(err: StorageError) -> Self {
        NexsalesError::Storage(err.to_string())
    }
}
