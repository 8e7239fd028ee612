//! Error types for the NexSales system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NexsalesError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failure of an asynchronous data source.
///
/// The `Display` text is what a store records in its `error` field, so it
/// is phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch products")]
    ProductsUnavailable,

    #[error("Failed to fetch sales")]
    SalesUnavailable,
}

impl From<serde_json::Error> for NexsalesError {
    fn from(err: serde_json::Error) -> Self {
        NexsalesError::Serialization(err.to_string())
    }
}

pub type NexsalesResult<T> = Result<T, NexsalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_read_as_store_messages() {
        let err: NexsalesError = FetchError::SalesUnavailable.into();
        assert_eq!(err.to_string(), "Failed to fetch sales");
        assert_eq!(
            FetchError::ProductsUnavailable.to_string(),
            "Failed to fetch products"
        );
    }
}
