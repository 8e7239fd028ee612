//! View-layer error types.

use nexsales_core::error::NexsalesError;
use thiserror::Error;

use crate::editor::FormErrors;

#[derive(Debug, Error)]
pub enum ViewError {
    /// The product editor rejected the draft; the store was not called.
    #[error("invalid product: {0}")]
    Validation(FormErrors),

    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),
}

impl From<FormErrors> for ViewError {
    fn from(errors: FormErrors) -> Self {
        ViewError::Validation(errors)
    }
}

impl From<ViewError> for NexsalesError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::Validation(errors) => NexsalesError::Validation {
                message: errors.to_string(),
            },
            ViewError::Export(e) => NexsalesError::Storage(e.to_string()),
        }
    }
}
