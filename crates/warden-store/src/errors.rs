//! Store error types.

use thiserror::Error;
use warden_core::WardenError;

/// Errors from orchestration-directory persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("failed to access orchestration storage: {0}")]
    Io(#[from] std::io::Error),
    /// A trace record could not be serialized to a JSON line.
    #[error("failed to serialize trace record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for WardenError {
    fn from(error: StoreError) -> Self {
        WardenError::persistence(error)
    }
}
