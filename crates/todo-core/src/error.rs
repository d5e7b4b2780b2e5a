//! Storage Errors

use thiserror::Error;

/// Result type for key-value operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures at the key-value persistence seam
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (private mode, disabled, quota)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected by the backing store
    #[error("write to '{key}' failed: {reason}")]
    Write { key: String, reason: String },

    /// The value could not be encoded
    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}
