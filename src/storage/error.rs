//! Storage error types.

use thiserror::Error;

/// Errors raised by a storage backend or by value (de)serialization.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the backend's capacity
    #[error("Storage quota exceeded writing {key} ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Stored text could not be decoded into the requested type
    #[error("Deserialization failed for {key}: {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
