//! Errors from encoding, decoding and resuming wizard checkpoints.

use thiserror::Error;

/// Errors raised while saving or resuming a wizard checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by a newer or older format
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint does not fit the wizard it is resumed into
    #[error("Checkpoint step {step_id:?} at index {index} does not match the wizard's steps")]
    StepMismatch { step_id: String, index: usize },

    /// A multi-select field in the saved form lists a value twice
    #[error("Checkpoint form selects {value:?} more than once in {field}")]
    DuplicateSelection { field: &'static str, value: String },
}
