//! Checkpoint and resume for wizards.
//!
//! A checkpoint captures where a user is in the wizard and what they have
//! entered, so an interrupted session can continue after a reload. Step
//! definitions are not part of the checkpoint; the wizard being resumed
//! supplies them and the checkpoint is checked against them.

use crate::wizard::FormData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Identifier of the current step
    pub step_id: String,

    /// Position of the current step
    pub step_index: usize,

    /// Form contents at checkpoint time
    pub form: FormData,
}

impl WizardCheckpoint {
    pub(crate) fn capture(step_id: &str, step_index: usize, form: &FormData) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::now_v7().to_string(),
            timestamp: Utc::now(),
            step_id: step_id.to_string(),
            step_index,
            form: form.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub(crate) fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{MultiField, TextField};

    fn sample() -> WizardCheckpoint {
        let mut form = FormData::new();
        form.set(TextField::CarMake, "Toyota");
        form.toggle(MultiField::MusicGenres, "Jazz");
        WizardCheckpoint::capture("music", 1, &form)
    }

    #[test]
    fn json_round_trip_preserves_checkpoint() {
        let checkpoint = sample();

        let json = checkpoint.to_json().unwrap();
        let restored = WizardCheckpoint::from_json(&json).unwrap();

        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn binary_round_trip_preserves_checkpoint() {
        let checkpoint = sample();

        let bytes = checkpoint.to_binary().unwrap();
        let restored = WizardCheckpoint::from_binary(&bytes).unwrap();

        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let result = WizardCheckpoint::from_json(&json);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            WizardCheckpoint::from_json("{\"version\":1}"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            WizardCheckpoint::from_binary(&[0xff, 0x00]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn captured_checkpoints_have_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }
}
