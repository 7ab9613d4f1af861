//! Wizard step definitions.

use serde::{Deserialize, Serialize};

/// One page of the wizard.
///
/// Steps are fixed when the wizard is built and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Stable identifier, e.g. `car`
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Step {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Identifier of the vehicle step.
pub const CAR_STEP: &str = "car";
/// Identifier of the music preferences step.
pub const MUSIC_STEP: &str = "music";
/// Identifier of the budget step.
pub const BUDGET_STEP: &str = "budget";
/// Identifier of the recommendation step.
pub const RESULT_STEP: &str = "result";

/// The car-audio configurator's four steps: car, music, budget, result.
pub fn car_audio_steps() -> Vec<Step> {
    vec![
        Step::new(CAR_STEP, "Vehicle", "Tell us about your car"),
        Step::new(MUSIC_STEP, "Music preferences", "What do you listen to?"),
        Step::new(BUDGET_STEP, "Budget", "How much are you ready to spend?"),
        Step::new(
            RESULT_STEP,
            "Recommendations",
            "Get a personal system recommendation",
        ),
    ]
}
