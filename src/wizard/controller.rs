//! Linear wizard driving a fixed list of steps and a form.

use super::error::WizardError;
use super::form::{FieldKey, FormData, MultiField, TextField};
use super::recommendation::Recommendation;
use super::step::{car_audio_steps, Step};
use crate::checkpoint::{CheckpointError, WizardCheckpoint};
use tracing::debug;

/// Wizard over an ordered, non-empty list of steps.
///
/// Navigation moves strictly one step at a time. Moving past either end is a
/// no-op rather than an error, so none of the navigation or typed update
/// operations can fail.
///
/// # Example
///
/// ```rust
/// use thirtyhertz::wizard::{MultiField, TextField, WizardController};
///
/// let mut wizard = WizardController::car_audio();
/// assert_eq!(wizard.current_step().id, "car");
///
/// wizard.set_field(TextField::CarMake, "BMW");
/// wizard.advance();
/// wizard.toggle_multi_field(MultiField::MusicGenres, "Rock");
///
/// assert_eq!(wizard.current_step().id, "music");
/// assert_eq!(wizard.progress_fraction(), 0.5);
/// assert_eq!(wizard.form().music_genres, vec!["Rock"]);
/// ```
#[derive(Clone, Debug)]
pub struct WizardController {
    steps: Vec<Step>,
    current: usize,
    form: FormData,
}

impl WizardController {
    /// Build a wizard over `steps`, starting at the first one with an empty form.
    pub fn new(steps: Vec<Step>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }

        Ok(Self {
            steps,
            current: 0,
            form: FormData::new(),
        })
    }

    /// The car-audio configurator: car, music, budget, result.
    pub fn car_audio() -> Self {
        Self {
            steps: car_audio_steps(),
            current: 0,
            form: FormData::new(),
        }
    }

    /// Continue from a checkpoint taken on a wizard with the same steps.
    ///
    /// The saved form must keep multi-select fields free of duplicates;
    /// toggling relies on each value appearing at most once.
    pub fn resume(steps: Vec<Step>, checkpoint: WizardCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;

        let matches = steps
            .get(checkpoint.step_index)
            .is_some_and(|step| step.id == checkpoint.step_id);
        if !matches {
            return Err(CheckpointError::StepMismatch {
                step_id: checkpoint.step_id,
                index: checkpoint.step_index,
            });
        }

        for field in MultiField::ALL {
            let selected = checkpoint.form.selections(field);
            for (i, value) in selected.iter().enumerate() {
                if selected[..i].contains(value) {
                    return Err(CheckpointError::DuplicateSelection {
                        field: field.key(),
                        value: value.clone(),
                    });
                }
            }
        }

        debug!(
            checkpoint = %checkpoint.id,
            step = %checkpoint.step_id,
            "Resuming wizard from checkpoint"
        );
        Ok(Self {
            steps,
            current: checkpoint.step_index,
            form: checkpoint.form,
        })
    }

    /// Snapshot the current position and form.
    pub fn checkpoint(&self) -> WizardCheckpoint {
        WizardCheckpoint::capture(&self.current_step().id, self.current, &self.form)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Move to the next step. Returns `false` (and stays put) on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        debug!(step = %self.current_step().id, index = self.current, "Advanced wizard");
        true
    }

    /// Move to the previous step. Returns `false` (and stays put) on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        debug!(step = %self.current_step().id, index = self.current, "Retreated wizard");
        true
    }

    /// Go back to the first step, keeping everything entered so far.
    pub fn restart(&mut self) {
        self.current = 0;
        debug!("Restarted wizard");
    }

    /// Go back to the first step and empty the form.
    pub fn reset(&mut self) {
        self.current = 0;
        self.form = FormData::new();
        debug!("Reset wizard");
    }

    /// Overwrite a text or single-select field.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Select `value` in a multi-select field, or deselect it if already selected.
    pub fn toggle_multi_field(&mut self, field: MultiField, value: &str) -> bool {
        self.form.toggle(field, value)
    }

    /// [`set_field`](Self::set_field) addressed by camelCase key.
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<(), WizardError> {
        match key.parse::<FieldKey>()? {
            FieldKey::Text(field) => {
                self.set_field(field, value);
                Ok(())
            }
            FieldKey::Multi(_) => Err(WizardError::NotAScalarField(key.to_string())),
        }
    }

    /// [`toggle_multi_field`](Self::toggle_multi_field) addressed by camelCase key.
    pub fn toggle_multi_field_by_key(&mut self, key: &str, value: &str) -> Result<bool, WizardError> {
        match key.parse::<FieldKey>()? {
            FieldKey::Multi(field) => Ok(self.toggle_multi_field(field, value)),
            FieldKey::Text(_) => Err(WizardError::NotAMultiSelectField(key.to_string())),
        }
    }

    /// `(current index + 1) / step count`, in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }

    /// Progress as a whole percentage, for display.
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction() * 100.0).round() as u8
    }

    /// What the result step shows for the form as it stands.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_form(&self.form)
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::car_audio()
    }
}
