//! Multi-step configurator wizard.
//!
//! This module contains the wizard's pure core:
//! - Step definitions and the car-audio step list
//! - The form record with typed field keys
//! - The controller that navigates steps and updates the form
//! - Caller-side validation and the result-step recommendation
//!
//! Nothing in here touches storage; persisting a wizard goes through
//! [`checkpoint`](crate::checkpoint).

mod controller;
mod error;
mod form;
mod recommendation;
mod step;
mod validation;

pub use controller::WizardController;
pub use error::WizardError;
pub use form::{
    FieldKey, FormData, MultiField, TextField, BUDGET_RANGES, LISTENING_HABITS, MUSIC_GENRES,
    PRIORITIES,
};
pub use recommendation::{Component, Recommendation, BASS_PRIORITY};
pub use step::{car_audio_steps, Step, BUDGET_STEP, CAR_STEP, MUSIC_STEP, RESULT_STEP};
pub use validation::{validate_form, FormViolation};
