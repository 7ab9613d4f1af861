//! Wizard errors.

use thiserror::Error;

/// Errors from building a wizard or updating its form by string key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("No steps defined. A wizard needs at least one step")]
    NoSteps,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field {0} holds a list of choices. Use toggle_multi_field")]
    NotAScalarField(String),

    #[error("Field {0} holds a single value. Use set_field")]
    NotAMultiSelectField(String),
}
