//! Domain checks for collected form data.
//!
//! The wizard itself never validates: its UI only offers enumerated choices.
//! Callers accepting form data from anywhere else (a resumed checkpoint, a
//! string-keyed update) can run [`validate_form`], which reports every
//! violation at once instead of stopping at the first.

use super::form::{FormData, MultiField, TextField};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem with a form's contents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormViolation {
    #[error("{value:?} is not a valid choice for {field}")]
    OutOfDomain { field: &'static str, value: String },

    #[error("{value:?} is selected more than once in {field}")]
    DuplicateSelection { field: &'static str, value: String },

    #[error("Car year {0:?} is not a number")]
    InvalidYear(String),
}

/// Check every field, accumulating all violations.
///
/// Empty fields are not violations; the form starts out empty.
///
/// # Example
///
/// ```rust
/// use thirtyhertz::wizard::{validate_form, FormData, TextField};
///
/// let mut form = FormData::new();
/// assert!(validate_form(&form).is_success());
///
/// form.set(TextField::Budget, "a million");
/// form.set(TextField::CarYear, "soon");
/// assert!(validate_form(&form).is_failure());
/// ```
pub fn validate_form(form: &FormData) -> Validation<(), NonEmptyVec<FormViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<FormViolation>>> = Vec::new();

    for field in TextField::ALL {
        let Some(choices) = field.choices() else {
            continue;
        };
        let value = form.text(field);
        let check = if value.is_empty() || choices.contains(&value) {
            Validation::success(())
        } else {
            Validation::fail(FormViolation::OutOfDomain {
                field: field.key(),
                value: value.to_string(),
            })
        };
        checks.push(check);
    }

    for field in MultiField::ALL {
        let choices = field.choices();
        let selected = form.selections(field);

        for (i, value) in selected.iter().enumerate() {
            if !choices.contains(&value.as_str()) {
                checks.push(Validation::fail(FormViolation::OutOfDomain {
                    field: field.key(),
                    value: value.clone(),
                }));
            }
            if selected[..i].contains(value) {
                checks.push(Validation::fail(FormViolation::DuplicateSelection {
                    field: field.key(),
                    value: value.clone(),
                }));
            }
        }
    }

    let year = form.text(TextField::CarYear).trim();
    let year_check = if year.is_empty() || year.parse::<u16>().is_ok() {
        Validation::success(())
    } else {
        Validation::fail(FormViolation::InvalidYear(year.to_string()))
    };
    checks.push(year_check);

    Validation::all_vec(checks).map(|_| ())
}
