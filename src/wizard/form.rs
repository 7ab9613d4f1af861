//! Form data collected by the wizard.
//!
//! Fields come in three shapes: free text, single-select (one value out of an
//! enumerated domain, or empty) and multi-select (an ordered list of distinct
//! values out of a domain). Typed keys ([`TextField`], [`MultiField`]) keep
//! the shapes apart; [`FieldKey`] parses the camelCase names used on the wire.

use super::error::WizardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MUSIC_GENRES: &[&str] = &[
    "Rock",
    "Pop",
    "Electronic",
    "Hip-hop",
    "Classical",
    "Jazz",
    "Metal",
    "R&B",
];

pub const LISTENING_HABITS: &[&str] = &[
    "Every day",
    "Several times a week",
    "On weekends",
    "Rarely",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under 50,000 RUB",
    "50,000 - 100,000 RUB",
    "100,000 - 200,000 RUB",
    "Over 200,000 RUB",
];

pub const PRIORITIES: &[&str] = &["Sound quality", "Loudness", "Powerful bass", "Balance"];

/// Free-text and single-select fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    CarMake,
    CarModel,
    CarYear,
    ListeningHabits,
    Budget,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        Self::CarMake,
        Self::CarModel,
        Self::CarYear,
        Self::ListeningHabits,
        Self::Budget,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CarMake => "carMake",
            Self::CarModel => "carModel",
            Self::CarYear => "carYear",
            Self::ListeningHabits => "listeningHabits",
            Self::Budget => "budget",
        }
    }

    /// Enumerated domain for single-select fields, `None` for free text.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::ListeningHabits => Some(LISTENING_HABITS),
            Self::Budget => Some(BUDGET_RANGES),
            Self::CarMake | Self::CarModel | Self::CarYear => None,
        }
    }
}

/// Multi-select fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiField {
    MusicGenres,
    Priorities,
}

impl MultiField {
    pub const ALL: [MultiField; 2] = [Self::MusicGenres, Self::Priorities];

    pub fn key(&self) -> &'static str {
        match self {
            Self::MusicGenres => "musicGenres",
            Self::Priorities => "priorities",
        }
    }

    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::MusicGenres => MUSIC_GENRES,
            Self::Priorities => PRIORITIES,
        }
    }
}

/// Any form field, parsed from its camelCase key.
///
/// ```rust
/// use thirtyhertz::wizard::{FieldKey, MultiField, TextField};
///
/// assert_eq!("carMake".parse(), Ok(FieldKey::Text(TextField::CarMake)));
/// assert_eq!("priorities".parse(), Ok(FieldKey::Multi(MultiField::Priorities)));
/// assert!("horsepower".parse::<FieldKey>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Text(TextField),
    Multi(MultiField),
}

impl FieldKey {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text(field) => field.key(),
            Self::Multi(field) => field.key(),
        }
    }
}

impl FromStr for FieldKey {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .iter()
            .find(|f| f.key() == s)
            .map(|f| FieldKey::Text(*f))
            .or_else(|| {
                MultiField::ALL
                    .iter()
                    .find(|f| f.key() == s)
                    .map(|f| FieldKey::Multi(*f))
            })
            .ok_or_else(|| WizardError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Everything the wizard has collected so far. Starts out empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub car_make: String,
    pub car_model: String,
    pub car_year: String,
    pub music_genres: Vec<String>,
    pub listening_habits: String,
    pub budget: String,
    pub priorities: Vec<String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::CarMake => &self.car_make,
            TextField::CarModel => &self.car_model,
            TextField::CarYear => &self.car_year,
            TextField::ListeningHabits => &self.listening_habits,
            TextField::Budget => &self.budget,
        }
    }

    pub fn selections(&self, field: MultiField) -> &[String] {
        match field {
            MultiField::MusicGenres => &self.music_genres,
            MultiField::Priorities => &self.priorities,
        }
    }

    /// Overwrite a text or single-select field. The value is not checked
    /// against the field's domain.
    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::CarMake => &mut self.car_make,
            TextField::CarModel => &mut self.car_model,
            TextField::CarYear => &mut self.car_year,
            TextField::ListeningHabits => &mut self.listening_habits,
            TextField::Budget => &mut self.budget,
        };
        *slot = value.into();
    }

    /// Remove `value` from a multi-select field if present, else append it.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, field: MultiField, value: &str) -> bool {
        let list = match field {
            MultiField::MusicGenres => &mut self.music_genres,
            MultiField::Priorities => &mut self.priorities,
        };

        match list.iter().position(|v| v == value) {
            Some(index) => {
                list.remove(index);
                false
            }
            None => {
                list.push(value.to_string());
                true
            }
        }
    }

    pub fn is_selected(&self, field: MultiField, value: &str) -> bool {
        self.selections(field).iter().any(|v| v == value)
    }
}
