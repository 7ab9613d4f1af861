//! Saved calculation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Calculator inputs or results: string keys to JSON values.
pub type Payload = Map<String, Value>;

/// One saved calculator run.
///
/// Records are immutable once created; the history only ever adds or removes
/// whole records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique, time-ordered identifier
    pub id: String,
    /// Calculator category tag, e.g. `box` or `cable`
    #[serde(rename = "type")]
    pub kind: String,
    pub inputs: Payload,
    pub results: Payload,
    /// When the calculation was saved
    pub timestamp: DateTime<Utc>,
    /// Display title derived from the type and inputs
    pub title: String,
}

impl CalculationRecord {
    /// Compact one-line rendering of the inputs, e.g. `power:800, length:5`.
    pub fn inputs_summary(&self) -> String {
        summarize(&self.inputs)
    }

    /// Compact one-line rendering of the results.
    pub fn results_summary(&self) -> String {
        summarize(&self.results)
    }

    /// Timestamp formatted for the history list, e.g. `07 Mar 2025, 14:05`.
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%d %b %Y, %H:%M").to_string()
    }
}

fn summarize(payload: &Payload) -> String {
    Value::Object(payload.clone())
        .to_string()
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '"'))
        .collect::<String>()
        .replace(',', ", ")
}
