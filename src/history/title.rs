//! Display titles for saved calculations.

use super::record::Payload;
use serde_json::Value;

/// Placeholder used for the enclosure title when no speaker size was given.
pub const SPEAKER_PLACEHOLDER: &str = "speaker";

/// Placeholder used for numeric template fields.
pub const NUMBER_PLACEHOLDER: &str = "0";

/// Derive the display title for a calculation of type `kind`.
///
/// Each known calculator type has a fixed template filled from `inputs`;
/// a field that is absent, null, `false`, zero, an empty string or an empty
/// list renders as the placeholder. Other lists and objects render as compact
/// JSON text. Unknown types get a generic title.
///
/// # Example
///
/// ```rust
/// use thirtyhertz::history::derive_title;
/// use serde_json::json;
///
/// let inputs = json!({ "power": 800, "length": 5.5 });
/// let title = derive_title("cable", inputs.as_object().unwrap());
/// assert_eq!(title, "Cable 800W, 5.5m");
/// ```
pub fn derive_title(kind: &str, inputs: &Payload) -> String {
    let field = |name: &str| {
        field_text(inputs, name).unwrap_or_else(|| NUMBER_PLACEHOLDER.to_string())
    };

    match kind {
        "box" => format!(
            "Enclosure for {}",
            field_text(inputs, "speakerSize").unwrap_or_else(|| SPEAKER_PLACEHOLDER.to_string())
        ),
        "cable" => format!("Cable {}W, {}m", field("power"), field("length")),
        "wiring" => format!("Wiring for {} speakers", field("speakers")),
        "port" => format!("Port for {}L enclosure", field("volume")),
        "fuse" => format!("Fuse rated {}W", field("power")),
        "sine" => format!("Sine {}Hz", field("frequency")),
        other => format!("Calculation {other}"),
    }
}

fn field_text(inputs: &Payload, name: &str) -> Option<String> {
    match inputs.get(name)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn box_title_uses_speaker_size() {
        let title = derive_title("box", &payload(json!({ "speakerSize": "12 inch" })));
        assert_eq!(title, "Enclosure for 12 inch");
    }

    #[test]
    fn box_title_falls_back_to_placeholder() {
        assert_eq!(derive_title("box", &Payload::new()), "Enclosure for speaker");
        assert_eq!(
            derive_title("box", &payload(json!({ "speakerSize": "" }))),
            "Enclosure for speaker"
        );
    }

    #[test]
    fn every_known_type_has_a_template() {
        let inputs = payload(json!({
            "power": 1000,
            "length": 4,
            "speakers": 2,
            "volume": 35.5,
            "frequency": "40"
        }));

        assert_eq!(derive_title("cable", &inputs), "Cable 1000W, 4m");
        assert_eq!(derive_title("wiring", &inputs), "Wiring for 2 speakers");
        assert_eq!(derive_title("port", &inputs), "Port for 35.5L enclosure");
        assert_eq!(derive_title("fuse", &inputs), "Fuse rated 1000W");
        assert_eq!(derive_title("sine", &inputs), "Sine 40Hz");
    }

    #[test]
    fn numeric_templates_fall_back_to_zero() {
        let empty = Payload::new();

        assert_eq!(derive_title("cable", &empty), "Cable 0W, 0m");
        assert_eq!(derive_title("wiring", &empty), "Wiring for 0 speakers");
        assert_eq!(
            derive_title("fuse", &payload(json!({ "power": null }))),
            "Fuse rated 0W"
        );
    }

    #[test]
    fn empty_list_counts_as_absent() {
        assert_eq!(
            derive_title("wiring", &payload(json!({ "speakers": [] }))),
            "Wiring for 0 speakers"
        );
        assert_eq!(
            derive_title("box", &payload(json!({ "speakerSize": [] }))),
            "Enclosure for speaker"
        );
    }

    #[test]
    fn structured_values_render_as_json() {
        assert_eq!(
            derive_title("port", &payload(json!({ "volume": [40, 45] }))),
            "Port for [40,45]L enclosure"
        );
        assert_eq!(
            derive_title("sine", &payload(json!({ "frequency": { "hz": 30 } }))),
            "Sine {\"hz\":30}Hz"
        );
    }

    #[test]
    fn unknown_type_gets_generic_title() {
        assert_eq!(derive_title("crossover", &Payload::new()), "Calculation crossover");
    }
}
