//! Static system recommendation shown on the last step.

use super::form::{FormData, MultiField, BUDGET_RANGES};
use serde::{Deserialize, Serialize};

/// Priority that adds a subwoofer to the recommendation.
pub const BASS_PRIORITY: &str = "Powerful bass";

/// One recommended component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// What the component does in the system, e.g. "Amplifier"
    pub role: String,
    pub model: String,
}

impl Component {
    fn new(role: &str, model: &str) -> Self {
        Self {
            role: role.to_string(),
            model: model.to_string(),
        }
    }
}

/// Recommended configuration and its estimated cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub components: Vec<Component>,
    /// Estimated total in rubles
    pub estimated_cost_rub: u32,
}

impl Recommendation {
    /// Build the recommendation for a filled-in form.
    ///
    /// ```rust
    /// use thirtyhertz::wizard::{FormData, MultiField, Recommendation, TextField};
    ///
    /// let mut form = FormData::new();
    /// form.set(TextField::Budget, "50,000 - 100,000 RUB");
    /// form.toggle(MultiField::Priorities, "Powerful bass");
    ///
    /// let recommendation = Recommendation::for_form(&form);
    /// assert_eq!(recommendation.estimated_cost_rub, 85_000);
    /// assert_eq!(recommendation.components.len(), 4);
    /// ```
    pub fn for_form(form: &FormData) -> Self {
        let mut components = vec![
            Component::new("Head unit", "Pioneer AVH-Z5200BT"),
            Component::new("Front speakers", "Focal Access 165 AS"),
            Component::new("Amplifier", "Alpine MRV-F300"),
        ];
        if form.is_selected(MultiField::Priorities, BASS_PRIORITY) {
            components.push(Component::new("Subwoofer", "JL Audio 10W3v3-4"));
        }

        Self {
            components,
            estimated_cost_rub: estimate_cost(&form.budget),
        }
    }
}

fn estimate_cost(budget: &str) -> u32 {
    match BUDGET_RANGES.iter().position(|range| *range == budget) {
        Some(0) => 45_000,
        Some(1) => 85_000,
        Some(2) => 150_000,
        _ => 200_000,
    }
}
