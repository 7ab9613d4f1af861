//! History store configuration.

use serde::{Deserialize, Serialize};

/// Storage key the history is kept under by default.
pub const DEFAULT_STORAGE_KEY: &str = "30hertz-calculations";

/// Number of records kept by default.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Settings for a [`HistoryStore`](super::HistoryStore).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use thirtyhertz::history::HistoryConfig;
///
/// let config: HistoryConfig = serde_json::from_str(r#"{ "max_entries": 10 }"#).unwrap();
/// assert_eq!(config.max_entries, 10);
/// assert_eq!(config.storage_key, "30hertz-calculations");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Namespaced key holding the serialized log
    pub storage_key: String,

    /// Upper bound on the number of records kept, oldest dropped first
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the log under a different key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Change the bound on kept records
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}
