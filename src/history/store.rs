//! Bounded, persisted, newest-first log of calculations.

use super::config::HistoryConfig;
use super::id::{IdGenerator, UuidV7Generator};
use super::record::{CalculationRecord, Payload};
use super::title::derive_title;
use crate::storage::{LocalStore, StorageBackend};
use chrono::Utc;
use tracing::debug;

/// Persisted history of calculator runs.
///
/// The log is read from storage once, at construction, and written back in
/// full after every mutation. Storage failures never reach the caller: the
/// in-memory log stays authoritative until the next load.
///
/// # Example
///
/// ```rust
/// use thirtyhertz::history::HistoryStore;
/// use thirtyhertz::storage::MemoryStorage;
/// use serde_json::json;
///
/// let storage = MemoryStorage::new();
/// let mut history = HistoryStore::open(storage.clone());
///
/// let inputs = json!({ "speakerSize": "12 inch" }).as_object().cloned().unwrap();
/// let results = json!({ "volume": 35 }).as_object().cloned().unwrap();
/// let id = history.save("box", inputs, results).id.clone();
///
/// assert_eq!(history.records()[0].title, "Enclosure for 12 inch");
///
/// // A fresh store over the same storage sees the saved record.
/// let reopened = HistoryStore::open(storage);
/// assert!(reopened.get(&id).is_some());
/// ```
#[derive(Debug)]
pub struct HistoryStore<B: StorageBackend, G: IdGenerator = UuidV7Generator> {
    store: LocalStore<B>,
    config: HistoryConfig,
    ids: G,
    records: Vec<CalculationRecord>,
}

impl<B: StorageBackend> HistoryStore<B> {
    /// Open the history with default settings and UUID v7 identifiers.
    pub fn open(backend: B) -> Self {
        Self::with_config(backend, HistoryConfig::default())
    }

    pub fn with_config(backend: B, config: HistoryConfig) -> Self {
        Self::with_id_generator(backend, config, UuidV7Generator)
    }
}

impl<B: StorageBackend, G: IdGenerator> HistoryStore<B, G> {
    /// Open the history with an explicit identifier source.
    ///
    /// A `max_entries` of zero is raised to one so a saved record is always
    /// retrievable.
    pub fn with_id_generator(backend: B, mut config: HistoryConfig, ids: G) -> Self {
        config.max_entries = config.max_entries.max(1);
        let mut history = Self {
            store: LocalStore::new(backend),
            config,
            ids,
            records: Vec::new(),
        };
        history.reload();
        history
    }

    /// Re-read the log from storage, discarding the in-memory copy.
    ///
    /// A missing or corrupt log loads as empty; a stored log longer than the
    /// configured bound is cut down to its newest entries.
    pub fn reload(&mut self) {
        let mut records: Vec<CalculationRecord> =
            self.store.load(&self.config.storage_key, Vec::new());
        records.truncate(self.config.max_entries);
        debug!(
            key = %self.config.storage_key,
            count = records.len(),
            "Loaded calculation history"
        );
        self.records = records;
    }

    /// Record a calculation and persist the log.
    ///
    /// The new record goes to the front; if that pushes the log past the
    /// bound, the oldest records are dropped. An id already present in the
    /// log is skipped, so saving never displaces an existing record.
    pub fn save(&mut self, kind: &str, inputs: Payload, results: Payload) -> &CalculationRecord {
        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            id = self.ids.next_id();
        }

        let record = CalculationRecord {
            id,
            kind: kind.to_string(),
            title: derive_title(kind, &inputs),
            inputs,
            results,
            timestamp: Utc::now(),
        };
        debug!(id = %record.id, kind, title = %record.title, "Saving calculation");

        self.records.insert(0, record);
        self.records.truncate(self.config.max_entries);
        self.persist();

        &self.records[0]
    }

    /// Remove the record with `id`, returning whether one was removed.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        debug!(id, removed, "Deleting calculation");

        self.persist();
        removed
    }

    /// Drop every record and persist the empty log.
    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "Clearing calculation history");
        self.records.clear();
        self.persist();
    }

    /// Records, newest first.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CalculationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    fn persist(&self) {
        self.store.store(&self.config.storage_key, &self.records);
    }
}
