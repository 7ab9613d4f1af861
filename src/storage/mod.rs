//! Durable key-value storage behind an injectable port.
//!
//! [`StorageBackend`] mirrors the string-in, string-out contract of a browser's
//! local storage. [`LocalStore`] layers JSON (de)serialization on top and
//! swallows failures so callers always get a usable value back.
//!
//! # Example
//!
//! ```rust
//! use thirtyhertz::storage::{LocalStore, MemoryStorage};
//!
//! let store = LocalStore::new(MemoryStorage::new());
//!
//! let missing: Vec<u32> = store.load("numbers", Vec::new());
//! assert!(missing.is_empty());
//!
//! store.store("numbers", &vec![1, 2, 3]);
//! let loaded: Vec<u32> = store.load("numbers", Vec::new());
//! assert_eq!(loaded, vec![1, 2, 3]);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Port to a string-keyed, string-valued durable store.
///
/// Methods take `&self`: like browser storage, a backend is a shared handle
/// and does its own interior bookkeeping.
pub trait StorageBackend {
    /// Read the raw text stored under `key`, `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// JSON value cell over a [`StorageBackend`].
#[derive(Clone, Debug)]
pub struct LocalStore<B> {
    backend: B,
}

impl<B: StorageBackend> LocalStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the value under `key`, falling back to `default`.
    ///
    /// An absent key, a backend failure and a value that no longer
    /// deserializes all yield `default`. Failures are logged, never returned.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "Falling back to default value");
                default
            }
        }
    }

    /// Serialize and write `value` under `key`, logging any failure.
    pub fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_store(key, value) {
            warn!(key, error = %e, "Failed to persist value");
        }
    }

    /// Load the value under `key`, surfacing every failure.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::DeserializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// Serialize and write `value` under `key`, surfacing every failure.
    pub fn try_store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        self.backend.set_item(key, &raw)
    }
}
