//! Persisted history of calculator runs.
//!
//! Calculators compute their own results and hand them to
//! [`HistoryStore::save`]; the store assigns an id, a timestamp and a display
//! title, keeps the newest records first and bounds the log length.

mod config;
mod id;
mod record;
mod store;
mod title;

pub use config::{HistoryConfig, DEFAULT_MAX_ENTRIES, DEFAULT_STORAGE_KEY};
pub use id::{IdGenerator, SequentialIdGenerator, UuidV7Generator};
pub use record::{CalculationRecord, Payload};
pub use store::HistoryStore;
pub use title::{derive_title, NUMBER_PLACEHOLDER, SPEAKER_PLACEHOLDER};
