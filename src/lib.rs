//! Thirtyhertz: configurator wizard and calculation history for car audio
//!
//! The crate holds the client-side core of a car-audio toolkit. Rendering and
//! the calculators themselves live elsewhere; this crate owns the state they
//! share.
//!
//! # Core Concepts
//!
//! - **Wizard**: a fixed sequence of steps with forward/back navigation and
//!   a form collecting the user's answers ([`wizard::WizardController`])
//! - **History**: a bounded, newest-first log of saved calculator runs,
//!   persisted after every change ([`history::HistoryStore`])
//! - **Storage**: an injectable key-value port so the history runs against
//!   browser-like storage, a directory, or memory in tests ([`storage`])
//! - **Export**: requests handed to an external image/document exporter
//!   ([`export`], [`panel`])
//!
//! # Example
//!
//! ```rust
//! use thirtyhertz::history::HistoryStore;
//! use thirtyhertz::storage::MemoryStorage;
//! use thirtyhertz::wizard::{TextField, WizardController};
//! use serde_json::json;
//!
//! let mut wizard = WizardController::car_audio();
//! wizard.set_field(TextField::Budget, "100,000 - 200,000 RUB");
//! while wizard.advance() {}
//! assert_eq!(wizard.recommendation().estimated_cost_rub, 150_000);
//!
//! let mut history = HistoryStore::open(MemoryStorage::new());
//! let inputs = json!({ "power": 1500, "length": 5 }).as_object().cloned().unwrap();
//! let results = json!({ "gauge": "4 AWG" }).as_object().cloned().unwrap();
//! history.save("cable", inputs, results);
//!
//! assert_eq!(history.records()[0].title, "Cable 1500W, 5m");
//! ```

pub mod checkpoint;
pub mod export;
pub mod history;
pub mod panel;
pub mod storage;
pub mod wizard;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, WizardCheckpoint};
pub use history::{CalculationRecord, HistoryConfig, HistoryStore, Payload};
pub use storage::{LocalStore, StorageBackend, StorageError};
pub use wizard::{FormData, MultiField, Step, TextField, WizardController, WizardError};
