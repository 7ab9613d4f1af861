//! Calculator panel glue: saving a run to history and exporting its view.

use crate::export::{ExportFormat, ExportRequest, Exporter};
use crate::history::{HistoryStore, IdGenerator, Payload};
use crate::storage::StorageBackend;
use tracing::debug;

/// Region every calculator renders its content into.
pub const CONTENT_REGION: &str = "calculator-content";

/// Frame around one calculator: title, history saving and export actions.
///
/// # Example
///
/// ```rust
/// use thirtyhertz::history::HistoryStore;
/// use thirtyhertz::panel::CalculatorPanel;
/// use thirtyhertz::storage::MemoryStorage;
/// use serde_json::json;
///
/// let panel = CalculatorPanel::new("port", "Port tuning");
/// let mut history = HistoryStore::open(MemoryStorage::new());
///
/// // Nothing is saved until the calculator has both inputs and results.
/// assert!(panel.save(&mut history, None, None).is_none());
///
/// let inputs = json!({ "volume": 50 }).as_object().cloned();
/// let results = json!({ "length": 31.2 }).as_object().cloned();
/// assert!(panel.save(&mut history, inputs, results).is_some());
/// assert_eq!(history.records()[0].title, "Port for 50L enclosure");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorPanel {
    kind: String,
    title: String,
}

impl CalculatorPanel {
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
        }
    }

    /// Calculator type tag used for history titles and export names.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Save the current run, returning the new record's id.
    ///
    /// Does nothing while either inputs or results are missing.
    pub fn save<B, G>(
        &self,
        history: &mut HistoryStore<B, G>,
        inputs: Option<Payload>,
        results: Option<Payload>,
    ) -> Option<String>
    where
        B: StorageBackend,
        G: IdGenerator,
    {
        let (Some(inputs), Some(results)) = (inputs, results) else {
            debug!(kind = %self.kind, "Skipping save without inputs and results");
            return None;
        };

        Some(history.save(&self.kind, inputs, results).id.clone())
    }

    /// Request for exporting this panel's content in `format`.
    pub fn export_request(&self, format: ExportFormat) -> ExportRequest {
        ExportRequest::new(CONTENT_REGION, format!("{}-calculation", self.kind), format)
    }

    pub fn export(&self, exporter: &dyn Exporter, format: ExportFormat) {
        let request = self.export_request(format);
        debug!(region = %request.region_id, file = %request.file_name(), "Exporting calculator view");
        exporter.export(&request);
    }

    pub fn export_png(&self, exporter: &dyn Exporter) {
        self.export(exporter, ExportFormat::Png);
    }

    pub fn export_pdf(&self, exporter: &dyn Exporter) {
        self.export(exporter, ExportFormat::Pdf);
    }
}
