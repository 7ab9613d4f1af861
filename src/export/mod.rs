//! Export of a rendered region to an image or a document.
//!
//! The encoders themselves live outside this crate. An [`Exporter`] receives
//! an [`ExportRequest`] naming the region and a suggested file name and is
//! expected to produce the downloadable artifact on its own; nothing is
//! returned to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of artifact to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster image of the region
    Png,
    /// Paginated document of the region
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What to capture and what to call the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Identifier of the rendered region to capture
    pub region_id: String,
    /// Suggested file name, without extension
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportRequest {
    pub fn new(region_id: impl Into<String>, filename: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            region_id: region_id.into(),
            filename: filename.into(),
            format,
        }
    }

    /// File name with the format's extension appended.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.filename, self.format.extension())
    }
}

/// Fire-and-forget export collaborator.
///
/// Any `Fn(&ExportRequest)` closure is an exporter:
///
/// ```rust
/// use thirtyhertz::export::{ExportFormat, ExportRequest, Exporter};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let exporter = |request: &ExportRequest| seen.borrow_mut().push(request.file_name());
///
/// exporter.export(&ExportRequest::new("calculator-content", "box-calculation", ExportFormat::Pdf));
/// assert_eq!(seen.into_inner(), vec!["box-calculation.pdf".to_string()]);
/// ```
pub trait Exporter {
    fn export(&self, request: &ExportRequest);
}

impl<F> Exporter for F
where
    F: Fn(&ExportRequest),
{
    fn export(&self, request: &ExportRequest) {
        self(request)
    }
}
