use crate::shared::Result;
use crate::spdx::domain::Document;

/// ReportFormatter port for rendering one query over a document
///
/// Each query (metadata, files, packages, relationships, dig) has its own
/// implementation producing the text written to the output.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Arguments
    /// * `document` - The loaded SPDX document
    /// * `limit` - Number of leading records to render for flat listings;
    ///   `None` renders the whole collection. Values larger than the
    ///   collection are clamped.
    ///
    /// # Returns
    /// The rendered report, possibly empty
    fn format(&self, document: &Document, limit: Option<usize>) -> Result<String>;
}
