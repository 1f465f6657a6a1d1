use crate::adapters::outbound::formatters::Palette;
use crate::application::dto::{QueryRequest, QueryResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::shared::Result;

/// RunQueryUseCase - Core use case answering one query over an SPDX document
///
/// The document is loaded once per execution; nothing is cached between
/// runs and no query mutates it.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RunQueryUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> RunQueryUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    /// Creates a new RunQueryUseCase with injected dependencies
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Executes the query use case
    ///
    /// # Arguments
    /// * `request` - Document path, query and rendering options
    ///
    /// # Returns
    /// QueryResponse holding the rendered report. The content is empty when
    /// a flat listing targets an empty collection; a notice is reported instead.
    pub fn execute(&self, request: QueryRequest) -> Result<QueryResponse> {
        self.progress_reporter.report(&format!(
            "Using SBOM file =======> {}",
            request.sbom_path.display()
        ));

        let document = self.document_reader.read_document(&request.sbom_path)?;
        if document.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No SPDX document found at {}; the report will be empty.",
                request.sbom_path.display()
            ));
        }

        tracing::debug!(
            query = %request.query,
            packages = document.package_count(),
            files = document.file_count(),
            relationships = document.relationship_count(),
            "document loaded"
        );

        if request.query.collection_len(&document) == Some(0) {
            self.progress_reporter
                .report(&format!("ℹ️  The document has no {}.", request.query));
            return Ok(QueryResponse::new(String::new()));
        }

        let limit = if request.query.accepts_limit() {
            request.limit
        } else {
            None
        };

        let formatter = FormatterFactory::create(request.query, Palette::new(request.color));
        let content = formatter.format(&document, limit)?;

        Ok(QueryResponse::new(content))
    }
}
