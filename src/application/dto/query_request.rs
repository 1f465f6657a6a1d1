use super::Query;
use std::path::PathBuf;

/// QueryRequest - Internal request DTO for the query use case
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Path to the SPDX JSON document
    pub sbom_path: PathBuf,
    /// Report to produce
    pub query: Query,
    /// Number of leading records for flat listings, `None` for all
    pub limit: Option<usize>,
    /// Whether the report may contain terminal colors
    pub color: bool,
}

impl QueryRequest {
    pub fn new(sbom_path: PathBuf, query: Query, limit: Option<usize>, color: bool) -> Self {
        Self {
            sbom_path,
            query,
            limit,
            color,
        }
    }
}
