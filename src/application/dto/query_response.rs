/// QueryResponse - Internal response DTO from the query use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    /// Rendered report; empty when there was nothing to render
    pub content: String,
}

impl QueryResponse {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Whether there is any report text to present
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
