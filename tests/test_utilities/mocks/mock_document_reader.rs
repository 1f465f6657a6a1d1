use spdx_sq::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DocumentReader serving an in-memory document
#[derive(Clone)]
pub struct MockDocumentReader {
    document: Document,
    should_fail: bool,
    requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockDocumentReader {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reader that fails like an existing but empty file
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(Document::default())
        }
    }

    /// Paths passed to `read_document`, in call order
    #[allow(dead_code)]
    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<Document> {
        self.requested.lock().unwrap().push(path.to_path_buf());

        if self.should_fail {
            return Err(SqError::EmptyDocument {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(self.document.clone())
    }
}
