use crate::shared::Result;
use crate::spdx::domain::Document;
use std::path::Path;

/// DocumentReader port for loading an SPDX document
///
/// This port abstracts where the SPDX JSON bytes come from and how they
/// are turned into a [`Document`].
pub trait DocumentReader {
    /// Loads the SPDX document at `path`
    ///
    /// # Arguments
    /// * `path` - Path to the SPDX JSON document
    ///
    /// # Returns
    /// The loaded document. A path that does not exist yields the empty
    /// (default) document rather than an error; callers check
    /// [`Document::is_empty`] before querying.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but has zero bytes
    /// - The file cannot be read
    /// - The content is not JSON matching the SPDX document shape
    fn read_document(&self, path: &Path) -> Result<Document>;
}
