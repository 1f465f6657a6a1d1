use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SbomLocator port for deciding which SPDX JSON file to query
pub trait SbomLocator {
    /// Validates an explicitly requested SPDX JSON file
    ///
    /// # Errors
    /// Returns an error if the file is not a `.json` file or does not look
    /// like an SPDX document
    fn validate(&self, path: &Path) -> Result<PathBuf>;

    /// Finds the first valid SPDX JSON file below `dir`
    ///
    /// # Errors
    /// Returns an error if no candidate file is found
    fn discover(&self, dir: &Path) -> Result<PathBuf>;
}
