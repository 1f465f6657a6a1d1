use crate::ports::outbound::{DocumentReader, SbomLocator};
use crate::shared::error::SqError;
use crate::shared::Result;
use crate::spdx::domain::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Text every SPDX JSON document contains; cheap pre-check before parsing
const SPDX_MARKER: &str = "SPDXID";

/// FileSystemReader adapter for reading SPDX documents from the file system
///
/// This adapter implements both DocumentReader and SbomLocator ports,
/// providing file system access for loading documents and finding them.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    fn has_json_extension(path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("json")
    }

    fn contains_spdx_marker(path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(|e| SqError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content.contains(SPDX_MARKER))
    }

    /// Recursively collects `.json` files below `dir`, in lexical order
    fn collect_json_files(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| SqError::FileReadError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?
            .filter_map(|entry| entry.ok())
            .collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::debug!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                Self::collect_json_files(&path, found)?;
            } else if file_type.is_file() && Self::has_json_extension(&path) {
                found.push(path);
            }
        }
        Ok(())
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<Document> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} does not exist, using an empty document", path.display());
                return Ok(Document::default());
            }
            Err(e) => {
                return Err(SqError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into())
            }
        };

        if bytes.is_empty() {
            return Err(SqError::EmptyDocument {
                path: path.to_path_buf(),
            }
            .into());
        }

        let document: Document =
            serde_json::from_slice(&bytes).map_err(|e| SqError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            packages = document.package_count(),
            files = document.file_count(),
            relationships = document.relationship_count(),
            "loaded {}",
            path.display()
        );

        Ok(document)
    }
}

impl SbomLocator for FileSystemReader {
    fn validate(&self, path: &Path) -> Result<PathBuf> {
        let trimmed = PathBuf::from(path.to_string_lossy().trim());

        if !Self::has_json_extension(&trimmed) {
            return Err(SqError::InvalidSbomFile {
                path: trimmed,
                reason: "Not a JSON file".to_string(),
            }
            .into());
        }

        if !Self::contains_spdx_marker(&trimmed)? {
            return Err(SqError::InvalidSbomFile {
                path: trimmed,
                reason: format!("No {} keyword found in file", SPDX_MARKER),
            }
            .into());
        }

        Ok(trimmed)
    }

    fn discover(&self, dir: &Path) -> Result<PathBuf> {
        let mut candidates = Vec::new();
        Self::collect_json_files(dir, &mut candidates)?;

        for candidate in candidates {
            match Self::contains_spdx_marker(&candidate) {
                Ok(true) => {
                    tracing::debug!("discovered SPDX document {}", candidate.display());
                    return Ok(candidate);
                }
                Ok(false) => {
                    tracing::debug!("{} is not an SPDX document", candidate.display());
                }
                Err(e) => {
                    tracing::debug!("skipping {}: {}", candidate.display(), e);
                }
            }
        }

        Err(SqError::SbomNotFound {
            dir: dir.to_path_buf(),
        }
        .into())
    }
}
