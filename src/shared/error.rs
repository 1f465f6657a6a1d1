use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the query produced its report
    Success = 0,
    /// Application error (missing SBOM, unreadable or malformed document, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for loading and querying SPDX documents.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing wording next to each variant.
#[derive(Debug, Error)]
pub enum SqError {
    #[error("SPDX document is empty: {path}\n\n💡 Hint: The file has zero bytes. Regenerate the SBOM or point --config at another file")]
    EmptyDocument { path: PathBuf },

    #[error("Failed to parse SPDX document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid SPDX 2.x JSON document")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Not a valid SPDX JSON file: {path}\nReason: {reason}\n\n💡 Hint: Pass a *.json SPDX document with --config")]
    InvalidSbomFile { path: PathBuf, reason: String },

    #[error("No valid SPDX JSON file found in directory: {dir}\n\n💡 Hint: Run sq next to an SPDX JSON document, or specify one with --config")]
    SbomNotFound { dir: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for settings and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
