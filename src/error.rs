//! Error types for the codesift analyzer

use std::process::ExitCode;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CodesiftError>;

/// Errors produced by analysis and search operations
///
/// Only `InputNotFound` is fatal to a whole analysis run. Per-file read
/// failures are recovered by the batch driver and recorded in
/// `AnalysisResult::failed_files`; an invalid user-supplied search pattern
/// short-circuits the entity batches but still yields a complete (empty)
/// result.
#[derive(Debug, Error)]
pub enum CodesiftError {
    /// Root directory does not exist or is not a directory
    #[error("Input directory not found: {path}")]
    InputNotFound { path: String },

    /// File extension is not mapped to a supported language
    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },

    /// File could not be read during extraction
    #[error("Failed to read file: {path}")]
    FileUnreadable { path: String },

    /// User-supplied search regex failed to compile
    #[error("Invalid search pattern: {message}")]
    InvalidSearchPattern { message: String },

    /// Underlying I/O failure outside the per-file recovery path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodesiftError {
    /// Map error variants to process exit codes for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InputNotFound { .. } => ExitCode::from(2),
            Self::UnsupportedLanguage { .. } => ExitCode::from(3),
            Self::FileUnreadable { .. } => ExitCode::from(4),
            Self::InvalidSearchPattern { .. } => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(10),
        }
    }
}
