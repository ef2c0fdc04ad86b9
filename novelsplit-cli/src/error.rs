//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// File exceeds the size limit
    FileTooLarge {
        /// Offending file
        path: String,
        /// Actual size in bytes
        size: u64,
        /// Limit in bytes
        limit: u64,
    },
    /// File extension is not accepted
    UnsupportedFileType(String),
    /// Requested chapter does not exist
    ChapterNotFound {
        /// Requested 1-based index
        requested: usize,
        /// Number of chapters detected
        available: usize,
    },
    /// Configuration error
    ConfigError(String),
    /// Writing an export failed
    ExportError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::FileTooLarge { path, size, limit } => write!(
                f,
                "File too large: {path} ({:.1} MB, limit {:.0} MB)",
                *size as f64 / (1024.0 * 1024.0),
                *limit as f64 / (1024.0 * 1024.0)
            ),
            CliError::UnsupportedFileType(path) => {
                write!(f, "Unsupported file type: {path} (only .txt files are accepted)")
            }
            CliError::ChapterNotFound {
                requested,
                available,
            } => write!(
                f,
                "Chapter {requested} not found ({available} chapters detected)"
            ),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ExportError(msg) => write!(f, "Export error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
