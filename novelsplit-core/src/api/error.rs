//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// Detection itself never fails; errors come from building a segmenter,
/// loading settings, or reading and decoding input.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A heading rule pattern failed to compile
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Name of the offending rule
        rule: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Settings file could not be parsed
    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    /// Input bytes could not be decoded to text
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
