//! Configuration module
//!
//! One TOML file drives both the CLI and the detector: detector settings
//! live at the top level (see [`SegmenterSettings`]), CLI settings in the
//! `[output]`, `[input]` and `[performance]` tables.

use std::path::Path;

use anyhow::{Context, Result};
use novelsplit_core::{Config, SegmenterSettings};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Detector settings
    #[serde(flatten)]
    pub segmenter: SegmenterSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Prefix exported file names with the chapter index
    pub numbered_files: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            numbered_files: true,
            pretty_json: true,
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Largest accepted file (MB)
    pub max_file_mb: u64,

    /// Accepted file extensions, without the dot
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_mb: 10,
            extensions: vec!["txt".to_string()],
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section, returning the detector configuration
    pub fn validate(&self) -> Result<Config> {
        if self.input.max_file_mb == 0 {
            return Err(CliError::ConfigError("input.max_file_mb must be greater than 0".into()).into());
        }
        if self.input.extensions.is_empty() {
            return Err(CliError::ConfigError("input.extensions must not be empty".into()).into());
        }
        if crate::output::OutputFormat::from_name(&self.output.default_format).is_none() {
            return Err(CliError::ConfigError(format!(
                "unknown output.default_format: {}",
                self.output.default_format
            ))
            .into());
        }

        let config = self.segmenter.to_config()?;
        Ok(config)
    }

    /// Largest accepted file in bytes
    pub fn max_file_bytes(&self) -> u64 {
        self.input.max_file_mb * 1024 * 1024
    }
}
