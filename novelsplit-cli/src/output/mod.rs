//! Output formatting module

use anyhow::Result;
use novelsplit_core::{Chapter, Output};
use std::path::{Path, PathBuf};

/// Trait for output formatters
///
/// A run calls `begin_document` once per input file, then
/// `format_chapter` for each selected chapter, and `finish` once at the end.
pub trait OutputFormatter {
    /// Start the chapters of one source file
    fn begin_document(&mut self, source: &Path, output: &Output) -> Result<()>;

    /// Format and output a single chapter
    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()>;

    /// Finalize output (e.g., close JSON array, write the zip directory)
    fn finish(&mut self) -> Result<()>;
}

pub mod archive;
pub mod json;
pub mod markdown;
pub mod text;

pub use archive::{DirFormatter, ZipFormatter};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chapter list with word counts
    Text,
    /// JSON array of chapters with their source file
    Json,
    /// All chapters in the Markdown export format
    Markdown,
    /// Zip archive with one Markdown file per chapter
    Zip,
    /// Directory with one Markdown file per chapter
    Dir,
}

impl OutputFormat {
    /// Format names accepted in configuration files
    pub const NAMES: [&'static str; 5] = ["text", "json", "markdown", "zip", "dir"];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Zip => "zip",
            OutputFormat::Dir => "dir",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "zip" => Some(OutputFormat::Zip),
            "dir" | "directory" => Some(OutputFormat::Dir),
            _ => None,
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "chapter list with word counts",
            OutputFormat::Json => "JSON array of chapters",
            OutputFormat::Markdown => "all chapters as Markdown",
            OutputFormat::Zip => "zip archive, one Markdown file per chapter",
            OutputFormat::Dir => "directory, one Markdown file per chapter",
        }
    }

    /// Default destination for multi-file formats
    pub fn default_destination(&self, sources: &[PathBuf]) -> PathBuf {
        let base = match sources {
            [single] => format!("{}-chapters", file_stem(single)),
            _ => "chapters".to_string(),
        };
        match self {
            OutputFormat::Zip => PathBuf::from(format!("{base}.zip")),
            _ => PathBuf::from(base),
        }
    }
}

/// File stem as a lossy string
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "novel".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in OutputFormat::NAMES {
            assert_eq!(OutputFormat::from_name(name).map(|f| f.name()), Some(name));
        }
        assert_eq!(OutputFormat::from_name("epub"), None);
    }

    #[test]
    fn test_default_destination() {
        let single = vec![PathBuf::from("books/风雪夜归人.txt")];
        assert_eq!(
            OutputFormat::Zip.default_destination(&single),
            PathBuf::from("风雪夜归人-chapters.zip")
        );
        assert_eq!(
            OutputFormat::Dir.default_destination(&single),
            PathBuf::from("风雪夜归人-chapters")
        );

        let many = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        assert_eq!(
            OutputFormat::Zip.default_destination(&many),
            PathBuf::from("chapters.zip")
        );
    }
}
