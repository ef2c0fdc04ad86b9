//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use novelsplit_core::{render_markdown, Chapter, Output};
use std::io::Write;
use std::path::Path;

/// Markdown formatter - concatenates the per-chapter export documents
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chapter_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chapter_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, _source: &Path, _output: &Output) -> Result<()> {
        Ok(())
    }

    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        if self.chapter_count > 0 {
            writeln!(self.writer)?;
        }
        self.chapter_count += 1;
        write!(self.writer, "{}", render_markdown(chapter))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
