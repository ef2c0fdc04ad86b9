//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use novelsplit_core::{Chapter, Output};
use std::io::Write;
use std::path::Path;

/// Plain text formatter - one line per chapter, then a total
pub struct TextFormatter<W: Write> {
    writer: W,
    chapters: usize,
    chars: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chapters: 0,
            chars: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, source: &Path, output: &Output) -> Result<()> {
        let stats = &output.metadata.stats;
        let note = if stats.fallback_used {
            ", no headings found"
        } else {
            ""
        };
        writeln!(
            self.writer,
            "{} [{}: {} chapters{}]",
            source.display(),
            output.metadata.strategy,
            output.len(),
            note
        )?;
        Ok(())
    }

    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        self.chapters += 1;
        self.chars += chapter.word_count;
        writeln!(
            self.writer,
            "{:>4}  {}  ({} chars)",
            chapter.index, chapter.title, chapter.word_count
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "Total: {} chapters, {} chars",
            self.chapters, self.chars
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
