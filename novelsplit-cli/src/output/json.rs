//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use novelsplit_core::{Chapter, Output};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs chapters as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: String,
    chapters: Vec<ChapterData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChapterData {
    /// Source file the chapter came from
    pub source: String,
    /// 1-based index within the source
    pub index: usize,
    /// Chapter title
    pub title: String,
    /// Character count of the content
    pub word_count: usize,
    /// Chapter body
    pub content: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: String::new(),
            chapters: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &Path, _output: &Output) -> Result<()> {
        self.source = source.display().to_string();
        Ok(())
    }

    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        self.chapters.push(ChapterData {
            source: self.source.clone(),
            index: chapter.index,
            title: chapter.title.clone(),
            word_count: chapter.word_count,
            content: chapter.content.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chapters)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chapters)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelsplit_core::ChapterSegmenter;

    #[test]
    fn test_json_array() {
        let output = ChapterSegmenter::new().unwrap().detect("");
        let chapter = Chapter::new(1, "第一章 开始", "夜色渐深。");

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.begin_document(Path::new("a.txt"), &output).unwrap();
            formatter.format_chapter(&chapter).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<ChapterData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "a.txt");
        assert_eq!(parsed[0].title, "第一章 开始");
        assert_eq!(parsed[0].word_count, 5);
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
