//! Multi-file exporters: zip archive and plain directory
//!
//! Both write one Markdown document per chapter. When a run covers several
//! source files, each file's chapters go under a folder named after its
//! stem.

use super::{file_stem, OutputFormatter};
use anyhow::{Context, Result};
use novelsplit_core::{file_name, render_markdown, Chapter, Output};
use std::collections::HashSet;
use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::CliError;

/// Entry names already used in the current folder. Chapters whose titles
/// collide get a `-2`, `-3`, ... suffix before the extension.
#[derive(Debug, Default)]
struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    fn reset(&mut self) {
        self.used.clear();
    }

    fn claim(&mut self, name: String) -> String {
        if self.used.insert(name.clone()) {
            return name;
        }

        let stem = name.strip_suffix(".md").unwrap_or(&name);
        let mut n = 2;
        loop {
            let candidate = format!("{stem}-{n}.md");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Zip exporter
pub struct ZipFormatter<W: Write + Seek> {
    zip: Option<ZipWriter<W>>,
    options: SimpleFileOptions,
    numbered: bool,
    nested: bool,
    prefix: String,
    names: NameRegistry,
    entries: usize,
}

impl<W: Write + Seek> ZipFormatter<W> {
    /// Create an exporter; `nested` puts each source under its own folder
    pub fn new(writer: W, numbered: bool, nested: bool) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        Self {
            zip: Some(ZipWriter::new(writer)),
            options,
            numbered,
            nested,
            prefix: String::new(),
            names: NameRegistry::default(),
            entries: 0,
        }
    }

    /// Number of files written so far
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Finish the archive and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        let zip = self
            .zip
            .take()
            .ok_or_else(|| CliError::ExportError("archive already finished".into()))?;
        zip.finish()
            .map_err(|e| CliError::ExportError(format!("failed to finalize archive: {e}")).into())
    }
}

impl<W: Write + Seek> OutputFormatter for ZipFormatter<W> {
    fn begin_document(&mut self, source: &Path, _output: &Output) -> Result<()> {
        if self.nested {
            self.names.reset();
            let folder = file_stem(source);
            self.prefix = format!("{folder}/");
            if let Some(zip) = self.zip.as_mut() {
                zip.add_directory(folder, self.options)
                    .map_err(|e| CliError::ExportError(format!("failed to add folder: {e}")))?;
            }
        }
        Ok(())
    }

    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        let zip = self
            .zip
            .as_mut()
            .ok_or_else(|| CliError::ExportError("archive already finished".into()))?;

        let entry = self.names.claim(file_name(chapter, self.numbered));
        let name = format!("{}{entry}", self.prefix);
        zip.start_file(name.as_str(), self.options)
            .map_err(|e| CliError::ExportError(format!("failed to start {name}: {e}")))?;
        zip.write_all(render_markdown(chapter).as_bytes())
            .with_context(|| format!("Failed to write {name} to archive"))?;

        self.entries += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(zip) = self.zip.take() {
            let mut writer = zip.finish().map_err(|e| {
                CliError::ExportError(format!("failed to finalize archive: {e}"))
            })?;
            writer.flush()?;
        }
        log::info!("wrote {} chapters to archive", self.entries);
        Ok(())
    }
}

/// Directory exporter
pub struct DirFormatter {
    root: PathBuf,
    current: PathBuf,
    numbered: bool,
    nested: bool,
    names: NameRegistry,
    written: Vec<PathBuf>,
}

impl DirFormatter {
    /// Create an exporter rooted at `root`; the directory is created on demand
    pub fn new(root: impl Into<PathBuf>, numbered: bool, nested: bool) -> Self {
        let root = root.into();
        Self {
            current: root.clone(),
            root,
            numbered,
            nested,
            names: NameRegistry::default(),
            written: Vec::new(),
        }
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl OutputFormatter for DirFormatter {
    fn begin_document(&mut self, source: &Path, _output: &Output) -> Result<()> {
        self.names.reset();
        self.current = if self.nested {
            self.root.join(file_stem(source))
        } else {
            self.root.clone()
        };

        fs::create_dir_all(&self.current).map_err(|e| {
            CliError::ExportError(format!("cannot create {}: {e}", self.current.display()))
        })?;
        Ok(())
    }

    fn format_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        let path = self
            .current
            .join(self.names.claim(file_name(chapter, self.numbered)));
        fs::write(&path, render_markdown(chapter))
            .map_err(|e| CliError::ExportError(format!("cannot write {}: {e}", path.display())))?;
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::info!(
            "wrote {} chapters under {}",
            self.written.len(),
            self.root.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelsplit_core::{parse_markdown, ChapterSegmenter};
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    fn chapters() -> (Output, Vec<Chapter>) {
        let output = ChapterSegmenter::new().unwrap().detect("");
        let chapters = vec![
            Chapter::new(1, "第一章 开始", "夜色渐深。"),
            Chapter::new(2, "第二章 继续", "天亮了。"),
        ];
        (output, chapters)
    }

    #[test]
    fn test_zip_contains_one_file_per_chapter() {
        let (output, chapters) = chapters();
        let mut formatter = ZipFormatter::new(Cursor::new(Vec::new()), true, false);
        formatter
            .begin_document(Path::new("novel.txt"), &output)
            .unwrap();
        for chapter in &chapters {
            formatter.format_chapter(chapter).unwrap();
        }
        assert_eq!(formatter.entries(), 2);
        let cursor = formatter.into_inner().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("2-第二章_继续.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(parse_markdown(&content).unwrap().content, "天亮了。");
    }

    #[test]
    fn test_nested_zip_uses_folders() {
        let (output, chapters) = chapters();
        let mut formatter = ZipFormatter::new(Cursor::new(Vec::new()), false, true);
        formatter
            .begin_document(Path::new("dir/甲.txt"), &output)
            .unwrap();
        formatter.format_chapter(&chapters[0]).unwrap();
        let cursor = formatter.into_inner().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        let names: Vec<_> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"甲/第一章_开始.md".to_string()));
    }

    #[test]
    fn test_dir_export() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");
        let (output, chapters) = chapters();

        let mut formatter = DirFormatter::new(&root, true, false);
        formatter
            .begin_document(Path::new("novel.txt"), &output)
            .unwrap();
        for chapter in &chapters {
            formatter.format_chapter(chapter).unwrap();
        }
        formatter.finish().unwrap();

        assert_eq!(formatter.written().len(), 2);
        let first = fs::read_to_string(root.join("1-第一章_开始.md")).unwrap();
        assert!(first.starts_with("# 第一章 开始\n"));
    }

    fn repeated_titles() -> Vec<Chapter> {
        vec![
            Chapter::new(1, "第一章 开始", "夜色渐深。"),
            Chapter::new(2, "第一章 开始", "天亮了。"),
            Chapter::new(3, "第一章 开始", "又是一夜。"),
        ]
    }

    #[test]
    fn test_zip_repeated_titles_unnumbered() {
        let (output, _) = chapters();
        let mut formatter = ZipFormatter::new(Cursor::new(Vec::new()), false, false);
        formatter
            .begin_document(Path::new("novel.txt"), &output)
            .unwrap();
        for chapter in &repeated_titles() {
            formatter.format_chapter(chapter).unwrap();
        }
        assert_eq!(formatter.entries(), 3);
        let cursor = formatter.into_inner().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(archive.len(), 3);

        let mut content = String::new();
        archive
            .by_name("第一章_开始-2.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(parse_markdown(&content).unwrap().content, "天亮了。");
        assert!(archive.by_name("第一章_开始-3.md").is_ok());
    }

    #[test]
    fn test_dir_repeated_titles_unnumbered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("out");
        let (output, _) = chapters();

        let mut formatter = DirFormatter::new(&root, false, false);
        formatter
            .begin_document(Path::new("novel.txt"), &output)
            .unwrap();
        for chapter in &repeated_titles() {
            formatter.format_chapter(chapter).unwrap();
        }

        assert_eq!(formatter.written().len(), 3);
        let on_disk = fs::read_dir(&root).unwrap().count();
        assert_eq!(on_disk, 3);

        let second = fs::read_to_string(root.join("第一章_开始-2.md")).unwrap();
        assert_eq!(parse_markdown(&second).unwrap().content, "天亮了。");
    }

    #[test]
    fn test_nested_folders_reuse_names() {
        let (output, chapters) = chapters();
        let mut formatter = ZipFormatter::new(Cursor::new(Vec::new()), false, true);
        for source in ["甲.txt", "乙.txt"] {
            formatter.begin_document(Path::new(source), &output).unwrap();
            formatter.format_chapter(&chapters[0]).unwrap();
        }
        let cursor = formatter.into_inner().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        let names: Vec<_> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"甲/第一章_开始.md".to_string()));
        assert!(names.contains(&"乙/第一章_开始.md".to_string()));
    }
}
