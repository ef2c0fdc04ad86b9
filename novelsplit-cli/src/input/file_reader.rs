//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader enforcing the upload limits and decoding legacy encodings
#[derive(Debug, Clone)]
pub struct FileReader {
    max_bytes: u64,
    extensions: Vec<String>,
    encoding: Option<String>,
}

impl FileReader {
    /// Create a reader with a size limit and accepted extensions
    pub fn new(max_bytes: u64, extensions: &[String]) -> Self {
        Self {
            max_bytes,
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            encoding: None,
        }
    }

    /// Decode non-UTF-8 files with this encoding label instead of GB18030
    pub fn with_encoding(mut self, label: Option<String>) -> Self {
        self.encoding = label;
        self
    }

    /// Check extension and size without reading the file
    pub fn check(&self, path: &Path) -> Result<u64> {
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false);
        if !accepted {
            return Err(CliError::UnsupportedFileType(path.display().to_string()).into());
        }

        let size = Self::file_size(path)?;
        if size > self.max_bytes {
            return Err(CliError::FileTooLarge {
                path: path.display().to_string(),
                size,
                limit: self.max_bytes,
            }
            .into());
        }

        Ok(size)
    }

    /// Read and decode a file after checking it
    pub fn read_text(&self, path: &Path) -> Result<String> {
        self.check(path)?;

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let text = novelsplit_core::api::decode_bytes(bytes, self.encoding.as_deref())
            .with_context(|| format!("Failed to decode file: {}", path.display()))?;

        Ok(text)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn reader() -> FileReader {
        FileReader::new(1024, &["txt".to_string()])
    }

    #[test]
    fn test_read_utf8_text() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("novel.txt");
        fs::write(&file_path, "第一章 开始\n夜色渐深。").unwrap();

        assert_eq!(reader().read_text(&file_path).unwrap(), "第一章 开始\n夜色渐深。");
    }

    #[test]
    fn test_read_gb18030_text() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("novel.TXT");
        let (encoded, _, _) = encoding_rs::GB18030.encode("第一章 开始");
        fs::write(&file_path, &encoded).unwrap();

        assert_eq!(reader().read_text(&file_path).unwrap(), "第一章 开始");
    }

    #[test]
    fn test_rejects_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("novel.epub");
        fs::write(&file_path, "content").unwrap();

        let err = reader().read_text(&file_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_rejects_large_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.txt");
        fs::write(&file_path, "a".repeat(2048)).unwrap();

        let err = reader().check(&file_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileTooLarge { size: 2048, limit: 1024, .. })
        ));
    }

    #[test]
    fn test_file_size_nonexistent() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::file_size(path).unwrap_err();
        assert!(err.to_string().contains("Failed to get metadata"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::File::create(&file_path).unwrap();

        assert_eq!(reader().read_text(&file_path).unwrap(), "");
    }
}
