//! Input abstraction and text decoding

use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, GB18030};

use crate::api::Error;

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the input to text. `encoding` is the label used when the
    /// bytes are not valid UTF-8; GB18030 is assumed when it is `None`.
    pub fn into_text(self, encoding: Option<&str>) -> Result<String, Error> {
        let bytes = match self {
            Input::Text(text) => return Ok(strip_bom(text)),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path)?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };

        decode_bytes(bytes, encoding)
    }
}

/// Decode raw bytes: UTF-8 first, then the labelled encoding (GB18030 by
/// default). Malformed input is an error rather than replacement chars.
pub fn decode_bytes(bytes: Vec<u8>, encoding: Option<&str>) -> Result<String, Error> {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(strip_bom(text)),
        Err(err) => err.into_bytes(),
    };

    let encoding = match encoding {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::Encoding(format!("unknown encoding label: {label}")))?,
        None => GB18030,
    };

    let (text, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(Error::Encoding(format!(
            "input is neither UTF-8 nor valid {}",
            encoding.name()
        )));
    }

    log::debug!("decoded {} bytes as {}", bytes.len(), encoding.name());
    Ok(text.into_owned())
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_text_passthrough() {
        let text = Input::from_text("第一章 开始").into_text(None).unwrap();
        assert_eq!(text, "第一章 开始");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("第一章".as_bytes());
        assert_eq!(decode_bytes(bytes, None).unwrap(), "第一章");
    }

    #[test]
    fn test_gb18030_default() {
        let (encoded, _, _) = GB18030.encode("第一章 开始\n夜色渐深。");
        let text = Input::from_bytes(encoded.into_owned()).into_text(None).unwrap();
        assert_eq!(text, "第一章 开始\n夜色渐深。");
    }

    #[test]
    fn test_explicit_label() {
        let (encoded, _, _) = encoding_rs::BIG5.encode("第一章 開始");
        let text = decode_bytes(encoded.into_owned(), Some("big5")).unwrap();
        assert_eq!(text, "第一章 開始");
    }

    #[test]
    fn test_unknown_label() {
        let result = decode_bytes(vec![0xFF, 0xFE, 0x00], Some("klingon"));
        assert!(matches!(result, Err(Error::Encoding(message)) if message.contains("klingon")));
    }

    #[test]
    fn test_reader_and_file() {
        let reader = Cursor::new("正文。".as_bytes().to_vec());
        assert_eq!(Input::from_reader(reader).into_text(None).unwrap(), "正文。");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("novel.txt");
        std::fs::write(&path, "第二章 继续").unwrap();
        assert_eq!(Input::from_file(&path).into_text(None).unwrap(), "第二章 继续");
    }

    #[test]
    fn test_missing_file() {
        let result = Input::from_file("/definitely/not/here.txt").into_text(None);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
