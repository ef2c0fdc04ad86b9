//! Chapter record

use serde::{Deserialize, Serialize};

use crate::domain::text::char_len;

/// A detected chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Whitespace-normalised display title
    pub title: String,
    /// Body text between this chapter's heading and the next
    pub content: String,
    /// 1-based position in the result
    pub index: usize,
    /// Character count of `content`
    pub word_count: usize,
}

impl Chapter {
    /// Create a chapter; `word_count` is derived from the content
    pub fn new(index: usize, title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            title: title.into(),
            word_count: char_len(&content),
            content,
            index,
        }
    }
}
