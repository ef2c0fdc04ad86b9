//! Markdown export format for chapters
//!
//! Each chapter becomes a small Markdown document:
//!
//! ```text
//! # {title}
//!
//! 字数：{word_count}
//!
//! ---
//!
//! {content}
//! ```
//!
//! followed by a single trailing newline.

use serde::{Deserialize, Serialize};

use crate::domain::text::is_cjk;
use crate::domain::Chapter;

const WORD_COUNT_LABEL: &str = "字数：";
const RULE: &str = "---";

/// A chapter read back from its Markdown export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedChapter {
    pub title: String,
    pub word_count: usize,
    pub content: String,
}

/// Render a chapter in the export format
pub fn render_markdown(chapter: &Chapter) -> String {
    format!(
        "# {}\n\n{WORD_COUNT_LABEL}{}\n\n{RULE}\n\n{}\n",
        chapter.title, chapter.word_count, chapter.content
    )
}

/// Parse a document produced by [`render_markdown`]
pub fn parse_markdown(document: &str) -> Option<ExportedChapter> {
    let rest = document.strip_prefix("# ")?;
    let (title, rest) = rest.split_once('\n')?;

    let rest = rest.strip_prefix('\n')?.strip_prefix(WORD_COUNT_LABEL)?;
    let (count, rest) = rest.split_once('\n')?;
    let word_count = count.trim().parse().ok()?;

    let rest = rest.strip_prefix('\n')?.strip_prefix(RULE)?.strip_prefix("\n\n")?;
    let content = rest.strip_suffix('\n').unwrap_or(rest);

    Some(ExportedChapter {
        title: title.to_string(),
        word_count,
        content: content.to_string(),
    })
}

/// File name for a chapter export: `{index}-{title}.md` when numbered,
/// `{title}.md` otherwise. Characters that are neither ASCII word
/// characters nor CJK are replaced with `_`.
pub fn file_name(chapter: &Chapter, numbered: bool) -> String {
    let mut title: String = chapter
        .title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || is_cjk(c) {
                c
            } else {
                '_'
            }
        })
        .collect();

    if title.is_empty() {
        title = format!("chapter_{}", chapter.index);
    }

    if numbered {
        format!("{}-{title}.md", chapter.index)
    } else {
        format!("{title}.md")
    }
}
