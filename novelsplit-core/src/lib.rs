//! Chapter boundary detection for plain-text novels
//!
//! Web-sourced novel dumps mix real chapter headings with advertisement
//! lines, prose that happens to start with `第…章`, and stray numbering.
//! This crate finds the real headings, slices the text between them, and
//! drops slices too short to be chapters.
//!
//! # Architecture
//!
//! - **Domain layer**: noise filtering, heading rules and their validator,
//!   the two splitting strategies, the quality gate. Pure functions.
//! - **API layer**: configuration, presets, input decoding, and the
//!   [`ChapterSegmenter`] that ties the domain together.
//! - **Export**: the per-chapter Markdown format used by the CLI.
//!
//! # Example
//!
//! ```rust
//! use novelsplit_core::{ChapterSegmenter, Config};
//!
//! let body = "他推开门走进雨里，心里想着明天的事。\n".repeat(60);
//! let text = format!("第一章 开始\n{body}第二章 继续\n{body}");
//!
//! let segmenter = ChapterSegmenter::with_config(Config::strict()).unwrap();
//! let output = segmenter.detect(&text);
//!
//! assert_eq!(output.chapters.len(), 2);
//! assert_eq!(output.chapters[1].title, "第二章 继续");
//! ```

pub mod api;
pub mod domain;
pub mod export;

pub use api::{
    detect_chapters, ChapterSegmenter, Config, ConfigBuilder, DetectionMetadata, DetectionStats,
    Error, Input, Output, Preset, Result, SegmenterSettings, Strategy,
};
pub use domain::{Chapter, RuleSpec, TitleStyle};
pub use export::{file_name, parse_markdown, render_markdown, ExportedChapter};
