//! Public API for novelsplit-core
//!
//! This module provides the interface used by the CLI and by library
//! callers: build a [`Config`], compile it into a [`ChapterSegmenter`], and
//! feed it text or an [`Input`].

mod config;
mod error;
mod input;
mod output;
mod segmenter;
mod settings;
mod strategy;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::{decode_bytes, Input};
pub use output::{DetectionMetadata, DetectionStats, Output};
pub use segmenter::{detect_chapters, ChapterSegmenter};
pub use settings::{BlacklistSettings, CustomRuleSettings, NoiseSettings, SegmenterSettings};
pub use strategy::{Preset, Strategy};
