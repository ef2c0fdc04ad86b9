//! Output types for the API

use std::time::Duration;

use serde::Serialize;

use crate::api::Strategy;
use crate::domain::Chapter;

/// Detection output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Chapters in source order, indexed from 1
    pub chapters: Vec<Chapter>,
    /// Detection metadata
    pub metadata: DetectionMetadata,
}

/// Metadata about one detection run
#[derive(Debug, Clone, Serialize)]
pub struct DetectionMetadata {
    /// Strategy that produced the chapters
    pub strategy: Strategy,
    /// Winning pattern name (dominant-pattern strategy only)
    pub pattern: Option<String>,
    /// Total detection duration
    pub duration: Duration,
    /// Counters
    pub stats: DetectionStats,
}

/// Detection counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    /// Characters in the input
    pub total_chars: usize,
    /// Lines in the input
    pub lines: usize,
    /// Lines classified as advertisements
    pub noise_lines: usize,
    /// Meaningful lines examined for headings
    pub lines_scanned: usize,
    /// Heading candidates (or pattern matches)
    pub candidates: usize,
    /// Lines whose shape matched but failed validation
    pub rejected: usize,
    /// Candidates whose body failed the quality gate
    pub chapters_dropped: usize,
    /// Whether the whole-document fallback chapter was emitted
    pub fallback_used: bool,
}

impl Output {
    /// Number of chapters
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Returns true if no chapter was detected
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Sum of all chapter word counts
    pub fn total_word_count(&self) -> usize {
        self.chapters.iter().map(|c| c.word_count).sum()
    }

    /// Chapter by 1-based index
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        index
            .checked_sub(1)
            .and_then(|position| self.chapters.get(position))
    }

    /// Consume the output, keeping only the chapters
    pub fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }
}
