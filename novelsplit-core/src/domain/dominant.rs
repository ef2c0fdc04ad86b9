//! Dominant-pattern splitting
//!
//! Instead of judging every line, run a handful of whole-text heading
//! patterns over the noise-filtered document and let the one with the most
//! matches define every chapter boundary. There is no structural
//! validation; only the length gate applies. Simpler and more
//! false-positive-prone than the per-line scan.

use regex::Regex;

use crate::domain::chapter::Chapter;
use crate::domain::gate::QualityGate;
use crate::domain::tables::MAX_TITLE_CHARS;
use crate::domain::text::{clip_chars, collapse_whitespace, trim_blank_lines};

/// Built-in whole-text heading patterns in tie-break order
pub const DOMINANT_PATTERNS: &[(&str, &str)] = &[
    (
        "chinese-ordinal",
        r"(?m)^[ \t\x{3000}]*第[零〇一二两三四五六七八九十百千万0-9０-９]+[章回节篇卷集部][^\n]{0,30}$",
    ),
    (
        "english",
        r"(?mi)^[ \t\x{3000}]*chapter[ \t]+(?:[0-9]+|[ivxlcdm]+)\b[^\n]{0,30}$",
    ),
    (
        "enumerated",
        r"(?m)^[ \t\x{3000}]*[0-9]{1,4}[.、．][ \t]*[^\n]{1,20}$",
    ),
];

/// A compiled whole-text pattern
#[derive(Debug, Clone)]
pub struct DominantPattern {
    name: String,
    regex: Regex,
}

impl DominantPattern {
    /// Compile a named pattern
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(pattern)?,
        })
    }

    /// Pattern name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Compile the built-in patterns
pub fn builtin_patterns() -> Result<Vec<DominantPattern>, regex::Error> {
    DOMINANT_PATTERNS
        .iter()
        .map(|(name, pattern)| DominantPattern::new(*name, pattern))
        .collect()
}

/// Result of a dominant-pattern split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominantSplit {
    /// Name of the winning pattern, if any pattern matched more than once
    pub pattern: Option<String>,
    /// Number of matches of the winning pattern
    pub matches: usize,
    /// Accepted chapters, indexed from 1
    pub chapters: Vec<Chapter>,
    /// Slices that failed the length gate
    pub dropped: usize,
}

/// Split `text` (already noise-filtered) by its most frequent heading pattern
pub fn split_by_dominant_pattern(
    text: &str,
    patterns: &[DominantPattern],
    gate: &QualityGate,
) -> DominantSplit {
    let mut best: Option<(&DominantPattern, Vec<regex::Match<'_>>)> = None;

    for pattern in patterns {
        let found: Vec<_> = pattern.regex.find_iter(text).collect();
        log::trace!("pattern {} matched {} times", pattern.name, found.len());

        let beats_best = best
            .as_ref()
            .map_or(true, |(_, current)| found.len() > current.len());
        if found.len() > 1 && beats_best {
            best = Some((pattern, found));
        }
    }

    let Some((pattern, found)) = best else {
        return DominantSplit::default();
    };

    let mut split = DominantSplit {
        pattern: Some(pattern.name.clone()),
        matches: found.len(),
        ..DominantSplit::default()
    };

    for (position, heading) in found.iter().enumerate() {
        let end = found
            .get(position + 1)
            .map_or(text.len(), |next| next.start());
        let content = text
            .get(heading.end()..end)
            .map(trim_blank_lines)
            .unwrap_or_default();

        if let Err(failure) = gate.check(&content) {
            log::debug!("dropping '{}': {failure}", heading.as_str().trim());
            split.dropped += 1;
            continue;
        }

        let index = split.chapters.len() + 1;
        let title = clip_chars(&collapse_whitespace(heading.as_str()), MAX_TITLE_CHARS);
        split.chapters.push(Chapter::new(index, title, content));
    }

    split
}
