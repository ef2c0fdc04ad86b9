//! Chapter body extraction, title refinement and the fallback chapter

use crate::domain::chapter::Chapter;
use crate::domain::document::Document;
use crate::domain::gate::QualityGate;
use crate::domain::scan::Candidate;
use crate::domain::tables::{
    FALLBACK_TITLE, FALLBACK_TITLE_MIN_CHARS, MAX_TITLE_CHARS, TITLE_EXCERPT_CHARS,
};
use crate::domain::text::{
    char_len, clip_chars, collapse_whitespace, HEADING_FORBIDDEN_PUNCTUATION, SENTENCE_TERMINATORS,
};

/// Chapters that passed the gate plus the number dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Accepted chapters, indexed from 1
    pub chapters: Vec<Chapter>,
    /// Candidates whose body failed the quality gate
    pub dropped: usize,
}

/// Slice bodies between consecutive candidates and keep those that pass
/// the gate. Survivors are renumbered from 1.
pub fn extract_chapters(
    doc: &Document<'_>,
    candidates: &[Candidate],
    gate: &QualityGate,
    short_title_chars: usize,
) -> Extraction {
    let mut extraction = Extraction::default();

    for (position, candidate) in candidates.iter().enumerate() {
        let end = candidates
            .get(position + 1)
            .map_or(doc.len(), |next| next.line);
        let content = doc.body(candidate.line + 1..end);

        if let Err(failure) = gate.check(&content) {
            log::debug!("dropping '{}' at line {}: {failure}", candidate.title, candidate.line);
            extraction.dropped += 1;
            continue;
        }

        let title = refine_title(&candidate.title, &content, short_title_chars);
        let index = extraction.chapters.len() + 1;
        extraction.chapters.push(Chapter::new(index, title, content));
    }

    extraction
}

/// Collapse whitespace and, for short titles, append an excerpt of the
/// first content line.
pub fn refine_title(title: &str, content: &str, short_title_chars: usize) -> String {
    let title = collapse_whitespace(title);
    if char_len(&title) > short_title_chars {
        return title;
    }

    let excerpt = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(first_phrase)
        .unwrap_or_default();

    if excerpt.is_empty() {
        title
    } else {
        format!("{title} {excerpt}")
    }
}

/// Leading phrase of a line, up to the first punctuation mark
fn first_phrase(line: &str) -> String {
    let phrase: String = line
        .chars()
        .take_while(|c| {
            !HEADING_FORBIDDEN_PUNCTUATION.contains(c)
                && !SENTENCE_TERMINATORS.contains(c)
                && *c != '、'
        })
        .take(TITLE_EXCERPT_CHARS)
        .collect();
    collapse_whitespace(&phrase)
}

/// The single whole-document chapter used when nothing else survives
pub fn fallback_chapter(doc: &Document<'_>, min_chars: usize) -> Option<Chapter> {
    let content = doc.filtered_text();
    let chars = char_len(&content);
    if content.is_empty() || chars < min_chars {
        log::debug!("no fallback chapter: {chars} chars < {min_chars}");
        return None;
    }

    let title = doc
        .meaningful_lines()
        .map(|(_, line)| line.trim())
        .find(|line| char_len(line) > FALLBACK_TITLE_MIN_CHARS)
        .map(|line| clip_chars(&collapse_whitespace(line), MAX_TITLE_CHARS))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    log::debug!("emitting fallback chapter '{title}' ({chars} chars)");
    Some(Chapter::new(1, title, content))
}
