//! Structural validation of heading candidates
//!
//! The shape regex only says a line *looks* like a heading. The validator
//! rejects lines that are really prose: punctuation in the label, lengths
//! outside the rule's bounds, no CJK where CJK is expected, and a blacklist
//! of reasoning words.

use std::fmt;

use crate::domain::rules::{ShapeMatch, TitleRule};
use crate::domain::tables::PRONOUNS_AFTER_ORDINAL;
use crate::domain::text::{char_len, contains_cjk, has_heading_punctuation};

/// Why a shape match was not accepted as a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The match does not start at the beginning of the line
    NotAnchored,
    /// Formatted title is shorter than the rule allows
    TooShort { chars: usize, min: usize },
    /// Formatted title is longer than the rule allows
    TooLong { chars: usize, max: usize },
    /// Label after the marker is too long
    LabelTooLong { chars: usize, max: usize },
    /// Sentence or clause punctuation in the label
    Punctuation,
    /// The rule expects CJK text but the line has none
    MissingCjk,
    /// The line contains blacklisted prose vocabulary
    Blacklisted(String),
    /// A pronoun follows `第` where a numeral belongs
    PronounOrdinal(char),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAnchored => write!(f, "match is not anchored at line start"),
            Rejection::TooShort { chars, min } => write!(f, "title too short ({chars} < {min})"),
            Rejection::TooLong { chars, max } => write!(f, "title too long ({chars} > {max})"),
            Rejection::LabelTooLong { chars, max } => {
                write!(f, "label too long ({chars} > {max})")
            }
            Rejection::Punctuation => write!(f, "label contains sentence punctuation"),
            Rejection::MissingCjk => write!(f, "no CJK character in line"),
            Rejection::Blacklisted(word) => write!(f, "contains prose word '{word}'"),
            Rejection::PronounOrdinal(ch) => write!(f, "pronoun '{ch}' after '第'"),
        }
    }
}

/// Heading validator shared by all rules
#[derive(Debug, Clone)]
pub struct TitleValidator {
    blacklist: Vec<String>,
}

impl TitleValidator {
    /// Create a validator with the given prose blacklist
    pub fn new<I, S>(blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut blacklist: Vec<String> = blacklist
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.trim().is_empty())
            .collect();
        blacklist.sort();
        blacklist.dedup();

        Self { blacklist }
    }

    /// Validate a shape match; `line` is the trimmed line and `title` the
    /// formatted title.
    pub fn validate(
        &self,
        rule: &TitleRule,
        line: &str,
        shape: &ShapeMatch<'_>,
        title: &str,
    ) -> Result<(), Rejection> {
        let spec = rule.spec();

        if shape.start != 0 {
            return Err(Rejection::NotAnchored);
        }

        let chars = char_len(title);
        if chars < spec.min_chars {
            return Err(Rejection::TooShort {
                chars,
                min: spec.min_chars,
            });
        }
        if chars > spec.max_chars {
            return Err(Rejection::TooLong {
                chars,
                max: spec.max_chars,
            });
        }

        if let Some(max) = spec.max_label_chars {
            let label_chars = char_len(shape.label.trim());
            if label_chars > max {
                return Err(Rejection::LabelTooLong {
                    chars: label_chars,
                    max,
                });
            }
        }

        if has_heading_punctuation(shape.label) {
            return Err(Rejection::Punctuation);
        }

        if spec.require_cjk && !contains_cjk(line) {
            return Err(Rejection::MissingCjk);
        }

        self.check_blacklist(line)
    }

    /// Check the prose blacklist on its own
    pub fn check_blacklist(&self, line: &str) -> Result<(), Rejection> {
        if let Some(word) = self.blacklist.iter().find(|w| line.contains(w.as_str())) {
            return Err(Rejection::Blacklisted(word.clone()));
        }

        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '第' {
                if let Some(&next) = chars.peek() {
                    if PRONOUNS_AFTER_ORDINAL.contains(&next) {
                        return Err(Rejection::PronounOrdinal(next));
                    }
                }
            }
        }

        Ok(())
    }
}
