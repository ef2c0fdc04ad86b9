//! Quality gate for extracted chapter bodies

use std::fmt;

use crate::domain::text::{char_len, is_digits_only, sentence_segments};

/// Why a chapter body was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateFailure {
    /// Body shorter than the minimum
    TooShort { chars: usize, min: usize },
    /// Body is only digits (page numbers, counters)
    DigitsOnly,
    /// Too few sentences to be a chapter
    TooFewSentences { segments: usize, min: usize },
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateFailure::TooShort { chars, min } => {
                write!(f, "content too short ({chars} < {min} chars)")
            }
            GateFailure::DigitsOnly => write!(f, "content is only digits"),
            GateFailure::TooFewSentences { segments, min } => {
                write!(f, "too few sentences ({segments} < {min})")
            }
        }
    }
}

/// Minimum length and sentence count for a chapter body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityGate {
    /// Minimum body length in chars
    pub min_chars: usize,
    /// Minimum number of sentence segments (0 disables the check)
    pub min_sentences: usize,
}

impl QualityGate {
    /// Gate that only checks length
    pub const fn length_only(min_chars: usize) -> Self {
        Self {
            min_chars,
            min_sentences: 0,
        }
    }

    /// Check a body against the gate
    pub fn check(&self, content: &str) -> Result<(), GateFailure> {
        let chars = char_len(content);
        if chars < self.min_chars {
            return Err(GateFailure::TooShort {
                chars,
                min: self.min_chars,
            });
        }

        if is_digits_only(content) {
            return Err(GateFailure::DigitsOnly);
        }

        if self.min_sentences > 0 {
            let segments = sentence_segments(content);
            if segments < self.min_sentences {
                return Err(GateFailure::TooFewSentences {
                    segments,
                    min: self.min_sentences,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_gate() {
        let gate = QualityGate::length_only(10);
        assert_eq!(
            gate.check("短"),
            Err(GateFailure::TooShort { chars: 1, min: 10 })
        );
        assert!(gate.check("这是一段足够长的正文内容").is_ok());
    }

    #[test]
    fn test_digits_only() {
        let gate = QualityGate::length_only(3);
        assert_eq!(gate.check("1234\n5678"), Err(GateFailure::DigitsOnly));
    }

    #[test]
    fn test_sentence_gate() {
        let gate = QualityGate {
            min_chars: 1,
            min_sentences: 5,
        };
        assert_eq!(
            gate.check("一句。两句。三句。"),
            Err(GateFailure::TooFewSentences {
                segments: 3,
                min: 5
            })
        );
        assert!(gate.check("一。二。三。四。五。").is_ok());
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(
            GateFailure::TooShort { chars: 5, min: 800 }.to_string(),
            "content too short (5 < 800 chars)"
        );
    }
}
