//! Chapter detection domain
//!
//! Pure, allocation-light building blocks: noise filtering, heading rules
//! and their validator, the two splitting strategies, and the quality gate.
//! Nothing here performs I/O or holds shared state.

pub mod chapter;
pub mod document;
pub mod dominant;
pub mod extract;
pub mod gate;
pub mod noise;
pub mod rules;
pub mod scan;
pub mod tables;
pub mod text;
pub mod validator;

pub use chapter::Chapter;
pub use document::Document;
pub use dominant::{split_by_dominant_pattern, DominantPattern, DominantSplit};
pub use extract::{extract_chapters, fallback_chapter, refine_title, Extraction};
pub use gate::{GateFailure, QualityGate};
pub use noise::NoiseFilter;
pub use rules::{builtin_rules, RuleSpec, TitleRule, TitleStyle};
pub use scan::{classify_line, scan_candidates, Candidate, LineVerdict, ScanOutcome};
pub use validator::{Rejection, TitleValidator};
