//! Main chapter segmenter implementation

use std::io::Read;
use std::sync::OnceLock;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::api::{Config, DetectionMetadata, DetectionStats, Error, Input, Output, Preset, Strategy};
use crate::domain::dominant::{builtin_patterns, split_by_dominant_pattern, DominantPattern};
use crate::domain::extract::{extract_chapters, fallback_chapter};
use crate::domain::rules::{builtin_rules, TitleRule};
use crate::domain::scan::{classify_line, scan_candidates, LineVerdict};
use crate::domain::text::char_len;
use crate::domain::{Chapter, Document, NoiseFilter, QualityGate, TitleValidator};

/// Compiled chapter detector
///
/// Construction compiles every rule; detection itself never fails. A
/// segmenter holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct ChapterSegmenter {
    config: Config,
    noise: NoiseFilter,
    validator: TitleValidator,
    rules: Vec<TitleRule>,
    patterns: Vec<DominantPattern>,
}

impl ChapterSegmenter {
    /// Create a segmenter with the default (strict) configuration
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create a segmenter for a named preset
    pub fn with_preset(preset: Preset) -> Result<Self, Error> {
        Self::with_config(Config::preset(preset))
    }

    /// Create a segmenter with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let rules = builtin_rules()
            .into_iter()
            .chain(config.custom_rules.iter().cloned())
            .map(|spec| {
                let name = spec.name.clone();
                TitleRule::compile(spec).map_err(|source| Error::InvalidPattern { rule: name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let patterns = builtin_patterns().map_err(|source| Error::InvalidPattern {
            rule: "dominant".into(),
            source,
        })?;

        Ok(Self {
            noise: NoiseFilter::new(&config.noise_keywords),
            validator: TitleValidator::new(config.blacklist_words.iter().cloned()),
            rules,
            patterns,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Heading rules in priority order
    pub fn rules(&self) -> &[TitleRule] {
        &self.rules
    }

    /// Classify one line the way the rule scan would
    pub fn classify(&self, line: &str) -> Option<LineVerdict> {
        if self.noise.is_noise(line) || line.trim().is_empty() {
            return None;
        }
        Some(classify_line(line.trim(), &self.rules, &self.validator))
    }

    /// Detect chapters in decoded text
    pub fn detect(&self, text: &str) -> Output {
        let start = Instant::now();
        let doc = Document::new(text, &self.noise);

        let mut stats = DetectionStats {
            total_chars: char_len(text),
            lines: doc.len(),
            noise_lines: doc.noise_count(),
            ..DetectionStats::default()
        };

        let (mut chapters, pattern) = match self.config.strategy {
            Strategy::RuleScan => (self.rule_scan(&doc, &mut stats), None),
            Strategy::DominantPattern => self.dominant_pattern(&doc, &mut stats),
        };

        if chapters.is_empty() {
            if let Some(chapter) = fallback_chapter(&doc, self.config.fallback_min_chars) {
                stats.fallback_used = true;
                chapters.push(chapter);
            }
        }

        log::debug!(
            "{}: {} chapters from {} lines ({} candidates, {} rejected, {} dropped)",
            self.config.strategy,
            chapters.len(),
            stats.lines,
            stats.candidates,
            stats.rejected,
            stats.chapters_dropped
        );

        Output {
            chapters,
            metadata: DetectionMetadata {
                strategy: self.config.strategy,
                pattern,
                duration: start.elapsed(),
                stats,
            },
        }
    }

    fn rule_scan(&self, doc: &Document<'_>, stats: &mut DetectionStats) -> Vec<Chapter> {
        let scan = scan_candidates(doc, &self.rules, &self.validator);
        stats.lines_scanned = scan.lines_scanned;
        stats.candidates = scan.candidates.len();
        stats.rejected = scan.rejected;

        let gate = QualityGate {
            min_chars: self.config.min_chapter_chars,
            min_sentences: self.config.min_sentences,
        };
        let extraction =
            extract_chapters(doc, &scan.candidates, &gate, self.config.short_title_chars);
        stats.chapters_dropped = extraction.dropped;
        extraction.chapters
    }

    fn dominant_pattern(
        &self,
        doc: &Document<'_>,
        stats: &mut DetectionStats,
    ) -> (Vec<Chapter>, Option<String>) {
        let filtered = doc.filtered_text();
        let gate = QualityGate::length_only(self.config.min_chapter_chars);
        let split = split_by_dominant_pattern(&filtered, &self.patterns, &gate);

        stats.lines_scanned = doc.meaningful_lines().count();
        stats.candidates = split.matches;
        stats.chapters_dropped = split.dropped;
        (split.chapters, split.pattern)
    }

    /// Resolve and decode an input, then detect chapters
    pub fn detect_input(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text(self.config.encoding())?;
        Ok(self.detect(&text))
    }

    /// Detect chapters from a reader stream
    pub fn detect_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.detect_input(Input::from_reader(reader))
    }

    /// Detect chapters in several documents, one task per document
    #[cfg(feature = "parallel")]
    pub fn detect_many(&self, texts: &[&str]) -> Vec<Output> {
        texts.par_iter().map(|text| self.detect(text)).collect()
    }

    /// Detect chapters in several documents sequentially
    #[cfg(not(feature = "parallel"))]
    pub fn detect_many(&self, texts: &[&str]) -> Vec<Output> {
        texts.iter().map(|text| self.detect(text)).collect()
    }
}

static DEFAULT_SEGMENTER: OnceLock<Option<ChapterSegmenter>> = OnceLock::new();

/// Detect chapters with the default configuration
///
/// Never fails; returns an empty vector when nothing qualifies.
pub fn detect_chapters(raw_text: &str) -> Vec<Chapter> {
    let segmenter = DEFAULT_SEGMENTER.get_or_init(|| match ChapterSegmenter::new() {
        Ok(segmenter) => Some(segmenter),
        Err(err) => {
            log::error!("default segmenter unavailable: {err}");
            None
        }
    });

    segmenter
        .as_ref()
        .map(|segmenter| segmenter.detect(raw_text).into_chapters())
        .unwrap_or_default()
}
