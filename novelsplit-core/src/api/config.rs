//! Configuration API for chapter detection

use crate::api::{Error, Preset, SegmenterSettings, Strategy};
use crate::domain::rules::{RuleSpec, TitleRule};
use crate::domain::tables::{MAX_TITLE_CHARS, NOISE_KEYWORDS, PROSE_BLACKLIST};

/// Default configuration constants
pub mod defaults {
    /// Minimum chapter body length for the strict preset
    pub const STRICT_MIN_CHAPTER_CHARS: usize = 800;

    /// Minimum whole-document length for the strict fallback chapter
    pub const STRICT_FALLBACK_MIN_CHARS: usize = 2000;

    /// Minimum sentence segments per chapter for the strict preset
    pub const STRICT_MIN_SENTENCES: usize = 5;

    /// Minimum chapter body length for the simple preset
    pub const SIMPLE_MIN_CHAPTER_CHARS: usize = 500;

    /// Minimum whole-document length for the simple fallback chapter
    pub const SIMPLE_FALLBACK_MIN_CHARS: usize = 1000;

    /// Titles at or below this many chars get a content excerpt appended
    pub const SHORT_TITLE_CHARS: usize = 5;
}

/// Detection configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) strategy: Strategy,
    pub(crate) min_chapter_chars: usize,
    pub(crate) fallback_min_chars: usize,
    pub(crate) min_sentences: usize,
    pub(crate) short_title_chars: usize,
    pub(crate) noise_keywords: Vec<String>,
    pub(crate) blacklist_words: Vec<String>,
    pub(crate) custom_rules: Vec<RuleSpec>,
    pub(crate) encoding: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::strict()
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Rule scan with the stricter thresholds
    pub fn strict() -> Self {
        Self::with_thresholds(
            Strategy::RuleScan,
            defaults::STRICT_MIN_CHAPTER_CHARS,
            defaults::STRICT_FALLBACK_MIN_CHARS,
            defaults::STRICT_MIN_SENTENCES,
        )
    }

    /// Dominant-pattern split with the looser thresholds
    pub fn simple() -> Self {
        Self::with_thresholds(
            Strategy::DominantPattern,
            defaults::SIMPLE_MIN_CHAPTER_CHARS,
            defaults::SIMPLE_FALLBACK_MIN_CHARS,
            0,
        )
    }

    /// Configuration for a named preset
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self::strict(),
            Preset::Simple => Self::simple(),
        }
    }

    fn with_thresholds(
        strategy: Strategy,
        min_chapter_chars: usize,
        fallback_min_chars: usize,
        min_sentences: usize,
    ) -> Self {
        Self {
            strategy,
            min_chapter_chars,
            fallback_min_chars,
            min_sentences,
            short_title_chars: defaults::SHORT_TITLE_CHARS,
            noise_keywords: NOISE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            blacklist_words: PROSE_BLACKLIST.iter().map(|w| w.to_string()).collect(),
            custom_rules: Vec::new(),
            encoding: None,
        }
    }

    /// Detection strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Minimum chapter body length in chars
    pub fn min_chapter_chars(&self) -> usize {
        self.min_chapter_chars
    }

    /// Minimum document length for the fallback chapter
    pub fn fallback_min_chars(&self) -> usize {
        self.fallback_min_chars
    }

    /// Minimum sentence segments per chapter (0 = disabled)
    pub fn min_sentences(&self) -> usize {
        self.min_sentences
    }

    /// Length at or below which titles get an excerpt appended
    pub fn short_title_chars(&self) -> usize {
        self.short_title_chars
    }

    /// Noise keywords, built-in ones first
    pub fn noise_keywords(&self) -> &[String] {
        &self.noise_keywords
    }

    /// Prose blacklist, built-in words first
    pub fn blacklist_words(&self) -> &[String] {
        &self.blacklist_words
    }

    /// User-defined rules, consulted after the built-in ones
    pub fn custom_rules(&self) -> &[RuleSpec] {
        &self.custom_rules
    }

    /// Encoding label for non-UTF-8 input (None = GB18030)
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.min_chapter_chars == 0 {
            return Err(Error::Configuration(
                "min_chapter_chars must be greater than 0".into(),
            ));
        }

        if self.fallback_min_chars < self.min_chapter_chars {
            return Err(Error::Configuration(format!(
                "fallback_min_chars ({}) must not be below min_chapter_chars ({})",
                self.fallback_min_chars, self.min_chapter_chars
            )));
        }

        if self.short_title_chars >= MAX_TITLE_CHARS {
            return Err(Error::Configuration(format!(
                "short_title_chars must be below {MAX_TITLE_CHARS}"
            )));
        }

        for rule in &self.custom_rules {
            validate_rule(rule)?;
        }

        if let Some(label) = &self.encoding {
            if encoding_rs::Encoding::for_label(label.trim().as_bytes()).is_none() {
                return Err(Error::Configuration(format!("unknown encoding: {label}")));
            }
        }

        Ok(())
    }
}

fn validate_rule(rule: &RuleSpec) -> Result<(), Error> {
    if rule.name.trim().is_empty() {
        return Err(Error::Configuration("custom rule name must not be empty".into()));
    }

    if rule.pattern.trim().is_empty() {
        return Err(Error::Configuration(format!(
            "custom rule '{}' has an empty pattern",
            rule.name
        )));
    }

    if rule.max_chars == 0 || rule.min_chars > rule.max_chars {
        return Err(Error::Configuration(format!(
            "custom rule '{}' has invalid bounds {}..={}",
            rule.name, rule.min_chars, rule.max_chars
        )));
    }

    TitleRule::compile(rule.clone())
        .map(|_| ())
        .map_err(|source| Error::InvalidPattern {
            rule: rule.name.clone(),
            source,
        })
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    preset: Option<Preset>,
    strategy: Option<Strategy>,
    min_chapter_chars: Option<usize>,
    fallback_min_chars: Option<usize>,
    min_sentences: Option<usize>,
    short_title_chars: Option<usize>,
    extra_noise_keywords: Vec<String>,
    extra_blacklist_words: Vec<String>,
    custom_rules: Vec<RuleSpec>,
    encoding: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset instead of the strict defaults
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Set the preset by name
    pub fn preset_name(self, name: &str) -> Result<Self, Error> {
        Ok(self.preset(name.parse()?))
    }

    /// Override the preset's strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the minimum chapter body length in chars
    pub fn min_chapter_chars(mut self, chars: usize) -> Self {
        self.min_chapter_chars = Some(chars);
        self
    }

    /// Set the minimum document length for the fallback chapter
    pub fn fallback_min_chars(mut self, chars: usize) -> Self {
        self.fallback_min_chars = Some(chars);
        self
    }

    /// Set the minimum sentence count (0 disables the check)
    pub fn min_sentences(mut self, count: usize) -> Self {
        self.min_sentences = Some(count);
        self
    }

    /// Set the short-title threshold
    pub fn short_title_chars(mut self, chars: usize) -> Self {
        self.short_title_chars = Some(chars);
        self
    }

    /// Add noise keywords on top of the built-in table
    pub fn extra_noise_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_noise_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add prose blacklist words on top of the built-in table
    pub fn extra_blacklist_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_blacklist_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Append a user-defined heading rule
    pub fn custom_rule(mut self, rule: RuleSpec) -> Self {
        self.custom_rules.push(rule);
        self
    }

    /// Set the encoding label used for non-UTF-8 input
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Overlay values from a settings file; explicit builder calls made
    /// afterwards still win.
    pub fn settings(mut self, settings: &SegmenterSettings) -> Result<Self, Error> {
        if let Some(name) = &settings.preset {
            self.preset = Some(name.parse()?);
        }
        if let Some(name) = &settings.strategy {
            self.strategy = Some(name.parse()?);
        }
        if settings.min_chapter_chars.is_some() {
            self.min_chapter_chars = settings.min_chapter_chars;
        }
        if settings.fallback_min_chars.is_some() {
            self.fallback_min_chars = settings.fallback_min_chars;
        }
        if settings.min_sentences.is_some() {
            self.min_sentences = settings.min_sentences;
        }
        if settings.short_title_chars.is_some() {
            self.short_title_chars = settings.short_title_chars;
        }
        if settings.encoding.is_some() {
            self.encoding = settings.encoding.clone();
        }

        self.extra_noise_keywords
            .extend(settings.noise.extra_keywords.iter().cloned());
        self.extra_blacklist_words
            .extend(settings.blacklist.extra_words.iter().cloned());
        self.custom_rules
            .extend(settings.rules.iter().map(|rule| rule.to_spec()));

        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::preset(self.preset.unwrap_or_default());

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(chars) = self.min_chapter_chars {
            config.min_chapter_chars = chars;
        }
        if let Some(chars) = self.fallback_min_chars {
            config.fallback_min_chars = chars;
        }
        if let Some(count) = self.min_sentences {
            config.min_sentences = count;
        }
        if let Some(chars) = self.short_title_chars {
            config.short_title_chars = chars;
        }

        config.noise_keywords.extend(self.extra_noise_keywords);
        config.blacklist_words.extend(self.extra_blacklist_words);
        config.custom_rules = self.custom_rules;
        config.encoding = self.encoding;

        config.validate()?;
        Ok(config)
    }
}
