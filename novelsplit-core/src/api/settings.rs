//! TOML settings overlay
//!
//! Every field is optional; unset fields keep the preset's value. Lists are
//! appended to the built-in tables rather than replacing them.
//!
//! ```toml
//! preset = "strict"
//! min_chapter_chars = 600
//!
//! [noise]
//! extra_keywords = ["求月票"]
//!
//! [[rules]]
//! name = "volume"
//! pattern = "^卷[一二三四五六七八九十]+\\s*\\S+$"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{Config, Error};
use crate::domain::rules::RuleSpec;

fn default_rule_min_chars() -> usize {
    2
}

fn default_rule_max_chars() -> usize {
    30
}

fn default_true() -> bool {
    true
}

/// Optional overrides for a preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterSettings {
    /// Preset name (`strict` or `simple`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Strategy name (`rule-scan` or `dominant-pattern`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chapter_chars: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_min_chars: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sentences: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title_chars: Option<usize>,

    /// Encoding label for non-UTF-8 files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Additional advertisement keywords
    #[serde(default)]
    pub noise: NoiseSettings,

    /// Additional prose blacklist words
    #[serde(default)]
    pub blacklist: BlacklistSettings,

    /// User-defined heading rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<CustomRuleSettings>,
}

/// `[noise]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseSettings {
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

/// `[blacklist]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistSettings {
    #[serde(default)]
    pub extra_words: Vec<String>,
}

/// One `[[rules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRuleSettings {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_rule_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_rule_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_true")]
    pub require_cjk: bool,
}

impl CustomRuleSettings {
    /// Convert to a rule definition with verbatim titles
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec::custom(
            self.name.trim(),
            self.pattern.as_str(),
            self.min_chars,
            self.max_chars,
            self.require_cjk,
        )
    }
}

impl SegmenterSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Build a validated configuration from these settings alone
    pub fn to_config(&self) -> Result<Config, Error> {
        Config::builder().settings(self)?.build()
    }
}
