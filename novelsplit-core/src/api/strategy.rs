//! Strategy and preset names for the API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::Error;

/// Detection algorithm used by a segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Per-line heading scan with structural validation
    #[default]
    RuleScan,
    /// Most frequent whole-text heading pattern, length gate only
    DominantPattern,
}

impl Strategy {
    /// All strategies in listing order
    pub const ALL: [Strategy; 2] = [Strategy::RuleScan, Strategy::DominantPattern];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RuleScan => "rule-scan",
            Strategy::DominantPattern => "dominant-pattern",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::RuleScan => "validate every line against ordered heading rules",
            Strategy::DominantPattern => "split on the most frequent whole-text heading pattern",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule-scan" | "rule_scan" | "rulescan" | "scan" => Ok(Strategy::RuleScan),
            "dominant-pattern" | "dominant_pattern" | "dominant" | "pattern" => {
                Ok(Strategy::DominantPattern)
            }
            other => Err(Error::Configuration(format!("unknown strategy: {other}"))),
        }
    }
}

/// Named threshold bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Rule scan, 800 / 2000 chars, at least 5 sentences
    #[default]
    Strict,
    /// Dominant pattern, 500 / 1000 chars, no sentence check
    Simple,
}

impl Preset {
    /// All presets in listing order
    pub const ALL: [Preset; 2] = [Preset::Strict, Preset::Simple];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Strict => "strict",
            Preset::Simple => "simple",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Strict => "rule scan; 800 chars per chapter, 2000 for fallback, 5 sentences",
            Preset::Simple => "dominant pattern; 500 chars per chapter, 1000 for fallback",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "default" => Ok(Preset::Strict),
            "simple" | "lenient" => Ok(Preset::Simple),
            other => Err(Error::Configuration(format!("unknown preset: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("Dominant".parse::<Strategy>().unwrap(), Strategy::DominantPattern);
        assert!("hybrid".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
        assert!(matches!(
            "fast".parse::<Preset>(),
            Err(Error::Configuration(message)) if message.contains("fast")
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Strategy::default(), Strategy::RuleScan);
        assert_eq!(Preset::default(), Preset::Strict);
    }
}
