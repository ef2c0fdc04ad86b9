//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use novelsplit_core::domain::dominant::DOMINANT_PATTERNS;
use novelsplit_core::domain::rules::builtin_rules;
use novelsplit_core::{Config, Preset, Strategy};
use std::io::{self, Write};

use crate::output::OutputFormat;

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List threshold presets
    Presets,

    /// List detection strategies
    Strategies,

    /// List available output formats
    Formats,

    /// List built-in heading rules and patterns
    Rules,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to any writer
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Presets => {
                writeln!(out, "Available presets:")?;
                for preset in Preset::ALL {
                    let config = Config::preset(preset);
                    writeln!(
                        out,
                        "  {:<8} {} (strategy: {}, min {} / fallback {} / sentences {})",
                        preset.name(),
                        preset.description(),
                        config.strategy(),
                        config.min_chapter_chars(),
                        config.fallback_min_chars(),
                        config.min_sentences()
                    )?;
                }
            }
            ListCommands::Strategies => {
                writeln!(out, "Available strategies:")?;
                for strategy in Strategy::ALL {
                    writeln!(out, "  {:<18} {}", strategy.name(), strategy.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for name in OutputFormat::NAMES {
                    if let Some(format) = OutputFormat::from_name(name) {
                        writeln!(out, "  {:<10} {}", name, format.description())?;
                    }
                }
            }
            ListCommands::Rules => {
                writeln!(out, "Heading rules (rule-scan, in priority order):")?;
                for rule in builtin_rules() {
                    writeln!(
                        out,
                        "  {:<16} {}..={} chars  {}",
                        rule.name, rule.min_chars, rule.max_chars, rule.pattern
                    )?;
                }
                writeln!(out)?;
                writeln!(out, "Whole-text patterns (dominant-pattern, tie-break order):")?;
                for (name, pattern) in DOMINANT_PATTERNS {
                    writeln!(out, "  {name:<16} {pattern}")?;
                }
            }
        }
        Ok(())
    }
}
