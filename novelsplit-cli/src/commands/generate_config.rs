//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use novelsplit_core::api::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds, keywords and rules to suit your files");
        println!("2. Validate your configuration:");
        println!("   novelsplit validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   novelsplit split -i novel.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template() -> String {
        format!(
            r#"# novelsplit configuration

# Threshold preset: "strict" (rule scan) or "simple" (dominant pattern)
preset = "strict"

# Uncomment to override the preset
# strategy = "rule-scan"
# min_chapter_chars = {min}
# fallback_min_chars = {fallback}
# min_sentences = {sentences}
# short_title_chars = {short}

# Encoding for files that are not UTF-8 (default: gb18030)
# encoding = "big5"

# Extra advertisement keywords; lines containing any of them are dropped
[noise]
extra_keywords = []

# Extra words that mark a heading-shaped line as prose
[blacklist]
extra_words = []

# Extra heading rules, tried after the built-in ones.
# Titles keep the matched line as written.
# [[rules]]
# name = "volume"
# pattern = "^卷[一二三四五六七八九十]+\\s+\\S+$"
# min_chars = 2
# max_chars = 30
# require_cjk = true

[output]
# text, json, markdown, zip or dir
default_format = "text"
numbered_files = true
pretty_json = true

[input]
max_file_mb = 10
extensions = ["txt"]

[performance]
# 0 = one thread per core
worker_threads = 0
"#,
            min = defaults::STRICT_MIN_CHAPTER_CHARS,
            fallback = defaults::STRICT_FALLBACK_MIN_CHARS,
            sentences = defaults::STRICT_MIN_SENTENCES,
            short = defaults::SHORT_TITLE_CHARS,
        )
    }
}
