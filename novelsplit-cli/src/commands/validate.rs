//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|c| c.validate().map(|core| (c, core))) {
            Ok((cli, core)) => {
                println!("✓ Configuration is valid!");
                println!("  Strategy: {}", core.strategy());
                println!(
                    "  Thresholds: min {} / fallback {} / sentences {}",
                    core.min_chapter_chars(),
                    core.fallback_min_chars(),
                    core.min_sentences()
                );
                println!("  Custom rules: {}", core.custom_rules().len());
                println!("  Output format: {}", cli.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
preset = "strict"
min_chapter_chars = 600

[[rules]]
name = "volume"
pattern = "^卷[一二三四五六七八九十]+\\s+\\S+$"

[output]
default_format = "zip"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_regex() {
        let toml_content = r#"
[[rules]]
name = "broken"
pattern = "^(卷"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/no/such/config.toml"),
        };
        assert!(args.execute().is_err());
    }
}
