//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use novelsplit_core::{Chapter, ChapterSegmenter, Config, Output, Preset, Strategy};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    DirFormatter, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
    ZipFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file or directory (default: stdout, or `<stem>-chapters[.zip]`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Threshold preset
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Detection strategy (overrides the preset)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum chapter length in characters
    #[arg(long, value_name = "N")]
    pub min_chapter_chars: Option<usize>,

    /// Minimum document length for the single fallback chapter
    #[arg(long, value_name = "N")]
    pub fallback_min_chars: Option<usize>,

    /// Minimum sentences per chapter (0 disables the check)
    #[arg(long, value_name = "N")]
    pub min_sentences: Option<usize>,

    /// Encoding of non-UTF-8 input (default: gb18030)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Export only this chapter (1-based)
    #[arg(long, value_name = "N")]
    pub chapter: Option<usize>,

    /// Omit the index prefix from exported file names
    #[arg(long)]
    pub unnumbered: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Presets selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Rule scan, 800 / 2000 chars, 5 sentences
    Strict,
    /// Dominant pattern, 500 / 1000 chars
    Simple,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Strict => Preset::Strict,
            PresetArg::Simple => Preset::Simple,
        }
    }
}

/// Strategies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Validate every line against ordered heading rules
    RuleScan,
    /// Split on the most frequent heading pattern
    DominantPattern,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RuleScan => Strategy::RuleScan,
            StrategyArg::DominantPattern => Strategy::DominantPattern,
        }
    }
}

/// One successfully split input file
#[derive(Debug)]
pub struct SplitDocument {
    /// Source path
    pub source: PathBuf,
    /// Detection result
    pub output: Output,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting chapter detection");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let config = self.build_config(&cli_config)?;
        let segmenter = ChapterSegmenter::with_config(config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to split", files.len());

        let reader = FileReader::new(cli_config.max_file_bytes(), &cli_config.input.extensions)
            .with_encoding(segmenter.config().encoding().map(str::to_string));

        let documents = self.split_files(&files, &reader, &segmenter, &cli_config)?;

        let format = self.resolve_format(&cli_config)?;
        let numbered = cli_config.output.numbered_files && !self.unnumbered;
        self.write_output(&documents, format, numbered, cli_config.output.pretty_json)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    /// Layer command-line overrides over the configuration file
    fn build_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder()
            .settings(&cli_config.segmenter)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if let Some(preset) = self.preset {
            builder = builder.preset(preset.into());
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy.into());
        }
        if let Some(chars) = self.min_chapter_chars {
            builder = builder.min_chapter_chars(chars);
        }
        if let Some(chars) = self.fallback_min_chars {
            builder = builder.fallback_min_chars(chars);
        }
        if let Some(count) = self.min_sentences {
            builder = builder.min_sentences(count);
        }
        if let Some(label) = &self.encoding {
            builder = builder.encoding(label.clone());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_name(&cli_config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                cli_config.output.default_format
            ))
            .into()
        })
    }

    fn thread_count(&self, cli_config: &CliConfig) -> usize {
        self.threads
            .filter(|&n| n > 0)
            .or_else(|| Some(cli_config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get)
    }

    /// Read and split every file on a rayon pool. Files that fail are
    /// reported and skipped; the run fails only if none succeed.
    fn split_files(
        &self,
        files: &[PathBuf],
        reader: &FileReader,
        segmenter: &ChapterSegmenter,
        cli_config: &CliConfig,
    ) -> Result<Vec<SplitDocument>> {
        let threads = self.thread_count(cli_config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;
        log::debug!("Splitting with {threads} thread(s)");

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results: Vec<(PathBuf, Result<Output>)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let result = reader
                        .read_text(path)
                        .map(|text| segmenter.detect(&text));
                    progress.file_completed(&path.display().to_string());
                    (path.clone(), result)
                })
                .collect()
        });
        progress.finish();

        let mut documents = Vec::new();
        let mut first_error = None;
        for (source, result) in results {
            match result {
                Ok(output) => {
                    log::info!(
                        "{}: {} chapters ({} dropped)",
                        source.display(),
                        output.len(),
                        output.metadata.stats.chapters_dropped
                    );
                    documents.push(SplitDocument { source, output });
                }
                Err(err) => {
                    if !self.quiet {
                        eprintln!("Skipping {}: {err:#}", source.display());
                    }
                    first_error.get_or_insert(err);
                }
            }
        }

        match (documents.is_empty(), first_error) {
            (true, Some(err)) => Err(err),
            _ => Ok(documents),
        }
    }

    /// Chapters to emit for one document, honouring `--chapter`
    fn selected<'a>(&self, document: &'a SplitDocument) -> Result<Vec<&'a Chapter>> {
        match self.chapter {
            None => Ok(document.output.chapters.iter().collect()),
            Some(index) => document
                .output
                .chapter(index)
                .map(|chapter| vec![chapter])
                .ok_or_else(|| {
                    CliError::ChapterNotFound {
                        requested: index,
                        available: document.output.len(),
                    }
                    .into()
                }),
        }
    }

    fn write_output(
        &self,
        documents: &[SplitDocument],
        format: OutputFormat,
        numbered: bool,
        pretty_json: bool,
    ) -> Result<()> {
        let nested = documents.len() > 1;
        // Resolve `--chapter` before any destination is created
        let selections = documents
            .iter()
            .map(|document| self.selected(document))
            .collect::<Result<Vec<_>>>()?;

        match format {
            OutputFormat::Zip => {
                let sources: Vec<PathBuf> = documents.iter().map(|d| d.source.clone()).collect();
                let path = self
                    .output
                    .clone()
                    .unwrap_or_else(|| format.default_destination(&sources));
                let file = File::create(&path).map_err(|e| {
                    CliError::ExportError(format!("cannot create {}: {e}", path.display()))
                })?;
                let mut formatter = ZipFormatter::new(BufWriter::new(file), numbered, nested);
                self.emit(documents, &selections, &mut formatter)?;
                self.announce(&path, formatter.entries());
            }
            OutputFormat::Dir => {
                let sources: Vec<PathBuf> = documents.iter().map(|d| d.source.clone()).collect();
                let path = self
                    .output
                    .clone()
                    .unwrap_or_else(|| format.default_destination(&sources));
                let mut formatter = DirFormatter::new(&path, numbered, nested);
                self.emit(documents, &selections, &mut formatter)?;
                self.announce(&path, formatter.written().len());
            }
            OutputFormat::Text | OutputFormat::Json | OutputFormat::Markdown => {
                let writer = self.stream_writer()?;
                let mut formatter: Box<dyn OutputFormatter> = match format {
                    OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
                    OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
                    _ => Box::new(TextFormatter::new(writer)),
                };
                self.emit(documents, &selections, formatter.as_mut())?;
            }
        }

        Ok(())
    }

    fn emit(
        &self,
        documents: &[SplitDocument],
        selections: &[Vec<&Chapter>],
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        for (document, chapters) in documents.iter().zip(selections) {
            formatter.begin_document(&document.source, &document.output)?;
            for chapter in chapters {
                formatter.format_chapter(chapter)?;
            }
        }
        formatter.finish()
    }

    fn stream_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    fn announce(&self, path: &Path, files: usize) {
        if !self.quiet {
            eprintln!("Wrote {files} chapter file(s) to {}", path.display());
        }
    }
}
