//! Validate command implementation

use super::init_logging;
use crate::config::{CliConfig, ValidationOverrides};
use crate::error::CliError;
use crate::input::{resolve_patterns, DictionaryFile};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use cmudict_core::{Event, PhonemeTable, ValidationConfig, ValidationEngine};
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Enable or disable checks (`all`, `none`, `<check>`, `no-<check>`)
    #[arg(short = 'W', long = "warning", value_name = "CHECK")]
    pub warnings: Vec<String>,

    /// First expected context position for each word
    #[arg(long, value_name = "N")]
    pub order_from: Option<u32>,

    /// Accent of the input phonemes
    #[arg(long, value_name = "ACCENT")]
    pub accent: Option<String>,

    /// Input dialect, instead of detecting it
    #[arg(long, value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported diagnostic formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<file>:<line>: <message>` line per diagnostic
    Text,
    /// JSON array of diagnostic records
    Json,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load(self.config.as_deref())?;
        let config = file_config.validation_config(&ValidationOverrides {
            warnings: &self.warnings,
            order_from: self.order_from,
            accent: self.accent.as_deref(),
            dialect: self.dialect.as_deref(),
        })?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&file_config.output.default_format, true)
                .map_err(CliError::ConfigError)?,
        };

        let table = PhonemeTable::builtin().context("Failed to load the phoneme table")?;
        let files = resolve_patterns(&self.input)?;

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                io::stdout(),
                file_config.output.pretty_json,
            )),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total = 0;
        let mut failed_files = 0;
        let mut unreadable = Vec::new();
        for path in &files {
            match validate_file(&table, &config, path, formatter.as_mut()) {
                Ok(count) => {
                    total += count;
                    if count > 0 {
                        failed_files += 1;
                    }
                    progress.file_completed(&path.display().to_string(), count);
                }
                Err(e) => {
                    log::warn!("Skipping {}: {:#}", path.display(), e);
                    unreadable.push(path.display().to_string());
                }
            }
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "Validated {} file(s): {} problem(s)",
            files.len() - unreadable.len(),
            total
        );

        if !unreadable.is_empty() {
            return Err(CliError::ProcessingError(format!(
                "could not read {}",
                unreadable.join(", ")
            ))
            .into());
        }
        if total > 0 {
            return Err(CliError::ValidationFailed {
                diagnostics: total,
                files: failed_files,
            }
            .into());
        }
        Ok(())
    }
}

/// Validate one dictionary, returning the number of diagnostics reported
fn validate_file(
    table: &PhonemeTable,
    config: &ValidationConfig,
    path: &Path,
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    let mut file = DictionaryFile::open(path)?;
    let name = file.display_name();
    let mut engine = ValidationEngine::new(table, config, file.grammar(), file.lines())?;

    let mut count = 0;
    for event in engine.by_ref() {
        if let Event::Diagnostic(diagnostic) = event {
            formatter.format_diagnostic(&name, &diagnostic)?;
            count += 1;
        }
    }
    if let Some(dialect) = engine.grammar().dialect() {
        log::debug!(
            "Validated {} lines of {name} as {dialect}",
            engine.line_number()
        );
    }
    drop(engine);

    file.finish()?;
    Ok(count)
}
