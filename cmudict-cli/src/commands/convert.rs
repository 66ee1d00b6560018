//! Convert command implementation

use super::init_logging;
use crate::config::{CliConfig, ValidationOverrides};
use crate::error::CliError;
use crate::input::DictionaryFile;
use anyhow::{Context, Result};
use clap::Args;
use cmudict_core::{Accent, Dialect, Formatter, PhonemeTable, SortMode, ValidationEngine};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input dictionary
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output dialect (cmudict-weide, cmudict, cmudict-new, festlex)
    #[arg(short = 't', long = "to", value_name = "DIALECT")]
    pub to: Dialect,

    /// Phoneme accent of the output (default: the output dialect's)
    #[arg(long, value_name = "ACCENT")]
    pub accent: Option<Accent>,

    /// Input dialect, instead of detecting it
    #[arg(long = "from", value_name = "DIALECT")]
    pub from: Option<String>,

    /// Entry order (none, by-word, by-word-bang)
    #[arg(long, value_name = "MODE")]
    pub sort: Option<SortMode>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable or disable checks (`all`, `none`, `<check>`, `no-<check>`)
    #[arg(short = 'W', long = "warning", value_name = "CHECK")]
    pub warnings: Vec<String>,

    /// First expected context position for each word
    #[arg(long, value_name = "N")]
    pub order_from: Option<u32>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load(self.config.as_deref())?;
        let config = file_config.validation_config(&ValidationOverrides {
            warnings: &self.warnings,
            order_from: self.order_from,
            accent: None,
            dialect: self.from.as_deref(),
        })?;
        let sort = match self.sort {
            Some(sort) => sort,
            None => file_config
                .output
                .sort
                .parse()
                .map_err(|e: cmudict_core::Error| CliError::ConfigError(e.to_string()))?,
        };

        let table = PhonemeTable::builtin().context("Failed to load the phoneme table")?;
        let mut dictionary = DictionaryFile::open(&self.input)?;
        let name = dictionary.display_name();
        let engine =
            ValidationEngine::new(&table, &config, dictionary.grammar(), dictionary.lines())?;
        let formatter = Formatter::new(&table, self.to, self.accent);

        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut diagnostics = io::stderr().lock();

        let summary = formatter
            .write(sort.apply(engine), &mut out, &mut diagnostics)
            .with_context(|| format!("Failed to convert {name}"))?;
        dictionary.finish()?;
        out.flush().context("Failed to flush output")?;

        log::info!(
            "Wrote {} entries as {} ({} problem(s))",
            summary.entries,
            self.to,
            summary.diagnostics
        );
        Ok(())
    }
}
