//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use cmudict_core::{Check, CheckSet};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to choose checks and output settings");
        println!("2. Use it for validation:");
        println!(
            "   cmudict validate -i cmudict.dict -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Generate template configuration content
fn generate_template() -> String {
    let defaults = CheckSet::default();
    let mut checks = String::new();
    for check in Check::ALL {
        let state = if defaults.contains(check) { "on " } else { "off" };
        checks.push_str(&format!("#   {state} {:<26} {}\n", check.name(), check.description()));
    }

    format!(
        r#"# cmudict configuration

[validation]
# Check tokens applied left to right over the defaults:
# "all", "none", "<check>" or "no-<check>".
#
# Checks (default state):
{checks}warnings = []

# First expected context position for each word
order-from = 0

# Accent of the input phonemes (default: the dialect's own accent)
# accent = "en-US-x-cmu"

# Input dialect (default: detected from the file)
# dialect = "cmudict"

[output]
# Diagnostic format for `validate`: "text" or "json"
default-format = "text"

# Pretty print JSON diagnostics
pretty-json = true

# Entry order for `convert`: "none", "by-word" or "by-word-bang"
sort = "none"
"#
    )
}
