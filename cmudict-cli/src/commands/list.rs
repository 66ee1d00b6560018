//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use cmudict_core::{Accent, Check, CheckSet, Dialect, SortMode};
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List validation checks and their defaults
    Checks,

    /// List dictionary dialects
    Dialects,

    /// List phoneme accents
    Accents,

    /// List entry sort modes
    SortModes,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to `out`
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            ListCommands::Checks => {
                let defaults = CheckSet::default();
                writeln!(out, "Validation checks (* enabled by default):")?;
                for check in Check::ALL {
                    let marker = if defaults.contains(check) { '*' } else { ' ' };
                    writeln!(out, "  {marker} {:<26} {}", check.name(), check.description())?;
                }
            }
            ListCommands::Dialects => {
                writeln!(out, "Dictionary dialects:")?;
                for dialect in Dialect::ALL {
                    writeln!(out, "  {:<15} accent: {}", dialect.name(), dialect.accent())?;
                }
            }
            ListCommands::Accents => {
                writeln!(out, "Phoneme accents:")?;
                for accent in Accent::ALL {
                    let note = if accent.is_ipa() { " (output only)" } else { "" };
                    writeln!(out, "  {}{note}", accent.code())?;
                }
            }
            ListCommands::SortModes => {
                writeln!(out, "Sort modes:")?;
                for mode in SortMode::ALL {
                    writeln!(out, "  {mode}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(command: ListCommands) -> String {
        let mut out = Vec::new();
        command.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_checks() {
        let out = listing(ListCommands::Checks);
        assert_eq!(out.lines().count(), Check::ALL.len() + 1);
        assert!(out.contains("* context-ordering"));
        assert!(out.contains("  unsorted"));
    }

    #[test]
    fn test_list_dialects() {
        let out = listing(ListCommands::Dialects);
        assert!(out.contains("cmudict-weide"));
        assert!(out.contains("festlex"));
        assert!(out.contains("en-US-x-festvox"));
    }

    #[test]
    fn test_list_accents() {
        let out = listing(ListCommands::Accents);
        assert!(out.contains("en-GB-x-ipa (output only)"));
        assert!(out.contains("en-US-x-cmu\n"));
    }

    #[test]
    fn test_list_sort_modes() {
        let out = listing(ListCommands::SortModes);
        assert_eq!(out, "Sort modes:\n  none\n  by-word\n  by-word-bang\n");
    }
}
