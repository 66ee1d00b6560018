//! Diagnostic output formatting module

use anyhow::Result;
use cmudict_core::Diagnostic;

/// Trait for diagnostic formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single diagnostic for `file`
    fn format_diagnostic(&mut self, file: &str, diagnostic: &Diagnostic) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
