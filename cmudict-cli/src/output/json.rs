//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use cmudict_core::{Check, Diagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs diagnostics as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<DiagnosticRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DiagnosticRecord {
    /// File the diagnostic was found in
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// Check that raised it, `null` for parse errors
    pub check: Option<Check>,
    /// How the problem affects the run
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_diagnostic(&mut self, file: &str, diagnostic: &Diagnostic) -> Result<()> {
        self.records.push(DiagnosticRecord {
            file: file.to_string(),
            line: diagnostic.line,
            check: diagnostic.check,
            severity: diagnostic.severity(),
            message: diagnostic.message.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
