//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cmudict_core::Diagnostic;
use std::io::{self, Write};

/// Plain text formatter - outputs `<file>:<line>: <message>` per diagnostic
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_diagnostic(&mut self, file: &str, diagnostic: &Diagnostic) -> Result<()> {
        writeln!(self.writer, "{file}:{diagnostic}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
