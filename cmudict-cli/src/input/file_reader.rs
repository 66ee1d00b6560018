//! Dictionary file reading

use anyhow::{Context, Result};
use cmudict_core::LineGrammar;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A dictionary opened for line-by-line reading
#[derive(Debug)]
pub struct DictionaryFile {
    path: PathBuf,
    reader: BufReader<File>,
    error: Option<io::Error>,
}

impl DictionaryFile {
    /// Open a dictionary for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            error: None,
        })
    }

    /// Path the dictionary was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name used when reporting diagnostics
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Stream the remaining lines, without terminators
    ///
    /// The stream ends at the first read error, which [`finish`] reports.
    ///
    /// [`finish`]: DictionaryFile::finish
    pub fn lines(&mut self) -> DictionaryLines<'_> {
        DictionaryLines {
            lines: (&mut self.reader).lines(),
            error: &mut self.error,
        }
    }

    /// Grammar chosen by the file extension
    pub fn grammar(&self) -> LineGrammar {
        LineGrammar::for_path(&self.path)
    }

    /// Report a read error that cut the line stream short
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err)
                .with_context(|| format!("Failed to read file: {}", self.path.display())),
            None => Ok(()),
        }
    }
}

/// Lines of a [`DictionaryFile`]
#[derive(Debug)]
pub struct DictionaryLines<'a> {
    lines: io::Lines<&'a mut BufReader<File>>,
    error: &'a mut Option<io::Error>,
}

impl Iterator for DictionaryLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                *self.error = Some(err);
                None
            }
        }
    }
}
