//! Validation output: entries, diagnostics and the event stream

use crate::check::Check;
use crate::dialect::Context;
use crate::error::Severity;
use crate::phoneme::{pronunciation_string, Phoneme, Pronunciation};
use serde::Serialize;
use std::fmt;

/// A problem found in the input data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based input line number
    pub line: usize,
    /// Check that produced the diagnostic; `None` for parse errors
    pub check: Option<Check>,
    /// Human readable message
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic produced by a check
    pub fn check(line: usize, check: Check, message: impl Into<String>) -> Self {
        Self {
            line,
            check: Some(check),
            message: message.into(),
        }
    }

    /// Diagnostic for a line that matched no grammar rule
    pub fn parse_error(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            check: None,
            message: message.into(),
        }
    }

    /// Whether the line was excluded from validation
    pub fn is_parse_error(&self) -> bool {
        self.check.is_none()
    }

    /// Data problems never stop a run
    pub fn severity(&self) -> Severity {
        Severity::Recoverable
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

/// A validated dictionary entry
///
/// The word keeps its input casing; dialect casing is applied when the entry
/// is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Word as written
    pub word: String,
    /// Context, if the entry had one
    pub context: Option<Context>,
    /// Canonical phoneme tokens
    pub phonemes: Pronunciation,
    /// Trailing comment
    pub comment: Option<String>,
}

impl Entry {
    /// Create an entry without context or comment
    pub fn new(word: impl Into<String>, phonemes: impl IntoIterator<Item = Phoneme>) -> Self {
        Self {
            word: word.into(),
            context: None,
            phonemes: phonemes.into_iter().collect(),
            comment: None,
        }
    }

    /// Set the context
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Canonical tokens joined by single spaces
    pub fn pronunciation(&self) -> String {
        pronunciation_string(&self.phonemes)
    }
}

/// One item of a validation stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Event {
    /// Blank input line
    Blank,
    /// Comment line, leader removed
    Comment(String),
    /// Accepted entry
    Entry(Entry),
    /// Reported problem
    Diagnostic(Diagnostic),
}

impl Event {
    /// The entry, if this event carries one
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Event::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// The diagnostic, if this event carries one
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Event::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
