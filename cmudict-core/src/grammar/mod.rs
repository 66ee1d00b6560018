//! Line grammars
//!
//! A grammar classifies each raw dictionary line as blank, a comment, a
//! structured entry or a parse error. Two families exist: the flat CMU
//! layout and festlex Scheme literals. The flat family also detects which
//! flat dialect a file uses.

mod festlex;
mod flat;

pub use festlex::FestlexGrammar;
pub use flat::FlatGrammar;

use crate::check::Check;
use crate::dialect::Dialect;
use crate::phoneme::Accent;
use std::path::Path;

/// One classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty line
    Blank,
    /// Line comment, leader removed
    Comment(String),
    /// Structured entry, not yet validated
    Entry(RawEntry),
    /// Line matching no rule of the grammar
    Error(String),
}

/// A structured entry as written in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Dialect the entry was read as
    pub dialect: Dialect,
    /// The full line, terminator removed
    pub line: String,
    /// Word as written
    pub word: String,
    /// Raw context text; `None` when absent or `nil`
    pub context: Option<String>,
    /// Raw phoneme text
    pub phonemes: String,
    /// Trailing comment, marker removed
    pub comment: Option<String>,
    /// Layout problems found while matching the line
    pub issues: Vec<LineIssue>,
}

/// Layout problem found by a line grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineIssue {
    /// Separator between word and phonemes differs from the dialect's
    EntrySpacing {
        /// Number of spaces the dialect expects
        expected: usize,
    },
    /// Phoneme text ends with whitespace
    TrailingWhitespace,
}

impl LineIssue {
    /// Check that reports this issue
    pub fn check(self) -> Check {
        match self {
            LineIssue::EntrySpacing { .. } => Check::EntrySpacing,
            LineIssue::TrailingWhitespace => Check::TrailingWhitespace,
        }
    }

    /// Diagnostic message for the issue on `line`
    pub fn message(self, line: &str) -> String {
        match self {
            LineIssue::EntrySpacing { expected } => format!(
                "Entry needs {expected} spaces between word and phoneme: \"{line}\""
            ),
            LineIssue::TrailingWhitespace => format!("Trailing whitespace in entry: \"{line}\""),
        }
    }
}

/// Line grammar for one input file
#[derive(Debug, Clone)]
pub enum LineGrammar {
    /// Flat CMU layout, dialect detected from the first entry unless pinned
    Flat(FlatGrammar),
    /// Festlex Scheme literals
    Festlex(FestlexGrammar),
}

impl LineGrammar {
    /// Grammar chosen from a file name: `.scm` files are festlex
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let is_scheme = path
            .as_ref()
            .extension()
            .is_some_and(|extension| extension == "scm");
        if is_scheme {
            LineGrammar::Festlex(FestlexGrammar::new())
        } else {
            LineGrammar::Flat(FlatGrammar::new())
        }
    }

    /// Grammar fixed to a dialect, with no detection
    pub fn for_dialect(dialect: Dialect) -> Self {
        if dialect.is_festlex() {
            LineGrammar::Festlex(FestlexGrammar::new())
        } else {
            LineGrammar::Flat(FlatGrammar::pinned(dialect))
        }
    }

    /// Active dialect, once known
    pub fn dialect(&self) -> Option<Dialect> {
        match self {
            LineGrammar::Flat(grammar) => grammar.dialect(),
            LineGrammar::Festlex(_) => Some(Dialect::Festlex),
        }
    }

    /// Accent of the phoneme spelling read by this grammar
    ///
    /// All flat dialects share one accent, so this is known before
    /// detection.
    pub fn accent(&self) -> Accent {
        match self {
            LineGrammar::Flat(grammar) => grammar.dialect().unwrap_or(Dialect::Cmudict).accent(),
            LineGrammar::Festlex(_) => Dialect::Festlex.accent(),
        }
    }

    /// Classify one line; `\n` and `\r\n` terminators are ignored
    pub fn classify(&mut self, line: &str) -> ParsedLine {
        let line = strip_terminator(line);
        if line.is_empty() {
            return ParsedLine::Blank;
        }
        match self {
            LineGrammar::Flat(grammar) => grammar.classify(line),
            LineGrammar::Festlex(grammar) => grammar.classify(line),
        }
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse error message for a line no rule matched
pub(crate) fn unsupported(line: &str) -> ParsedLine {
    ParsedLine::Error(format!("Unsupported entry: \"{line}\""))
}
