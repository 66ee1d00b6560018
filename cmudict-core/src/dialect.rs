//! Dictionary dialect registry
//!
//! Each dialect is described by a static [`DialectDescriptor`]: how entries
//! and comments are laid out, how words are cased, which words are valid and
//! how context values are read.

use crate::error::{Error, Result};
use crate::phoneme::Accent;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Context values allowed by festlex lexicons
pub const FESTLEX_CONTEXTS: [&str; 8] = ["dt", "j", "n", "nil", "v", "v_p", "vl", "y"];

const UPPER_WORD: &str = r"^[^ a-zA-Z]?[A-Z0-9'.\-_]*$";
const LOWER_WORD: &str = r"^[^ a-zA-Z]?[a-z0-9'.\-_]*$";

/// A supported dictionary text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// CMU dictionary in the layout of the Weide releases: `##` comments
    CmudictWeide,
    /// CMU dictionary: upper-case words, two-space separator, `;;;` comments
    Cmudict,
    /// CMU dictionary, newer layout: lower-case words, one-space separator
    CmudictNew,
    /// Festival lexicon: Scheme literals
    Festlex,
}

/// Grammar used to read context values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextGrammar {
    /// Non-negative integers
    Ordinal,
    /// One of [`FESTLEX_CONTEXTS`]
    FestlexTag,
}

/// Word case applied when writing a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    /// Upper-case words
    Upper,
    /// Lower-case words
    Lower,
}

impl WordCase {
    /// Apply to a word
    pub fn apply(self, word: &str) -> String {
        match self {
            WordCase::Upper => word.to_uppercase(),
            WordCase::Lower => word.to_lowercase(),
        }
    }
}

/// Output layout of one dialect
///
/// Templates use `{word}`, `{context}`, `{phonemes}` and `{comment}`
/// placeholders.
#[derive(Debug)]
pub struct DialectDescriptor {
    /// Dialect name
    pub name: &'static str,
    /// Accent of the phoneme spelling
    pub accent: Accent,
    /// Comment line template
    pub comment: &'static str,
    /// Entry without context or comment
    pub entry: &'static str,
    /// Entry with a trailing comment
    pub entry_comment: &'static str,
    /// Entry with a context
    pub entry_context: &'static str,
    /// Entry with a context and a trailing comment
    pub entry_context_comment: &'static str,
    /// Separator between word and phonemes (flat dialects only)
    pub separator: Option<&'static str>,
    /// Word case applied when writing
    pub word_case: WordCase,
    /// Context value grammar
    pub context: ContextGrammar,
}

static CMUDICT_WEIDE: DialectDescriptor = DialectDescriptor {
    name: "cmudict-weide",
    accent: Accent::EnUsCmu,
    comment: "##{comment}",
    entry: "{word}  {phonemes}",
    entry_comment: "{word}  {phonemes} #{comment}",
    entry_context: "{word}({context})  {phonemes}",
    entry_context_comment: "{word}({context})  {phonemes} #{comment}",
    separator: Some("  "),
    word_case: WordCase::Upper,
    context: ContextGrammar::Ordinal,
};

static CMUDICT: DialectDescriptor = DialectDescriptor {
    name: "cmudict",
    accent: Accent::EnUsCmu,
    comment: ";;;{comment}",
    entry: "{word}  {phonemes}",
    entry_comment: "{word}  {phonemes} #{comment}",
    entry_context: "{word}({context})  {phonemes}",
    entry_context_comment: "{word}({context})  {phonemes} #{comment}",
    separator: Some("  "),
    word_case: WordCase::Upper,
    context: ContextGrammar::Ordinal,
};

static CMUDICT_NEW: DialectDescriptor = DialectDescriptor {
    name: "cmudict-new",
    accent: Accent::EnUsCmu,
    comment: ";;;{comment}",
    entry: "{word} {phonemes}",
    entry_comment: "{word} {phonemes} #{comment}",
    entry_context: "{word}({context}) {phonemes}",
    entry_context_comment: "{word}({context}) {phonemes} #{comment}",
    separator: Some(" "),
    word_case: WordCase::Lower,
    context: ContextGrammar::Ordinal,
};

static FESTLEX: DialectDescriptor = DialectDescriptor {
    name: "festlex",
    accent: Accent::EnUsFestvox,
    comment: ";;{comment}",
    entry: "(\"{word}\" nil ({phonemes}))",
    entry_comment: "(\"{word}\" nil ({phonemes})) ;{comment}",
    entry_context: "(\"{word}\" {context} ({phonemes}))",
    entry_context_comment: "(\"{word}\" {context} ({phonemes})) ;{comment}",
    separator: None,
    word_case: WordCase::Lower,
    context: ContextGrammar::FestlexTag,
};

/// A context value read from an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Context {
    /// Position of the pronunciation among the word's entries
    Ordinal(u32),
    /// Festlex grammatical tag
    Tag(String),
    /// A value the dialect's context grammar rejected
    Unparsed(String),
}

impl Context {
    /// Ordinal position, if the context is one
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            Context::Ordinal(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Ordinal(n) => write!(f, "{n}"),
            Context::Tag(tag) | Context::Unparsed(tag) => f.write_str(tag),
        }
    }
}

impl Dialect {
    /// Every dialect
    pub const ALL: [Dialect; 4] = [
        Dialect::CmudictWeide,
        Dialect::Cmudict,
        Dialect::CmudictNew,
        Dialect::Festlex,
    ];

    /// Static description of the dialect
    pub fn descriptor(self) -> &'static DialectDescriptor {
        match self {
            Dialect::CmudictWeide => &CMUDICT_WEIDE,
            Dialect::Cmudict => &CMUDICT,
            Dialect::CmudictNew => &CMUDICT_NEW,
            Dialect::Festlex => &FESTLEX,
        }
    }

    /// Dialect name
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Default accent
    pub fn accent(self) -> Accent {
        self.descriptor().accent
    }

    /// Whether the dialect uses Scheme-literal lines
    pub fn is_festlex(self) -> bool {
        matches!(self, Dialect::Festlex)
    }

    /// Compiled word validation pattern
    pub fn word_pattern(self) -> &'static Regex {
        static UPPER: OnceLock<Regex> = OnceLock::new();
        static LOWER: OnceLock<Regex> = OnceLock::new();

        match self.descriptor().word_case {
            WordCase::Upper => {
                UPPER.get_or_init(|| Regex::new(UPPER_WORD).expect("valid word pattern"))
            }
            WordCase::Lower => {
                LOWER.get_or_init(|| Regex::new(LOWER_WORD).expect("valid word pattern"))
            }
        }
    }

    /// Whether a word is valid in this dialect
    pub fn is_valid_word(self, word: &str) -> bool {
        self.word_pattern().is_match(word)
    }

    /// Apply the dialect's output word case
    pub fn transform_word(self, word: &str) -> String {
        self.descriptor().word_case.apply(word)
    }

    /// Read a context value with the dialect's context grammar
    ///
    /// Ordinals are unsigned; `-1` is an invalid value, not an out of
    /// order position.
    pub fn parse_context(self, value: &str) -> Result<Context> {
        match self.descriptor().context {
            ContextGrammar::Ordinal => value
                .parse::<u32>()
                .map(Context::Ordinal)
                .map_err(|_| self.invalid_context(value)),
            ContextGrammar::FestlexTag => {
                if FESTLEX_CONTEXTS.contains(&value) {
                    Ok(Context::Tag(value.to_string()))
                } else {
                    Err(self.invalid_context(value))
                }
            }
        }
    }

    fn invalid_context(self, value: &str) -> Error {
        Error::InvalidContext {
            dialect: self.name(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| Error::UnsupportedDialect(s.to_string()))
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}
