//! Parsing, validation and conversion of pronunciation dictionaries
//!
//! This crate reads CMU-style pronunciation dictionaries in several textual
//! dialects, checks them line by line, and writes them back out in any
//! supported dialect. Phoneme transcriptions are decoded to canonical Arpabet
//! tokens, which can be re-encoded as another dialect's Arpabet spelling or
//! rendered as IPA.
//!
//! # Architecture
//!
//! The pipeline is a chain of pull-based iterators:
//! - **Grammar**: classifies raw lines and detects the flat dialect
//! - **Validator**: decodes phonemes and runs the configured checks,
//!   indexing words and entries in tries
//! - **Sorter**: optionally reorders accepted entries
//! - **Formatter**: renders entries in a target dialect, routing diagnostics
//!   to a separate writer
//!
//! # Example
//!
//! ```rust
//! use cmudict_core::{
//!     Dialect, Formatter, LineGrammar, PhonemeTable, SortMode, ValidationConfig,
//!     ValidationEngine,
//! };
//!
//! let table = PhonemeTable::builtin().unwrap();
//! let config = ValidationConfig::builder()
//!     .warnings(["all"])
//!     .build()
//!     .unwrap();
//!
//! let lines = ["RUN  R AH1 N", "ABANDON  AH0 B AE1 N D AH0 N"];
//! let engine =
//!     ValidationEngine::new(&table, &config, LineGrammar::for_path("dict"), lines).unwrap();
//!
//! let formatter = Formatter::new(&table, Dialect::Festlex, None);
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//! let summary = formatter
//!     .write(SortMode::ByWord.apply(engine), &mut out, &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(summary.entries, 2);
//! assert_eq!(summary.diagnostics, 1); // RUN sorts after ABANDON
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "(\"abandon\" nil (ah0 b ae1 n d ah0 n))\n(\"run\" nil (r ah1 n))\n"
//! );
//! ```

pub mod check;
pub mod config;
pub mod diagnostic;
pub mod dialect;
pub mod error;
pub mod format;
pub mod grammar;
pub mod phoneme;
pub mod sort;
pub mod trie;
pub mod validator;

pub use check::{Check, CheckSet};
pub use config::{ValidationConfig, ValidationConfigBuilder, ValidationSection};
pub use diagnostic::{Diagnostic, Entry, Event};
pub use dialect::{Context, Dialect, DialectDescriptor};
pub use error::{Error, Result, Severity};
pub use format::{Formatter, WriteSummary};
pub use grammar::{LineGrammar, ParsedLine, RawEntry};
pub use phoneme::{
    Accent, Phoneme, PhonemeRecord, PhonemeSet, PhonemeTable, PhonemeType, Pronunciation,
};
pub use sort::SortMode;
pub use trie::Trie;
pub use validator::ValidationEngine;
