//! Stateful validation of a dictionary line stream
//!
//! [`ValidationEngine`] pulls raw lines, classifies them with a
//! [`LineGrammar`], decodes phonemes and runs the enabled checks. Diagnostics
//! for an entry are yielded before the entry itself. State is kept for the
//! whole run: the previous word, every entry fingerprint seen so far, and
//! per-word context and pronunciation bookkeeping. Both indexes are tries.

use crate::check::{Check, CheckSet};
use crate::config::ValidationConfig;
use crate::diagnostic::{Diagnostic, Entry, Event};
use crate::dialect::Context;
use crate::error::Result;
use crate::grammar::{LineGrammar, ParsedLine, RawEntry};
use crate::phoneme::{
    pronunciation_string, ArpabetPhonemeSet, Decoded, Phoneme, PhonemeSet, PhonemeTable,
    Pronunciation,
};
use crate::trie::Trie;
use std::collections::VecDeque;

/// Per-word bookkeeping, keyed by the upper-cased word
#[derive(Debug, Clone)]
struct WordState {
    /// Next expected context position
    expected: u32,
    /// Context-less entries seen so far
    bare: u32,
    /// Pronunciations seen so far
    pronunciations: Vec<String>,
}

/// Single-pass validator over dictionary lines
///
/// The engine is an [`Iterator`] of [`Event`]s. Problems in the data become
/// [`Event::Diagnostic`]s and never stop the stream.
#[derive(Debug)]
pub struct ValidationEngine<I> {
    lines: I,
    line_number: usize,
    grammar: LineGrammar,
    phonemes: ArpabetPhonemeSet,
    checks: CheckSet,
    order_from: u32,
    previous_word: Option<String>,
    seen_lines: Trie<char, ()>,
    words: Trie<char, WordState>,
    pending: VecDeque<Event>,
}

impl<I> ValidationEngine<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create an engine reading `lines` with `grammar`
    ///
    /// A dialect fixed in `config` replaces the grammar. Fails when the
    /// configured accent has no parseable phoneme set.
    pub fn new(
        table: &PhonemeTable,
        config: &ValidationConfig,
        grammar: LineGrammar,
        lines: impl IntoIterator<IntoIter = I>,
    ) -> Result<Self> {
        config.validate()?;

        let grammar = match config.dialect() {
            Some(dialect) => LineGrammar::for_dialect(dialect),
            None => grammar,
        };
        let accent = config.accent().unwrap_or_else(|| grammar.accent());
        let phonemes = PhonemeSet::load(table, accent).into_parser()?;
        log::debug!(
            "validating with {} phonemes, checks {:?}",
            accent,
            config.checks()
        );

        Ok(Self {
            lines: lines.into_iter(),
            line_number: 0,
            grammar,
            phonemes,
            checks: config.checks(),
            order_from: config.order_from(),
            previous_word: None,
            seen_lines: Trie::new(),
            words: Trie::new(),
            pending: VecDeque::new(),
        })
    }

    /// Number of lines read so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Grammar in use, with its detected dialect
    pub fn grammar(&self) -> &LineGrammar {
        &self.grammar
    }

    /// Next expected context position for `word`, once the word was seen
    pub fn expected_position(&self, word: &str) -> Option<u32> {
        self.words
            .get(word.to_uppercase().chars())
            .map(|state| state.expected)
    }

    fn report(&mut self, check: Check, message: impl FnOnce() -> String) {
        if self.checks.contains(check) {
            self.pending.push_back(Event::Diagnostic(Diagnostic::check(
                self.line_number,
                check,
                message(),
            )));
        }
    }

    fn validate(&mut self, raw: RawEntry) {
        let RawEntry {
            dialect,
            line,
            word,
            context,
            phonemes,
            comment,
            issues,
        } = raw;

        for issue in issues {
            self.report(issue.check(), || issue.message(&line));
        }

        if !dialect.is_valid_word(&word) {
            self.report(Check::WordCasing, || {
                format!("Incorrect word casing in entry: \"{line}\"")
            });
        }

        if let Some(previous) = self.previous_word.take() {
            if word < previous {
                self.report(Check::Unsorted, || {
                    format!("Incorrect word ordering (\"{word}\" < \"{previous}\") for entry: \"{line}\"")
                });
            }
        }

        let context = context.map(|value| match dialect.parse_context(&value) {
            Ok(context) => context,
            Err(err) => {
                log::trace!("line {}: {}", self.line_number, err);
                self.report(Check::ContextValues, || {
                    format!("Invalid context format \"{value}\" in entry: \"{line}\"")
                });
                Context::Unparsed(value)
            }
        });

        let mut decoded = Pronunciation::new();
        let mut issues = Vec::new();
        for item in self.phonemes.parse(&phonemes, self.checks) {
            match item {
                Decoded::Phoneme(phoneme) => decoded.push(phoneme),
                Decoded::Issue(issue) => issues.push(issue),
            }
        }
        for issue in issues {
            self.report(issue.kind.check(), || format!("{issue} in entry: \"{line}\""));
        }

        self.record(&word, context.as_ref(), &decoded, &line);
        self.previous_word = Some(word.clone());

        self.pending.push_back(Event::Entry(Entry {
            word,
            context,
            phonemes: decoded,
            comment,
        }));
    }

    /// Duplicate and context ordering bookkeeping for one entry
    fn record(&mut self, word: &str, context: Option<&Context>, phonemes: &[Phoneme], line: &str) {
        let pronunciation = pronunciation_string(phonemes);
        let fingerprint = match context {
            Some(context) => format!("{word}({context}) {pronunciation}"),
            None => format!("{word}() {pronunciation}"),
        };

        if self.seen_lines.contains(fingerprint.chars()) {
            self.report(Check::DuplicateEntries, || {
                format!("Duplicate entry: \"{line}\"")
            });
            return;
        }

        let key = word.to_uppercase();
        let position = match context {
            Some(Context::Ordinal(position)) => Some(*position),
            None => Some(
                self.order_from.saturating_add(
                    self.words
                        .get(key.chars())
                        .map_or(0, |state: &WordState| state.bare),
                ),
            ),
            Some(Context::Tag(_)) | Some(Context::Unparsed(_)) => None,
        };

        if let Some(position) = position {
            if !self.words.contains(key.chars()) {
                self.words.insert(
                    key.chars(),
                    WordState {
                        expected: self.order_from,
                        bare: 0,
                        pronunciations: Vec::new(),
                    },
                );
            }

            let (expected, repeated) = match self.words.get_mut(key.chars()) {
                Some(state) => {
                    let expected = state.expected;
                    state.expected = state.expected.saturating_add(1);
                    if context.is_none() {
                        state.bare = state.bare.saturating_add(1);
                    }
                    let repeated = state.pronunciations.contains(&pronunciation);
                    if !repeated {
                        state.pronunciations.push(pronunciation);
                    }
                    (expected, repeated)
                }
                None => (position, false),
            };

            if position != expected {
                self.report(Check::ContextOrdering, || {
                    format!("Incorrect context ordering \"{position}\" (expected: \"{expected}\") in entry: \"{line}\"")
                });
            }
            if repeated {
                self.report(Check::DuplicatePronunciations, || {
                    format!("Existing pronunciation in entry: \"{line}\"")
                });
            }
        }

        self.seen_lines.insert(fingerprint.chars(), ());
    }
}

impl<I> Iterator for ValidationEngine<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            let line = self.lines.next()?;
            self.line_number += 1;

            match self.grammar.classify(line.as_ref()) {
                ParsedLine::Blank => return Some(Event::Blank),
                ParsedLine::Comment(text) => return Some(Event::Comment(text)),
                ParsedLine::Error(message) => {
                    return Some(Event::Diagnostic(Diagnostic::parse_error(
                        self.line_number,
                        message,
                    )))
                }
                ParsedLine::Entry(raw) => self.validate(raw),
            }
        }
    }
}
