//! Configurable validation checks

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single validation check that can be enabled or disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// Context values parse with the dialect's context grammar
    ContextValues,
    /// Context values for a word are sequential
    ContextOrdering,
    /// No repeated (word, context, pronunciation) entries
    DuplicateEntries,
    /// No repeated pronunciation for a word
    DuplicatePronunciations,
    /// Spacing between word and pronunciation matches the dialect
    EntrySpacing,
    /// Phonemes are known to the phoneme set
    InvalidPhonemes,
    /// Vowels carry a stress marker
    MissingStress,
    /// Exactly one space between phonemes
    PhonemeSpacing,
    /// No whitespace after the pronunciation
    TrailingWhitespace,
    /// Words appear in sorted order
    Unsorted,
    /// Word casing matches the dialect
    WordCasing,
}

impl Check {
    /// Every check, in name order
    pub const ALL: [Check; 11] = [
        Check::ContextValues,
        Check::ContextOrdering,
        Check::DuplicateEntries,
        Check::DuplicatePronunciations,
        Check::EntrySpacing,
        Check::InvalidPhonemes,
        Check::MissingStress,
        Check::PhonemeSpacing,
        Check::TrailingWhitespace,
        Check::Unsorted,
        Check::WordCasing,
    ];

    /// Checks enabled when no warnings are configured
    pub const DEFAULT: [Check; 6] = [
        Check::ContextValues,
        Check::ContextOrdering,
        Check::EntrySpacing,
        Check::InvalidPhonemes,
        Check::PhonemeSpacing,
        Check::WordCasing,
    ];

    /// Configuration name of the check
    pub fn name(self) -> &'static str {
        match self {
            Check::ContextValues => "context-values",
            Check::ContextOrdering => "context-ordering",
            Check::DuplicateEntries => "duplicate-entries",
            Check::DuplicatePronunciations => "duplicate-pronunciations",
            Check::EntrySpacing => "entry-spacing",
            Check::InvalidPhonemes => "invalid-phonemes",
            Check::MissingStress => "missing-stress",
            Check::PhonemeSpacing => "phoneme-spacing",
            Check::TrailingWhitespace => "trailing-whitespace",
            Check::Unsorted => "unsorted",
            Check::WordCasing => "word-casing",
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            Check::ContextValues => "check context values are numbers",
            Check::ContextOrdering => "check context values are ordered sequentially",
            Check::DuplicateEntries => "check for matching entries (word, context, pronunciation)",
            Check::DuplicatePronunciations => "check for duplicated pronunciations for an entry",
            Check::EntrySpacing => "check spacing between word and pronunciation",
            Check::InvalidPhonemes => "check for invalid phonemes",
            Check::MissingStress => "check for missing stress markers",
            Check::PhonemeSpacing => "check for a single space between phonemes",
            Check::TrailingWhitespace => "check for trailing whitespaces",
            Check::Unsorted => "check if a word is not sorted correctly",
            Check::WordCasing => "check for consistent word casing",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Check {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Check::ALL
            .into_iter()
            .find(|check| check.name() == s)
            .ok_or_else(|| Error::InvalidCheck(s.to_string()))
    }
}

/// The set of enabled checks
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckSet {
    bits: u16,
}

impl CheckSet {
    /// No checks enabled
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Every check enabled
    pub fn all() -> Self {
        Check::ALL.into_iter().collect()
    }

    /// Apply warning tokens, left to right, on top of the default checks
    ///
    /// Accepted tokens are `all`, `none`, a check name, or `no-` followed by
    /// a check name.
    pub fn from_warnings<I, S>(warnings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checks = Self::default();
        for warning in warnings {
            match warning.as_ref() {
                "all" => checks = Self::all(),
                "none" => checks = Self::none(),
                token => match token.strip_prefix("no-") {
                    Some(name) => checks.disable(name.parse().map_err(|_| {
                        Error::InvalidCheck(token.to_string())
                    })?),
                    None => checks.enable(token.parse()?),
                },
            }
        }
        Ok(checks)
    }

    /// Whether a check is enabled
    #[inline]
    pub fn contains(&self, check: Check) -> bool {
        self.bits & check.bit() != 0
    }

    /// Enable a check
    pub fn enable(&mut self, check: Check) {
        self.bits |= check.bit();
    }

    /// Disable a check
    pub fn disable(&mut self, check: Check) {
        self.bits &= !check.bit();
    }

    /// Enabled checks in name order
    pub fn iter(&self) -> impl Iterator<Item = Check> + '_ {
        Check::ALL.into_iter().filter(|check| self.contains(*check))
    }

    /// Whether no checks are enabled
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl Default for CheckSet {
    fn default() -> Self {
        Check::DEFAULT.into_iter().collect()
    }
}

impl FromIterator<Check> for CheckSet {
    fn from_iter<T: IntoIterator<Item = Check>>(iter: T) -> Self {
        let mut checks = Self::none();
        for check in iter {
            checks.enable(check);
        }
        checks
    }
}

impl fmt::Debug for CheckSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Check::name)).finish()
    }
}
