//! Phonemes, phoneme tables and phoneme set codecs
//!
//! Every dictionary dialect spells phonemes its own way. Transcriptions are
//! decoded into canonical Arpabet [`Phoneme`] tokens, which act as the pivot
//! for all conversions, and encoded back through a [`PhonemeSet`].

pub mod accent;
pub mod arpabet;
pub mod ipa;
pub mod set;
pub mod table;

pub use accent::{Accent, Capitalization, Spelling};
pub use arpabet::{ArpabetPhonemeSet, Decoded, PhonemeIssue, PhonemeIssueKind};
pub use ipa::IpaPhonemeSet;
pub use set::PhonemeSet;
pub use table::{PhonemeRecord, PhonemeTable, PhonemeType};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Stress marker carried by vowel and schwa phonemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stress {
    /// `0`
    Unstressed,
    /// `1`
    Primary,
    /// `2`
    Secondary,
}

impl Stress {
    /// All stress markers in digit order
    pub const ALL: [Stress; 3] = [Stress::Unstressed, Stress::Primary, Stress::Secondary];

    /// Stress digit suffix
    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// Parse a stress digit
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }
}

/// A canonical phoneme token: an Arpabet symbol with an optional stress digit
///
/// Tokens decoded from unrecognized input hold the upper-cased input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phoneme(String);

impl Phoneme {
    /// Create a token from its text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stress marker, if the token ends with a stress digit
    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_digit)
    }

    /// Symbol without the stress digit
    pub fn symbol(&self) -> &str {
        match self.stress() {
            Some(_) => &self.0[..self.0.len() - 1],
            None => &self.0,
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phoneme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phoneme {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl PartialEq<str> for Phoneme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Phoneme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Decoded pronunciation of one entry
///
/// Most pronunciations are short, so they are stored inline.
pub type Pronunciation = SmallVec<[Phoneme; 8]>;

/// Render a pronunciation as space separated canonical tokens
pub fn pronunciation_string(phonemes: &[Phoneme]) -> String {
    let mut text = String::new();
    for (i, phoneme) in phonemes.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(phoneme.as_str());
    }
    text
}
