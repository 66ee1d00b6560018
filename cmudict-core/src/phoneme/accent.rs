//! Accent registry

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter case used to spell Arpabet phonemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capitalization {
    /// `AH0 B AE1`
    Upper,
    /// `ah0 b ae1`
    Lower,
}

impl Capitalization {
    /// Apply the convention to a spelling
    pub fn apply(self, text: &str) -> String {
        match self {
            Capitalization::Upper => text.to_uppercase(),
            Capitalization::Lower => text.to_lowercase(),
        }
    }

    /// Whether `c` is a letter in this case
    pub fn is_letter(self, c: char) -> bool {
        match self {
            Capitalization::Upper => c.is_ascii_uppercase(),
            Capitalization::Lower => c.is_ascii_lowercase(),
        }
    }
}

impl FromStr for Capitalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upper" => Ok(Capitalization::Upper),
            "lower" => Ok(Capitalization::Lower),
            other => Err(Error::UnsupportedCapitalization(other.to_string())),
        }
    }
}

/// Named pronunciation variant selecting phoneme spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Accent {
    /// British English, Arpabet
    EnGb,
    /// British English, IPA
    EnGbIpa,
    /// American English, Arpabet
    EnUs,
    /// American English, IPA
    EnUsIpa,
    /// British English, Cepstral voices
    EnGbCepstral,
    /// American English, Cepstral voices
    EnUsCepstral,
    /// American English, CMU dictionary
    EnUsCmu,
    /// American English, Festival/Festvox lexicons
    EnUsFestvox,
}

/// How an accent's phoneme set spells phonemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    /// Arpabet in the given case
    Arpabet(Capitalization),
    /// IPA from the named spelling column
    Ipa(&'static str),
}

impl Accent {
    /// Every supported accent
    pub const ALL: [Accent; 8] = [
        Accent::EnGb,
        Accent::EnGbIpa,
        Accent::EnUs,
        Accent::EnUsIpa,
        Accent::EnGbCepstral,
        Accent::EnUsCepstral,
        Accent::EnUsCmu,
        Accent::EnUsFestvox,
    ];

    /// Accent code, as used in phoneme tables
    pub fn code(self) -> &'static str {
        match self {
            Accent::EnGb => "en-GB",
            Accent::EnGbIpa => "en-GB-x-ipa",
            Accent::EnUs => "en-US",
            Accent::EnUsIpa => "en-US-x-ipa",
            Accent::EnGbCepstral => "en-GB-x-cepstral",
            Accent::EnUsCepstral => "en-US-x-cepstral",
            Accent::EnUsCmu => "en-US-x-cmu",
            Accent::EnUsFestvox => "en-US-x-festvox",
        }
    }

    /// Spelling convention of the accent's phoneme set
    pub fn spelling(self) -> Spelling {
        match self {
            Accent::EnGb | Accent::EnUs | Accent::EnUsCmu => {
                Spelling::Arpabet(Capitalization::Upper)
            }
            Accent::EnGbCepstral | Accent::EnUsCepstral | Accent::EnUsFestvox => {
                Spelling::Arpabet(Capitalization::Lower)
            }
            Accent::EnGbIpa => Spelling::Ipa("en-GB"),
            Accent::EnUsIpa => Spelling::Ipa("en-US"),
        }
    }

    /// Whether the accent renders IPA
    pub fn is_ipa(self) -> bool {
        matches!(self.spelling(), Spelling::Ipa(_))
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Accent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Accent::ALL
            .into_iter()
            .find(|accent| accent.code() == s)
            .ok_or_else(|| Error::UnsupportedAccent(s.to_string()))
    }
}

impl TryFrom<String> for Accent {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Accent> for String {
    fn from(accent: Accent) -> Self {
        accent.code().to_string()
    }
}
