//! IPA rendering of canonical phonemes
//!
//! Output only: IPA transcriptions are never parsed.

use super::{Phoneme, PhonemeRecord, Stress};
use std::collections::HashMap;

/// Primary stress mark
const PRIMARY_STRESS: char = 'ˈ';
/// Secondary stress mark
const SECONDARY_STRESS: char = 'ˌ';

/// Canonical token -> IPA spelling for one accent column
#[derive(Debug, Clone)]
pub struct IpaPhonemeSet {
    /// Spelling column read from the phoneme table
    column: String,
    to_ipa: HashMap<String, String>,
}

impl IpaPhonemeSet {
    /// Create an empty set reading spellings from `column`
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            to_ipa: HashMap::new(),
        }
    }

    /// Spelling column this set reads
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Register a phoneme; records without a spelling in the column are skipped
    ///
    /// Unstressed and stress-0 forms render identically.
    pub fn add(&mut self, record: &PhonemeRecord) {
        let Some(ipa) = record.spelling(&self.column) else {
            return;
        };
        let symbol = record.canonical().to_uppercase();

        self.to_ipa.insert(symbol.clone(), ipa.to_string());
        if record.kind.is_stressed() {
            for stress in Stress::ALL {
                let rendered = match stress {
                    Stress::Unstressed => ipa.to_string(),
                    Stress::Primary => format!("{PRIMARY_STRESS}{ipa}"),
                    Stress::Secondary => format!("{SECONDARY_STRESS}{ipa}"),
                };
                self.to_ipa
                    .insert(format!("{symbol}{}", stress.digit()), rendered);
            }
        }
    }

    /// Number of registered tokens
    pub fn len(&self) -> usize {
        self.to_ipa.len()
    }

    /// Whether no phonemes are registered
    pub fn is_empty(&self) -> bool {
        self.to_ipa.is_empty()
    }

    /// Render canonical tokens as one IPA string
    ///
    /// Tokens without an IPA spelling are written unchanged.
    pub fn format(&self, phonemes: &[Phoneme]) -> String {
        phonemes
            .iter()
            .map(|p| {
                self.to_ipa
                    .get(p.as_str())
                    .map(String::as_str)
                    .unwrap_or(p.as_str())
            })
            .collect()
    }
}
