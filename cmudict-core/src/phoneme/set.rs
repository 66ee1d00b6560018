//! Phoneme set selection

use super::{
    Accent, ArpabetPhonemeSet, Capitalization, Decoded, IpaPhonemeSet, Phoneme, PhonemeRecord,
    PhonemeTable, Spelling,
};
use crate::check::CheckSet;
use crate::error::{Error, Result};

/// A phoneme codec for one accent
#[derive(Debug, Clone)]
pub enum PhonemeSet {
    /// Arpabet spelling, parse and format
    Arpabet(ArpabetPhonemeSet),
    /// IPA spelling, format only
    Ipa(IpaPhonemeSet),
}

impl PhonemeSet {
    /// Empty Arpabet set using a capitalization name (`upper` or `lower`)
    pub fn arpabet(capitalization: &str) -> Result<Self> {
        let capitalization: Capitalization = capitalization.parse()?;
        Ok(PhonemeSet::Arpabet(ArpabetPhonemeSet::new(capitalization)))
    }

    /// Build the phoneme set for `accent` from a phoneme table
    ///
    /// Arpabet sets take the records that list the accent; IPA sets take every
    /// record with a spelling in the accent's column.
    pub fn load(table: &PhonemeTable, accent: Accent) -> Self {
        let mut set = match accent.spelling() {
            Spelling::Arpabet(capitalization) => {
                PhonemeSet::Arpabet(ArpabetPhonemeSet::new(capitalization))
            }
            Spelling::Ipa(column) => PhonemeSet::Ipa(IpaPhonemeSet::new(column)),
        };

        for record in table.records() {
            if accent.is_ipa() || record.supports(accent.code()) {
                set.add(record);
            }
        }

        log::debug!("loaded {} phoneme set", accent);
        set
    }

    /// Register a phoneme record
    pub fn add(&mut self, record: &PhonemeRecord) {
        match self {
            PhonemeSet::Arpabet(set) => set.add(record),
            PhonemeSet::Ipa(set) => set.add(record),
        }
    }

    /// Decode a transcription into tokens and diagnostics
    ///
    /// Fails with [`Error::NotSupported`] for IPA sets.
    pub fn parse(&self, text: &str, checks: CheckSet) -> Result<Vec<Decoded>> {
        match self {
            PhonemeSet::Arpabet(set) => Ok(set.parse(text, checks).collect()),
            PhonemeSet::Ipa(_) => Err(Error::NotSupported(
                "parse is not currently supported for IPA phonemes".to_string(),
            )),
        }
    }

    /// Render canonical tokens
    pub fn format(&self, phonemes: &[Phoneme]) -> String {
        match self {
            PhonemeSet::Arpabet(set) => set.format(phonemes),
            PhonemeSet::Ipa(set) => set.format(phonemes),
        }
    }

    /// The Arpabet codec, when this set can parse
    pub fn into_parser(self) -> Result<ArpabetPhonemeSet> {
        match self {
            PhonemeSet::Arpabet(set) => Ok(set),
            PhonemeSet::Ipa(set) => Err(Error::NotSupported(format!(
                "parse is not currently supported for IPA phonemes ({})",
                set.column()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeType;

    fn table() -> PhonemeTable {
        PhonemeTable::builtin().unwrap()
    }

    #[test]
    fn test_arpabet_capitalization_names() {
        assert!(matches!(PhonemeSet::arpabet("upper"), Ok(PhonemeSet::Arpabet(_))));
        let err = PhonemeSet::arpabet("mixed").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported capitalization value: mixed");
    }

    #[test]
    fn test_load_filters_by_accent() {
        let cmu = PhonemeSet::load(&table(), Accent::EnUsCmu);
        let decoded = cmu.parse("OH1", CheckSet::all()).unwrap();
        assert!(decoded.iter().any(|d| matches!(d, Decoded::Issue(_))));

        let british = PhonemeSet::load(&table(), Accent::EnGb);
        let decoded = british.parse("OH1", CheckSet::all()).unwrap();
        assert_eq!(decoded, vec![Decoded::Phoneme(Phoneme::from("OH1"))]);
    }

    #[test]
    fn test_festvox_is_lower_case() {
        let festvox = PhonemeSet::load(&table(), Accent::EnUsFestvox);
        let tokens: Vec<Phoneme> = ["R", "AH1", "N"].into_iter().map(Phoneme::from).collect();
        assert_eq!(festvox.format(&tokens), "r ah1 n");
    }

    #[test]
    fn test_ipa_format() {
        let ipa = PhonemeSet::load(&table(), Accent::EnUsIpa);
        let tokens: Vec<Phoneme> = ["R", "AH1", "N"].into_iter().map(Phoneme::from).collect();
        assert_eq!(ipa.format(&tokens), "ɹˈʌn");
    }

    #[test]
    fn test_ipa_parse_is_not_supported() {
        let ipa = PhonemeSet::load(&table(), Accent::EnGbIpa);
        let err = ipa.parse("ɹʌn", CheckSet::default()).unwrap_err();
        assert!(matches!(err, Error::NotSupported(_)));
        assert!(PhonemeSet::load(&table(), Accent::EnGbIpa).into_parser().is_err());
    }

    #[test]
    fn test_add_record() {
        let mut set = PhonemeSet::arpabet("lower").unwrap();
        set.add(&PhonemeRecord::new("K", PhonemeType::Consonant));
        assert_eq!(
            set.parse("k", CheckSet::all()).unwrap(),
            vec![Decoded::Phoneme(Phoneme::from("K"))]
        );
    }
}
