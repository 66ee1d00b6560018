//! Phoneme metadata table
//!
//! The table is loaded once, from CSV, and then shared immutably by every
//! phoneme set built from it.
//!
//! The first row names the columns: `Arpabet`, `Type`, `Normalized`,
//! `Accents`, followed by one spelling column per accent. Rows whose first
//! cell is empty are comments. Empty cells mean "not applicable".

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Built-in table shipped with the crate
const BUILTIN_TABLE: &str = include_str!("../../data/phones.csv");

/// Phonetic class of a phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeType {
    /// Never carries a stress marker
    Consonant,
    /// Carries a stress marker
    Vowel,
    /// Reduced vowel, carries a stress marker
    Schwa,
}

impl PhonemeType {
    /// Whether phonemes of this type take a stress digit
    pub fn is_stressed(self) -> bool {
        matches!(self, PhonemeType::Vowel | PhonemeType::Schwa)
    }

    /// Name used in the table
    pub fn name(self) -> &'static str {
        match self {
            PhonemeType::Consonant => "consonant",
            PhonemeType::Vowel => "vowel",
            PhonemeType::Schwa => "schwa",
        }
    }
}

impl fmt::Display for PhonemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhonemeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "consonant" => Ok(PhonemeType::Consonant),
            "vowel" => Ok(PhonemeType::Vowel),
            "schwa" => Ok(PhonemeType::Schwa),
            other => Err(Error::PhonemeTable(format!("unknown phoneme type: {other}"))),
        }
    }
}

/// One row of the phoneme table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeRecord {
    /// Arpabet symbol
    pub arpabet: String,
    /// Phonetic class
    pub kind: PhonemeType,
    /// Canonical symbol this phoneme decodes to, when it differs
    pub normalized: Option<String>,
    /// Accents that use this phoneme
    pub accents: Vec<String>,
    /// Spelling per accent column
    pub spellings: HashMap<String, String>,
}

impl PhonemeRecord {
    /// Create a record with no accents or spellings
    pub fn new(arpabet: impl Into<String>, kind: PhonemeType) -> Self {
        Self {
            arpabet: arpabet.into(),
            kind,
            normalized: None,
            accents: Vec::new(),
            spellings: HashMap::new(),
        }
    }

    /// Set the normalized symbol
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    /// Add a supported accent
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accents.push(accent.into());
        self
    }

    /// Add a spelling for an accent column
    pub fn with_spelling(mut self, accent: impl Into<String>, spelling: impl Into<String>) -> Self {
        self.spellings.insert(accent.into(), spelling.into());
        self
    }

    /// Whether the accent uses this phoneme
    pub fn supports(&self, accent: &str) -> bool {
        self.accents.iter().any(|a| a == accent)
    }

    /// Spelling in an accent column
    pub fn spelling(&self, accent: &str) -> Option<&str> {
        self.spellings.get(accent).map(String::as_str)
    }

    /// Canonical symbol: the normalized spelling, or the Arpabet symbol
    pub fn canonical(&self) -> &str {
        self.normalized.as_deref().unwrap_or(&self.arpabet)
    }
}

/// Immutable collection of phoneme records
#[derive(Debug, Clone, Default)]
pub struct PhonemeTable {
    records: Vec<PhonemeRecord>,
}

impl PhonemeTable {
    /// Build a table from records
    pub fn new(records: Vec<PhonemeRecord>) -> Self {
        Self { records }
    }

    /// Parse the table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    /// Read a table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Read a table from CSV data
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::PhonemeTable(format!("missing column: {name}")))
        };
        let arpabet_col = column("Arpabet")?;
        let type_col = column("Type")?;
        let normalized_col = column("Normalized")?;
        let accents_col = column("Accents")?;
        let fixed = [arpabet_col, type_col, normalized_col, accents_col];

        let mut records = Vec::new();
        for row in csv.records() {
            let row = row?;
            let cell = |index: usize| row.get(index).filter(|value| !value.is_empty());

            // Comment only line
            if cell(0).is_none() {
                continue;
            }
            let arpabet = cell(arpabet_col)
                .ok_or_else(|| Error::PhonemeTable("missing Arpabet symbol".to_string()))?;

            let kind = cell(type_col)
                .ok_or_else(|| Error::PhonemeTable(format!("{arpabet}: missing phoneme type")))?
                .parse()?;

            let mut record = PhonemeRecord::new(arpabet, kind);
            record.normalized = cell(normalized_col).map(str::to_string);
            record.accents = cell(accents_col)
                .map(|accents| accents.split(';').map(str::to_string).collect())
                .unwrap_or_default();

            for (index, header) in headers.iter().enumerate() {
                if fixed.contains(&index) {
                    continue;
                }
                if let Some(spelling) = cell(index) {
                    record
                        .spellings
                        .insert(header.to_string(), spelling.to_string());
                }
            }

            records.push(record);
        }

        log::debug!("loaded phoneme table with {} records", records.len());
        Ok(Self { records })
    }

    /// All records in table order
    pub fn records(&self) -> &[PhonemeRecord] {
        &self.records
    }

    /// Find a record by Arpabet symbol
    pub fn get(&self, arpabet: &str) -> Option<&PhonemeRecord> {
        self.records.iter().find(|record| record.arpabet == arpabet)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
