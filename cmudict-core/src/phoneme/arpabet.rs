//! Arpabet phoneme sets
//!
//! Dictionaries spell Arpabet either upper case (`AH0 B AE1`) or lower case
//! (`ah0 b ae1`). The set maps those spellings to canonical tokens and back.

use super::{Capitalization, Phoneme, PhonemeRecord, Stress};
use crate::check::{Check, CheckSet};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Problem found while decoding a single phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeIssueKind {
    /// Whitespace other than a single space after the phoneme
    Spacing,
    /// Vowel or schwa without a stress digit
    MissingStress,
    /// Phoneme not in the set
    Invalid,
}

impl PhonemeIssueKind {
    /// Check that reports this issue
    pub fn check(self) -> Check {
        match self {
            PhonemeIssueKind::Spacing => Check::PhonemeSpacing,
            PhonemeIssueKind::MissingStress => Check::MissingStress,
            PhonemeIssueKind::Invalid => Check::InvalidPhonemes,
        }
    }
}

/// A phoneme-level diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeIssue {
    /// What went wrong
    pub kind: PhonemeIssueKind,
    /// The offending phoneme, as written
    pub phoneme: String,
}

impl fmt::Display for PhonemeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PhonemeIssueKind::Spacing => {
                write!(f, "Incorrect whitespace after phoneme \"{}\"", self.phoneme)
            }
            PhonemeIssueKind::MissingStress => {
                write!(f, "Vowel phoneme \"{}\" missing stress marker", self.phoneme)
            }
            PhonemeIssueKind::Invalid => write!(f, "Invalid phoneme \"{}\"", self.phoneme),
        }
    }
}

/// Output of [`ArpabetPhonemeSet::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A decoded canonical token
    Phoneme(Phoneme),
    /// A diagnostic for the token that follows
    Issue(PhonemeIssue),
}

/// Arpabet spelling of phonemes in one letter case
#[derive(Debug, Clone)]
pub struct ArpabetPhonemeSet {
    capitalization: Capitalization,
    /// Dialect spelling -> canonical token
    decode: HashMap<String, Phoneme>,
    /// Canonical token -> dialect spelling
    encode: HashMap<String, String>,
    /// Spellings of stress-bearing phonemes written without a stress digit
    missing_stress: HashSet<String>,
}

impl ArpabetPhonemeSet {
    /// Create an empty set
    pub fn new(capitalization: Capitalization) -> Self {
        Self {
            capitalization,
            decode: HashMap::new(),
            encode: HashMap::new(),
            missing_stress: HashSet::new(),
        }
    }

    /// Letter case of the dialect spelling
    pub fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    /// Register a phoneme
    ///
    /// Vowels and schwas register the bare symbol plus the three stressed
    /// forms. When several records decode to the same canonical symbol, the
    /// record spelled like the canonical symbol is used for encoding.
    pub fn add(&mut self, record: &PhonemeRecord) {
        let spelling = self.capitalization.apply(&record.arpabet);
        let canonical = record.canonical().to_uppercase();
        let preferred = canonical == record.arpabet.to_uppercase();

        self.register(spelling.clone(), canonical.clone(), preferred);

        if record.kind.is_stressed() {
            for stress in Stress::ALL {
                self.register(
                    format!("{spelling}{}", stress.digit()),
                    format!("{canonical}{}", stress.digit()),
                    preferred,
                );
            }
            self.missing_stress.insert(spelling);
        }
    }

    fn register(&mut self, spelling: String, canonical: String, preferred: bool) {
        if preferred {
            self.encode.insert(canonical.clone(), spelling.clone());
        } else {
            self.encode
                .entry(canonical.clone())
                .or_insert_with(|| spelling.clone());
        }
        self.decode.insert(spelling, Phoneme::new(canonical));
    }

    /// Number of registered spellings, stressed forms included
    pub fn len(&self) -> usize {
        self.decode.len()
    }

    /// Whether no phonemes are registered
    pub fn is_empty(&self) -> bool {
        self.decode.is_empty()
    }

    /// Decode a single dialect spelling
    pub fn decode(&self, spelling: &str) -> Option<&Phoneme> {
        self.decode.get(spelling)
    }

    /// Encode a single canonical token, falling back to the token itself
    pub fn encode(&self, phoneme: &Phoneme) -> String {
        match self.encode.get(phoneme.as_str()) {
            Some(spelling) => spelling.clone(),
            None => self.capitalization.apply(phoneme.as_str()),
        }
    }

    /// Decode a transcription, lazily yielding tokens and diagnostics
    ///
    /// Diagnostics are only produced for enabled checks and always precede
    /// the token they refer to. Unknown phonemes still produce a token, their
    /// upper-cased text, so every position of the transcription is kept.
    pub fn parse<'a>(&'a self, text: &'a str, checks: CheckSet) -> Parse<'a> {
        Parse {
            set: self,
            tokens: Tokens {
                rest: Some(text.trim()),
                capitalization: self.capitalization,
            },
            checks,
            pending: VecDeque::new(),
        }
    }

    /// Render canonical tokens, separated by single spaces
    pub fn format(&self, phonemes: &[Phoneme]) -> String {
        let mut text = String::new();
        for (i, phoneme) in phonemes.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(&self.encode(phoneme));
        }
        text
    }

    fn decode_token(&self, token: &str, checks: CheckSet, out: &mut VecDeque<Decoded>) {
        let mut token = token;
        if token.contains([' ', '\t']) {
            token = token.trim();
            if checks.contains(Check::PhonemeSpacing) {
                out.push_back(self.issue(PhonemeIssueKind::Spacing, token));
            }
        }

        if self.missing_stress.contains(token) && checks.contains(Check::MissingStress) {
            out.push_back(self.issue(PhonemeIssueKind::MissingStress, token));
        }

        match self.decode.get(token) {
            Some(phoneme) => out.push_back(Decoded::Phoneme(phoneme.clone())),
            None => {
                if checks.contains(Check::InvalidPhonemes) {
                    out.push_back(self.issue(PhonemeIssueKind::Invalid, token));
                }
                if !token.is_empty() {
                    out.push_back(Decoded::Phoneme(Phoneme::new(token.to_uppercase())));
                }
            }
        }
    }

    fn issue(&self, kind: PhonemeIssueKind, phoneme: &str) -> Decoded {
        Decoded::Issue(PhonemeIssue {
            kind,
            phoneme: phoneme.to_string(),
        })
    }
}

/// Splits a transcription into phoneme tokens
///
/// A token boundary is a single space directly followed by a letter of the
/// set's case. Any other whitespace stays inside the token, where it is
/// reported as a spacing problem.
#[derive(Debug, Clone)]
struct Tokens<'a> {
    rest: Option<&'a str>,
    capitalization: Capitalization,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let boundary = rest.char_indices().find_map(|(i, c)| {
            let next = rest[i + c.len_utf8()..].chars().next()?;
            (c == ' ' && self.capitalization.is_letter(next)).then_some(i)
        });
        match boundary {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Lazy decoder returned by [`ArpabetPhonemeSet::parse`]
#[derive(Debug, Clone)]
pub struct Parse<'a> {
    set: &'a ArpabetPhonemeSet,
    tokens: Tokens<'a>,
    checks: CheckSet,
    pending: VecDeque<Decoded>,
}

impl Iterator for Parse<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            let token = self.tokens.next()?;
            self.set.decode_token(token, self.checks, &mut self.pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeType;

    fn test_set(capitalization: Capitalization) -> ArpabetPhonemeSet {
        let mut set = ArpabetPhonemeSet::new(capitalization);
        for record in [
            PhonemeRecord::new("AH", PhonemeType::Vowel),
            PhonemeRecord::new("AE", PhonemeType::Vowel),
            PhonemeRecord::new("AX", PhonemeType::Schwa),
            PhonemeRecord::new("B", PhonemeType::Consonant),
            PhonemeRecord::new("N", PhonemeType::Consonant),
            PhonemeRecord::new("D", PhonemeType::Consonant),
            PhonemeRecord::new("NG", PhonemeType::Consonant),
        ] {
            set.add(&record);
        }
        set
    }

    fn phonemes(items: &[Decoded]) -> Vec<String> {
        items
            .iter()
            .filter_map(|item| match item {
                Decoded::Phoneme(p) => Some(p.to_string()),
                Decoded::Issue(_) => None,
            })
            .collect()
    }

    fn issues(items: &[Decoded]) -> Vec<PhonemeIssue> {
        items
            .iter()
            .filter_map(|item| match item {
                Decoded::Issue(issue) => Some(issue.clone()),
                Decoded::Phoneme(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_upper() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("AH0 B AE1 N D AH0 N", CheckSet::all()).collect();
        assert_eq!(phonemes(&items), ["AH0", "B", "AE1", "N", "D", "AH0", "N"]);
        assert!(issues(&items).is_empty());
    }

    #[test]
    fn test_parse_lower_decodes_to_upper() {
        let set = test_set(Capitalization::Lower);
        let items: Vec<_> = set.parse("ah0 b ae1 n", CheckSet::all()).collect();
        assert_eq!(phonemes(&items), ["AH0", "B", "AE1", "N"]);
        assert_eq!(set.format(&[Phoneme::from("AH0"), Phoneme::from("NG")]), "ah0 ng");
    }

    #[test]
    fn test_stress_survives_round_trip() {
        let set = test_set(Capitalization::Upper);
        for text in ["AH0", "AH1", "AH2", "AX0", "AX1", "AX2", "AH"] {
            let decoded: Vec<Phoneme> = set
                .parse(text, CheckSet::none())
                .filter_map(|item| match item {
                    Decoded::Phoneme(p) => Some(p),
                    Decoded::Issue(_) => None,
                })
                .collect();
            assert_eq!(set.format(&decoded), text);
        }
    }

    #[test]
    fn test_consonant_rejects_stress() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("B1", CheckSet::all()).collect();
        assert_eq!(
            issues(&items),
            vec![PhonemeIssue {
                kind: PhonemeIssueKind::Invalid,
                phoneme: "B1".to_string()
            }]
        );
        assert_eq!(phonemes(&items), ["B1"]);
    }

    #[test]
    fn test_missing_stress() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("AH B", CheckSet::all()).collect();
        assert_eq!(issues(&items).len(), 1);
        assert_eq!(issues(&items)[0].kind, PhonemeIssueKind::MissingStress);
        assert_eq!(phonemes(&items), ["AH", "B"]);

        let items: Vec<_> = set.parse("AX N", CheckSet::all()).collect();
        assert_eq!(issues(&items)[0].kind, PhonemeIssueKind::MissingStress);
    }

    #[test]
    fn test_missing_stress_disabled() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("AH B", CheckSet::default()).collect();
        assert!(issues(&items).is_empty());
        assert_eq!(phonemes(&items), ["AH", "B"]);
    }

    #[test]
    fn test_double_space_is_reported() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("AH0  B", CheckSet::all()).collect();
        assert_eq!(
            issues(&items),
            vec![PhonemeIssue {
                kind: PhonemeIssueKind::Spacing,
                phoneme: "AH0".to_string()
            }]
        );
        assert_eq!(phonemes(&items), ["AH0", "B"]);
        // the diagnostic precedes the token it describes
        assert!(matches!(items[0], Decoded::Issue(_)));
    }

    #[test]
    fn test_tab_separator_is_not_a_boundary() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("AH0\tB", CheckSet::all()).collect();
        let kinds: Vec<_> = issues(&items).into_iter().map(|i| i.kind).collect();
        assert_eq!(kinds, [PhonemeIssueKind::Spacing, PhonemeIssueKind::Invalid]);
        assert_eq!(phonemes(&items), ["AH0\tB"]);
    }

    #[test]
    fn test_invalid_phoneme_fallback_is_upper_case() {
        let set = test_set(Capitalization::Lower);
        let items: Vec<_> = set.parse("ah0 zz", CheckSet::none()).collect();
        assert_eq!(phonemes(&items), ["AH0", "ZZ"]);
        assert!(issues(&items).is_empty());
    }

    #[test]
    fn test_wrong_case_is_invalid() {
        let set = test_set(Capitalization::Upper);
        let items: Vec<_> = set.parse("ah0", CheckSet::all()).collect();
        assert_eq!(issues(&items)[0].kind, PhonemeIssueKind::Invalid);
        assert_eq!(phonemes(&items), ["AH0"]);
    }

    #[test]
    fn test_normalized_records() {
        let mut set = ArpabetPhonemeSet::new(Capitalization::Lower);
        set.add(&PhonemeRecord::new("IX", PhonemeType::Vowel).with_normalized("IH"));
        set.add(&PhonemeRecord::new("IH", PhonemeType::Vowel));

        let items: Vec<_> = set.parse("ix1", CheckSet::all()).collect();
        assert_eq!(phonemes(&items), ["IH1"]);
        assert_eq!(set.format(&[Phoneme::from("IH1")]), "ih1");
    }

    #[test]
    fn test_format_unknown_token() {
        let set = test_set(Capitalization::Lower);
        assert_eq!(set.format(&[Phoneme::from("QQ")]), "qq");
    }

    #[test]
    fn test_issue_messages() {
        let issue = PhonemeIssue {
            kind: PhonemeIssueKind::MissingStress,
            phoneme: "AH".to_string(),
        };
        assert_eq!(issue.to_string(), "Vowel phoneme \"AH\" missing stress marker");
        assert_eq!(issue.kind.check(), Check::MissingStress);
    }
}
