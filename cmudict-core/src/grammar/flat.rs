//! Flat CMU dictionary layout
//!
//! `WORD[(CONTEXT)]<separator>PHONEMES[ #COMMENT]`, with `##` or `;;;`
//! line comments.

use super::{unsupported, LineIssue, ParsedLine, RawEntry};
use crate::dialect::Dialect;
use regex::Regex;
use std::sync::OnceLock;

const ENTRY: &str =
    r"^([^ a-zA-Z]?[a-zA-Z0-9'.\-_]*)(\(([^)]*)\))?([ \t]+)([^#]+)( #(.*))?[ \t]*$";
const COMMENT: &str = r"^(##|;;;)(.*)$";

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ENTRY).expect("valid entry pattern"))
}

fn comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(COMMENT).expect("valid comment pattern"))
}

/// Grammar for the flat dialects
#[derive(Debug, Clone, Default)]
pub struct FlatGrammar {
    dialect: Option<Dialect>,
    weide_comment: bool,
}

impl FlatGrammar {
    /// Grammar that detects its dialect from the first entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Grammar fixed to a flat dialect
    pub fn pinned(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
            weide_comment: false,
        }
    }

    /// Active dialect, once detected or pinned
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Classify a non-empty line
    pub fn classify(&mut self, line: &str) -> ParsedLine {
        if let Some(caps) = comment_pattern().captures(line) {
            if self.dialect.is_none() && &caps[1] == "##" {
                self.weide_comment = true;
            }
            return ParsedLine::Comment(caps[2].to_string());
        }

        let Some(caps) = entry_pattern().captures(line) else {
            return unsupported(line);
        };
        let word = &caps[1];
        let separator = &caps[4];
        let phonemes = &caps[5];
        let comment = caps.get(7).map(|m| m.as_str().to_string());

        // No word: the line only carries a comment, if anything.
        if word.is_empty() {
            return comment.map_or(ParsedLine::Blank, ParsedLine::Comment);
        }

        let dialect = match self.dialect {
            Some(dialect) => dialect,
            None => {
                let dialect = self.detect(word);
                self.dialect = Some(dialect);
                dialect
            }
        };

        let mut issues = Vec::new();
        if let Some(expected) = dialect.descriptor().separator {
            if separator != expected {
                issues.push(LineIssue::EntrySpacing {
                    expected: expected.len(),
                });
            }
        }
        if phonemes.ends_with([' ', '\t']) {
            issues.push(LineIssue::TrailingWhitespace);
        }

        ParsedLine::Entry(RawEntry {
            dialect,
            line: line.to_string(),
            word: word.to_string(),
            context: caps.get(3).map(|m| m.as_str().to_string()),
            phonemes: phonemes.to_string(),
            comment,
            issues,
        })
    }

    fn detect(&self, word: &str) -> Dialect {
        let dialect = if !Dialect::Cmudict.is_valid_word(word) {
            Dialect::CmudictNew
        } else if self.weide_comment {
            Dialect::CmudictWeide
        } else {
            Dialect::Cmudict
        };
        log::debug!("detected {} dialect from word {:?}", dialect, word);
        dialect
    }
}
