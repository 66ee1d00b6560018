//! Festival lexicon layout: `("word" context (phonemes)) ;comment`

use super::{unsupported, ParsedLine, RawEntry};
use crate::dialect::Dialect;
use regex::Regex;
use std::sync::OnceLock;

const ENTRY: &str = r#"^\("([^"]+)" ([a-zA-Z0-9_]+) \(([^)]+)\)\)[ \t]*(;(.*))?[ \t]*$"#;
const COMMENT: &str = r"^;;(.*)$";

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ENTRY).expect("valid entry pattern"))
}

fn comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(COMMENT).expect("valid comment pattern"))
}

/// Grammar for festlex lexicons
#[derive(Debug, Clone, Copy, Default)]
pub struct FestlexGrammar;

impl FestlexGrammar {
    /// Create the grammar
    pub fn new() -> Self {
        Self
    }

    /// Classify a non-empty line
    pub fn classify(&mut self, line: &str) -> ParsedLine {
        if let Some(caps) = comment_pattern().captures(line) {
            return ParsedLine::Comment(caps[1].to_string());
        }

        let Some(caps) = entry_pattern().captures(line) else {
            return unsupported(line);
        };
        let context = &caps[2];

        ParsedLine::Entry(RawEntry {
            dialect: Dialect::Festlex,
            line: line.to_string(),
            word: caps[1].to_string(),
            context: (context != "nil").then(|| context.to_string()),
            phonemes: caps[3].to_string(),
            comment: caps.get(5).map(|m| m.as_str().to_string()),
            issues: Vec::new(),
        })
    }
}
