//! Rendering entries into a dialect

use crate::diagnostic::{Entry, Event};
use crate::dialect::{Dialect, DialectDescriptor};
use crate::error::Result;
use crate::phoneme::{Accent, PhonemeSet, PhonemeTable};
use std::io::Write;

/// Counts of what a [`Formatter::write`] call produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Lines written to the dictionary output
    pub lines: usize,
    /// Entries among those lines
    pub entries: usize,
    /// Diagnostics written to the diagnostic output
    pub diagnostics: usize,
}

/// Renders events as lines of a target dialect
#[derive(Debug, Clone)]
pub struct Formatter {
    dialect: Dialect,
    phonemes: PhonemeSet,
}

impl Formatter {
    /// Formatter for `dialect`, spelling phonemes in `accent` or the
    /// dialect's own accent
    pub fn new(table: &PhonemeTable, dialect: Dialect, accent: Option<Accent>) -> Self {
        let accent = accent.unwrap_or_else(|| dialect.accent());
        Self {
            dialect,
            phonemes: PhonemeSet::load(table, accent),
        }
    }

    /// Target dialect
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Render one entry
    pub fn format_entry(&self, entry: &Entry) -> String {
        if entry.word.is_empty() {
            return entry
                .comment
                .as_deref()
                .map(|comment| self.format_comment(comment))
                .unwrap_or_default();
        }

        let descriptor = self.dialect.descriptor();
        let template = match (&entry.context, &entry.comment) {
            (None, None) => descriptor.entry,
            (None, Some(_)) => descriptor.entry_comment,
            (Some(_), None) => descriptor.entry_context,
            (Some(_), Some(_)) => descriptor.entry_context_comment,
        };

        let word = self.dialect.transform_word(&entry.word);
        let context = entry
            .context
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let phonemes = self.phonemes.format(&entry.phonemes);

        render(
            template,
            &Fields {
                word: &word,
                context: &context,
                phonemes: &phonemes,
                comment: entry.comment.as_deref().unwrap_or(""),
            },
        )
    }

    /// Render a comment line
    pub fn format_comment(&self, text: &str) -> String {
        render(
            self.descriptor().comment,
            &Fields {
                comment: text,
                ..Fields::default()
            },
        )
    }

    /// Render a dictionary line; `None` for diagnostics
    pub fn format_event(&self, event: &Event) -> Option<String> {
        match event {
            Event::Blank => Some(String::new()),
            Event::Comment(text) => Some(self.format_comment(text)),
            Event::Entry(entry) => Some(self.format_entry(entry)),
            Event::Diagnostic(_) => None,
        }
    }

    /// Write events, dictionary lines to `out` and diagnostics to
    /// `diagnostics`
    pub fn write<I, W, D>(&self, events: I, out: &mut W, diagnostics: &mut D) -> Result<WriteSummary>
    where
        I: IntoIterator<Item = Event>,
        W: Write + ?Sized,
        D: Write + ?Sized,
    {
        let mut summary = WriteSummary::default();
        for event in events {
            match event {
                Event::Diagnostic(diagnostic) => {
                    writeln!(diagnostics, "{diagnostic}")?;
                    summary.diagnostics += 1;
                }
                event => {
                    if let Some(line) = self.format_event(&event) {
                        writeln!(out, "{line}")?;
                        summary.lines += 1;
                        if matches!(event, Event::Entry(_)) {
                            summary.entries += 1;
                        }
                    }
                }
            }
        }
        out.flush()?;
        Ok(summary)
    }

    fn descriptor(&self) -> &'static DialectDescriptor {
        self.dialect.descriptor()
    }
}

#[derive(Debug, Default)]
struct Fields<'a> {
    word: &'a str,
    context: &'a str,
    phonemes: &'a str,
    comment: &'a str,
}

/// Substitute `{word}`, `{context}`, `{phonemes}` and `{comment}` in one pass
///
/// Substituted text is never rescanned, so braces inside values are kept.
fn render(template: &str, fields: &Fields<'_>) -> String {
    let mut out = String::with_capacity(template.len() + fields.phonemes.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        let value = match &tail[1..end] {
            "word" => Some(fields.word),
            "context" => Some(fields.context),
            "phonemes" => Some(fields.phonemes),
            "comment" => Some(fields.comment),
            _ => None,
        };
        match value {
            Some(value) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
