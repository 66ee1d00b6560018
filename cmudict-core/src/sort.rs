//! Entry sorting

use crate::diagnostic::{Entry, Event};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How entries are reordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortMode {
    /// Keep input order
    #[default]
    None,
    /// By `word(context)`
    ByWord,
    /// By `word!context`, so words containing parentheses do not collide
    ByWordBang,
}

impl SortMode {
    /// Every mode
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::ByWord, SortMode::ByWordBang];

    /// Mode name
    pub fn name(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::ByWord => "by-word",
            SortMode::ByWordBang => "by-word-bang",
        }
    }

    /// Sort key of an entry
    pub fn key(self, entry: &Entry) -> String {
        match (self, &entry.context) {
            (SortMode::ByWord, Some(context)) => format!("{}({})", entry.word, context),
            (SortMode::ByWordBang, Some(context)) => format!("{}!{}", entry.word, context),
            _ => entry.word.clone(),
        }
    }

    /// Reorder an event stream
    ///
    /// Entries are buffered and yielded, sorted, once the input ends. Every
    /// other event is yielded at its input position.
    pub fn apply<I>(self, events: I) -> Sorted<I::IntoIter>
    where
        I: IntoIterator<Item = Event>,
    {
        Sorted {
            mode: self,
            events: events.into_iter(),
            buffer: Vec::new(),
            sorted: None,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(SortMode::None),
            "by-word" | "weide" => Ok(SortMode::ByWord),
            "by-word-bang" | "air" => Ok(SortMode::ByWordBang),
            _ => Err(Error::UnsupportedSortMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.name().to_string()
    }
}

/// Iterator returned by [`SortMode::apply`]
#[derive(Debug)]
pub struct Sorted<I> {
    mode: SortMode,
    events: I,
    buffer: Vec<(String, Entry)>,
    sorted: Option<std::vec::IntoIter<(String, Entry)>>,
}

impl<I: Iterator<Item = Event>> Iterator for Sorted<I> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.mode == SortMode::None {
            return self.events.next();
        }

        if let Some(sorted) = &mut self.sorted {
            return sorted.next().map(|(_, entry)| Event::Entry(entry));
        }

        for event in self.events.by_ref() {
            match event {
                Event::Entry(entry) => {
                    let key = self.mode.key(&entry);
                    self.buffer.push((key, entry));
                }
                other => return Some(other),
            }
        }

        let mut buffer = std::mem::take(&mut self.buffer);
        buffer.sort_by(|a, b| a.0.cmp(&b.0));
        log::debug!("sorted {} entries {}", buffer.len(), self.mode);
        let mut sorted = buffer.into_iter();
        let next = sorted.next().map(|(_, entry)| Event::Entry(entry));
        self.sorted = Some(sorted);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Context;
    use crate::phoneme::Phoneme;

    fn entry(word: &str, context: Option<u32>) -> Event {
        let mut entry = Entry::new(word, [Phoneme::from("AH0")]);
        entry.context = context.map(Context::Ordinal);
        Event::Entry(entry)
    }

    fn words(events: &[Event]) -> Vec<String> {
        events
            .iter()
            .map(|event| match event {
                Event::Entry(entry) => match &entry.context {
                    Some(context) => format!("{}({})", entry.word, context),
                    None => entry.word.clone(),
                },
                Event::Comment(text) => format!("#{text}"),
                Event::Blank => String::new(),
                Event::Diagnostic(d) => d.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_mode_names() {
        assert_eq!("weide".parse::<SortMode>().unwrap(), SortMode::ByWord);
        assert_eq!("air".parse::<SortMode>().unwrap(), SortMode::ByWordBang);
        for mode in SortMode::ALL {
            assert_eq!(mode.name().parse::<SortMode>().unwrap(), mode);
        }
        let err = "random".parse::<SortMode>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported sort mode: random");
    }

    #[test]
    fn test_keys() {
        let Event::Entry(e) = entry("A", Some(1)) else { unreachable!() };
        assert_eq!(SortMode::ByWord.key(&e), "A(1)");
        assert_eq!(SortMode::ByWordBang.key(&e), "A!1");
        let Event::Entry(e) = entry("A", None) else { unreachable!() };
        assert_eq!(SortMode::ByWordBang.key(&e), "A");
    }

    #[test]
    fn test_none_keeps_order() {
        let events = vec![entry("B", None), Event::Blank, entry("A", None)];
        let sorted: Vec<_> = SortMode::None.apply(events.clone()).collect();
        assert_eq!(sorted, events);
    }

    #[test]
    fn test_by_word() {
        let events = vec![entry("B", None), entry("A", Some(1)), entry("A", None)];
        let sorted: Vec<_> = SortMode::ByWord.apply(events).collect();
        assert_eq!(words(&sorted), ["A", "A(1)", "B"]);
    }

    #[test]
    fn test_bang_keys_differ_from_parentheses() {
        let events = vec![entry("A(0", None), entry("A", Some(1))];
        let by_word: Vec<_> = SortMode::ByWord.apply(events.clone()).collect();
        assert_eq!(words(&by_word), ["A(0", "A(1)"]);
        let by_bang: Vec<_> = SortMode::ByWordBang.apply(events).collect();
        assert_eq!(words(&by_bang), ["A(1)", "A(0"]);
    }

    #[test]
    fn test_comments_are_not_buffered() {
        let events = vec![
            Event::Comment(" first".to_string()),
            entry("B", None),
            Event::Comment(" second".to_string()),
            entry("A", None),
        ];
        let sorted: Vec<_> = SortMode::ByWord.apply(events).collect();
        assert_eq!(words(&sorted), ["# first", "# second", "A", "B"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut first = Entry::new("A", [Phoneme::from("AH0")]);
        first.comment = Some("first".to_string());
        let mut second = Entry::new("A", [Phoneme::from("EY1")]);
        second.comment = Some("second".to_string());
        let events = vec![Event::Entry(first.clone()), Event::Entry(second.clone())];
        let sorted: Vec<_> = SortMode::ByWord.apply(events).collect();
        assert_eq!(sorted, vec![Event::Entry(first), Event::Entry(second)]);
    }
}
