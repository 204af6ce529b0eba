//! Output side of validation: where per-field messages are written.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies a message slot. Day, month, year and the composite date
/// check all write to `Date`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageKey {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "pastime")]
    Pastime,
    #[display(fmt = "form")]
    Form,
}

impl MessageKey {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Number,
        Self::Date,
        Self::Pastime,
        Self::Form,
    ];
}

/// Receives the text shown next to a field. An empty string clears it.
pub trait MessageSink {
    fn set_message(&mut self, key: MessageKey, text: &str);
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn set_message(&mut self, key: MessageKey, text: &str) {
        (**self).set_message(key, text);
    }
}

/// In-memory sink keeping the last text written to each slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBoard {
    messages: BTreeMap<MessageKey, String>,
    #[serde(skip)]
    writes: usize,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written to `key`, or `None` if nothing was ever written.
    pub fn message(&self, key: MessageKey) -> Option<&str> {
        self.messages.get(&key).map(String::as_str)
    }

    /// Slots currently holding a non-empty message.
    pub fn errors(&self) -> impl Iterator<Item = (MessageKey, &str)> {
        self.messages
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, text)| (*key, text.as_str()))
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Total number of `set_message` calls received.
    pub const fn writes(&self) -> usize {
        self.writes
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.writes = 0;
    }
}

impl MessageSink for MessageBoard {
    fn set_message(&mut self, key: MessageKey, text: &str) {
        self.writes += 1;
        self.messages.insert(key, text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        let names: Vec<String> = MessageKey::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["name", "number", "date", "pastime", "form"]);
    }

    #[test]
    fn test_board_last_writer_wins() {
        let mut board = MessageBoard::new();
        assert_eq!(board.message(MessageKey::Date), None);

        board.set_message(MessageKey::Date, "Not a valid day!");
        board.set_message(MessageKey::Date, "Not a valid year!");
        assert_eq!(board.message(MessageKey::Date), Some("Not a valid year!"));
        assert_eq!(board.writes(), 2);

        board.set_message(MessageKey::Date, "");
        assert_eq!(board.message(MessageKey::Date), Some(""));
        assert!(!board.has_errors());
    }

    #[test]
    fn test_board_errors_skip_cleared() {
        let mut board = MessageBoard::new();
        board.set_message(MessageKey::Name, "");
        board.set_message(MessageKey::Pastime, "Not a valid pastime!");

        let errors: Vec<_> = board.errors().collect();
        assert_eq!(errors, [(MessageKey::Pastime, "Not a valid pastime!")]);

        board.clear();
        assert_eq!(board.writes(), 0);
        assert_eq!(board.message(MessageKey::Pastime), None);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn write_form(mut sink: impl MessageSink) {
            sink.set_message(MessageKey::Form, "x");
        }

        let mut board = MessageBoard::new();
        write_form(&mut board);
        assert_eq!(board.message(MessageKey::Form), Some("x"));
    }

    #[test]
    fn test_board_serde() {
        let mut board = MessageBoard::new();
        board.set_message(MessageKey::Name, "Not a valid name!");
        board.set_message(MessageKey::Form, "");

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"messages":{"name":"Not a valid name!","form":""}}"#);
    }
}
