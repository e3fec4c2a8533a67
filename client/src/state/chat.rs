#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use frames::{InboundFrame, USER_SENDER};

/// Base class applied to every rendered message.
pub const MESSAGE_CLASS: &str = "message";

/// Display category for a message sender.
///
/// Only the literal `"user"` tag is the local user; every other sender
/// (the bot, a system notice, another participant) shares one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SenderKind {
    User,
    Other,
}

impl SenderKind {
    pub fn of(sender: &str) -> Self {
        if sender == USER_SENDER { Self::User } else { Self::Other }
    }

    /// Style class distinguishing the two categories.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Other => "bot-message",
        }
    }
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: String,
    pub text: String,
}

impl ChatEntry {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self { sender: sender.into(), text: text.into() }
    }

    /// Entry for a message typed locally.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(USER_SENDER, text)
    }

    pub fn kind(&self) -> SenderKind {
        SenderKind::of(&self.sender)
    }

    /// Full class list for the rendered element.
    pub fn class_names(&self) -> [&'static str; 2] {
        [MESSAGE_CLASS, self.kind().css_class()]
    }
}

impl From<InboundFrame> for ChatEntry {
    fn from(frame: InboundFrame) -> Self {
        Self { sender: frame.sender, text: frame.text }
    }
}

/// Append-only message log for the lifetime of the page.
///
/// There is no cap and no eviction; entries are never edited once pushed.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
