//! The chat widget: one connection, one input, one message log.
//!
//! DESIGN
//! ======
//! `ChatWidget` owns its `ChatLog` and talks to the page only through the
//! `ChatView` and `FrameSink` seams, so the same event handlers run against
//! the browser DOM and against in-memory doubles in tests.
//!
//! Sends are optimistic: the user's entry is rendered and the input cleared
//! before we know whether the frame reached the socket. A failed send is
//! returned to the caller for logging and never rolled back.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use frames::{CodecError, OutboundFrame};

use crate::net::sink::{FrameSink, SinkError};
use crate::state::chat::{ChatEntry, ChatLog};

/// Key that triggers a send while the input has focus.
pub const SEND_KEY: &str = "Enter";

/// Failure points of the widget. None of them are shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("malformed inbound frame: {0}")]
    Decode(#[source] CodecError),
    #[error("could not encode outbound frame: {0}")]
    Encode(#[source] CodecError),
    #[error("send failed: {0}")]
    Send(#[from] SinkError),
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("no browser document available")]
    NoDocument,
    #[error("could not open socket: {0}")]
    Connect(String),
}

/// Rendering surface for the message log and the text input.
pub trait ChatView {
    /// Render one entry at the end of the message list.
    fn append(&mut self, entry: &ChatEntry);
    /// Scroll so the newest entry is visible.
    fn scroll_to_latest(&mut self);
    /// Current raw contents of the input control.
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
}

/// Result of a send trigger that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty or whitespace; nothing happened.
    Ignored,
    /// The trimmed text was rendered and queued for the socket.
    Sent(String),
}

/// Whether a key press in the input should trigger a send.
pub fn is_send_key(key: &str) -> bool {
    key == SEND_KEY
}

/// Strip the characters a browser `String.prototype.trim` strips.
///
/// Unlike `str::trim` this removes U+FEFF and keeps U+0085.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

pub struct ChatWidget<V, S> {
    view: V,
    sink: S,
    log: ChatLog,
}

impl<V: ChatView, S: FrameSink> ChatWidget<V, S> {
    pub fn new(view: V, sink: S) -> Self {
        Self { view, sink, log: ChatLog::new() }
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one text frame from the connection.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Decode`] when `raw` is not a well-formed
    /// `{"sender", "text"}` object. The view is left untouched.
    pub fn on_connection_message(&mut self, raw: &str) -> Result<(), WidgetError> {
        let frame = frames::decode_inbound(raw).map_err(WidgetError::Decode)?;
        self.append(ChatEntry::from(frame));
        Ok(())
    }

    /// Handle a click on the send control or a send key in the input.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Send`] when the connection is gone. The entry
    /// has already been rendered and the input cleared by then.
    pub fn on_send_triggered(&mut self) -> Result<SendOutcome, WidgetError> {
        let raw = self.view.input_value();
        let text = trim_input(&raw);
        if text.is_empty() {
            return Ok(SendOutcome::Ignored);
        }
        let text = text.to_owned();

        self.append(ChatEntry::user(text.clone()));
        let sent = frames::encode(&OutboundFrame::new(text.clone()))
            .map_err(WidgetError::Encode)
            .and_then(|json| self.sink.send_text(json).map_err(WidgetError::from));
        self.view.clear_input();

        sent.map(|()| SendOutcome::Sent(text))
    }

    fn append(&mut self, entry: ChatEntry) {
        self.view.append(&entry);
        self.view.scroll_to_latest();
        self.log.push(entry);
    }
}
