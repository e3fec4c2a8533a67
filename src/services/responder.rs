//! Bot reply generation.
//!
//! The socket handler never builds reply text itself; it asks a
//! `Responder`. Swapping the responder changes the bot without touching
//! transport code.

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

/// Produces the bot's answer to one user message.
pub trait Responder: Send + Sync {
    /// `text` is already trimmed and non-empty.
    fn reply(&self, text: &str) -> String;
}

/// Default responder: repeats the message back.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl Responder for EchoResponder {
    fn reply(&self, text: &str) -> String {
        format!("You said: {text}")
    }
}
