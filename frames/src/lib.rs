//! Shared frame model and JSON codec for the `/chat` socket.
//!
//! This crate owns the wire representation used by both the `chatbox` server
//! and the browser `client`. Every frame is one JSON text message. The two
//! directions carry different shapes: the browser only ever sends `text`,
//! while the server always says who is speaking.

use serde::{Deserialize, Serialize};

/// Sender tag the browser uses for locally typed messages.
pub const USER_SENDER: &str = "user";

/// Error returned by the encode/decode helpers.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text payload is not a JSON object of the expected shape.
    #[error("failed to decode frame: {0}")]
    Decode(#[source] serde_json::Error),
    /// The frame could not be serialized.
    #[error("failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Server → client frame: `{"sender": "...", "text": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundFrame {
    /// Who produced the message. `"user"` marks the local user; anything
    /// else is rendered as a remote party.
    pub sender: String,
    /// Message body, rendered verbatim.
    pub text: String,
}

impl InboundFrame {
    #[must_use]
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self { sender: sender.into(), text: text.into() }
    }
}

/// Client → server frame: `{"text": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundFrame {
    pub text: String,
}

impl OutboundFrame {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Decode a server frame from a socket text message.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or missing fields.
pub fn decode_inbound(raw: &str) -> Result<InboundFrame, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}

/// Decode a client frame from a socket text message.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or a missing `text`.
pub fn decode_outbound(raw: &str) -> Result<OutboundFrame, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}

/// Encode any frame into its JSON text form.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode<T: Serialize>(frame: &T) -> Result<String, CodecError> {
    serde_json::to_string(frame).map_err(CodecError::Encode)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
