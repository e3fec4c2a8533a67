//! Outbound frame sink.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use futures::channel::mpsc::UnboundedSender;

/// Error returned when an encoded frame cannot be handed to the connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The connection task has ended; nothing will drain the frame.
    #[error("connection closed")]
    Closed,
}

/// Destination for encoded outbound frames.
///
/// Sends are fire-and-forget: `Ok` only means the frame was queued for the
/// socket, not that the server received it.
pub trait FrameSink {
    /// Queue one JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Closed`] when the connection is gone.
    fn send_text(&self, text: String) -> Result<(), SinkError>;
}

impl FrameSink for UnboundedSender<String> {
    fn send_text(&self, text: String) -> Result<(), SinkError> {
        self.unbounded_send(text).map_err(|_| SinkError::Closed)
    }
}
