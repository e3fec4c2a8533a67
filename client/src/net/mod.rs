//! Networking for the chat socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sink` is the outbound seam the widget writes encoded frames into, and
//! `socket` owns the browser WebSocket lifecycle that drains it.

pub mod sink;
#[cfg(feature = "hydrate")]
pub mod socket;
