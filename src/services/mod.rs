//! Domain services used by the socket handler.

pub mod responder;
