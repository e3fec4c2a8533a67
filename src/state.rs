//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Connections share nothing mutable: each socket task only reads the
//! responder and the configured bot name.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::responder::{EchoResponder, Responder};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Produces the reply text for each inbound user message.
    pub responder: Arc<dyn Responder>,
    /// Sender tag stamped on every reply.
    pub bot_name: Arc<str>,
    /// Directory served for everything that is not `/chat` or `/healthz`.
    pub static_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig, responder: Arc<dyn Responder>) -> Self {
        Self { responder, bot_name: Arc::from(config.bot_name.as_str()), static_dir: config.static_dir.clone() }
    }

    /// State with the default echo responder.
    #[must_use]
    pub fn with_echo(config: &ServerConfig) -> Self {
        Self::new(config, Arc::new(EchoResponder))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
