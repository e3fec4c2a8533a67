//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/chat` websocket and a health probe under a single Axum
//! router. Everything else is served as static files, which is where the
//! chat page and the compiled widget live.

pub mod ws;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/chat", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
