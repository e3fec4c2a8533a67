//! WebSocket handler for `/chat`.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID for log correlation and enters a
//! receive loop. Each text frame `{"text": ...}` produces at most one reply
//! `{"sender": <bot>, "text": ...}` to the same socket. Nothing is shared
//! between connections: there are no rooms and no broadcast.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → log connect
//! 2. Text frame → decode → responder → reply
//! 3. Close or transport error → log disconnect

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use frames::InboundFrame;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::state::AppState;

/// Sender tag on replies that describe a protocol problem.
pub const SYSTEM_SENDER: &str = "system";

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    info!(%client_id, "ws: client connected");

    while let Some(msg) = socket.recv().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                warn!(%client_id, error = %e, "ws: recv failed");
                break;
            }
        };
        match msg {
            Message::Text(text) => {
                let Some(reply) = process_inbound_text(&state, client_id, text.as_str()) else {
                    continue;
                };
                if send_frame(&mut socket, &reply).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// FRAME DISPATCH
// =============================================================================

/// Decode one inbound text frame and build the reply, if any.
///
/// Kept free of socket I/O so tests can drive it directly.
fn process_inbound_text(state: &AppState, client_id: Uuid, text: &str) -> Option<InboundFrame> {
    let req = match frames::decode_outbound(text) {
        Ok(req) => req,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: invalid inbound frame");
            return Some(InboundFrame::new(SYSTEM_SENDER, format!("invalid frame: {e}")));
        }
    };

    let body = req.text.trim();
    if body.is_empty() {
        debug!(%client_id, "ws: ignoring blank message");
        return None;
    }

    info!(%client_id, len = body.len(), "ws: recv message");
    Some(InboundFrame::new(&*state.bot_name, state.responder.reply(body)))
}

async fn send_frame(socket: &mut WebSocket, frame: &InboundFrame) -> Result<(), axum::Error> {
    let json = match frames::encode(frame) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "ws: failed to encode reply");
            return Ok(());
        }
    };
    socket.send(Message::Text(json.into())).await
}
