//! Browser WebSocket lifecycle for the chat connection.
//!
//! One connection per page. Outbound text is drained from an mpsc channel
//! into the socket; inbound text frames are handed to a callback. There is
//! no reconnect: when either direction ends, the task logs the closure and
//! returns, dropping the channel receiver so later sends fail with
//! `SinkError::Closed`.

use futures::channel::mpsc::UnboundedReceiver;

use crate::widget::WidgetError;

/// Open the socket and spawn its send/receive loops as a local task.
///
/// # Errors
///
/// Returns [`WidgetError::Connect`] if the browser refuses to open the
/// socket (for example a malformed URL).
pub fn spawn_connection<F>(url: &str, rx: UnboundedReceiver<String>, on_text: F) -> Result<(), WidgetError>
where
    F: FnMut(String) + 'static,
{
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| WidgetError::Connect(e.to_string()))?;
    let url = url.to_owned();
    log::info!("chat socket opening: {url}");

    wasm_bindgen_futures::spawn_local(async move {
        run_connection(ws, rx, on_text).await;
        log::warn!("chat socket closed: {url}");
    });

    Ok(())
}

/// Process messages until either direction ends.
async fn run_connection<F>(
    ws: gloo_net::websocket::futures::WebSocket,
    mut rx: UnboundedReceiver<String>,
    mut on_text: F,
) where
    F: FnMut(String),
{
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(msg) = rx.next().await {
            if let Err(e) = ws_write.send(Message::Text(msg)).await {
                log::warn!("chat socket send error: {e}");
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => on_text(text),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
}
