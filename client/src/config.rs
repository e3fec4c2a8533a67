//! Widget configuration: endpoint path and the page's element ids.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_CONTAINER_ID: &str = "chat-box";
pub const DEFAULT_INPUT_ID: &str = "user-input";
pub const DEFAULT_BUTTON_ID: &str = "send-button";

/// Where the widget connects and which elements it binds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Socket path on the page's own host.
    pub path: String,
    /// Scrollable message container.
    pub container_id: String,
    /// Text input control.
    pub input_id: String,
    /// Send-trigger control.
    pub button_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CHAT_PATH.to_owned(),
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            input_id: DEFAULT_INPUT_ID.to_owned(),
            button_id: DEFAULT_BUTTON_ID.to_owned(),
        }
    }
}

/// Build the socket URL from the hosting page's `location.protocol` and
/// `location.host`. Secure pages get `wss`.
pub fn endpoint_url(protocol: &str, host: &str, path: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    if path.starts_with('/') {
        format!("{scheme}://{host}{path}")
    } else {
        format!("{scheme}://{host}/{path}")
    }
}
