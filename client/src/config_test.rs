use super::*;

#[test]
fn default_config_matches_page_markup() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.path, "/chat");
    assert_eq!(cfg.container_id, "chat-box");
    assert_eq!(cfg.input_id, "user-input");
    assert_eq!(cfg.button_id, "send-button");
}

#[test]
fn endpoint_url_uses_ws_for_plain_http() {
    assert_eq!(endpoint_url("http:", "localhost:3000", "/chat"), "ws://localhost:3000/chat");
}

#[test]
fn endpoint_url_uses_wss_for_https() {
    assert_eq!(endpoint_url("https:", "chat.example.com", "/chat"), "wss://chat.example.com/chat");
}

#[test]
fn endpoint_url_adds_missing_leading_slash() {
    assert_eq!(endpoint_url("http:", "h", "chat"), "ws://h/chat");
}
