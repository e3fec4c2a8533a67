use super::*;

// =============================================================
// SenderKind
// =============================================================

#[test]
fn sender_kind_user_only_for_exact_tag() {
    assert_eq!(SenderKind::of("user"), SenderKind::User);
    assert_eq!(SenderKind::of("bot"), SenderKind::Other);
    assert_eq!(SenderKind::of("User"), SenderKind::Other);
    assert_eq!(SenderKind::of(""), SenderKind::Other);
}

#[test]
fn sender_kind_css_classes_are_distinct() {
    assert_eq!(SenderKind::User.css_class(), "user-message");
    assert_eq!(SenderKind::Other.css_class(), "bot-message");
}

// =============================================================
// ChatEntry
// =============================================================

#[test]
fn user_entry_carries_user_classes() {
    let entry = ChatEntry::user("hello");
    assert_eq!(entry.sender, "user");
    assert_eq!(entry.class_names(), ["message", "user-message"]);
}

#[test]
fn entry_from_inbound_frame_keeps_sender() {
    let entry = ChatEntry::from(InboundFrame::new("system", "notice"));
    assert_eq!(entry.sender, "system");
    assert_eq!(entry.text, "notice");
    assert_eq!(entry.class_names(), ["message", "bot-message"]);
}

// =============================================================
// ChatLog
// =============================================================

#[test]
fn chat_log_default_is_empty() {
    let log = ChatLog::default();
    assert!(log.is_empty());
    assert!(log.last().is_none());
}

#[test]
fn chat_log_preserves_insertion_order() {
    let mut log = ChatLog::new();
    log.push(ChatEntry::user("one"));
    log.push(ChatEntry::new("bot", "two"));
    log.push(ChatEntry::user("one"));

    assert_eq!(log.len(), 3);
    let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "one"]);
    assert_eq!(log.last(), Some(&ChatEntry::user("one")));
}
