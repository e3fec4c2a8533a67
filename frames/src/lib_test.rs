use super::*;

#[test]
fn decode_inbound_reads_sender_and_text() {
    let frame = decode_inbound(r#"{"sender":"bot","text":"hi there"}"#).expect("frame");
    assert_eq!(frame.sender, "bot");
    assert_eq!(frame.text, "hi there");
}

#[test]
fn decode_inbound_ignores_unknown_fields() {
    let frame = decode_inbound(r#"{"sender":"user","text":"x","ts":12}"#).expect("frame");
    assert_eq!(frame.sender, USER_SENDER);
    assert_eq!(frame.text, "x");
}

#[test]
fn decode_inbound_rejects_malformed_json() {
    let err = decode_inbound("{not json").expect_err("should fail");
    assert!(matches!(err, CodecError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode frame"));
}

#[test]
fn decode_inbound_requires_sender() {
    assert!(decode_inbound(r#"{"text":"orphan"}"#).is_err());
}

#[test]
fn encode_outbound_is_text_only_object() {
    let json = encode(&OutboundFrame::new("hello")).expect("encode");
    assert_eq!(json, r#"{"text":"hello"}"#);
}

#[test]
fn encode_outbound_escapes_quotes_and_newlines() {
    let json = encode(&OutboundFrame::new("say \"hi\"\nnow")).expect("encode");
    assert_eq!(json, r#"{"text":"say \"hi\"\nnow"}"#);
}

#[test]
fn decode_outbound_requires_text() {
    assert!(decode_outbound("{}").is_err());
    assert_eq!(decode_outbound(r#"{"text":"ok"}"#).expect("frame").text, "ok");
}

#[test]
fn encode_inbound_field_order_is_sender_then_text() {
    let json = encode(&InboundFrame::new("bot", "yo")).expect("encode");
    assert_eq!(json, r#"{"sender":"bot","text":"yo"}"#);
}
