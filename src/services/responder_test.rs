use super::*;

#[test]
fn echo_responder_prefixes_text() {
    assert_eq!(EchoResponder.reply("hello"), "You said: hello");
}

#[test]
fn echo_responder_keeps_inner_whitespace() {
    assert_eq!(EchoResponder.reply("a  b"), "You said: a  b");
}

#[test]
fn responder_is_object_safe() {
    let responder: Box<dyn Responder> = Box::new(EchoResponder);
    assert_eq!(responder.reply("x"), "You said: x");
}
