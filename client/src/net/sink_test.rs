use super::*;
use futures::channel::mpsc;

#[test]
fn unbounded_sender_queues_text_in_order() {
    let (tx, mut rx) = mpsc::unbounded::<String>();
    tx.send_text("a".to_owned()).expect("send a");
    tx.send_text("b".to_owned()).expect("send b");

    assert_eq!(rx.try_next().expect("ready"), Some("a".to_owned()));
    assert_eq!(rx.try_next().expect("ready"), Some("b".to_owned()));
}

#[test]
fn unbounded_sender_reports_closed_after_receiver_drop() {
    let (tx, rx) = mpsc::unbounded::<String>();
    drop(rx);
    assert_eq!(tx.send_text("late".to_owned()), Err(SinkError::Closed));
}
