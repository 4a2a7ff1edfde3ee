use std::sync::{Arc, Mutex};

use super::*;

fn submitted() -> (Arc<Mutex<Vec<String>>>, SubmitHandler) {
    let seen = Arc::new(Mutex::new(vec![]));
    let sink = Arc::clone(&seen);
    let handler: SubmitHandler = Box::new(move |text| sink.lock().unwrap().push(text));
    (seen, handler)
}

#[test]
fn test_height_grows_with_content_up_to_cap() {
    let mut input = InputBox::default().with_max_rows(4);

    input.set_value("one");
    assert_eq!(input.height(), 1 + 2);

    input.set_value("one\ntwo\nthree");
    assert_eq!(input.height(), 3 + 2);

    // Content beyond the cap no longer grows the box.
    input.set_value("1\n2\n3\n4\n5\n6\n7");
    assert_eq!(input.height(), 4 + 2);
}

#[test]
fn test_empty_value_still_renders_one_row() {
    let input = InputBox::default();
    assert_eq!(input.height(), 1 + 2);
    assert_eq!(input.value(), "");
}

#[test]
fn test_enter_submits_without_inserting_newline() {
    let mut input = InputBox::default();
    let (seen, handler) = submitted();
    input.set_on_enter(handler);
    input.set_value("hello");

    input.handle_event(&Event::KeyboardEnter);

    assert_eq!(seen.lock().unwrap().as_slice(), ["hello"]);
    assert_eq!(input.value(), "hello");
}

#[test]
fn test_newline_event_never_submits() {
    let mut input = InputBox::default();
    let (seen, handler) = submitted();
    input.set_on_enter(handler);
    input.set_value("hello");

    input.handle_event(&Event::KeyboardNewLine);

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(input.value(), "hello\n");
}

#[test]
fn test_enter_without_handler_inserts_newline() {
    let mut input = InputBox::default();
    input.set_value("hello");

    input.handle_event(&Event::KeyboardEnter);

    assert_eq!(input.value(), "hello\n");
}

#[test]
fn test_paste_handler_intercepts_insertion() {
    let mut input = InputBox::default();
    let (seen, handler) = submitted();
    input.set_on_paste(handler);

    input.handle_event(&Event::KeyboardPaste("clip".to_string()));

    assert_eq!(seen.lock().unwrap().as_slice(), ["clip"]);
    assert_eq!(input.value(), "");
}

#[test]
fn test_paste_without_handler_inserts_text() {
    let mut input = InputBox::default();
    input.set_value("before ");

    input.handle_event(&Event::KeyboardPaste("after".to_string()));

    assert_eq!(input.value(), "before after");
}

#[test]
fn test_paste_handler_is_replaced_not_stacked() {
    let mut input = InputBox::default();
    let (first_seen, first) = submitted();
    let (second_seen, second) = submitted();
    input.set_on_paste(first);
    input.set_on_paste(second);

    input.handle_event(&Event::KeyboardPaste("clip".to_string()));

    assert!(first_seen.lock().unwrap().is_empty());
    assert_eq!(second_seen.lock().unwrap().as_slice(), ["clip"]);
}
