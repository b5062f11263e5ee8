//! Caret notation for typing scenarios.
//!
//! `"m(|)"` is the text `"m()"` with the caret at offset 2.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{BreakTyping, CharTyping, ProtoDocument};

const CARET: char = '|';

/// Split caret notation into the text and the caret offset.
pub(crate) fn parse(input: &str) -> (String, usize) {
    let offset = input.find(CARET).expect("caret marker missing");
    let mut text = input.to_owned();
    text.remove(offset);
    assert!(!text.contains(CARET), "more than one caret marker");
    (text, offset)
}

/// Insert `insertion` at `offset`, then mark the caret at `caret`.
pub(crate) fn render(text: &str, offset: usize, insertion: &str, caret: usize) -> String {
    let mut result = String::with_capacity(text.len() + insertion.len() + 1);
    result.push_str(&text[..offset]);
    result.push_str(insertion);
    result.push_str(&text[offset..]);
    result.insert(caret, CARET);
    result
}

/// Type `ch` at the caret of `input` and render the outcome.
pub(crate) fn type_char(input: &str, ch: char) -> String {
    let (text, offset) = parse(input);
    let document = ProtoDocument::protobuf(text.as_str());
    let mut typing = CharTyping::new(&document, offset, ch);
    typing.apply();
    render(
        &text,
        offset,
        typing.insertion_text(),
        typing.insertion_offset(),
    )
}

/// Press Enter at the caret of `input` and render the outcome.
pub(crate) fn type_break(input: &str) -> String {
    let (text, offset) = parse(input);
    let document = ProtoDocument::protobuf(text.as_str());
    let mut typing = BreakTyping::new(&document, offset);
    typing.apply();
    render(
        &text,
        offset,
        typing.insertion_text(),
        typing.insertion_offset(),
    )
}
