use pretty_assertions::assert_eq;
use proto_ir::{Span, TokenKind};

use super::*;

#[test]
fn new_listener_has_no_errors() {
    let listener = ParsingErrorListener::new();
    assert!(!listener.has_errors());
    assert!(listener.is_empty());
    assert_eq!(listener.len(), 0);
    assert!(listener.errors().is_empty());
}

#[test]
fn syntax_error_shifts_column_to_one_based() {
    let mut listener = ParsingErrorListener::new();
    listener.syntax_error(2, 0, "token recognition error at: '\\'");

    assert!(listener.has_errors());
    assert_eq!(
        listener.errors(),
        &[ParsingError::new("token recognition error at: '\\'", 2, 1)]
    );
}

#[test]
fn semantic_error_uses_token_position() {
    let mut listener = ParsingErrorListener::new();
    let token = Token::new(TokenKind::Ident, Span::new(20, 23), 4, 8);
    listener.semantic_error("unknown type 'Foo'", &token);

    assert_eq!(
        listener.errors(),
        &[ParsingError::new("unknown type 'Foo'", 4, 9)]
    );
}

#[test]
fn errors_keep_insertion_order_without_dedup() {
    let mut listener = ParsingErrorListener::new();
    listener.syntax_error(5, 1, "b");
    listener.syntax_error(1, 1, "a");
    listener.syntax_error(5, 1, "b");

    let errors = listener.into_errors();
    assert_eq!(
        errors,
        vec![
            ParsingError::new("b", 5, 2),
            ParsingError::new("a", 1, 2),
            ParsingError::new("b", 5, 2),
        ]
    );
}

#[test]
#[should_panic(expected = "line must be 1-based")]
fn syntax_error_rejects_zero_line() {
    let mut listener = ParsingErrorListener::new();
    listener.syntax_error(0, 0, "oops");
}
