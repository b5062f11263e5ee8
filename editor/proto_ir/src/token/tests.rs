use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;
use crate::Span;

/// Minimal grammar used to exercise the classifier's default methods.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Toy {
    Block,
    Line,
    Text,
    End,
}

struct ToyClassifier;

impl TokenClassifier for ToyClassifier {
    type Kind = Toy;

    fn is_end(&self, kind: Toy) -> bool {
        kind == Toy::End
    }

    fn is_string(&self, _kind: Toy) -> bool {
        false
    }

    fn is_unterminated_string(&self, _kind: Toy) -> bool {
        false
    }

    fn is_block_comment(&self, kind: Toy) -> bool {
        kind == Toy::Block
    }

    fn is_line_comment(&self, kind: Toy) -> bool {
        kind == Toy::Line
    }
}

fn block(start: u32, end: u32) -> Token<Toy> {
    Token::new(Toy::Block, Span::new(start, end), 1, start)
}

// === Token ===

#[test]
fn stop_is_inclusive_last_offset() {
    let token = Token::new(TokenKind::Ident, Span::new(4, 9), 1, 4);
    assert_eq!(token.stop(), 8);
}

#[test]
fn sentinel_stop_precedes_start() {
    let token = Token::new(TokenKind::Eof, Span::point(5), 1, 5);
    assert_eq!(token.stop(), 4);
}

#[test]
fn token_debug_shows_kind_span_and_position() {
    let token = Token::new(TokenKind::LBrace, Span::new(10, 11), 3, 2);
    assert_eq!(format!("{token:?}"), "LBrace @ 10..11 (3:2)");
}

// === TokenList ===

#[test]
fn token_list_keeps_push_order() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Ident, Span::new(0, 1), 1, 0));
    list.push(Token::new(TokenKind::Eof, Span::point(1), 1, 1));

    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
    assert_eq!(list[0].kind, TokenKind::Ident);
    assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(
        list.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn token_list_from_vec_round_trips() {
    let tokens = vec![Token::new(TokenKind::Eof, Span::point(0), 1, 0)];
    let list = TokenList::from_vec(tokens.clone());
    assert_eq!(list.as_slice(), tokens.as_slice());
    assert_eq!(list.get(1), None);
    assert_eq!(list.into_vec(), tokens);
}

// === TokenClassifier ===

#[test]
fn comment_is_block_or_line() {
    assert!(ToyClassifier.is_comment(Toy::Block));
    assert!(ToyClassifier.is_comment(Toy::Line));
    assert!(!ToyClassifier.is_comment(Toy::Text));
}

#[test]
fn closed_block_comment_is_not_unclosed() {
    let text = "/* a */ x";
    assert!(!ToyClassifier.is_unclosed_block_comment(&block(0, 7), text));
}

#[test]
fn block_comment_reaching_end_of_text_is_unclosed() {
    let text = "x /* a";
    assert!(ToyClassifier.is_unclosed_block_comment(&block(2, 6), text));
}

#[test]
fn block_comment_swallowing_second_opening_is_unclosed() {
    // "/*\n/* */" closes the inner opening only.
    let text = "/*\n/* */\nx";
    assert!(ToyClassifier.is_unclosed_block_comment(&block(0, 8), text));
}

#[test]
fn closing_marker_does_not_count_as_opening() {
    // The trailing "*/" overlaps a "/" but is never scanned for "/*".
    let text = "/* //*/ x";
    assert!(!ToyClassifier.is_unclosed_block_comment(&block(0, 7), text));
}

#[test]
fn non_block_comment_is_never_unclosed() {
    let token = Token::new(Toy::Line, Span::new(0, 4), 1, 0);
    assert!(!ToyClassifier.is_unclosed_block_comment(&token, "// x"));
}

#[test]
fn classifier_by_reference_delegates() {
    let classifier = &ToyClassifier;
    assert!(classifier.is_end(Toy::End));
    assert!(classifier.is_block_comment(Toy::Block));
    assert!(classifier.is_unclosed_block_comment(&block(0, 2), "/*"));
}

// === TokenKind / TokenCategory ===

#[test]
fn all_kinds_are_unique() {
    let unique: HashSet<_> = TokenKind::ALL.iter().collect();
    assert_eq!(unique.len(), TokenKind::ALL.len());
}

#[test]
fn categories_follow_vocabulary() {
    assert_eq!(TokenKind::Newline.category(), TokenCategory::Whitespace);
    assert_eq!(TokenKind::BlockComment.category(), TokenCategory::Comment);
    assert_eq!(TokenKind::Sfixed64.category(), TokenCategory::Type);
    assert_eq!(TokenKind::OptionKw.category(), TokenCategory::Keyword);
    assert_eq!(TokenKind::Ident.category(), TokenCategory::Identifier);
    assert_eq!(TokenKind::FloatLit.category(), TokenCategory::Number);
    assert_eq!(TokenKind::BoolLit.category(), TokenCategory::Boolean);
    assert_eq!(TokenKind::UnterminatedStrLit.category(), TokenCategory::String);
    assert_eq!(TokenKind::Proto3Single.category(), TokenCategory::String);
    assert_eq!(TokenKind::LChevron.category(), TokenCategory::Separator);
    assert_eq!(TokenKind::Assign.category(), TokenCategory::Operator);
    assert_eq!(TokenKind::Error.category(), TokenCategory::Error);
}

#[test]
fn category_names_are_lowercase() {
    for kind in TokenKind::ALL {
        let name = kind.category().name();
        assert!(!name.is_empty());
        assert_eq!(name, name.to_lowercase());
        assert_eq!(kind.category().to_string(), name);
    }
}

#[test]
fn fixed_text_is_unique_per_kind() {
    let texts: Vec<_> = TokenKind::ALL
        .iter()
        .filter_map(|kind| kind.fixed_text())
        .collect();
    let unique: HashSet<_> = texts.iter().collect();
    assert_eq!(unique.len(), texts.len());
    assert_eq!(TokenKind::StringKw.fixed_text(), Some("string"));
    assert_eq!(TokenKind::Ident.fixed_text(), None);
}
