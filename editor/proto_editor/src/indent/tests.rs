use pretty_assertions::assert_eq;

use super::*;
use crate::ProtoDocument;

fn reindent_at(text: &str, offset: usize) -> Option<Reindent> {
    reindent(&ProtoDocument::protobuf(text), offset, &IndentConfig::default())
}

#[test]
fn default_width_is_four() {
    assert_eq!(IndentConfig::default().indent_width, 4);
}

#[test]
fn first_line_is_left_alone() {
    assert_eq!(reindent_at("message M {", 3), None);
    assert_eq!(reindent_at("", 0), None);
}

#[test]
fn after_opening_brace() {
    let text = "message M {\nint32 x = 1;";
    assert_eq!(
        reindent_at(text, 14),
        Some(Reindent {
            line_start: 12,
            column: 4,
            closing_line_start: None,
        })
    );
}

#[test]
fn keeps_previous_indentation() {
    let text = "  int32 x = 1;\nint32 y = 2;";
    assert_eq!(reindent_at(text, 15).map(|r| r.column), Some(2));
}

#[test]
fn tabs_count_as_indent_width() {
    let text = "\tmessage N {\n";
    let config = IndentConfig { indent_width: 2 };
    let document = ProtoDocument::protobuf(text);
    assert_eq!(reindent(&document, 13, &config).map(|r| r.column), Some(4));
}

#[test]
fn inside_new_block_comment() {
    let text = "  /**\n* doc";
    assert_eq!(reindent_at(text, 6).map(|r| r.column), Some(3));
}

#[test]
fn after_block_comment_end() {
    let text = "   */\nmessage M {}";
    assert_eq!(reindent_at(text, 6).map(|r| r.column), Some(2));
}

#[test]
fn after_block_comment_end_at_column_zero() {
    let text = "*/\nx";
    assert_eq!(reindent_at(text, 3).map(|r| r.column), Some(0));
}

#[test]
fn block_comment_terminator_follows_interior_line() {
    let text = "/**\n* doc\n*/\n";
    assert_eq!(
        reindent_at(text, 4),
        Some(Reindent {
            line_start: 4,
            column: 1,
            closing_line_start: Some(10),
        })
    );
}

#[test]
fn interior_line_without_terminator_below() {
    let text = "/**\n* doc\n* more\n";
    assert_eq!(
        reindent_at(text, 4).and_then(|r| r.closing_line_start),
        None
    );
}

#[test]
fn interior_line_at_end_of_text() {
    let text = "/**\n* doc";
    assert_eq!(
        reindent_at(text, 9).and_then(|r| r.closing_line_start),
        None
    );
}
