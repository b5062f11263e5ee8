use pretty_assertions::assert_eq;
use proto_diagnostic::ParsingErrorListener;

use super::*;
use crate::test_support::{type_break, type_char};

#[test]
fn init_tracing_twice_is_harmless() {
    init_tracing();
    init_tracing();
}

#[test]
fn protobuf_document_from_text() {
    let document = ProtoDocument::protobuf(String::from("syntax = \"proto3\";"));
    assert_eq!(document.text(), "syntax = \"proto3\";");
    assert!(document.is_in_string(11));
}

#[test]
fn protobuf_with_errors_collects_recognition_errors() {
    let mut listener = ParsingErrorListener::new();
    let document = ProtoDocument::protobuf_with_errors("message M {\n  $\n}", &mut listener);

    assert_eq!(document.len(), 17);
    assert_eq!(
        listener
            .errors()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["error at line 2 and column 3 : token recognition error at: '$'"]
    );
}

/// One editing session: each step types into the text the previous step
/// produced.
#[test]
fn typing_session() {
    let step = type_char("message M |", '{');
    assert_eq!(step, "message M {|}");

    let step = type_break(&step);
    assert_eq!(step, "message M {\n|\n}");

    let step = type_char("message M {\n  string s = |\n}", '"');
    assert_eq!(step, "message M {\n  string s = \"|\"\n}");

    let step = type_char("message M {\n  string s = \"x|\"\n}", '"');
    assert_eq!(step, "message M {\n  string s = \"x\"|\n}");
}

#[test]
fn block_comment_session() {
    let step = type_break("/**|");
    assert_eq!(step, "/**\n * |\n */");

    let step = type_break(&step);
    assert_eq!(step, "/**\n * \n * |\n */");
}

#[test]
fn reindent_after_break_between_braces() {
    let document = ProtoDocument::protobuf("message M {\n\n}");
    let indent = reindent(&document, 12, &IndentConfig::default());
    assert_eq!(indent.map(|r| r.column), Some(4));
}
