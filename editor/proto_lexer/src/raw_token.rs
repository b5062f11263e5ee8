//! Raw token recognizer generated by logos.

use logos::{Lexer, Logos};
use proto_ir::TokenKind;

/// Whether a quoted literal found its closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closure {
    Terminated,
    Unterminated,
}

/// Raw token from logos (before classification into `TokenKind`).
///
/// Nothing is skipped: whitespace and newlines are tokens too, so the
/// stream covers the whole text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("double")]
    Double,
    #[token("float")]
    Float,
    #[token("int32")]
    Int32,
    #[token("int64")]
    Int64,
    #[token("uint32")]
    Uint32,
    #[token("uint64")]
    Uint64,
    #[token("sint32")]
    Sint32,
    #[token("sint64")]
    Sint64,
    #[token("fixed32")]
    Fixed32,
    #[token("fixed64")]
    Fixed64,
    #[token("sfixed32")]
    Sfixed32,
    #[token("sfixed64")]
    Sfixed64,
    #[token("bool")]
    Bool,
    #[token("string")]
    StringKw,
    #[token("bytes")]
    Bytes,
    #[token("map")]
    Map,

    #[token("syntax")]
    Syntax,
    #[token("import")]
    Import,
    #[token("weak")]
    Weak,
    #[token("public")]
    Public,
    #[token("package")]
    Package,
    #[token("option")]
    OptionKw,
    #[token("repeated")]
    Repeated,
    #[token("optional")]
    Optional,
    #[token("required")]
    Required,
    #[token("oneof")]
    Oneof,
    #[token("message")]
    Message,
    #[token("enum")]
    Enum,
    #[token("service")]
    Service,
    #[token("rpc")]
    Rpc,
    #[token("returns")]
    Returns,
    #[token("stream")]
    Stream,
    #[token("reserved")]
    Reserved,
    #[token("to")]
    To,
    #[token("max")]
    Max,
    #[token("extend")]
    Extend,
    #[token("extensions")]
    Extensions,
    #[token("group")]
    Group,

    #[token("true")]
    #[token("false")]
    BoolLit,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"0[xX][0-9A-Fa-f]+|0[0-7]*|[1-9][0-9]*")]
    IntLit,

    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    #[token("inf")]
    #[token("nan")]
    FloatLit,

    #[token("\"", |lex| quoted(lex, b'"'))]
    DoubleQuoted(Closure),

    #[token("'", |lex| quoted(lex, b'\''))]
    SingleQuoted(Closure),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    LChevron,
    #[token(">")]
    RChevron,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,

    #[token("=")]
    Assign,
}

const PROTO3_DOUBLE: &str = "\"proto3\"";
const PROTO3_SINGLE: &str = "'proto3'";

impl RawToken {
    /// Convert to the public `TokenKind`, looking at `slice` where the raw
    /// rule alone cannot decide.
    pub(crate) fn into_kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Newline => TokenKind::Newline,
            RawToken::BlockComment => TokenKind::BlockComment,
            RawToken::LineComment => TokenKind::LineComment,

            RawToken::Double => TokenKind::Double,
            RawToken::Float => TokenKind::Float,
            RawToken::Int32 => TokenKind::Int32,
            RawToken::Int64 => TokenKind::Int64,
            RawToken::Uint32 => TokenKind::Uint32,
            RawToken::Uint64 => TokenKind::Uint64,
            RawToken::Sint32 => TokenKind::Sint32,
            RawToken::Sint64 => TokenKind::Sint64,
            RawToken::Fixed32 => TokenKind::Fixed32,
            RawToken::Fixed64 => TokenKind::Fixed64,
            RawToken::Sfixed32 => TokenKind::Sfixed32,
            RawToken::Sfixed64 => TokenKind::Sfixed64,
            RawToken::Bool => TokenKind::Bool,
            RawToken::StringKw => TokenKind::StringKw,
            RawToken::Bytes => TokenKind::Bytes,
            RawToken::Map => TokenKind::Map,

            RawToken::Syntax => TokenKind::Syntax,
            RawToken::Import => TokenKind::Import,
            RawToken::Weak => TokenKind::Weak,
            RawToken::Public => TokenKind::Public,
            RawToken::Package => TokenKind::Package,
            RawToken::OptionKw => TokenKind::OptionKw,
            RawToken::Repeated => TokenKind::Repeated,
            RawToken::Optional => TokenKind::Optional,
            RawToken::Required => TokenKind::Required,
            RawToken::Oneof => TokenKind::Oneof,
            RawToken::Message => TokenKind::Message,
            RawToken::Enum => TokenKind::Enum,
            RawToken::Service => TokenKind::Service,
            RawToken::Rpc => TokenKind::Rpc,
            RawToken::Returns => TokenKind::Returns,
            RawToken::Stream => TokenKind::Stream,
            RawToken::Reserved => TokenKind::Reserved,
            RawToken::To => TokenKind::To,
            RawToken::Max => TokenKind::Max,
            RawToken::Extend => TokenKind::Extend,
            RawToken::Extensions => TokenKind::Extensions,
            RawToken::Group => TokenKind::Group,

            RawToken::BoolLit => TokenKind::BoolLit,
            RawToken::Ident => TokenKind::Ident,
            RawToken::IntLit => TokenKind::IntLit,
            RawToken::FloatLit => TokenKind::FloatLit,

            RawToken::DoubleQuoted(Closure::Terminated) if slice == PROTO3_DOUBLE => {
                TokenKind::Proto3Double
            }
            RawToken::SingleQuoted(Closure::Terminated) if slice == PROTO3_SINGLE => {
                TokenKind::Proto3Single
            }
            RawToken::DoubleQuoted(Closure::Terminated)
            | RawToken::SingleQuoted(Closure::Terminated) => TokenKind::StrLit,
            RawToken::DoubleQuoted(Closure::Unterminated)
            | RawToken::SingleQuoted(Closure::Unterminated) => TokenKind::UnterminatedStrLit,

            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LChevron => TokenKind::LChevron,
            RawToken::RChevron => TokenKind::RChevron,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,

            RawToken::Assign => TokenKind::Assign,
        }
    }
}

/// Consume a block comment body after its `/*`.
///
/// The comment ends with the first `*/`; without one it swallows the rest
/// of the input.
fn block_comment(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.bump(len);
}

/// Consume a quoted literal body after its opening `quote`.
///
/// A backslash escapes the next byte unless that byte is a line break. A
/// raw line break (or end of input) cuts the literal short; the break
/// itself is not part of the token.
fn quoted(lex: &mut Lexer<'_, RawToken>, quote: u8) -> Closure {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;

    while i < rest.len() {
        match rest[i] {
            b'\\' if rest.get(i + 1).is_some_and(|b| !matches!(b, b'\n' | b'\r')) => i += 2,
            b'\n' | b'\r' => break,
            b if b == quote => {
                lex.bump(i + 1);
                return Closure::Terminated;
            }
            _ => i += 1,
        }
    }

    lex.bump(i);
    Closure::Unterminated
}
