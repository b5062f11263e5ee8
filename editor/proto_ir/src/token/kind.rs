//! Token kinds for the Protobuf language.
//!
//! One variant per lexical rule of the proto2/proto3 grammar, plus the
//! editor-only kinds the typing assistant depends on: unterminated string
//! literals, whitespace/newline trivia and the `Eof` sentinel. Trivia is
//! kept so the token stream covers every byte of the text.

use super::TokenCategory;

/// Protobuf token kinds.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Run of spaces, tabs, carriage returns and form feeds.
    Whitespace,
    Newline,
    /// `/* ... */`, or `/* ...` up to end of input.
    BlockComment,
    /// `// ...` up to (not including) the line break.
    LineComment,

    // Scalar types
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    /// `string`
    StringKw,
    Bytes,
    Map,

    // Keywords
    Syntax,
    Import,
    Weak,
    Public,
    Package,
    /// `option`
    OptionKw,
    Repeated,
    Optional,
    Required,
    Oneof,
    Message,
    Enum,
    Service,
    Rpc,
    Returns,
    Stream,
    Reserved,
    To,
    Max,
    Extend,
    Extensions,
    Group,

    /// `true` / `false`
    BoolLit,
    Ident,
    /// Decimal, octal or hexadecimal integer.
    IntLit,
    /// Decimal float, `inf` or `nan`.
    FloatLit,
    /// Quoted string with its closing quote.
    StrLit,
    /// Quoted string cut short by a line break or end of input.
    UnterminatedStrLit,
    /// `"proto3"`
    Proto3Double,
    /// `'proto3'`
    Proto3Single,

    // Separators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    /// `<`
    LChevron,
    /// `>`
    RChevron,
    Semi,
    Comma,
    Dot,
    Minus,
    Plus,

    /// `=`
    Assign,

    /// Any character no other rule accepts.
    Error,
    /// End-of-input sentinel.
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 66] = [
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::BlockComment,
        TokenKind::LineComment,
        TokenKind::Double,
        TokenKind::Float,
        TokenKind::Int32,
        TokenKind::Int64,
        TokenKind::Uint32,
        TokenKind::Uint64,
        TokenKind::Sint32,
        TokenKind::Sint64,
        TokenKind::Fixed32,
        TokenKind::Fixed64,
        TokenKind::Sfixed32,
        TokenKind::Sfixed64,
        TokenKind::Bool,
        TokenKind::StringKw,
        TokenKind::Bytes,
        TokenKind::Map,
        TokenKind::Syntax,
        TokenKind::Import,
        TokenKind::Weak,
        TokenKind::Public,
        TokenKind::Package,
        TokenKind::OptionKw,
        TokenKind::Repeated,
        TokenKind::Optional,
        TokenKind::Required,
        TokenKind::Oneof,
        TokenKind::Message,
        TokenKind::Enum,
        TokenKind::Service,
        TokenKind::Rpc,
        TokenKind::Returns,
        TokenKind::Stream,
        TokenKind::Reserved,
        TokenKind::To,
        TokenKind::Max,
        TokenKind::Extend,
        TokenKind::Extensions,
        TokenKind::Group,
        TokenKind::BoolLit,
        TokenKind::Ident,
        TokenKind::IntLit,
        TokenKind::FloatLit,
        TokenKind::StrLit,
        TokenKind::UnterminatedStrLit,
        TokenKind::Proto3Double,
        TokenKind::Proto3Single,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LChevron,
        TokenKind::RChevron,
        TokenKind::Semi,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Assign,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// Highlighting category of this kind.
    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::Whitespace | TokenKind::Newline => TokenCategory::Whitespace,
            TokenKind::BlockComment | TokenKind::LineComment => TokenCategory::Comment,
            TokenKind::Double
            | TokenKind::Float
            | TokenKind::Int32
            | TokenKind::Int64
            | TokenKind::Uint32
            | TokenKind::Uint64
            | TokenKind::Sint32
            | TokenKind::Sint64
            | TokenKind::Fixed32
            | TokenKind::Fixed64
            | TokenKind::Sfixed32
            | TokenKind::Sfixed64
            | TokenKind::Bool
            | TokenKind::StringKw
            | TokenKind::Bytes
            | TokenKind::Map => TokenCategory::Type,
            TokenKind::Syntax
            | TokenKind::Import
            | TokenKind::Weak
            | TokenKind::Public
            | TokenKind::Package
            | TokenKind::OptionKw
            | TokenKind::Repeated
            | TokenKind::Optional
            | TokenKind::Required
            | TokenKind::Oneof
            | TokenKind::Message
            | TokenKind::Enum
            | TokenKind::Service
            | TokenKind::Rpc
            | TokenKind::Returns
            | TokenKind::Stream
            | TokenKind::Reserved
            | TokenKind::To
            | TokenKind::Max
            | TokenKind::Extend
            | TokenKind::Extensions
            | TokenKind::Group => TokenCategory::Keyword,
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::IntLit | TokenKind::FloatLit => TokenCategory::Number,
            TokenKind::BoolLit => TokenCategory::Boolean,
            TokenKind::StrLit
            | TokenKind::UnterminatedStrLit
            | TokenKind::Proto3Double
            | TokenKind::Proto3Single => TokenCategory::String,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::LChevron
            | TokenKind::RChevron
            | TokenKind::Semi
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Minus
            | TokenKind::Plus => TokenCategory::Separator,
            TokenKind::Assign => TokenCategory::Operator,
            TokenKind::Error | TokenKind::Eof => TokenCategory::Error,
        }
    }

    /// Source text of a keyword, type or punctuation kind.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals,
    /// comments, trivia, errors, the sentinel).
    pub const fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Double => "double",
            TokenKind::Float => "float",
            TokenKind::Int32 => "int32",
            TokenKind::Int64 => "int64",
            TokenKind::Uint32 => "uint32",
            TokenKind::Uint64 => "uint64",
            TokenKind::Sint32 => "sint32",
            TokenKind::Sint64 => "sint64",
            TokenKind::Fixed32 => "fixed32",
            TokenKind::Fixed64 => "fixed64",
            TokenKind::Sfixed32 => "sfixed32",
            TokenKind::Sfixed64 => "sfixed64",
            TokenKind::Bool => "bool",
            TokenKind::StringKw => "string",
            TokenKind::Bytes => "bytes",
            TokenKind::Map => "map",
            TokenKind::Syntax => "syntax",
            TokenKind::Import => "import",
            TokenKind::Weak => "weak",
            TokenKind::Public => "public",
            TokenKind::Package => "package",
            TokenKind::OptionKw => "option",
            TokenKind::Repeated => "repeated",
            TokenKind::Optional => "optional",
            TokenKind::Required => "required",
            TokenKind::Oneof => "oneof",
            TokenKind::Message => "message",
            TokenKind::Enum => "enum",
            TokenKind::Service => "service",
            TokenKind::Rpc => "rpc",
            TokenKind::Returns => "returns",
            TokenKind::Stream => "stream",
            TokenKind::Reserved => "reserved",
            TokenKind::To => "to",
            TokenKind::Max => "max",
            TokenKind::Extend => "extend",
            TokenKind::Extensions => "extensions",
            TokenKind::Group => "group",
            TokenKind::Proto3Double => "\"proto3\"",
            TokenKind::Proto3Single => "'proto3'",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LChevron => "<",
            TokenKind::RChevron => ">",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Assign => "=",
            TokenKind::Whitespace
            | TokenKind::Newline
            | TokenKind::BlockComment
            | TokenKind::LineComment
            | TokenKind::BoolLit
            | TokenKind::Ident
            | TokenKind::IntLit
            | TokenKind::FloatLit
            | TokenKind::StrLit
            | TokenKind::UnterminatedStrLit
            | TokenKind::Error
            | TokenKind::Eof => return None,
        };
        Some(text)
    }
}
