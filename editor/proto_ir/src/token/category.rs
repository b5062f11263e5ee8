//! Highlighting categories.

use std::fmt;

/// Coarse classification of a token for highlighting and colouring.
///
/// Every `TokenKind` maps to exactly one category through
/// `TokenKind::category`, an immutable table compiled into the binary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    Whitespace,
    Comment,
    Type,
    Keyword,
    Identifier,
    Number,
    Boolean,
    String,
    Separator,
    Operator,
    Error,
}

impl TokenCategory {
    /// Lowercase category name, as used by colouring schemes.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Comment => "comment",
            TokenCategory::Type => "type",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Number => "number",
            TokenCategory::Boolean => "boolean",
            TokenCategory::String => "string",
            TokenCategory::Separator => "separator",
            TokenCategory::Operator => "operator",
            TokenCategory::Error => "error",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
