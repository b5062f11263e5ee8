//! Token types shared by the tokenizer and the document model.
//!
//! `Token<K>` is generic over the grammar's kind type so the document
//! engine can run on any tokenizer that honours the contract: an ordered,
//! gap-free sequence terminated by a zero-width end-of-input sentinel.

mod category;
mod classify;
mod kind;
mod list;

pub use category::TokenCategory;
pub use classify::TokenClassifier;
pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its span in the source.
///
/// `line` is 1-based, `column` is the 0-based byte column of the token's
/// first byte within that line.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token<K> {
    pub kind: K,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl<K> Token<K> {
    #[inline]
    pub fn new(kind: K, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            span,
            line,
            column,
        }
    }

    /// Inclusive offset of the token's last byte.
    ///
    /// For the zero-width sentinel this is `start - 1` (saturating).
    #[inline]
    pub fn stop(&self) -> usize {
        self.span.end().saturating_sub(1)
    }
}

impl<K: fmt::Debug> fmt::Debug for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} ({}:{})",
            self.kind, self.span, self.line, self.column
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // 1-byte kind, 8-byte span, two u32 positions, padded to 4-byte alignment.
    crate::static_assert_size!(Token<TokenKind>, 20);
    crate::static_assert_size!(TokenKind, 1);
}

#[cfg(test)]
mod tests;
