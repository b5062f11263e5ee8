//! Per-grammar token classification.
//!
//! The document model never matches on concrete token kinds. Everything it
//! needs to know about a grammar goes through this strategy trait, so the
//! same engine serves any tokenizer. Implementations are usually zero-sized
//! or a reference to an immutable table built once at startup.

use super::Token;

/// Opening marker of a block comment.
const BLOCK_COMMENT_OPEN: &str = "/*";

/// Classification predicates over a grammar's token kinds.
pub trait TokenClassifier {
    /// The grammar's token kind.
    type Kind: Copy + Eq + std::fmt::Debug;

    /// True for the end-of-input sentinel.
    fn is_end(&self, kind: Self::Kind) -> bool;

    /// True for every string literal kind, terminated or not.
    fn is_string(&self, kind: Self::Kind) -> bool;

    /// True for a string literal missing its closing quote.
    fn is_unterminated_string(&self, kind: Self::Kind) -> bool;

    /// True for a block comment.
    fn is_block_comment(&self, kind: Self::Kind) -> bool;

    /// True for a comment running up to the end of its line.
    fn is_line_comment(&self, kind: Self::Kind) -> bool;

    /// True for any comment kind.
    fn is_comment(&self, kind: Self::Kind) -> bool {
        self.is_block_comment(kind) || self.is_line_comment(kind)
    }

    /// True when `token` is a block comment that the user has not closed.
    ///
    /// A block comment counts as unclosed when the text between its leading
    /// `/*` and its trailing two bytes holds another `/*` (the tokenizer
    /// swallowed a second opening that still waits for its own terminator),
    /// or when it runs up to the end of `text`.
    fn is_unclosed_block_comment(&self, token: &Token<Self::Kind>, text: &str) -> bool {
        if !self.is_block_comment(token.kind) {
            return false;
        }

        let interior_start = token.span.start() + BLOCK_COMMENT_OPEN.len();
        let interior_end = token.span.end().saturating_sub(2);

        if interior_start <= interior_end
            && text
                .get(interior_start..interior_end)
                .is_some_and(|interior| interior.contains(BLOCK_COMMENT_OPEN))
        {
            return true;
        }

        token.span.end() >= text.len()
    }
}

impl<C: TokenClassifier + ?Sized> TokenClassifier for &C {
    type Kind = C::Kind;

    #[inline]
    fn is_end(&self, kind: Self::Kind) -> bool {
        (**self).is_end(kind)
    }

    #[inline]
    fn is_string(&self, kind: Self::Kind) -> bool {
        (**self).is_string(kind)
    }

    #[inline]
    fn is_unterminated_string(&self, kind: Self::Kind) -> bool {
        (**self).is_unterminated_string(kind)
    }

    #[inline]
    fn is_block_comment(&self, kind: Self::Kind) -> bool {
        (**self).is_block_comment(kind)
    }

    #[inline]
    fn is_line_comment(&self, kind: Self::Kind) -> bool {
        (**self).is_line_comment(kind)
    }

    #[inline]
    fn is_comment(&self, kind: Self::Kind) -> bool {
        (**self).is_comment(kind)
    }

    #[inline]
    fn is_unclosed_block_comment(&self, token: &Token<Self::Kind>, text: &str) -> bool {
        (**self).is_unclosed_block_comment(token, text)
    }
}
