//! Protobuf token classification for the document model.

use proto_ir::{TokenClassifier, TokenKind};

/// Classifies Protobuf `TokenKind`s for structural queries.
///
/// Zero-sized; copy it freely or share a `&'static` reference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtoClassifier;

impl TokenClassifier for ProtoClassifier {
    type Kind = TokenKind;

    #[inline]
    fn is_end(&self, kind: TokenKind) -> bool {
        kind == TokenKind::Eof
    }

    #[inline]
    fn is_string(&self, kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::StrLit
                | TokenKind::UnterminatedStrLit
                | TokenKind::Proto3Double
                | TokenKind::Proto3Single
        )
    }

    #[inline]
    fn is_unterminated_string(&self, kind: TokenKind) -> bool {
        kind == TokenKind::UnterminatedStrLit
    }

    #[inline]
    fn is_block_comment(&self, kind: TokenKind) -> bool {
        kind == TokenKind::BlockComment
    }

    #[inline]
    fn is_line_comment(&self, kind: TokenKind) -> bool {
        kind == TokenKind::LineComment
    }
}
