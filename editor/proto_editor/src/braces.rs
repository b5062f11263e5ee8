//! Bracket matching over the token stream.

use proto_ir::{Span, Token, TokenClassifier};

use crate::{Bias, Document};

/// A bracket and its partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BracePair {
    /// The bracket at or before the caret.
    pub origin: Span,
    /// Its partner.
    pub partner: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Partner and scan direction for a bracket byte.
fn partner_of(byte: u8) -> Option<(u8, Direction)> {
    match byte {
        b'(' => Some((b')', Direction::Forward)),
        b'[' => Some((b']', Direction::Forward)),
        b'{' => Some((b'}', Direction::Forward)),
        b'<' => Some((b'>', Direction::Forward)),
        b')' => Some((b'(', Direction::Backward)),
        b']' => Some((b'[', Direction::Backward)),
        b'}' => Some((b'{', Direction::Backward)),
        b'>' => Some((b'<', Direction::Backward)),
        _ => None,
    }
}

impl<C: TokenClassifier> Document<C> {
    /// The bracket pair touching the caret at `offset`.
    ///
    /// Looks at the character after the caret first, then the one before
    /// it. Brackets inside strings and comments neither match nor count
    /// towards nesting. Returns `None` when no bracket touches the caret
    /// or it has no partner.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn matching_brace(&self, offset: usize) -> Option<BracePair> {
        self.brace_pair_at(offset)
            .or_else(|| offset.checked_sub(1).and_then(|o| self.brace_pair_at(o)))
    }

    fn brace_pair_at(&self, position: usize) -> Option<BracePair> {
        let bytes = self.text().as_bytes();
        let &bracket = bytes.get(position)?;
        let (partner, direction) = partner_of(bracket)?;

        let index = self.token_index(position, Bias::Forward);
        let tokens = self.tokens().as_slice();
        if self.is_opaque(&tokens[index]) {
            return None;
        }

        let mut depth = 0usize;
        let mut visit = |i: usize| -> bool {
            if bytes[i] == bracket {
                depth += 1;
            } else if bytes[i] == partner {
                depth -= 1;
            }
            depth == 0
        };

        let found = match direction {
            Direction::Forward => tokens[index..]
                .iter()
                .filter(|t| !self.is_opaque(t))
                .flat_map(|t| t.span.start().max(position)..t.span.end())
                .find(|&i| visit(i)),
            Direction::Backward => tokens[..=index]
                .iter()
                .rev()
                .filter(|t| !self.is_opaque(t))
                .flat_map(|t| (t.span.start()..t.span.end().min(position + 1)).rev())
                .find(|&i| visit(i)),
        }?;

        Some(BracePair {
            origin: Span::from_range(position..position + 1),
            partner: Span::from_range(found..found + 1),
        })
    }

    /// Strings and comments hide the brackets they contain.
    fn is_opaque(&self, token: &Token<C::Kind>) -> bool {
        let classifier = self.classifier();
        classifier.is_string(token.kind) || classifier.is_comment(token.kind)
    }
}
