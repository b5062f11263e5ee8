//! Biased token lookup by binary search.

use proto_ir::TokenClassifier;

use super::{Bias, Document};

impl<C: TokenClassifier> Document<C> {
    /// Index of the token owning `offset` under `bias`, or of the sentinel
    /// when no other token does.
    ///
    /// Tokens are contiguous and ordered, so the first token whose end
    /// reaches `offset` is the only candidate.
    pub(crate) fn token_index(&self, offset: usize, bias: Bias) -> usize {
        let tokens = self.tokens.as_slice();
        let sentinel = tokens.len() - 1;
        let body = &tokens[..sentinel];

        let found = match bias {
            Bias::Forward => {
                let i = body.partition_point(|t| t.span.end() <= offset);
                (i < sentinel && body[i].span.contains(offset)).then_some(i)
            }
            Bias::Backward => {
                assert!(offset > 0, "backward token lookup needs an offset past 0");
                let i = body.partition_point(|t| t.span.end() < offset);
                (i < sentinel && body[i].span.contains_trailing(offset)).then_some(i)
            }
        };

        found.unwrap_or(sentinel)
    }
}
