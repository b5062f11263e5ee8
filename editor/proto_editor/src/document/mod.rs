//! Immutable text snapshot plus its tokens.
//!
//! Every structural query is answered from a biased token lookup: given an
//! offset, find the token that owns it. Offsets that sit exactly on a
//! boundary between two tokens are ambiguous, and the bias decides:
//!
//! - `Bias::Forward`: a token owns `start..end`, so a boundary offset
//!   belongs to the token on its right.
//! - `Bias::Backward`: a token owns `start + 1..=end`, so a boundary
//!   offset belongs to the token on its left.
//!
//! Offsets past the last token clamp to the end-of-input sentinel.

mod lookup;

use std::fmt;

use proto_ir::{Token, TokenClassifier, TokenList};

use crate::line::{BLOCK_COMMENT_LINE, BLOCK_COMMENT_START};
use crate::{DocumentError, Line};

/// Tie-breaking rule for an offset on a token boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bias {
    /// The boundary belongs to the token starting there.
    Forward,
    /// The boundary belongs to the token ending there.
    Backward,
}

/// A text snapshot and its exhaustive, sentinel-terminated token list.
///
/// Built once per editor event and never mutated. `C` tells the document
/// which token kinds are strings, comments and end-of-input.
pub struct Document<C: TokenClassifier> {
    text: String,
    tokens: TokenList<C::Kind>,
    classifier: C,
}

impl<C: TokenClassifier> Document<C> {
    /// Create a document, panicking if `tokens` does not describe `text`.
    pub fn new(text: impl Into<String>, tokens: TokenList<C::Kind>, classifier: C) -> Self {
        Self::try_new(text, tokens, classifier).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a document after checking that `tokens` covers `text` without
    /// gaps and ends with a sentinel at `text.len()`.
    pub fn try_new(
        text: impl Into<String>,
        tokens: TokenList<C::Kind>,
        classifier: C,
    ) -> Result<Self, DocumentError> {
        let text = text.into();
        let Some(last) = tokens.last() else {
            return Err(DocumentError::EmptyTokens);
        };
        if !classifier.is_end(last.kind) {
            return Err(DocumentError::MissingEndSentinel);
        }

        let mut expected = 0;
        for (index, token) in tokens.iter().enumerate() {
            if token.span.start() != expected {
                return Err(DocumentError::Gap {
                    index,
                    start: token.span.start(),
                    expected,
                });
            }
            expected = token.span.end();
        }
        if last.span.start() != text.len() || !last.span.is_empty() {
            return Err(DocumentError::SentinelOffset {
                found: last.span.start(),
                len: text.len(),
            });
        }

        tracing::trace!(bytes = text.len(), tokens = tokens.len(), "document built");
        Ok(Document {
            text,
            tokens,
            classifier,
        })
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList<C::Kind> {
        &self.tokens
    }

    #[inline]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// The token owning `offset` under `bias`.
    ///
    /// # Panics
    /// Panics if `bias` is `Backward` and `offset` is 0.
    pub fn token_at(&self, offset: usize, bias: Bias) -> &Token<C::Kind> {
        &self.tokens[self.token_index(offset, bias)]
    }

    /// True when `offset` lies inside a string literal.
    ///
    /// The offset of an opening quote is not inside yet. The offset just
    /// past an unterminated literal still is, so typing at the end of an
    /// unfinished string keeps string semantics.
    pub fn is_in_string(&self, offset: usize) -> bool {
        let rhs = self.token_at(offset, Bias::Forward);
        if self.classifier.is_string(rhs.kind) {
            return offset != rhs.span.start();
        }
        if offset == 0 {
            return false;
        }
        let lhs = self.token_at(offset, Bias::Backward);
        self.classifier.is_unterminated_string(lhs.kind)
    }

    /// True when `offset` lies inside a comment.
    ///
    /// Same shape as `is_in_string`; a line comment has no closing
    /// delimiter, so the offset right after it is still inside.
    pub fn is_in_comment(&self, offset: usize) -> bool {
        let rhs = self.token_at(offset, Bias::Forward);
        if self.classifier.is_comment(rhs.kind) {
            return offset != rhs.span.start();
        }
        if offset == 0 {
            return false;
        }
        let lhs = self.token_at(offset, Bias::Backward);
        self.classifier.is_line_comment(lhs.kind)
    }

    /// True when `token` is a block comment missing its terminator.
    pub fn is_unclosed_block_comment(&self, token: &Token<C::Kind>) -> bool {
        self.classifier.is_unclosed_block_comment(token, &self.text)
    }

    /// The line containing `offset`.
    ///
    /// An offset sitting on a `\n` belongs to the line that newline ends.
    ///
    /// # Panics
    /// Panics if `offset` is past the end of the text or not on a char
    /// boundary.
    pub fn line_at(&self, offset: usize) -> Line {
        self.check_offset(offset);
        let start = self.line_start(offset);
        let end = self.line_end(offset);
        let number = memchr::memchr_iter(b'\n', &self.text.as_bytes()[..start]).count() + 1;
        Line::new(number, start, end, self.text[start..end].to_owned())
    }

    /// Every line of the text, in order.
    ///
    /// Joining the line texts with `\n` reproduces the text; a trailing
    /// newline yields a final empty line.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        let mut next = Some(0);
        std::iter::from_fn(move || {
            let start = next?;
            let line = self.line_at(start);
            next = (line.end_offset() < self.text.len()).then_some(line.end_offset() + 1);
            Some(line)
        })
    }

    /// True when a newline typed at `offset` should close the block comment
    /// the caret is in.
    ///
    /// That is the case only on the line holding the comment's opening
    /// marker, before any terminator exists. On continuation lines
    /// `should_add_line_to_block_comment` takes over.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn should_close_block_comment(&self, offset: usize) -> bool {
        if offset == 0 {
            return false;
        }
        self.check_offset(offset);
        let token = self.token_at(offset, Bias::Backward);
        if !self.is_unclosed_block_comment(token) {
            return false;
        }
        self.line_prefix(offset).contains(BLOCK_COMMENT_START)
    }

    /// True when a newline typed at `offset` should open a new `*` line in
    /// the block comment the caret is in.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn should_add_line_to_block_comment(&self, offset: usize) -> bool {
        self.check_offset(offset);
        let token = self.token_at(offset, Bias::Forward);
        if !self.classifier.is_block_comment(token.kind) {
            return false;
        }
        let prefix = self.line_prefix(offset);
        if self.is_unclosed_block_comment(token) {
            return !prefix.contains(BLOCK_COMMENT_START) && prefix.contains(BLOCK_COMMENT_LINE);
        }
        prefix.contains(BLOCK_COMMENT_LINE)
    }

    /// Text of the current line from its start up to `offset` (excluded).
    pub(crate) fn line_prefix(&self, offset: usize) -> &str {
        &self.text[self.line_start(offset)..offset]
    }

    /// Panic unless `offset` is a valid caret position in the text.
    pub(crate) fn check_offset(&self, offset: usize) {
        assert!(
            offset <= self.text.len(),
            "offset {offset} is past the end of the text ({} bytes)",
            self.text.len()
        );
        assert!(
            self.text.is_char_boundary(offset),
            "offset {offset} is not on a character boundary"
        );
    }

    fn line_start(&self, offset: usize) -> usize {
        memchr::memrchr(b'\n', &self.text.as_bytes()[..offset]).map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        memchr::memchr(b'\n', &self.text.as_bytes()[offset..])
            .map_or(self.text.len(), |i| offset + i)
    }
}

impl<C: TokenClassifier> fmt::Debug for Document<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.text)
            .field("tokens", &self.tokens.len())
            .finish_non_exhaustive()
    }
}
