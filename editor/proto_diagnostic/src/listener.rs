//! Append-only collector bridging tokenizer/parser callbacks to
//! `ParsingError`s.

use proto_ir::Token;

use crate::ParsingError;

/// Collects parsing errors in the order they are reported.
///
/// Reporters hand over 0-based columns (as tokenizers count them); the
/// listener stores them 1-based. No deduplication, no sorting.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsingErrorListener {
    errors: Vec<ParsingError>,
}

impl ParsingErrorListener {
    pub fn new() -> Self {
        ParsingErrorListener { errors: Vec::new() }
    }

    /// Record a syntax error at a 1-based `line` and 0-based
    /// `char_position` within that line.
    ///
    /// # Panics
    /// Panics if `message` is empty or `line` is zero.
    pub fn syntax_error(&mut self, line: u32, char_position: u32, message: &str) {
        self.add_error(message, line, char_position);
    }

    /// Record a semantic error located at `token`.
    ///
    /// # Panics
    /// Panics if `message` is empty or the token's line is zero.
    pub fn semantic_error<K>(&mut self, message: &str, token: &Token<K>) {
        self.add_error(message, token.line, token.column);
    }

    /// The collected errors, in insertion order.
    #[inline]
    pub fn errors(&self) -> &[ParsingError] {
        &self.errors
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ParsingError> {
        self.errors
    }

    fn add_error(&mut self, message: &str, line: u32, char_position: u32) {
        // Reporters count columns from 0.
        let error = ParsingError::new(message, line, char_position.saturating_add(1));
        tracing::debug!(%error, "parsing error recorded");
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests;
