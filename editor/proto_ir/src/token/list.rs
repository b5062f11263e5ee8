//! Ordered token storage.

use super::Token;

/// A list of tokens in source order.
///
/// The tokenizer pushes tokens as it recognizes them and finishes with the
/// end-of-input sentinel; consumers treat the list as immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenList<K> {
    tokens: Vec<Token<K>>,
}

impl<K> TokenList<K> {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token<K>>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token<K>) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<K>> {
        self.tokens.get(index)
    }

    /// The last token; for a finished list this is the sentinel.
    #[inline]
    pub fn last(&self) -> Option<&Token<K>> {
        self.tokens.last()
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token<K>] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token<K>> {
        self.tokens.iter()
    }

    /// Consume into Vec.
    #[inline]
    pub fn into_vec(self) -> Vec<Token<K>> {
        self.tokens
    }
}

impl<K> std::ops::Index<usize> for TokenList<K> {
    type Output = Token<K>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, K> IntoIterator for &'a TokenList<K> {
    type Item = &'a Token<K>;
    type IntoIter = std::slice::Iter<'a, Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
