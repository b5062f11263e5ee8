//! Proto IR - shared lexical types
//!
//! This crate contains the data every other crate agrees on:
//! - `Span` for byte ranges in a text snapshot
//! - `Token<K>` and `TokenList<K>` for tokenizer output, generic over the
//!   grammar's token kind
//! - `TokenClassifier`, the per-grammar strategy that tells the document
//!   model which kinds are strings, comments and end-of-input
//! - The Protobuf vocabulary (`TokenKind`) and its highlighting
//!   categories (`TokenCategory`)
//!
//! Offsets are byte offsets into UTF-8 text.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenCategory, TokenClassifier, TokenKind, TokenList};
