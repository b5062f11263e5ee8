//! Tokenizer for Protobuf sources using logos.
//!
//! Produces an exhaustive `TokenList`: every byte of the input belongs to
//! exactly one token, tokens are in source order without gaps, and the list
//! ends with a zero-width `Eof` sentinel at `source.len()`. Whitespace,
//! newlines and comments are kept because the editing assistant reasons
//! about positions inside and between them.
//!
//! Partial input is normal while typing, so nothing here fails:
//! - a quote without its closing partner becomes `UnterminatedStrLit`
//! - `/*` without `*/` becomes a `BlockComment` running to end of input
//! - any other unrecognized character becomes an `Error` token

mod classify;
mod raw_token;

pub use classify::ProtoClassifier;

use logos::Logos;
use proto_diagnostic::ParsingErrorListener;
use proto_ir::{Span, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// Tokenize `source` into a sentinel-terminated `TokenList`.
///
/// # Panics
/// Panics if `source` exceeds `u32::MAX` bytes.
pub fn tokenize(source: &str) -> TokenList<TokenKind> {
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut position = Position::START;
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let kind = match result {
            Ok(raw) => raw.into_kind(slice),
            Err(()) => TokenKind::Error,
        };

        tokens.push(position.token(kind, span));
        position.advance_over(slice, span.start);
    }

    let eof = Span::from_range(source.len()..source.len());
    tokens.push(position.token(TokenKind::Eof, eof));

    tracing::trace!(bytes = source.len(), tokens = tokens.len(), "tokenized");
    tokens
}

/// Tokenize `source`, reporting every unrecognized character to `listener`.
///
/// Messages follow the usual recognizer wording,
/// `token recognition error at: '<text>'`, located at the offending
/// token's line and column.
pub fn tokenize_with_errors(
    source: &str,
    listener: &mut ParsingErrorListener,
) -> TokenList<TokenKind> {
    let tokens = tokenize(source);

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Error) {
        let text = &source[token.span.to_range()];
        listener.syntax_error(
            token.line,
            token.column,
            &format!("token recognition error at: '{}'", text.escape_debug()),
        );
    }

    tokens
}

/// Line bookkeeping while walking the token stream.
#[derive(Clone, Copy, Debug)]
struct Position {
    /// 1-based line of the next token.
    line: u32,
    /// Byte offset where that line starts.
    line_start: u32,
}

impl Position {
    const START: Position = Position {
        line: 1,
        line_start: 0,
    };

    fn token(self, kind: TokenKind, span: Span) -> Token<TokenKind> {
        Token::new(kind, span, self.line, span.start - self.line_start)
    }

    /// Move past a token's text, counting the line breaks it contains.
    fn advance_over(&mut self, slice: &str, start: u32) {
        let bytes = slice.as_bytes();
        let Some(last_newline) = memchr::memrchr(b'\n', bytes) else {
            return;
        };
        let newlines = memchr::memchr_iter(b'\n', bytes).count();
        self.line += to_u32(newlines);
        self.line_start = start + to_u32(last_newline) + 1;
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX))
}
