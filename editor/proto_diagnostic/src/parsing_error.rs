//! A single user-facing syntax or semantic error.

use std::fmt;

/// Why a `ParsingError` could not be built.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidParsingError {
    #[error("parsing error message must not be empty")]
    EmptyMessage,
    #[error("parsing error line must be 1-based, got 0")]
    ZeroLine,
    #[error("parsing error column must be 1-based, got 0")]
    ZeroColumn,
}

/// An error located at a 1-based line and column.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParsingError {
    message: String,
    line: u32,
    col: u32,
}

impl ParsingError {
    /// Create a parsing error.
    ///
    /// # Panics
    /// Panics if `message` is empty or `line`/`col` is zero. Use `try_new`
    /// when the values come from an untrusted source.
    pub fn new(message: impl Into<String>, line: u32, col: u32) -> Self {
        Self::try_new(message, line, col).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a parsing error, rejecting an empty message and 0 positions.
    pub fn try_new(
        message: impl Into<String>,
        line: u32,
        col: u32,
    ) -> Result<Self, InvalidParsingError> {
        let message = message.into();
        if message.is_empty() {
            return Err(InvalidParsingError::EmptyMessage);
        }
        if line == 0 {
            return Err(InvalidParsingError::ZeroLine);
        }
        if col == 0 {
            return Err(InvalidParsingError::ZeroColumn);
        }
        Ok(ParsingError { message, line, col })
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column.
    #[inline]
    pub fn col(&self) -> u32 {
        self.col
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at line {} and column {} : {}",
            self.line, self.col, self.message
        )
    }
}
