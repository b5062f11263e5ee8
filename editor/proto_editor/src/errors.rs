//! Construction errors for the document model and typing assistants.
//!
//! These describe caller bugs. The panicking constructors format the same
//! messages; the `try_` variants hand them back instead.

/// A token list that does not describe its text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("token list is empty")]
    EmptyTokens,
    #[error("token list does not end with the end-of-input sentinel")]
    MissingEndSentinel,
    /// Token `index` does not start where its predecessor ends.
    #[error("token {index} starts at {start}, expected {expected}")]
    Gap {
        index: usize,
        start: usize,
        expected: usize,
    },
    #[error("end-of-input sentinel sits at {found} but the text is {len} bytes long")]
    SentinelOffset { found: usize, len: usize },
}

/// An offset that cannot anchor a keystroke in the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypingError {
    #[error("offset {offset} is past the end of the text ({len} bytes)")]
    OffsetOutOfRange { offset: usize, len: usize },
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Line fields that break the line invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line numbers are 1-based, got 0")]
    ZeroNumber,
    #[error("line {number} cannot start at offset {start_offset}")]
    MisplacedStart { number: usize, start_offset: usize },
    #[error("line ends at {end_offset} before it starts at {start_offset}")]
    EndBeforeStart {
        start_offset: usize,
        end_offset: usize,
    },
    #[error("line text contains a newline")]
    EmbeddedNewline,
}
