//! Physical lines of a document snapshot.

use std::fmt;

use crate::LineError;

const OPENING_BRACE: char = '{';
pub(crate) const BLOCK_COMMENT_START: &str = "/*";
pub(crate) const BLOCK_COMMENT_END: &str = "*/";
pub(crate) const BLOCK_COMMENT_LINE: &str = "*";

/// One line of text, without its terminating newline.
///
/// `start_offset` is the byte offset of the first character, `end_offset`
/// the offset of the terminating `\n` (or the text length on the last
/// line). Line 1 is the only line starting at offset 0.
///
/// The structural flags are pure functions of `text`; a `Line` is computed
/// on demand from a `Document` and never updated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    number: usize,
    start_offset: usize,
    end_offset: usize,
    text: String,
}

impl Line {
    /// Create a line, panicking if the fields break the line invariants.
    pub fn new(number: usize, start_offset: usize, end_offset: usize, text: String) -> Self {
        Self::try_new(number, start_offset, end_offset, text).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        number: usize,
        start_offset: usize,
        end_offset: usize,
        text: String,
    ) -> Result<Self, LineError> {
        if number == 0 {
            return Err(LineError::ZeroNumber);
        }
        if (number == 1) != (start_offset == 0) {
            return Err(LineError::MisplacedStart {
                number,
                start_offset,
            });
        }
        if end_offset < start_offset {
            return Err(LineError::EndBeforeStart {
                start_offset,
                end_offset,
            });
        }
        if memchr::memchr(b'\n', text.as_bytes()).is_some() {
            return Err(LineError::EmbeddedNewline);
        }
        Ok(Line {
            number,
            start_offset,
            end_offset,
            text,
        })
    }

    /// 1-based line number.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    #[inline]
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The leading whitespace of the line.
    pub fn indentation(&self) -> &str {
        let end = self
            .text
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    /// True when the last non-whitespace character is `{`.
    pub fn ends_with_open_brace(&self) -> bool {
        self.text.trim_end().ends_with(OPENING_BRACE)
    }

    pub fn contains_block_comment_start(&self) -> bool {
        self.text.contains(BLOCK_COMMENT_START)
    }

    pub fn contains_block_comment_end(&self) -> bool {
        self.text.contains(BLOCK_COMMENT_END)
    }

    /// True for a `*` continuation line inside a block comment: it holds a
    /// `*` but neither comment marker.
    pub fn is_block_comment_interior(&self) -> bool {
        self.text.contains(BLOCK_COMMENT_LINE)
            && !self.contains_block_comment_start()
            && !self.contains_block_comment_end()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line{{number={}, startOffset={}, endOffset={}, text='{}'}}",
            self.number, self.start_offset, self.end_offset, self.text
        )
    }
}
