//! Per-keystroke decision for the Enter key.

use proto_ir::TokenClassifier;

use crate::char_typing::check_caret;
use crate::{Document, TypingError};

const NEWLINE: &str = "\n";
const CLOSE_BLOCK_COMMENT: &str = "\n * \n */";
const ADD_BLOCK_COMMENT_LINE: &str = "\n * ";
/// Caret position inside both block comment insertions, right after `" * "`.
const BLOCK_COMMENT_CARET: usize = 4;

/// A line break typed at one offset.
///
/// Starts out inserting `"\n"` with the caret after it; `apply` may
/// replace both. Build a fresh value for every keystroke.
#[derive(Debug)]
pub struct BreakTyping<'d, C: TokenClassifier> {
    document: &'d Document<C>,
    offset: usize,
    insertion_text: String,
    insertion_offset: usize,
}

impl<'d, C: TokenClassifier> BreakTyping<'d, C> {
    /// # Panics
    /// Panics if `offset` is past the end of the text or not on a char
    /// boundary.
    pub fn new(document: &'d Document<C>, offset: usize) -> Self {
        Self::try_new(document, offset).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(document: &'d Document<C>, offset: usize) -> Result<Self, TypingError> {
        check_caret(document, offset)?;
        Ok(BreakTyping {
            document,
            offset,
            insertion_text: NEWLINE.to_owned(),
            insertion_offset: offset + 1,
        })
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn insertion_text(&self) -> &str {
        &self.insertion_text
    }

    #[inline]
    pub fn insertion_offset(&self) -> usize {
        self.insertion_offset
    }

    /// Apply the break rules in order; a later match overrides an earlier
    /// one.
    ///
    /// 1. Between `{` and `}`: open an empty line carrying the current
    ///    line's indentation, caret on the empty line.
    /// 2. On the opening line of an unclosed block comment: add a `*` line
    ///    and the terminator.
    /// 3. Inside a block comment: add a `*` line.
    pub fn apply(&mut self) {
        let offset = self.offset;

        if self.is_between_braces() {
            let indentation = self.document.line_at(offset).indentation().to_owned();
            self.insertion_text = format!("\n\n{indentation}");
            self.insertion_offset = offset + 1;
        }

        if self.document.should_close_block_comment(offset) {
            self.insertion_text = CLOSE_BLOCK_COMMENT.to_owned();
            self.insertion_offset = offset + BLOCK_COMMENT_CARET;
        }

        if self.document.should_add_line_to_block_comment(offset) {
            self.insertion_text = ADD_BLOCK_COMMENT_LINE.to_owned();
            self.insertion_offset = offset + BLOCK_COMMENT_CARET;
        }

        tracing::debug!(
            offset,
            insertion = ?self.insertion_text,
            caret = self.insertion_offset,
            "line break"
        );
    }

    fn is_between_braces(&self) -> bool {
        let offset = self.offset;
        let bytes = self.document.text().as_bytes();
        0 < offset && offset < bytes.len() && bytes[offset - 1] == b'{' && bytes[offset] == b'}'
    }
}
