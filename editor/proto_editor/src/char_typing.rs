//! Per-keystroke decision for bracket and quote characters.

use proto_ir::TokenClassifier;

use crate::{Document, TypingError};

const ESCAPE: u8 = b'\\';
const SPACE: u8 = b' ';

/// The typing of one character at one offset.
///
/// Starts out inserting the typed character with the caret right after it.
/// `complete_opening_char`, `skip_closing_char` and `complete_quote` may
/// then append to or clear the insertion text; the caret offset never
/// moves. Build a fresh value for every keystroke.
#[derive(Debug)]
pub struct CharTyping<'d, C: TokenClassifier> {
    document: &'d Document<C>,
    offset: usize,
    typed_char: char,
    insertion_text: String,
    insertion_offset: usize,
}

impl<'d, C: TokenClassifier> CharTyping<'d, C> {
    /// # Panics
    /// Panics if `offset` is past the end of the text or not on a char
    /// boundary.
    pub fn new(document: &'d Document<C>, offset: usize, typed_char: char) -> Self {
        Self::try_new(document, offset, typed_char).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(
        document: &'d Document<C>,
        offset: usize,
        typed_char: char,
    ) -> Result<Self, TypingError> {
        check_caret(document, offset)?;
        Ok(CharTyping {
            document,
            offset,
            typed_char,
            insertion_text: typed_char.to_string(),
            insertion_offset: offset + typed_char.len_utf8(),
        })
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn typed_char(&self) -> char {
        self.typed_char
    }

    /// The text to insert at `offset`.
    #[inline]
    pub fn insertion_text(&self) -> &str {
        &self.insertion_text
    }

    /// The caret offset once `insertion_text` is inserted.
    #[inline]
    pub fn insertion_offset(&self) -> usize {
        self.insertion_offset
    }

    /// Run the rule matching the typed character.
    ///
    /// Returns false, leaving the insertion untouched, for characters no
    /// rule handles.
    pub fn apply(&mut self) -> bool {
        match self.typed_char {
            '(' | '{' | '[' => self.complete_opening_char(),
            ')' | '}' | ']' => self.skip_closing_char(),
            '"' | '\'' => self.complete_quote(),
            _ => return false,
        }
        true
    }

    /// Append the matching closer unless the caret is inside a string or a
    /// comment.
    ///
    /// # Panics
    /// Panics unless the typed character is `(`, `{` or `[`.
    pub fn complete_opening_char(&mut self) {
        let closing = closing_char_for(self.typed_char)
            .unwrap_or_else(|| panic!("{:?} is not an opening character", self.typed_char));

        if !self.document.is_in_string(self.offset) && !self.document.is_in_comment(self.offset) {
            tracing::debug!(offset = self.offset, %closing, "auto-closing");
            self.insertion_text.push(closing);
        }
    }

    /// Type over an identical closer already at the caret, outside strings
    /// and comments.
    ///
    /// # Panics
    /// Panics unless the typed character is `)`, `}` or `]`.
    pub fn skip_closing_char(&mut self) {
        assert!(
            matches!(self.typed_char, ')' | '}' | ']'),
            "{:?} is not a closing character",
            self.typed_char
        );

        if self.next_char_is_typed()
            && !self.document.is_in_string(self.offset)
            && !self.document.is_in_comment(self.offset)
        {
            tracing::debug!(offset = self.offset, "typing over closing character");
            self.insertion_text.clear();
        }
    }

    /// Auto-close a quote, or type over the closing quote of the string
    /// the caret is in.
    ///
    /// A quote typed right after a backslash is left alone, and so is one
    /// typed when the same quote already waits after a run of spaces.
    ///
    /// # Panics
    /// Panics unless the typed character is `"` or `'`.
    pub fn complete_quote(&mut self) {
        assert!(
            matches!(self.typed_char, '"' | '\''),
            "{:?} is not a quote",
            self.typed_char
        );

        let in_string = self.document.is_in_string(self.offset);

        if !in_string
            && !self.document.is_in_comment(self.offset)
            && !self.is_escaped()
            && !self.quote_waits_ahead()
        {
            tracing::debug!(offset = self.offset, "auto-closing quote");
            self.insertion_text.push(self.typed_char);
        }

        if in_string && self.next_char_is_typed() && !self.is_escaped() {
            tracing::debug!(offset = self.offset, "typing over closing quote");
            self.insertion_text.clear();
        }
    }

    fn bytes(&self) -> &[u8] {
        self.document.text().as_bytes()
    }

    fn next_char_is_typed(&self) -> bool {
        self.document.text()[self.offset..].starts_with(self.typed_char)
    }

    fn is_escaped(&self) -> bool {
        self.offset > 0 && self.bytes()[self.offset - 1] == ESCAPE
    }

    /// True when the first non-space character after the caret is the
    /// typed quote.
    fn quote_waits_ahead(&self) -> bool {
        self.bytes()[self.offset..]
            .iter()
            .find(|&&b| b != SPACE)
            .is_some_and(|&b| char::from(b) == self.typed_char)
    }
}

fn closing_char_for(opening: char) -> Option<char> {
    match opening {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Check that `offset` is a caret position in `document`.
pub(crate) fn check_caret<C: TokenClassifier>(
    document: &Document<C>,
    offset: usize,
) -> Result<(), TypingError> {
    let text = document.text();
    if offset > text.len() {
        return Err(TypingError::OffsetOutOfRange {
            offset,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        return Err(TypingError::NotCharBoundary { offset });
    }
    Ok(())
}
