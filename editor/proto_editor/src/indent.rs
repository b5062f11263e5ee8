//! Indentation of a line from the line above it.

use proto_ir::TokenClassifier;

use crate::{Document, Line};

/// Indentation settings owned by the host editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndentConfig {
    /// Columns added after a line ending in `{`. A tab in existing
    /// indentation counts as this many columns too.
    pub indent_width: u32,
}

impl Default for IndentConfig {
    fn default() -> Self {
        IndentConfig { indent_width: 4 }
    }
}

/// New indentation for a line, and possibly for the line after it.
///
/// Offsets refer to the text before any indentation is changed, so a host
/// applying both edits should start with `closing_line_start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reindent {
    /// Start offset of the line to reindent.
    pub line_start: usize,
    /// Indentation column for that line.
    pub column: u32,
    /// Start of the following line, when it holds the `*/` of a block
    /// comment opened two lines up and takes the same column.
    pub closing_line_start: Option<usize>,
}

/// Compute the indentation of the line containing `offset`.
///
/// The column follows the previous line: its own indentation, plus
/// `indent_width` after an opening brace, plus one inside a freshly opened
/// block comment (to line up the `*`), minus one after a comment
/// terminator. Returns `None` on the first line.
///
/// # Panics
/// Panics if `offset` is past the end of the text or not on a char
/// boundary.
#[tracing::instrument(level = "trace", skip(document))]
pub fn reindent<C: TokenClassifier>(
    document: &Document<C>,
    offset: usize,
    config: &IndentConfig,
) -> Option<Reindent> {
    let current = document.line_at(offset);
    if current.number() == 1 {
        return None;
    }
    let previous = document.line_at(current.start_offset() - 1);

    let mut column = indentation_width(&previous, config);
    if previous.ends_with_open_brace() {
        column += config.indent_width;
    } else if previous.contains_block_comment_start() {
        column += 1;
    } else if previous.contains_block_comment_end() {
        column = column.saturating_sub(1);
    }

    let closing_line_start = if previous.contains_block_comment_start()
        && current.is_block_comment_interior()
        && current.end_offset() < document.len()
    {
        let next = document.line_at(current.end_offset() + 1);
        next.contains_block_comment_end().then_some(next.start_offset())
    } else {
        None
    };

    Some(Reindent {
        line_start: current.start_offset(),
        column,
        closing_line_start,
    })
}

/// Width in columns of a line's leading whitespace.
fn indentation_width(line: &Line, config: &IndentConfig) -> u32 {
    line.indentation()
        .chars()
        .map(|c| if c == '\t' { config.indent_width } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests;
