//! Parsing diagnostics.
//!
//! Syntax problems are data, not control flow: the tokenizer and parser
//! report into a `ParsingErrorListener`, and the host reads the collected
//! `ParsingError`s back in insertion order to display them.
//!
//! ```text
//! let mut listener = ParsingErrorListener::new();
//! listener.syntax_error(3, 0, "missing ';'");
//! assert_eq!(listener.errors()[0].col(), 1);
//! ```

mod listener;
mod parsing_error;

pub use listener::ParsingErrorListener;
pub use parsing_error::{InvalidParsingError, ParsingError};
