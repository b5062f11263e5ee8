//! Token-aware document model and typing assistant for Protobuf editors.
//!
//! On every keystroke the host editor builds a fresh `Document` from the
//! buffer text and asks it, or one of the single-use assistants built on
//! it, how to react:
//!
//! - `CharTyping`: auto-close brackets and quotes, type over closers
//! - `BreakTyping`: newline handling between braces and in block comments
//! - `reindent`: indentation column for a line from its predecessor
//! - `Document::matching_brace`: the partner of a bracket under the caret
//!
//! Nothing here builds a syntax tree. Every decision comes from the token
//! stream and the lines around the caret.

mod braces;
mod break_typing;
mod char_typing;
mod document;
mod errors;
mod indent;
mod line;

#[cfg(test)]
mod test_support;

use std::sync::Once;

use proto_diagnostic::ParsingErrorListener;
pub use proto_lexer::ProtoClassifier;

pub use braces::BracePair;
pub use break_typing::BreakTyping;
pub use char_typing::CharTyping;
pub use document::{Bias, Document};
pub use errors::{DocumentError, LineError, TypingError};
pub use indent::{reindent, IndentConfig, Reindent};
pub use line::Line;

/// A document over Protobuf tokens.
pub type ProtoDocument = Document<ProtoClassifier>;

impl Document<ProtoClassifier> {
    /// Tokenize `text` as Protobuf and build its document.
    pub fn protobuf(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = proto_lexer::tokenize(&text);
        Document::new(text, tokens, ProtoClassifier)
    }

    /// Like `protobuf`, also reporting unrecognized characters to
    /// `listener`.
    pub fn protobuf_with_errors(text: impl Into<String>, listener: &mut ParsingErrorListener) -> Self {
        let text = text.into();
        let tokens = proto_lexer::tokenize_with_errors(&text, listener);
        Document::new(text, tokens, ProtoClassifier)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Call this once from the host. Does nothing unless `RUST_LOG` is set,
/// and only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
