//! Error types for tag lexing.
//!
//! The lexer absorbs malformed input rather than rejecting it; the only
//! failures it can report are the two ways the input can end in the middle
//! of a tag.

use thiserror::Error;

/// Failure while lexing a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input ended before the terminal `>` of the current tag was read.
    #[error("unterminated tag starting at byte {position} (input ended in the {state} state)")]
    UnterminatedTag {
        /// Byte offset of the tag's opening `<` in the input.
        position: usize,
        /// Name of the lexer state active when the input ended.
        state: String,
    },

    /// Input ended inside a double-quoted property value, before the
    /// closing quote.
    #[error("unterminated property value in tag starting at byte {position}")]
    UnterminatedValue {
        /// Byte offset of the tag's opening `<` in the input.
        position: usize,
    },
}
