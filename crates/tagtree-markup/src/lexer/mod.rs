//! Tag lexer module.
//!
//! Converts the characters of one `<...>` construct into a [`Tag`] record
//! using an explicit finite-state machine with one handler per state.

/// Tag lexer state machine implementation.
pub mod core;
/// Helper methods for cursor movement and character classification.
pub mod helpers;
/// Tag records produced by the lexer.
pub mod tag;

pub use self::core::{LexerState, TagLexer};
pub use tag::{Tag, TagKind, TagProperty};
