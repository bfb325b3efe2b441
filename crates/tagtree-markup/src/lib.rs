//! Tag lexer and outline renderer for lightweight tagged text.
//!
//! # Scope
//!
//! This crate implements the whole text-to-outline pipeline:
//!
//! - **Tag Lexer** - an explicit eight-state machine that consumes the
//!   characters of one `<...>` construct and produces one [`Tag`] record
//!   (name, kind, ordered property list)
//! - **Document Assembler** - the outer scan that discards text between
//!   tags and collects the ordered tag sequence
//! - **Renderer** - a linear fold over the tag sequence that prints element
//!   names and properties indented by nesting depth
//!
//! The lexer is deliberately not a validating parser: closing tags are never
//! matched against opening tags, no tree is built, and malformed input is
//! absorbed rather than rejected. The only reportable failure is input that
//! ends in the middle of a tag ([`LexError`]).

/// Lexer error types.
pub mod error;
/// Tag lexer state machine and tag data model.
pub mod lexer;
/// Outline renderer for the assembled tag sequence.
pub mod render;
/// Document assembler driving the lexer over a whole input.
pub mod scanner;

pub use error::LexError;
pub use lexer::{Tag, TagKind, TagLexer, TagProperty};
pub use render::render;
pub use scanner::assemble;
