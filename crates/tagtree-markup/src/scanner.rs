//! Document assembler.
//!
//! The thin outer loop of the pipeline: discard characters until a `<`,
//! lex one tag, append it to the output sequence, repeat until the input is
//! exhausted. The sequence is append-only here and read-only everywhere
//! else.

use crate::error::LexError;
use crate::lexer::{Tag, TagLexer};

/// Assemble the ordered tag sequence for one input document.
///
/// Characters outside `<...>` spans are silently discarded; free text
/// between tags is not preserved. End of input between tags terminates
/// assembly normally, and the sequence produced so far is final.
///
/// # Errors
///
/// Propagates [`LexError`] when the input ends in the middle of a tag.
pub fn assemble(input: &str) -> Result<Vec<Tag>, LexError> {
    let mut lexer = TagLexer::new(input.to_string());
    let mut tags = Vec::new();

    while lexer.skip_to_tag_open() {
        tags.push(lexer.lex_tag()?);
    }

    Ok(tags)
}
