//! Helper functions for the tag lexer.
//!
//! Cursor movement ("consume the next input character"), state transitions
//! ("switch to"), and the character classification predicate.

use super::core::{LexerState, TagLexer};

/// ASCII-alphanumeric test used for tag and property names.
///
/// The ranges are fixed: digits `0-9`, uppercase `A-Z`, lowercase `a-z`.
/// Deliberately narrower than Unicode alphanumerics - no underscore, no
/// hyphen, no non-ASCII letters - so the boundary is testable in isolation.
#[must_use]
pub const fn is_tag_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z')
}

impl TagLexer {
    /// Consume the next input character.
    ///
    /// Returns the character at the current position and advances the
    /// cursor, or `None` at end of input. This is the only place the lexer
    /// touches the character source.
    pub(super) fn consume(&mut self) -> Option<char> {
        if let Some(c) = self.input[self.pos..].chars().next() {
            self.pos += c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Transition to a new state. The next character is consumed by the
    /// next iteration of the per-tag loop; no character is ever reconsumed.
    pub(super) const fn switch_to(&mut self, new_state: LexerState) {
        self.state = new_state;
    }
}
