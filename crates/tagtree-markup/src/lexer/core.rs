use strum_macros::Display;

use super::helpers::is_tag_char;
use super::tag::Tag;
use crate::error::LexError;

/// The tag lexer state machine. One variant per scanning phase of a single
/// `<...>` construct; the lexer enters `TagOpen` immediately after the
/// opening `<` and runs until the terminal `>` is consumed by the per-tag
/// loop (there is no explicit end-of-tag state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LexerState {
    /// Just after the opening `<`; a leading `/` marks the tag closing,
    /// any other character starts the name.
    TagOpen,
    /// Accumulating the tag name.
    TagName,
    /// Name finished; waiting for a property or the self-close marker.
    TagNameEnd,
    /// Self-close marker seen; remaining characters are discarded until the
    /// terminal `>`.
    TagClose,
    /// Accumulating a property name.
    PropertyName,
    /// Property name finished; waiting for the opening `"` of its value.
    PropertyNameEnd,
    /// Inside a double-quoted property value.
    PropertyValue,
    /// Value finished; waiting for another property or the self-close
    /// marker.
    PropertyValueEnd,
}

/// The lexer over one input document.
///
/// Owns the character source (an input string and a byte cursor) and the
/// tag record under construction. [`TagLexer::lex_tag`] runs the state
/// machine for exactly one tag; the assembler in [`crate::scanner`] drives
/// the outer skip-and-lex loop.
pub struct TagLexer {
    pub(super) input: String,
    pub(super) pos: usize,
    pub(super) state: LexerState,
    pub(super) current_tag: Tag,
    /// Byte offset of the `<` that opened the tag being lexed. Reported in
    /// errors when input ends mid-tag.
    pub(super) tag_start: usize,
}

impl TagLexer {
    /// Create a new lexer over the given input.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            pos: 0,
            state: LexerState::TagOpen,
            current_tag: Tag::new_empty(),
            tag_start: 0,
        }
    }

    /// Advance through the input discarding characters until a `<` is
    /// consumed. Returns `false` if the input ends first, which terminates
    /// assembly normally. Text outside `<...>` spans is not preserved.
    pub fn skip_to_tag_open(&mut self) -> bool {
        while let Some(c) = self.consume() {
            if c == '<' {
                self.tag_start = self.pos - 1;
                return true;
            }
        }
        false
    }

    /// Lex one tag, starting just after the opening `<`.
    ///
    /// Consumes characters up to and including the first terminal `>` and
    /// returns the populated [`Tag`]. The `>` itself is never dispatched to
    /// a state handler; the loop condition is the terminal check. A `>`
    /// inside a double-quoted property value is data, not a terminator.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedTag`] (or
    /// [`LexError::UnterminatedValue`] when the end falls inside a quoted
    /// value) if the input is exhausted before the terminal `>`.
    pub fn lex_tag(&mut self) -> Result<Tag, LexError> {
        self.current_tag = Tag::new_empty();
        self.state = LexerState::TagOpen;

        loop {
            let Some(c) = self.consume() else {
                return Err(self.unterminated_error());
            };
            if c == '>' && self.state != LexerState::PropertyValue {
                break;
            }
            match self.state {
                LexerState::TagOpen => self.handle_tag_open_state(c),
                LexerState::TagName => self.handle_tag_name_state(c),
                LexerState::TagNameEnd => self.handle_tag_name_end_state(c),
                LexerState::PropertyName => self.handle_property_name_state(c),
                LexerState::PropertyNameEnd => self.handle_property_name_end_state(c),
                LexerState::PropertyValue => self.handle_property_value_state(c),
                LexerState::PropertyValueEnd => self.handle_property_value_end_state(c),
                // Everything after the self-close marker is discarded.
                LexerState::TagClose => {}
            }
        }

        Ok(std::mem::take(&mut self.current_tag))
    }

    /// Just after the opening `<`.
    ///
    /// A `/` marks the tag closing and stays in this state, so a closing
    /// tag's name is still accumulated. Any other character - alphanumeric
    /// or not - becomes the first name character.
    fn handle_tag_open_state(&mut self, c: char) {
        if c == '/' {
            self.current_tag.mark_closing();
        } else {
            self.switch_to(LexerState::TagName);
            self.current_tag.append_to_name(c);
        }
    }

    /// Accumulating the tag name.
    fn handle_tag_name_state(&mut self, c: char) {
        if is_tag_char(c) {
            self.current_tag.append_to_name(c);
        } else if c == '/' {
            self.current_tag.mark_self_closing();
            self.switch_to(LexerState::TagClose);
        } else {
            self.switch_to(LexerState::TagNameEnd);
        }
    }

    /// Name finished; waiting for a property or the self-close marker.
    /// Whitespace and other insignificant characters are ignored.
    fn handle_tag_name_end_state(&mut self, c: char) {
        if c == '/' {
            self.current_tag.mark_self_closing();
            self.switch_to(LexerState::TagClose);
        } else if is_tag_char(c) {
            self.current_tag.start_new_property();
            self.current_tag.append_to_property_name(c);
            self.switch_to(LexerState::PropertyName);
        }
    }

    /// Accumulating a property name. Any non-alphanumeric character ends the
    /// name and is discarded.
    fn handle_property_name_state(&mut self, c: char) {
        if is_tag_char(c) {
            self.current_tag.append_to_property_name(c);
        } else {
            self.switch_to(LexerState::PropertyNameEnd);
        }
    }

    /// Property name finished; everything up to the opening `"` (typically
    /// `=` and whitespace) is ignored.
    fn handle_property_name_end_state(&mut self, c: char) {
        if c == '"' {
            self.switch_to(LexerState::PropertyValue);
        }
    }

    /// Inside a double-quoted value. The closing `"` is the only character
    /// with structural meaning; there are no escape sequences.
    fn handle_property_value_state(&mut self, c: char) {
        if c == '"' {
            self.switch_to(LexerState::PropertyValueEnd);
        } else {
            self.current_tag.append_to_property_value(c);
        }
    }

    /// Value finished; waiting for another property or the self-close
    /// marker.
    fn handle_property_value_end_state(&mut self, c: char) {
        if c == '/' {
            self.current_tag.mark_self_closing();
            self.switch_to(LexerState::TagClose);
        } else if is_tag_char(c) {
            self.current_tag.start_new_property();
            self.current_tag.append_to_property_name(c);
            self.switch_to(LexerState::PropertyName);
        }
    }

    fn unterminated_error(&self) -> LexError {
        if self.state == LexerState::PropertyValue {
            LexError::UnterminatedValue {
                position: self.tag_start,
            }
        } else {
            LexError::UnterminatedTag {
                position: self.tag_start,
                state: self.state.to_string(),
            }
        }
    }
}
