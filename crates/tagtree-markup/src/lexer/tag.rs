use core::fmt;

use serde::Serialize;

/// One name/value pair attached to a tag.
///
/// The name is accumulated from ASCII-alphanumeric input characters; the
/// value is built strictly from the content between an opening and a closing
/// double quote and may contain any character except the quote itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagProperty {
    /// Property name (ASCII alphanumeric).
    pub name: String,
    /// Property value (arbitrary characters, quote-delimited in the source).
    pub value: String,
}

impl TagProperty {
    /// Create a new property with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// The three tag forms, determined by the position of a `/` character.
///
/// A `/` immediately after the opening `<` marks the tag `Closing`; a `/`
/// before the closing `>` marks it `SelfClosing`; absent either signal the
/// tag is `Opening`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TagKind {
    /// `<name ...>` - opens one nesting level.
    #[default]
    Opening,
    /// `</name>` - closes one nesting level.
    Closing,
    /// `<name .../>` - leaves the nesting level unchanged.
    SelfClosing,
}

/// One parsed `<...>` construct.
///
/// A `Tag` is created empty when the assembler sees `<`, mutated field by
/// field by the lexer's state handlers while exactly one tag is being lexed,
/// then frozen and appended to the output sequence. It is never revisited
/// except for read-only traversal by the renderer.
///
/// Note that a `Closing` tag still accumulates a name and may carry
/// properties; the renderer ignores both, but the record keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name. Empty only transiently during lexing.
    pub name: String,
    /// Which of the three tag forms this is.
    pub kind: TagKind,
    /// Properties in insertion order. Duplicate names are kept as separate
    /// entries; this is a sequence, not a map.
    pub properties: Vec<TagProperty>,
}

impl Tag {
    /// Create an empty tag record.
    ///
    /// A freshly created tag is `Opening`; the lexer upgrades the kind when
    /// it sees a `/` in a position that signals otherwise.
    #[must_use]
    pub const fn new_empty() -> Self {
        Self {
            name: String::new(),
            kind: TagKind::Opening,
            properties: Vec::new(),
        }
    }

    /// Append one character to the tag name.
    pub fn append_to_name(&mut self, c: char) {
        self.name.push(c);
    }

    /// Mark the tag as a closing tag (leading `/` seen).
    pub const fn mark_closing(&mut self) {
        self.kind = TagKind::Closing;
    }

    /// Mark the tag as self-closing (trailing `/` seen).
    pub const fn mark_self_closing(&mut self) {
        self.kind = TagKind::SelfClosing;
    }

    /// Start a new property with empty name and value.
    pub fn start_new_property(&mut self) {
        self.properties.push(TagProperty::default());
    }

    /// Append one character to the current (last) property's name.
    pub fn append_to_property_name(&mut self, c: char) {
        if let Some(prop) = self.properties.last_mut() {
            prop.name.push(c);
        }
    }

    /// Append one character to the current (last) property's value.
    pub fn append_to_property_value(&mut self, c: char) {
        if let Some(prop) = self.properties.last_mut() {
            prop.value.push(c);
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TagKind::Closing => write!(f, "</{}", self.name)?,
            TagKind::Opening | TagKind::SelfClosing => write!(f, "<{}", self.name)?,
        }
        for prop in &self.properties {
            write!(f, " {}=\"{}\"", prop.name, prop.value)?;
        }
        if self.kind == TagKind::SelfClosing {
            write!(f, " /")?;
        }
        write!(f, ">")
    }
}
