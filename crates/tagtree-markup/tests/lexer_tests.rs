//! Integration tests for the tag lexer state machine.

use tagtree_markup::lexer::helpers::is_tag_char;
use tagtree_markup::{LexError, Tag, TagKind, TagProperty, assemble};

/// Helper to lex an input that must contain exactly one tag
fn lex_one(input: &str) -> Tag {
    let tags = assemble(input).expect("lexing failed");
    assert_eq!(tags.len(), 1, "expected exactly one tag in {input:?}");
    tags.into_iter().next().expect("tag sequence is non-empty")
}

fn prop(name: &str, value: &str) -> TagProperty {
    TagProperty::new(name.to_string(), value.to_string())
}

#[test]
fn test_opening_tag() {
    let tag = lex_one("<a>");
    assert_eq!(tag.name, "a");
    assert_eq!(tag.kind, TagKind::Opening);
    assert!(tag.properties.is_empty());
}

#[test]
fn test_closing_tag_keeps_name() {
    let tag = lex_one("</a>");
    assert_eq!(tag.name, "a");
    assert_eq!(tag.kind, TagKind::Closing);
    assert!(tag.properties.is_empty());
}

#[test]
fn test_self_closing_tag() {
    let tag = lex_one("<a/>");
    assert_eq!(tag.name, "a");
    assert_eq!(tag.kind, TagKind::SelfClosing);
    assert!(tag.properties.is_empty());
}

#[test]
fn test_properties_preserve_order() {
    let tag = lex_one(r#"<a x="1" y="2">"#);
    assert_eq!(tag.name, "a");
    assert_eq!(tag.kind, TagKind::Opening);
    assert_eq!(tag.properties, vec![prop("x", "1"), prop("y", "2")]);
}

#[test]
fn test_duplicate_property_names_are_kept() {
    let tag = lex_one(r#"<a x="1" x="2">"#);
    assert_eq!(tag.properties, vec![prop("x", "1"), prop("x", "2")]);
}

#[test]
fn test_closing_tag_may_carry_properties() {
    // The grammar allows a closing tag to carry a name and properties; the
    // renderer never looks at them but the record keeps them.
    let tag = lex_one(r#"</a x="1">"#);
    assert_eq!(tag.kind, TagKind::Closing);
    assert_eq!(tag.name, "a");
    assert_eq!(tag.properties, vec![prop("x", "1")]);
}

#[test]
fn test_value_keeps_structural_characters() {
    // `<` and `>` are data inside a quoted value, not tag delimiters.
    let tag = lex_one(r#"<a x="<b>">"#);
    assert_eq!(tag.kind, TagKind::Opening);
    assert_eq!(tag.properties, vec![prop("x", "<b>")]);
}

#[test]
fn test_value_keeps_slashes_and_spaces() {
    // A `/` inside a quoted value must not flip the tag to self-closing.
    let tag = lex_one(r#"<a href="some /odd path">"#);
    assert_eq!(tag.kind, TagKind::Opening);
    assert_eq!(tag.properties, vec![prop("href", "some /odd path")]);
}

#[test]
fn test_whitespace_between_tokens_is_ignored() {
    let tag = lex_one("<a   x = \"1\"   y = \"2\" >");
    assert_eq!(tag.name, "a");
    assert_eq!(tag.properties, vec![prop("x", "1"), prop("y", "2")]);
}

#[test]
fn test_self_closing_after_properties() {
    let tag = lex_one(r#"<a x="1"/>"#);
    assert_eq!(tag.kind, TagKind::SelfClosing);
    assert_eq!(tag.properties, vec![prop("x", "1")]);
}

#[test]
fn test_name_accumulation_starts_at_first_character() {
    // The first character after `<` starts the name even when it is not
    // alphanumeric; only later name characters are filtered.
    let tag = lex_one("<#a>");
    assert_eq!(tag.name, "#a");
    assert_eq!(tag.kind, TagKind::Opening);
}

#[test]
fn test_unterminated_tag_is_an_error() {
    match assemble("text <a x") {
        Err(LexError::UnterminatedTag { position, .. }) => assert_eq!(position, 5),
        other => panic!("expected UnterminatedTag, got {other:?}"),
    }
}

#[test]
fn test_unterminated_value_is_an_error() {
    match assemble(r#"<a x="1"#) {
        Err(LexError::UnterminatedValue { position }) => assert_eq!(position, 0),
        other => panic!("expected UnterminatedValue, got {other:?}"),
    }
}

#[test]
fn test_lexing_is_repeatable() {
    let input = r#"<a x="1"><b/></a>"#;
    let first = assemble(input).expect("first pass failed");
    let second = assemble(input).expect("second pass failed");
    assert_eq!(first, second);
}

#[test]
fn test_display_matches_source_shape() {
    assert_eq!(lex_one(r#"<a x="1">"#).to_string(), r#"<a x="1">"#);
    assert_eq!(lex_one("</a>").to_string(), "</a>");
    assert_eq!(lex_one("<a/>").to_string(), "<a />");
}

#[test]
fn test_tag_char_predicate_boundaries() {
    assert!(is_tag_char('0'));
    assert!(is_tag_char('9'));
    assert!(is_tag_char('A'));
    assert!(is_tag_char('Z'));
    assert!(is_tag_char('a'));
    assert!(is_tag_char('z'));

    // Explicitly outside the fixed ASCII ranges.
    assert!(!is_tag_char('_'));
    assert!(!is_tag_char('-'));
    assert!(!is_tag_char(' '));
    assert!(!is_tag_char('/'));
    assert!(!is_tag_char('"'));
    assert!(!is_tag_char('é'));
}
