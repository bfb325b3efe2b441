//! Outline renderer.
//!
//! A single left-to-right pass over the assembled tag sequence carrying one
//! integer indentation counter. This is a linear fold, not a tree walk: no
//! stack of open tag names exists, and a closing tag's name is never checked
//! against anything.

use std::fmt::Write;

use tagtree_common::warning::warn_once;

use crate::lexer::{Tag, TagKind};

/// Number of spaces added per nesting level.
const INDENT_STEP: i32 = 4;

/// Render the tag sequence as an indentation-formatted outline.
///
/// Every non-closing tag emits one `name:` line at the current indentation
/// followed by one `name = value` line per property, indented one extra
/// step. Opening tags then deepen the indentation by one step and closing
/// tags shallow it by one; self-closing tags leave it unchanged.
///
/// The counter is never clamped: an input with more closing than opening
/// tags drives it negative, which is reported once on stderr while the
/// emitted leading whitespace bottoms out at column zero.
#[must_use]
pub fn render(tags: &[Tag]) -> String {
    let mut out = String::new();
    let mut indentation: i32 = 0;

    for tag in tags {
        if tag.kind != TagKind::Closing {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}{}:", leading_spaces(indentation), tag.name);
            for prop in &tag.properties {
                let _ = writeln!(
                    out,
                    "{}{} = {}",
                    leading_spaces(indentation + INDENT_STEP),
                    prop.name,
                    prop.value
                );
            }
        }

        match tag.kind {
            TagKind::Closing => indentation -= INDENT_STEP,
            TagKind::Opening => indentation += INDENT_STEP,
            TagKind::SelfClosing => {}
        }

        if indentation < 0 {
            warn_once("Renderer", "more closing tags than opening tags");
        }
    }

    out
}

/// Leading whitespace for one output line. A negative level renders as
/// column zero; the counter itself keeps its value.
fn leading_spaces(level: i32) -> String {
    " ".repeat(usize::try_from(level).unwrap_or(0))
}
