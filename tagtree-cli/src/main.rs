//! tagtree CLI
//!
//! Reads lightweight tagged text and prints an indented outline of element
//! names and attributes, one nesting level per four spaces.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tagtree_common::warning::clear_warnings;
use tagtree_markup::{assemble, render};

/// Turn tagged text into an indented outline of element names and attributes.
#[derive(Parser)]
#[command(name = "tagtree", version, about)]
struct Args {
    /// Input file; reads standard input when omitted
    file: Option<PathBuf>,

    /// Lex this string instead of reading a file or stdin
    #[arg(long, value_name = "MARKUP", conflicts_with = "file")]
    markup: Option<String>,

    /// Print the parsed tag records instead of the outline
    #[arg(long, short)]
    tags: bool,

    /// Print the tag sequence as pretty JSON
    #[arg(long, short, conflicts_with = "tags")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    clear_warnings();

    let input = read_input(&args)?;
    let tags = assemble(&input).context("failed to lex input")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else if args.tags {
        for (index, tag) in tags.iter().enumerate() {
            println!("{}  {tag}", index.dimmed());
        }
    } else {
        print!("{}", render(&tags));
    }

    Ok(())
}

/// Resolve the input text from `--markup`, a file argument, or stdin.
fn read_input(args: &Args) -> Result<String> {
    if let Some(markup) = &args.markup {
        return Ok(markup.clone());
    }
    match &args.file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}
