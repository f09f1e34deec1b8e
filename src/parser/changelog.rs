//! Markdown changelog parser.
//!
//! Reads the `# Title` / `## Version (Date)` / `- [tag] item` conventions
//! into an ordered release list. Item text may soft-wrap onto lines
//! indented by two spaces; wrapped lines are joined with a single space.
//!
//! The only hard failure is structural: an item line before any version
//! subtitle has no release to attach to.

use crate::model::{Release, ReleaseItem};
use crate::scanner::{CharScanner, TokenScanner};
use anyhow::{bail, Result};

/// Tokens produced by the first pass over a changelog.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `# Title` — recognized so title lines never bleed into items, but
    /// never attached to a release
    Title { text: String },
    /// `## Version (Date)`
    Subtitle { version: String, date: String },
    /// `- [tag] text`, wrapped lines folded
    Item { tags: Vec<String>, text: String },
    Eof,
}

/// Parse a changelog into releases, newest first (document order).
pub fn parse(input: &str) -> Result<Vec<Release>> {
    let mut tokens = TokenScanner::new(tokenize(input));
    let mut releases: Vec<Release> = Vec::new();

    loop {
        tokens.read();
        match tokens.current() {
            Some(Token::Subtitle { version, date }) => {
                releases.push(Release {
                    version: version.clone(),
                    date: date.clone(),
                    items: Vec::new(),
                });
            }
            Some(Token::Item { tags, text }) => {
                let item = ReleaseItem {
                    tags: tags.clone(),
                    text: text.clone(),
                };
                let Some(release) = releases.last_mut() else {
                    bail!("changelog item appears before any version subtitle");
                };
                release.items.push(item);
            }
            Some(Token::Title { .. }) => {}
            Some(Token::Eof) | None => break,
        }
    }

    Ok(releases)
}

// -- Tokenizer ----------------------------------------------------------------

/// Tokenize a changelog. Markers are only recognized at the start of a
/// line (the start of input counts); everything else is consumed and
/// ignored. The token list always ends with `Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = CharScanner::new(input);
    let mut tokens = Vec::new();
    let mut at_line_start = true;

    loop {
        if scanner.peek(1).is_none() {
            tokens.push(Token::Eof);
            break;
        }
        if at_line_start {
            if scanner.peek(3) == Some("## ") {
                scanner.read(3);
                tokens.push(read_subtitle(&mut scanner));
                at_line_start = false;
                continue;
            }
            if scanner.peek(2) == Some("# ") {
                scanner.read(2);
                tokens.push(read_title(&mut scanner));
                at_line_start = false;
                continue;
            }
            if scanner.peek(2) == Some("- ") {
                scanner.read(2);
                tokens.push(read_item(&mut scanner));
                at_line_start = false;
                continue;
            }
        }
        at_line_start = scanner.read(1) == "\n";
    }

    tokens
}

/// Title text up to the end of the line.
fn read_title(scanner: &mut CharScanner) -> Token {
    let mut text = String::new();
    while let Some(ch) = scanner.peek(1) {
        if ch == "\n" {
            break;
        }
        text.push_str(scanner.read(1));
    }
    Token::Title { text }
}

/// Version (non-whitespace, non-`(` run), then an optional parenthesized
/// date. No parenthesized date leaves the date empty.
fn read_subtitle(scanner: &mut CharScanner) -> Token {
    let mut version = String::new();
    while let Some(ch) = scanner.peek(1) {
        if ch == "(" || ch == " " || ch == "\t" || ch == "\n" {
            break;
        }
        version.push_str(scanner.read(1));
    }
    scanner.eat_spaces();

    let mut date = String::new();
    if scanner.peek(1) == Some("(") {
        scanner.read(1);
        while let Some(ch) = scanner.peek(1) {
            if ch == ")" || ch == " " || ch == "\n" {
                break;
            }
            date.push_str(scanner.read(1));
        }
        if scanner.peek(1) == Some(")") {
            scanner.read(1);
        }
    }

    Token::Subtitle { version, date }
}

/// Zero or more `[tag]` prefixes (trimmed), then the body text. The body
/// continues across lines indented by exactly two spaces and stops at a
/// blank line, a non-indented line, or end of input.
fn read_item(scanner: &mut CharScanner) -> Token {
    let mut tags = Vec::new();
    while scanner.peek(1) == Some("[") {
        scanner.read(1);
        let mut tag = String::new();
        while let Some(ch) = scanner.peek(1) {
            if ch == "]" || ch == "\n" {
                break;
            }
            tag.push_str(scanner.read(1));
        }
        if scanner.peek(1) == Some("]") {
            scanner.read(1);
        }
        tags.push(tag.trim().to_string());
        scanner.eat_spaces();
    }

    let mut text = String::new();
    loop {
        match scanner.peek(1) {
            None => break,
            Some("\n") => {
                if scanner.peek(3) == Some("\n  ") {
                    scanner.read(3);
                    text.push(' ');
                } else {
                    break;
                }
            }
            Some(_) => text.push_str(scanner.read(1)),
        }
    }

    Token::Item { tags, text }
}
