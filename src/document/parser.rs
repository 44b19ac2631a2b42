//! Lossy construction of documents from incoming content strings.
//!
//! An editor session starts from whatever string the caller hands over:
//! plain text, or HTML produced by an earlier session. Construction is
//! deliberately lossy: markup is stripped and the remaining text becomes a
//! single unmarked paragraph. Prior formatting is not round-tripped.
//!
//! When extraction fails (malformed markup), callers substitute the fixed
//! placeholder document from [`placeholder`] instead of surfacing an error.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::parser::{parse_input, placeholder};
//!
//! let doc = parse_input("<p>Hello <strong>world</strong></p>").unwrap();
//! assert_eq!(doc.get_node(&[0, 0]).unwrap().as_text().unwrap().text, "Hello world");
//!
//! // Malformed markup is an error; callers fall back to the placeholder
//! let doc = parse_input("<p>oops").unwrap_or_else(|_| placeholder());
//! assert_eq!(doc.get_node(&[0, 0]).unwrap().as_text().unwrap().text, "Start typing…");
//! ```

use super::node::{Block, Node};
use super::tree::Document;
use anyhow::{anyhow, Result};

/// The text of the document substituted when construction fails.
pub const PLACEHOLDER_TEXT: &str = "Start typing…";

/// Builds a document from an incoming content string.
///
/// Tags are stripped, a handful of common entities are decoded, and runs of
/// whitespace collapse to single spaces. The surviving text becomes one
/// paragraph holding one unmarked text run; empty input produces one empty
/// paragraph.
///
/// # Errors
///
/// Returns an error if the input contains a `<` that is never closed by a
/// matching `>`.
pub fn parse_input(input: &str) -> Result<Document> {
    let text = extract_text(input)?;
    Ok(Document::new(vec![Node::Block(Block::paragraph(text))]))
}

/// Builds a document from an incoming content string, substituting the
/// placeholder document if extraction fails. No error reaches the caller.
pub fn parse_input_or_placeholder(input: &str) -> Document {
    parse_input(input).unwrap_or_else(|_| placeholder())
}

/// Returns the fixed placeholder document: a single paragraph reading
/// "Start typing…".
pub fn placeholder() -> Document {
    Document::new(vec![Node::Block(Block::paragraph(PLACEHOLDER_TEXT))])
}

/// Strips markup from the input, returning the plain text content.
fn extract_text(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                // Skip to the closing '>'; an unterminated tag is malformed
                let mut closed = false;
                for tag_ch in chars.by_ref() {
                    if tag_ch == '>' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(anyhow!("Unterminated tag in input"));
                }
                // Tags separate words when stripped
                out.push(' ');
            }
            '&' => {
                let rest: String = chars.clone().take(6).collect();
                if let Some((decoded, consumed)) = decode_entity(&rest) {
                    out.push(decoded);
                    for _ in 0..consumed {
                        chars.next();
                    }
                } else {
                    out.push('&');
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(collapse_whitespace(&out))
}

/// Decodes one of the entities the lossy extraction understands. Returns the
/// decoded character and the number of characters consumed after the `&`.
fn decode_entity(rest: &str) -> Option<(char, usize)> {
    for (name, decoded) in [
        ("amp;", '&'),
        ("lt;", '<'),
        ("gt;", '>'),
        ("quot;", '"'),
        ("#39;", '\''),
        ("nbsp;", ' '),
    ] {
        if rest.starts_with(name) {
            return Some((decoded, name.chars().count()));
        }
    }
    None
}

/// Collapses whitespace runs to single spaces and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}
