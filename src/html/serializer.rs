//! HTML serialization of the document tree.
//!
//! A pure, recursive, side-effect-free transform from nodes to an HTML
//! string. Serialization is total: it never fails for any well-formed
//! document. An empty document serializes to the empty string; a block with
//! no children produces an empty wrapped tag.
//!
//! Alignment is applied by the live editor view only; serialized output
//! carries no alignment.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::{Block, Node};
//! use htmlquill::html::serializer::serialize;
//!
//! let nodes = vec![Node::Block(Block::paragraph("Hello world"))];
//! assert_eq!(serialize(&nodes), "<p>Hello world</p>");
//! ```

use crate::document::node::{Block, BlockKind, Node, TextRun};
use crate::document::tree::Document;

/// Serializes a sequence of nodes to HTML.
pub fn serialize(nodes: &[Node]) -> String {
    nodes.iter().map(serialize_node).collect()
}

/// Serializes a whole document to HTML.
pub fn serialize_document(doc: &Document) -> String {
    serialize(doc.children())
}

fn serialize_node(node: &Node) -> String {
    match node {
        Node::Block(block) => serialize_block(block),
        Node::Text(run) => serialize_text(run),
    }
}

fn serialize_block(block: &Block) -> String {
    let inner = serialize(&block.children);
    let tag = match block.kind {
        BlockKind::Paragraph => "p",
        BlockKind::HeadingOne => "h1",
        BlockKind::HeadingTwo => "h2",
        BlockKind::BlockQuote => "blockquote",
        BlockKind::BulletedList => "ul",
        BlockKind::NumberedList => "ol",
        BlockKind::ListItem => "li",
    };
    format!("<{tag}>{inner}</{tag}>")
}

/// Wraps a text payload in its mark tags.
///
/// The wrapping order is fixed (bold, then italic, then underline, then
/// code) so a fully marked run always nests as
/// `<strong><em><u><code>text</code></u></em></strong>`, whatever order the
/// marks were toggled in.
fn serialize_text(run: &TextRun) -> String {
    let mut out = run.text.clone();
    if run.marks.code {
        out = format!("<code>{out}</code>");
    }
    if run.marks.underline {
        out = format!("<u>{out}</u>");
    }
    if run.marks.italic {
        out = format!("<em>{out}</em>");
    }
    if run.marks.bold {
        out = format!("<strong>{out}</strong>");
    }
    out
}
