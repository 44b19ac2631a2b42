//! Integration tests for the HTML serializer: totality, the fixed mark
//! nesting order over every subset, and block tag mapping.

use htmlquill::document::node::{Block, BlockKind, MarkSet, Node, TextRun};
use htmlquill::document::tree::Document;
use htmlquill::html::serializer::{serialize, serialize_document};

#[test]
fn empty_document_serializes_to_empty_string() {
    assert_eq!(serialize_document(&Document::empty()), "");
    assert_eq!(serialize(&[]), "");
}

#[test]
fn empty_block_produces_empty_wrapped_tag() {
    let doc = Document::new(vec![Node::Block(Block::new(BlockKind::Paragraph))]);
    assert_eq!(serialize_document(&doc), "<p></p>");
}

#[test]
fn every_block_kind_maps_to_its_tag() {
    let cases = [
        (BlockKind::Paragraph, "p"),
        (BlockKind::HeadingOne, "h1"),
        (BlockKind::HeadingTwo, "h2"),
        (BlockKind::BlockQuote, "blockquote"),
        (BlockKind::BulletedList, "ul"),
        (BlockKind::NumberedList, "ol"),
        (BlockKind::ListItem, "li"),
    ];

    for (kind, tag) in cases {
        let mut block = Block::new(kind);
        if !kind.is_list() {
            block.children.push(Node::Text(TextRun::new("x")));
        }
        let html = serialize(&[Node::Block(block)]);
        assert!(
            html.starts_with(&format!("<{tag}>")) && html.ends_with(&format!("</{tag}>")),
            "kind {kind} produced {html}"
        );
    }
}

/// Builds the expected nesting for a mark subset: bold outermost, then
/// italic, underline, code.
fn expected_nesting(text: &str, marks: MarkSet) -> String {
    let mut out = text.to_string();
    if marks.code {
        out = format!("<code>{out}</code>");
    }
    if marks.underline {
        out = format!("<u>{out}</u>");
    }
    if marks.italic {
        out = format!("<em>{out}</em>");
    }
    if marks.bold {
        out = format!("<strong>{out}</strong>");
    }
    out
}

#[test]
fn all_sixteen_mark_subsets_nest_in_fixed_order() {
    for bits in 0u8..16 {
        let marks = MarkSet {
            bold: bits & 1 != 0,
            italic: bits & 2 != 0,
            underline: bits & 4 != 0,
            code: bits & 8 != 0,
        };

        let node = Node::Text(TextRun::with_marks("text", marks));
        assert_eq!(
            serialize(&[node]),
            expected_nesting("text", marks),
            "subset bits {bits:04b}"
        );
    }
}

#[test]
fn fully_marked_run_has_canonical_nesting() {
    let marks = MarkSet {
        bold: true,
        italic: true,
        underline: true,
        code: true,
    };
    let doc = Document::new(vec![Node::Block(Block {
        kind: BlockKind::Paragraph,
        align: None,
        children: vec![Node::Text(TextRun::with_marks("text", marks))],
    })]);
    assert_eq!(
        serialize_document(&doc),
        "<p><strong><em><u><code>text</code></u></em></strong></p>"
    );
}

#[test]
fn nested_lists_serialize_recursively() {
    let mut item_one = Block::paragraph("first");
    item_one.kind = BlockKind::ListItem;
    let mut item_two = Block::paragraph("second");
    item_two.kind = BlockKind::ListItem;

    let mut list = Block::new(BlockKind::NumberedList);
    list.children = vec![Node::Block(item_one), Node::Block(item_two)];

    let doc = Document::new(vec![
        Node::Block(Block::paragraph("intro")),
        Node::Block(list),
    ]);

    assert_eq!(
        serialize_document(&doc),
        "<p>intro</p><ol><li>first</li><li>second</li></ol>"
    );
}

#[test]
fn adjacent_runs_serialize_in_order() {
    let bold = MarkSet {
        bold: true,
        ..MarkSet::default()
    };
    let doc = Document::new(vec![Node::Block(Block {
        kind: BlockKind::Paragraph,
        align: None,
        children: vec![
            Node::Text(TextRun::new("plain ")),
            Node::Text(TextRun::with_marks("bold", bold)),
            Node::Text(TextRun::new(" tail")),
        ],
    })]);

    assert_eq!(
        serialize_document(&doc),
        "<p>plain <strong>bold</strong> tail</p>"
    );
}

#[test]
fn serializer_handles_deeply_mixed_documents() {
    // A grab bag of shapes: serialization must produce output for all of
    // them without panicking
    let mut quote = Block::paragraph("wise words");
    quote.kind = BlockKind::BlockQuote;

    let mut heading = Block::paragraph("Title");
    heading.kind = BlockKind::HeadingTwo;

    let mut empty_item = Block::new(BlockKind::ListItem);
    empty_item.children.push(Node::Text(TextRun::new("")));
    let mut list = Block::new(BlockKind::BulletedList);
    list.children = vec![Node::Block(empty_item)];

    let doc = Document::new(vec![
        Node::Block(heading),
        Node::Block(quote),
        Node::Block(list),
        Node::Block(Block::new(BlockKind::Paragraph)),
    ]);

    assert_eq!(
        serialize_document(&doc),
        "<h2>Title</h2><blockquote>wise words</blockquote><ul><li></li></ul><p></p>"
    );
}
