//! Integration tests for the document model: path navigation, structural
//! edits, and lossy construction.

use htmlquill::document::node::{Block, BlockKind, Node, TextRun};
use htmlquill::document::parser::{parse_input, parse_input_or_placeholder, PLACEHOLDER_TEXT};
use htmlquill::document::tree::Document;

fn sample_doc() -> Document {
    let mut item = Block::new(BlockKind::ListItem);
    item.children.push(Node::Text(TextRun::new("item text")));
    let mut list = Block::new(BlockKind::BulletedList);
    list.children.push(Node::Block(item));

    Document::new(vec![
        Node::Block(Block::paragraph("first")),
        Node::Block(list),
        Node::Block(Block::paragraph("last")),
    ])
}

#[test]
fn get_node_resolves_paths_at_every_depth() {
    let doc = sample_doc();

    assert!(doc.get_node(&[0]).unwrap().is_block());
    assert!(doc.get_node(&[1, 0]).unwrap().is_block());
    assert_eq!(
        doc.get_node(&[1, 0, 0]).unwrap().as_text().unwrap().text,
        "item text"
    );
}

#[test]
fn get_node_rejects_bad_paths() {
    let doc = sample_doc();

    assert!(doc.get_node(&[]).is_none());
    assert!(doc.get_node(&[9]).is_none());
    assert!(doc.get_node(&[1, 9]).is_none());
    // Through a text leaf
    assert!(doc.get_node(&[0, 0, 0]).is_none());
}

#[test]
fn remove_and_reinsert_round_trips() {
    let mut doc = sample_doc();
    let original = doc.clone();

    let node = doc.remove_node(&[1]).unwrap();
    assert_eq!(doc.children().len(), 2);

    doc.insert_node(&[1], node).unwrap();
    assert_eq!(doc, original);
}

#[test]
fn text_paths_walk_leaves_in_document_order() {
    let doc = sample_doc();
    assert_eq!(
        doc.text_paths(),
        vec![vec![0, 0], vec![1, 0, 0], vec![2, 0]]
    );
}

#[test]
fn block_paths_walk_blocks_in_preorder() {
    let doc = sample_doc();
    assert_eq!(
        doc.block_paths(),
        vec![vec![0], vec![1], vec![1, 0], vec![2]]
    );
}

// --- lossy construction -------------------------------------------------

#[test]
fn construction_keeps_plain_text() {
    let doc = parse_input("Hello world").unwrap();
    assert_eq!(doc.children().len(), 1);
    assert_eq!(doc.get_block(&[0]).unwrap().plain_text(), "Hello world");
}

#[test]
fn construction_discards_markup() {
    let doc = parse_input("<ul><li>one</li><li>two</li></ul>").unwrap();
    // Structure is not round-tripped: a single paragraph of the text
    assert_eq!(doc.children().len(), 1);
    assert_eq!(doc.get_block(&[0]).unwrap().kind, BlockKind::Paragraph);
    assert_eq!(doc.get_block(&[0]).unwrap().plain_text(), "one two");
}

#[test]
fn construction_failure_degrades_to_placeholder() {
    let doc = parse_input_or_placeholder("<div class=");
    assert_eq!(doc.get_block(&[0]).unwrap().plain_text(), PLACEHOLDER_TEXT);
}

#[test]
fn construction_of_empty_input_is_empty_paragraph() {
    let doc = parse_input("").unwrap();
    assert_eq!(doc.children().len(), 1);
    assert_eq!(doc.get_block(&[0]).unwrap().plain_text(), "");
}
