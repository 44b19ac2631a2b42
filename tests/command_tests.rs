//! Integration tests for the selection-scoped command layer: block and mark
//! toggles, active-state queries, and the serialized output they produce.

use htmlquill::document::node::{
    Alignment, Block, BlockFormat, BlockKind, Mark, Node,
};
use htmlquill::document::parser::parse_input;
use htmlquill::document::tree::Document;
use htmlquill::editor::commands::{is_block_active, is_mark_active, toggle_block, toggle_mark};
use htmlquill::editor::selection::{Point, Selection};
use htmlquill::html::serializer::serialize_document;

fn hello_doc() -> Document {
    parse_input("Hello world").unwrap()
}

fn full_selection(doc: &Document) -> Selection {
    let leaves = doc.text_paths();
    let first = leaves.first().unwrap().clone();
    let last = leaves.last().unwrap().clone();
    let len = doc.get_node(&last).unwrap().as_text().unwrap().len();
    Selection::new(Point::new(first, 0), Point::new(last, len))
}

// --- Scenario A: construction ------------------------------------------

#[test]
fn scenario_a_initial_content_is_single_paragraph() {
    let doc = hello_doc();

    assert_eq!(doc.children().len(), 1);
    let block = doc.get_block(&[0]).unwrap();
    assert_eq!(block.kind, BlockKind::Paragraph);

    let run = doc.get_node(&[0, 0]).unwrap().as_text().unwrap();
    assert_eq!(run.text, "Hello world");
    assert!(run.marks.is_empty());

    assert_eq!(serialize_document(&doc), "<p>Hello world</p>");
}

// --- Scenario B: bold over the full text --------------------------------

#[test]
fn scenario_b_bold_full_text() {
    let doc = hello_doc();
    let sel = full_selection(&doc);

    let result = toggle_mark(&doc, &sel, None, Mark::Bold);
    assert_eq!(
        serialize_document(&result.document),
        "<p><strong>Hello world</strong></p>"
    );
}

// --- Scenario C: paragraph to bulleted list -----------------------------

#[test]
fn scenario_c_toggle_bulleted_list() {
    let doc = hello_doc();
    let sel = full_selection(&doc);

    let doc = toggle_block(&doc, &sel, BlockFormat::Kind(BlockKind::BulletedList));

    // bulleted-list > list-item > original inline content
    let list = doc.get_block(&[0]).unwrap();
    assert_eq!(list.kind, BlockKind::BulletedList);
    let item = doc.get_block(&[0, 0]).unwrap();
    assert_eq!(item.kind, BlockKind::ListItem);
    assert_eq!(item.plain_text(), "Hello world");

    assert_eq!(serialize_document(&doc), "<ul><li>Hello world</li></ul>");
}

// --- Scenario D: toggling the active list resets to paragraph -----------

#[test]
fn scenario_d_toggle_active_list_back_to_paragraph() {
    let doc = hello_doc();
    let sel = full_selection(&doc);
    let format = BlockFormat::Kind(BlockKind::BulletedList);

    let doc = toggle_block(&doc, &sel, format);
    let sel = full_selection(&doc);
    assert!(is_block_active(&doc, &sel, format));

    let doc = toggle_block(&doc, &sel, format);
    let block = doc.get_block(&[0]).unwrap();
    assert_eq!(block.kind, BlockKind::Paragraph);
    assert_eq!(doc.children().len(), 1);

    assert_eq!(serialize_document(&doc), "<p>Hello world</p>");
}

// --- Scenario E: alignment is orthogonal and not serialized -------------

#[test]
fn scenario_e_alignment_is_live_view_only() {
    let doc = hello_doc();
    let sel = full_selection(&doc);

    let before = serialize_document(&doc);
    let doc = toggle_block(&doc, &sel, BlockFormat::Align(Alignment::Center));

    assert!(is_block_active(
        &doc,
        &sel,
        BlockFormat::Align(Alignment::Center)
    ));
    assert!(is_block_active(
        &doc,
        &sel,
        BlockFormat::Kind(BlockKind::Paragraph)
    ));

    // Serialized HTML is unchanged: alignment never reaches the output
    assert_eq!(serialize_document(&doc), before);
}

// --- Idempotence --------------------------------------------------------

#[test]
fn double_toggle_restores_kind_for_non_list_formats() {
    for kind in [
        BlockKind::HeadingOne,
        BlockKind::HeadingTwo,
        BlockKind::BlockQuote,
    ] {
        let doc = hello_doc();
        let sel = full_selection(&doc);
        let format = BlockFormat::Kind(kind);

        let once = toggle_block(&doc, &sel, format);
        assert_eq!(once.get_block(&[0]).unwrap().kind, kind);

        let twice = toggle_block(&once, &sel, format);
        assert_eq!(twice.get_block(&[0]).unwrap().kind, BlockKind::Paragraph);
    }
}

#[test]
fn double_toggle_restores_alignment() {
    for align in [
        Alignment::Left,
        Alignment::Center,
        Alignment::Right,
        Alignment::Justify,
    ] {
        let doc = hello_doc();
        let sel = full_selection(&doc);
        let format = BlockFormat::Align(align);

        let once = toggle_block(&doc, &sel, format);
        assert_eq!(once.get_block(&[0]).unwrap().align, Some(align));

        let twice = toggle_block(&once, &sel, format);
        assert_eq!(twice.get_block(&[0]).unwrap().align, None);
    }
}

// --- Axis independence --------------------------------------------------

#[test]
fn exactly_one_axis_changes_per_call() {
    let doc = hello_doc();
    let sel = full_selection(&doc);

    // Set alignment, then flip the kind: alignment must survive
    let doc = toggle_block(&doc, &sel, BlockFormat::Align(Alignment::Right));
    let doc = toggle_block(&doc, &sel, BlockFormat::Kind(BlockKind::HeadingOne));
    let block = doc.get_block(&[0]).unwrap();
    assert_eq!(block.kind, BlockKind::HeadingOne);
    assert_eq!(block.align, Some(Alignment::Right));

    // Clear alignment: kind must survive
    let doc = toggle_block(&doc, &sel, BlockFormat::Align(Alignment::Right));
    let block = doc.get_block(&[0]).unwrap();
    assert_eq!(block.kind, BlockKind::HeadingOne);
    assert_eq!(block.align, None);
}

// --- List re-wrap exclusivity -------------------------------------------

#[test]
fn list_rewrap_leaves_single_container() {
    let doc = Document::new(vec![
        Node::Block(Block::paragraph("one")),
        Node::Block(Block::paragraph("two")),
    ]);
    let sel = full_selection(&doc);

    let doc = toggle_block(&doc, &sel, BlockFormat::Kind(BlockKind::NumberedList));
    let sel = full_selection(&doc);
    let doc = toggle_block(&doc, &sel, BlockFormat::Kind(BlockKind::BulletedList));

    // Exactly one container of the new kind wraps the items; no stale
    // numbered-list ancestor anywhere
    let containers: Vec<BlockKind> = doc
        .block_paths()
        .iter()
        .map(|path| doc.get_block(path).unwrap().kind)
        .filter(|kind| kind.is_list())
        .collect();
    assert_eq!(containers, vec![BlockKind::BulletedList]);

    let list = doc.get_block(&[0]).unwrap();
    assert_eq!(list.children.len(), 2);
    assert_eq!(serialize_document(&doc), "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn switching_list_kind_from_inside_item() {
    let doc = hello_doc();
    let sel = full_selection(&doc);
    let doc = toggle_block(&doc, &sel, BlockFormat::Kind(BlockKind::NumberedList));

    // Caret inside the single item
    let caret = Selection::caret(Point::new(vec![0, 0, 0], 3));
    let doc = toggle_block(&doc, &caret, BlockFormat::Kind(BlockKind::BulletedList));

    assert_eq!(serialize_document(&doc), "<ul><li>Hello world</li></ul>");
}

// --- Mark orthogonality at the command level ----------------------------

#[test]
fn mark_nesting_order_is_independent_of_toggle_order() {
    // Toggle in scrambled order; serialization must still nest
    // strong > em > u > code
    let orders: [&[Mark]; 3] = [
        &[Mark::Code, Mark::Bold, Mark::Underline, Mark::Italic],
        &[Mark::Underline, Mark::Code, Mark::Italic, Mark::Bold],
        &[Mark::Bold, Mark::Italic, Mark::Underline, Mark::Code],
    ];

    for order in orders {
        let mut doc = hello_doc();
        for mark in order {
            let sel = full_selection(&doc);
            doc = toggle_mark(&doc, &sel, None, *mark).document;
        }
        assert_eq!(
            serialize_document(&doc),
            "<p><strong><em><u><code>Hello world</code></u></em></strong></p>"
        );
    }
}

#[test]
fn toggling_mark_off_leaves_others() {
    let mut doc = hello_doc();
    for mark in [Mark::Bold, Mark::Italic, Mark::Code] {
        let sel = full_selection(&doc);
        doc = toggle_mark(&doc, &sel, None, mark).document;
    }

    let sel = full_selection(&doc);
    doc = toggle_mark(&doc, &sel, None, Mark::Italic).document;

    assert_eq!(
        serialize_document(&doc),
        "<p><strong><code>Hello world</code></strong></p>"
    );
}

#[test]
fn is_mark_active_tracks_toggles() {
    let doc = hello_doc();
    let sel = full_selection(&doc);

    assert!(!is_mark_active(&doc, &sel, None, Mark::Underline));
    let doc = toggle_mark(&doc, &sel, None, Mark::Underline).document;
    let sel = full_selection(&doc);
    assert!(is_mark_active(&doc, &sel, None, Mark::Underline));
}

// --- Partial-selection marking ------------------------------------------

#[test]
fn partial_mark_splits_runs_in_output() {
    let doc = hello_doc();
    let sel = Selection::new(Point::new(vec![0, 0], 0), Point::new(vec![0, 0], 5));

    let doc = toggle_mark(&doc, &sel, None, Mark::Bold).document;
    assert_eq!(
        serialize_document(&doc),
        "<p><strong>Hello</strong> world</p>"
    );
}
