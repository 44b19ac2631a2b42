//! Selection-scoped editing commands.
//!
//! This module is the seam between user intent and the document tree: block
//! and mark toggles keyed off the current selection, plus the read-only
//! active-state queries the toolbar renders from. Commands are pure
//! functions of `(document, selection, format)`: they return a new document
//! and never touch editor state, which keeps every toggle testable in
//! isolation.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::{Block, BlockFormat, BlockKind, Node};
//! use htmlquill::document::tree::Document;
//! use htmlquill::editor::commands::{is_block_active, toggle_block};
//! use htmlquill::editor::selection::{Point, Selection};
//!
//! let doc = Document::new(vec![Node::Block(Block::paragraph("Hello world"))]);
//! let sel = Selection::caret(Point::new(vec![0, 0], 0));
//!
//! let format = BlockFormat::Kind(BlockKind::BulletedList);
//! assert!(!is_block_active(&doc, &sel, format));
//!
//! let doc = toggle_block(&doc, &sel, format);
//! assert_eq!(doc.get_block(&[0]).unwrap().kind, BlockKind::BulletedList);
//! ```

use crate::document::node::{BlockFormat, Mark, MarkSet, Node};
use crate::document::tree::Document;
use crate::editor::selection::{Point, Selection};
use crate::editor::transform;

/// The result of a mark toggle: the (possibly new) document, the selection
/// remapped across any run splits, and the caret's pending mark set.
#[derive(Debug, Clone)]
pub struct MarkToggle {
    pub document: Document,
    pub selection: Selection,
    pub pending_marks: Option<MarkSet>,
}

/// Toggles a block format at the selection.
///
/// The two format namespaces are independent axes, and exactly one of them
/// changes per call:
///
/// - An alignment flips the affected blocks' `align` between unset and the
///   given value, based on whether it is already active; kind is untouched.
/// - A block kind first unwraps any list container touching the selection
///   (switching away from a list must not leave the stale wrapper), then
///   resets to paragraph when the kind is already active, wraps the blocks
///   in a fresh container when the kind is a list, or applies the kind
///   directly otherwise; alignment is untouched.
///
/// The returned document may renumber paths (wrapping and unwrapping move
/// nodes); callers re-clamp their selection against it.
pub fn toggle_block(doc: &Document, selection: &Selection, format: BlockFormat) -> Document {
    let active = is_block_active(doc, selection, format);
    let (start, end) = selection.unhung_range(doc);

    match format {
        BlockFormat::Align(align) => {
            let align = if active { None } else { Some(align) };
            transform::set_align(doc, &start, &end, align)
        }
        BlockFormat::Kind(kind) => transform::toggle_kind(doc, &start, &end, kind, active),
    }
}

/// Toggles an inline mark at the selection.
///
/// Over an expanded selection the mark is applied to (or removed from) the
/// covered text, splitting runs at the boundaries. At a caret nothing in the
/// document changes: the mark flips in the pending set instead and applies
/// to subsequently typed text.
pub fn toggle_mark(
    doc: &Document,
    selection: &Selection,
    pending_marks: Option<MarkSet>,
    mark: Mark,
) -> MarkToggle {
    if selection.is_collapsed() {
        let mut marks = pending_marks.unwrap_or_else(|| marks_at(doc, &selection.anchor));
        marks.toggle(mark);
        return MarkToggle {
            document: doc.clone(),
            selection: selection.clone(),
            pending_marks: Some(marks),
        };
    }

    let active = is_mark_active(doc, selection, pending_marks, mark);
    let (start, end) = selection.unhung_range(doc);
    let (document, selection) = transform::apply_mark(doc, &start, &end, mark, !active);

    MarkToggle {
        document,
        selection,
        pending_marks: None,
    }
}

/// Returns whether a block format is active at the selection: true iff any
/// block node intersecting the unhung selection matches on the axis the
/// format names. Read-only; drives toolbar highlighting.
pub fn is_block_active(doc: &Document, selection: &Selection, format: BlockFormat) -> bool {
    let (start, end) = selection.unhung_range(doc);

    transform::block_paths_in_range(doc, &start, &end)
        .iter()
        .filter_map(|path| doc.get_block(path))
        .any(|block| match format {
            BlockFormat::Kind(kind) => block.kind == kind,
            BlockFormat::Align(align) => block.align == Some(align),
        })
}

/// Returns whether a mark is set in the mark set active at the caret: the
/// pending set when one exists, otherwise the marks at the selection start.
/// Read-only; drives toolbar highlighting.
pub fn is_mark_active(
    doc: &Document,
    selection: &Selection,
    pending_marks: Option<MarkSet>,
    mark: Mark,
) -> bool {
    if let Some(marks) = pending_marks {
        return marks.contains(mark);
    }
    let (start, _) = selection.unhung_range(doc);
    marks_at(doc, &start).contains(mark)
}

/// Returns the mark set governing text typed at a point: the marks of the
/// run the point sits in, or of the previous sibling run when the point sits
/// at a run boundary (typing right after bold text continues bold).
pub fn marks_at(doc: &Document, point: &Point) -> MarkSet {
    if point.offset == 0 {
        if let Some((&run_index, parent)) = point.path.split_last() {
            if run_index > 0 {
                let mut prev = parent.to_vec();
                prev.push(run_index - 1);
                if let Some(run) = doc.get_node(&prev).and_then(Node::as_text) {
                    return run.marks;
                }
            }
        }
    }

    doc.get_node(&point.path)
        .and_then(Node::as_text)
        .map(|run| run.marks)
        .unwrap_or_default()
}
