//! Selection tracking over the document tree.
//!
//! A selection is an ephemeral range over the document: an anchor point and
//! a focus point, each a (path, offset) pair addressing a character position
//! inside a text leaf. The selection is recreated on every cursor movement
//! and never persisted; it exists so the command layer knows which blocks
//! and marks to read or write.
//!
//! # Example
//!
//! ```
//! use htmlquill::editor::selection::{Point, Selection};
//!
//! // A caret (collapsed selection) at the start of the first paragraph
//! let caret = Selection::caret(Point::new(vec![0, 0], 0));
//! assert!(caret.is_collapsed());
//!
//! // A backwards selection still yields a forward-ordered range
//! let sel = Selection::new(Point::new(vec![1, 0], 3), Point::new(vec![0, 0], 1));
//! let (start, end) = sel.range();
//! assert_eq!(start.path, vec![0, 0]);
//! assert_eq!(end.path, vec![1, 0]);
//! ```

use crate::document::tree::Document;
use std::cmp::Ordering;

/// A position inside a text leaf: the leaf's path plus a character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub path: Vec<usize>,
    pub offset: usize,
}

impl Point {
    /// Creates a point at the given path and offset.
    pub fn new(path: Vec<usize>, offset: usize) -> Self {
        Self { path, offset }
    }

    /// Compares two points in document order.
    pub fn cmp_document_order(&self, other: &Point) -> Ordering {
        compare_paths(&self.path, &other.path).then(self.offset.cmp(&other.offset))
    }
}

/// Compares two paths lexicographically; an ancestor sorts before its
/// descendants.
pub fn compare_paths(a: &[usize], b: &[usize]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// An ephemeral range over the document: anchor and focus points.
///
/// Anchor is where the selection started; focus is where it currently ends.
/// Focus may precede anchor in document order (a backwards selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Point,
    pub focus: Point,
}

impl Selection {
    /// Creates a selection from anchor and focus points.
    pub fn new(anchor: Point, focus: Point) -> Self {
        Self { anchor, focus }
    }

    /// Creates a collapsed selection (a caret) at the given point.
    pub fn caret(point: Point) -> Self {
        Self {
            anchor: point.clone(),
            focus: point,
        }
    }

    /// Returns true if anchor and focus coincide.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Returns the selection's endpoints in document order.
    pub fn range(&self) -> (Point, Point) {
        match self.anchor.cmp_document_order(&self.focus) {
            Ordering::Greater => (self.focus.clone(), self.anchor.clone()),
            _ => (self.anchor.clone(), self.focus.clone()),
        }
    }

    /// Returns the selection's endpoints in document order, unhung.
    ///
    /// A range that ends at offset 0 of a later leaf only brushes that leaf's
    /// block without covering any of its content; the end point is pulled
    /// back to the end of the previous text leaf so active-state queries and
    /// block toggles do not treat the brushed block as selected.
    pub fn unhung_range(&self, doc: &Document) -> (Point, Point) {
        let (start, mut end) = self.range();

        if end.offset == 0 && end.path != start.path {
            let leaves = doc.text_paths();
            let pos = leaves.iter().position(|p| *p == end.path);
            if let Some(pos) = pos {
                if pos > 0 {
                    let prev = leaves[pos - 1].clone();
                    let len = doc
                        .get_node(&prev)
                        .and_then(|n| n.as_text())
                        .map(|t| t.len())
                        .unwrap_or(0);
                    end = Point::new(prev, len);
                }
            }
        }

        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{Block, Node};

    #[test]
    fn test_compare_paths() {
        assert_eq!(compare_paths(&[0], &[1]), Ordering::Less);
        assert_eq!(compare_paths(&[1, 0], &[1, 0]), Ordering::Equal);
        assert_eq!(compare_paths(&[1], &[1, 0]), Ordering::Less); // ancestor first
        assert_eq!(compare_paths(&[1, 2], &[1, 0]), Ordering::Greater);
    }

    #[test]
    fn test_collapsed() {
        let caret = Selection::caret(Point::new(vec![0, 0], 2));
        assert!(caret.is_collapsed());

        let sel = Selection::new(Point::new(vec![0, 0], 0), Point::new(vec![0, 0], 1));
        assert!(!sel.is_collapsed());
    }

    #[test]
    fn test_range_orders_backwards_selection() {
        let sel = Selection::new(Point::new(vec![2, 0], 0), Point::new(vec![0, 0], 4));
        let (start, end) = sel.range();
        assert_eq!(start.path, vec![0, 0]);
        assert_eq!(end.path, vec![2, 0]);
    }

    #[test]
    fn test_unhang_pulls_back_zero_offset_end() {
        let doc = Document::new(vec![
            Node::Block(Block::paragraph("first")),
            Node::Block(Block::paragraph("second")),
        ]);

        // Selection covering "first" plus the very start of "second"
        let sel = Selection::new(Point::new(vec![0, 0], 0), Point::new(vec![1, 0], 0));
        let (start, end) = sel.unhung_range(&doc);

        assert_eq!(start, Point::new(vec![0, 0], 0));
        assert_eq!(end, Point::new(vec![0, 0], 5)); // end of "first"
    }

    #[test]
    fn test_unhang_leaves_real_ranges_alone() {
        let doc = Document::new(vec![
            Node::Block(Block::paragraph("first")),
            Node::Block(Block::paragraph("second")),
        ]);

        let sel = Selection::new(Point::new(vec![0, 0], 1), Point::new(vec![1, 0], 3));
        let (start, end) = sel.unhung_range(&doc);
        assert_eq!(start, Point::new(vec![0, 0], 1));
        assert_eq!(end, Point::new(vec![1, 0], 3));
    }
}
