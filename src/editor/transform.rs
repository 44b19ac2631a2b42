//! Pure structural transforms over the document tree.
//!
//! Every function here is a pure transform: it takes a document plus a range
//! (or point) and returns a new document, leaving the input untouched. The
//! command layer composes these; keeping them pure keeps block toggling and
//! mark application testable without an editor instance.
//!
//! Ranges are always in document order (see
//! [`Selection::unhung_range`](crate::editor::selection::Selection::unhung_range));
//! callers normalize before calling in.

use crate::document::node::{Alignment, Block, BlockKind, Mark, MarkSet, Node, TextRun};
use crate::document::tree::Document;
use crate::editor::selection::{compare_paths, Point, Selection};
use std::cmp::Ordering;

/// Returns the paths of the text leaves the range touches, in document
/// order.
pub fn leaf_paths_in_range(doc: &Document, start: &Point, end: &Point) -> Vec<Vec<usize>> {
    doc.text_paths()
        .into_iter()
        .filter(|path| {
            compare_paths(path, &start.path) != Ordering::Less
                && compare_paths(path, &end.path) != Ordering::Greater
        })
        .collect()
}

/// Returns the paths of every block node intersecting the range: a block
/// intersects if any touched text leaf lives below it.
pub fn block_paths_in_range(doc: &Document, start: &Point, end: &Point) -> Vec<Vec<usize>> {
    let leaves = leaf_paths_in_range(doc, start, end);
    doc.block_paths()
        .into_iter()
        .filter(|block_path| {
            leaves
                .iter()
                .any(|leaf| leaf.len() > block_path.len() && leaf.starts_with(block_path))
        })
        .collect()
}

/// Returns the paths of the leaf blocks (blocks holding inline content)
/// intersecting the range.
pub fn leaf_block_paths_in_range(doc: &Document, start: &Point, end: &Point) -> Vec<Vec<usize>> {
    block_paths_in_range(doc, start, end)
        .into_iter()
        .filter(|path| doc.get_block(path).is_some_and(Block::is_leaf_block))
        .collect()
}

/// Sets the kind of every leaf block in the range. Alignment is untouched.
pub fn set_kind(doc: &Document, start: &Point, end: &Point, kind: BlockKind) -> Document {
    let mut out = doc.clone();
    for path in leaf_block_paths_in_range(doc, start, end) {
        if let Some(Node::Block(block)) = out.get_node_mut(&path) {
            block.kind = kind;
        }
    }
    out
}

/// Sets (or clears, with `None`) the alignment of every leaf block in the
/// range. Kind is untouched.
pub fn set_align(
    doc: &Document,
    start: &Point,
    end: &Point,
    align: Option<Alignment>,
) -> Document {
    let mut out = doc.clone();
    for path in leaf_block_paths_in_range(doc, start, end) {
        if let Some(Node::Block(block)) = out.get_node_mut(&path) {
            block.align = align;
        }
    }
    out
}

/// Removes every list container intersecting the range, with split
/// semantics: items before and after the touched span are re-wrapped in
/// containers of the original list kind, so a partial unwrap never spills
/// untouched siblings out of their list.
pub fn unwrap_lists(doc: &Document, start: &Point, end: &Point) -> Document {
    rebuild_blocks(doc, start, end, None, None)
}

/// Applies a block-kind toggle across the range.
///
/// Any list container touching the range is unwrapped first (split
/// semantics at the boundaries). Then, in a single pass:
///
/// - `active` (the kind is already present): affected blocks reset to
///   paragraphs;
/// - target is a list kind: affected blocks become list items and are
///   wrapped in exactly one new container of the target kind;
/// - otherwise: affected blocks take the target kind directly.
///
/// Alignment is never touched.
pub fn toggle_kind(
    doc: &Document,
    start: &Point,
    end: &Point,
    kind: BlockKind,
    active: bool,
) -> Document {
    if active {
        rebuild_blocks(doc, start, end, Some(BlockKind::Paragraph), None)
    } else if kind.is_list() {
        rebuild_blocks(doc, start, end, Some(BlockKind::ListItem), Some(kind))
    } else {
        rebuild_blocks(doc, start, end, Some(kind), None)
    }
}

/// The single-pass rebuild behind [`unwrap_lists`] and [`toggle_kind`].
///
/// Walks the top-level blocks, unwrapping intersecting list containers and
/// retagging affected leaf blocks with `leaf_kind` (when given). With
/// `wrap`, the affected blocks (contiguous, since the range is) are
/// gathered into one new container of that kind.
fn rebuild_blocks(
    doc: &Document,
    start: &Point,
    end: &Point,
    leaf_kind: Option<BlockKind>,
    wrap: Option<BlockKind>,
) -> Document {
    let leaves = leaf_paths_in_range(doc, start, end);
    let touches = |prefix: &[usize]| {
        leaves
            .iter()
            .any(|leaf| leaf.len() > prefix.len() && leaf.starts_with(prefix))
    };

    let mut out: Vec<Node> = Vec::with_capacity(doc.children().len());
    let mut pending: Vec<Node> = Vec::new();

    let flush = |out: &mut Vec<Node>, pending: &mut Vec<Node>| {
        if pending.is_empty() {
            return;
        }
        match wrap {
            Some(container_kind) => {
                let mut container = Block::new(container_kind);
                container.children = std::mem::take(pending);
                out.push(Node::Block(container));
            }
            None => out.append(pending),
        }
    };

    for (index, node) in doc.children().iter().enumerate() {
        let block = match node {
            Node::Block(block) => block,
            Node::Text(_) => {
                flush(&mut out, &mut pending);
                out.push(node.clone());
                continue;
            }
        };

        if !touches(&[index]) {
            flush(&mut out, &mut pending);
            out.push(node.clone());
            continue;
        }

        if block.kind.is_list() {
            // Split the container: untouched prefix/suffix items stay in
            // containers of the original kind.
            let mut before: Vec<Node> = Vec::new();
            let mut after: Vec<Node> = Vec::new();
            let mut seen_touched = false;

            for (item_index, item) in block.children.iter().enumerate() {
                if touches(&[index, item_index]) {
                    seen_touched = true;
                    pending.push(retag(item.clone(), leaf_kind));
                } else if seen_touched {
                    after.push(item.clone());
                } else {
                    before.push(item.clone());
                }
            }

            if !before.is_empty() {
                // Untouched items precede the affected span, so the pending
                // run cannot have started yet inside this container.
                let mut keep = Block::new(block.kind);
                keep.align = block.align;
                keep.children = before;
                out.push(Node::Block(keep));
            }
            if !after.is_empty() {
                flush(&mut out, &mut pending);
                let mut keep = Block::new(block.kind);
                keep.align = block.align;
                keep.children = after;
                out.push(Node::Block(keep));
            }
        } else {
            pending.push(retag(node.clone(), leaf_kind));
        }
    }

    flush(&mut out, &mut pending);
    Document::new(out)
}

/// Retags a block node with the given kind, leaving alignment and children
/// alone. Text nodes and `None` pass through unchanged.
fn retag(node: Node, leaf_kind: Option<BlockKind>) -> Node {
    match (node, leaf_kind) {
        (Node::Block(mut block), Some(kind)) => {
            block.kind = kind;
            Node::Block(block)
        }
        (node, _) => node,
    }
}

/// Applies or removes a mark across the range, splitting text runs at the
/// range boundaries so the mark lands only on the selected span.
///
/// Returns the new document plus a selection covering the same span, whose
/// paths account for any splits.
pub fn apply_mark(
    doc: &Document,
    start: &Point,
    end: &Point,
    mark: Mark,
    on: bool,
) -> (Document, Selection) {
    let mut out = doc.clone();
    let leaves = leaf_paths_in_range(doc, start, end);

    let mut new_start = start.clone();
    let mut new_end = end.clone();

    // Rightmost leaf first: splitting a run only shifts the indices of the
    // siblings after it.
    for path in leaves.iter().rev() {
        let run = match out.get_node(path).and_then(Node::as_text) {
            Some(run) => run.clone(),
            None => continue,
        };
        let len = run.len();

        let lo = if *path == start.path {
            start.offset.min(len)
        } else {
            0
        };
        let hi = if *path == end.path { end.offset.min(len) } else { len };
        if lo >= hi {
            continue;
        }

        let mut marked = run.marks;
        marked.set(mark, on);

        if lo == 0 && hi == len {
            // Whole run selected: no split needed
            if let Some(node) = out.get_node_mut(path) {
                if let Some(text) = node.as_text_mut() {
                    text.marks = marked;
                }
            }
            continue;
        }

        let (head, rest) = split_at_char(&run.text, lo);
        let (middle, tail) = split_at_char(&rest, hi - lo);

        let mut replacements: Vec<Node> = Vec::new();
        if !head.is_empty() {
            replacements.push(Node::Text(TextRun::with_marks(head, run.marks)));
        }
        let middle_index = replacements.len();
        replacements.push(Node::Text(TextRun::with_marks(middle, marked)));
        if !tail.is_empty() {
            replacements.push(Node::Text(TextRun::with_marks(tail, run.marks)));
        }
        let added = replacements.len() - 1;

        let run_index = *path.last().unwrap_or(&0);
        let parent: Vec<usize> = path[..path.len() - 1].to_vec();
        let _ = out.remove_node(path);
        for (offset, replacement) in replacements.into_iter().enumerate().rev() {
            let mut at = parent.clone();
            at.push(run_index + offset);
            let _ = out.insert_node(&at, replacement);
        }

        // Remap the returned span onto the marked middle run
        let mut marked_path = parent.clone();
        marked_path.push(run_index + middle_index);
        if *path == end.path {
            new_end = Point::new(marked_path.clone(), hi - lo);
        }
        if *path == start.path {
            new_start = Point::new(marked_path, 0);
            if start.path == end.path {
                new_end.path = new_start.path.clone();
            } else if added > 0
                && new_end.path.len() == path.len()
                && new_end.path[..path.len() - 1] == path[..path.len() - 1]
            {
                // The end leaf is a later sibling of the split start leaf;
                // the inserted runs shifted its index.
                if let Some(last) = new_end.path.last_mut() {
                    *last += added;
                }
            }
        }
    }

    let selection = Selection::new(new_start, new_end);
    (out, selection)
}

/// Inserts text at a point, carrying the given marks.
///
/// When the marks match the surrounding run the text splices in place;
/// otherwise the run splits and a freshly marked run lands between the
/// halves. Returns the new document and the caret after the insertion.
pub fn insert_text(
    doc: &Document,
    point: &Point,
    text: &str,
    marks: MarkSet,
) -> (Document, Point) {
    let mut out = doc.clone();

    let run = match out.get_node(&point.path).and_then(Node::as_text) {
        Some(run) => run.clone(),
        None => return (out, point.clone()),
    };
    let offset = point.offset.min(run.len());

    if run.marks == marks || run.is_empty() {
        if let Some(node) = out.get_node_mut(&point.path) {
            if let Some(target) = node.as_text_mut() {
                if target.is_empty() {
                    // An empty run adopts the caret's marks
                    target.marks = marks;
                }
                let (head, tail) = split_at_char(&target.text, offset);
                target.text = format!("{head}{text}{tail}");
            }
        }
        return (
            out,
            Point::new(point.path.clone(), offset + text.chars().count()),
        );
    }

    let (head, tail) = split_at_char(&run.text, offset);
    let mut replacements: Vec<Node> = Vec::new();
    if !head.is_empty() {
        replacements.push(Node::Text(TextRun::with_marks(head, run.marks)));
    }
    let inserted_index = replacements.len();
    replacements.push(Node::Text(TextRun::with_marks(text, marks)));
    if !tail.is_empty() {
        replacements.push(Node::Text(TextRun::with_marks(tail, run.marks)));
    }

    let run_index = *point.path.last().unwrap_or(&0);
    let parent: Vec<usize> = point.path[..point.path.len() - 1].to_vec();
    let _ = out.remove_node(&point.path);
    for (offset, replacement) in replacements.into_iter().enumerate().rev() {
        let mut at = parent.clone();
        at.push(run_index + offset);
        let _ = out.insert_node(&at, replacement);
    }

    let mut caret_path = parent;
    caret_path.push(run_index + inserted_index);
    (out, Point::new(caret_path, text.chars().count()))
}

/// Deletes one character before the caret.
///
/// At a block boundary (offset 0, first run) the block merges into the
/// previous leaf block instead, and an emptied list container is dropped.
/// Returns the new document and caret.
pub fn delete_backward(doc: &Document, point: &Point) -> (Document, Point) {
    let mut out = doc.clone();

    if point.offset > 0 {
        if let Some(node) = out.get_node_mut(&point.path) {
            if let Some(run) = node.as_text_mut() {
                let offset = point.offset.min(run.len());
                let (head, tail) = split_at_char(&run.text, offset);
                let head_kept: String = head.chars().take(offset - 1).collect();
                run.text = format!("{head_kept}{tail}");
                return (out, Point::new(point.path.clone(), offset - 1));
            }
        }
        return (out, point.clone());
    }

    // Offset 0: step into the previous run of the same block, if any
    if let Some((&run_index, parent)) = point.path.split_last() {
        if run_index > 0 {
            let mut prev_path = parent.to_vec();
            prev_path.push(run_index - 1);
            let prev_len = out
                .get_node(&prev_path)
                .and_then(Node::as_text)
                .map(TextRun::len)
                .unwrap_or(0);
            if prev_len == 0 {
                return (out, Point::new(prev_path, 0));
            }
            return delete_backward(&out, &Point::new(prev_path, prev_len));
        }
    }

    // Start of block: merge into the previous leaf block
    let block_path: Vec<usize> = point.path[..point.path.len().saturating_sub(1)].to_vec();
    let leaf_blocks: Vec<Vec<usize>> = out
        .block_paths()
        .into_iter()
        .filter(|path| out.get_block(path).is_some_and(Block::is_leaf_block))
        .collect();
    let position = leaf_blocks.iter().position(|path| *path == block_path);
    let target_path = match position {
        Some(pos) if pos > 0 => leaf_blocks[pos - 1].clone(),
        _ => return (out, point.clone()), // first block: nothing before it
    };

    let current_children = match out.get_block(&block_path) {
        Some(block) => block.children.clone(),
        None => return (out, point.clone()),
    };

    if out.remove_node(&block_path).is_err() {
        return (out, point.clone());
    }
    // Drop a list container the removal emptied
    if block_path.len() > 1 {
        let container_path = &block_path[..block_path.len() - 1];
        let emptied = out
            .get_block(container_path)
            .is_some_and(|block| block.children.is_empty());
        if emptied {
            let _ = out.remove_node(container_path);
        }
    }

    let caret = match out.get_node_mut(&target_path) {
        Some(Node::Block(target)) => {
            let join_index = target.children.len();
            let caret = match target.children.last().and_then(Node::as_text) {
                Some(last_run) => {
                    let mut path = target_path.clone();
                    path.push(join_index - 1);
                    Point::new(path, last_run.len())
                }
                None => {
                    let mut path = target_path.clone();
                    path.push(join_index);
                    Point::new(path, 0)
                }
            };
            target.children.extend(current_children);
            caret
        }
        _ => point.clone(),
    };

    (out, caret)
}

/// Clears the text covered by the range. Boundary runs are truncated and
/// fully covered runs emptied; block structure is left in place (a second
/// backspace at the boundary merges blocks). Returns the new document and
/// the caret at the range start.
pub fn delete_range(doc: &Document, start: &Point, end: &Point) -> (Document, Point) {
    let mut out = doc.clone();

    for path in leaf_paths_in_range(doc, start, end) {
        let Some(node) = out.get_node_mut(&path) else {
            continue;
        };
        let Some(run) = node.as_text_mut() else {
            continue;
        };
        let len = run.len();
        let lo = if path == start.path {
            start.offset.min(len)
        } else {
            0
        };
        let hi = if path == end.path { end.offset.min(len) } else { len };
        if lo >= hi {
            continue;
        }
        let (head, rest) = split_at_char(&run.text, lo);
        let (_, tail) = split_at_char(&rest, hi - lo);
        run.text = format!("{head}{tail}");
    }

    let caret = clamp_point(&out, start);
    (out, caret)
}

/// Splits the leaf block holding the caret in two.
///
/// The trailing half keeps the block kind inside a list (a new list item);
/// elsewhere it becomes a paragraph. Returns the new document and the caret
/// at the start of the trailing half.
pub fn split_block(doc: &Document, point: &Point) -> (Document, Point) {
    let mut out = doc.clone();

    let Some((&run_index, block_path)) = point.path.split_last() else {
        return (out, point.clone());
    };
    let block_path = block_path.to_vec();
    let Some(block) = out.get_block(&block_path).cloned() else {
        return (out, point.clone());
    };
    let Some(run) = block.children.get(run_index).and_then(Node::as_text).cloned() else {
        return (out, point.clone());
    };

    let offset = point.offset.min(run.len());
    let (head, tail) = split_at_char(&run.text, offset);

    let mut leading: Vec<Node> = block.children[..run_index].to_vec();
    leading.push(Node::Text(TextRun::with_marks(head, run.marks)));

    let mut trailing: Vec<Node> = vec![Node::Text(TextRun::with_marks(tail, run.marks))];
    trailing.extend_from_slice(&block.children[run_index + 1..]);

    let trailing_kind = if block.kind == BlockKind::ListItem {
        BlockKind::ListItem
    } else {
        BlockKind::Paragraph
    };
    let new_block = Block {
        kind: trailing_kind,
        align: block.align,
        children: trailing,
    };

    if let Some(Node::Block(current)) = out.get_node_mut(&block_path) {
        current.children = leading;
    }

    let mut new_block_path = block_path.clone();
    if let Some(last) = new_block_path.last_mut() {
        *last += 1;
    }
    if out.insert_node(&new_block_path, Node::Block(new_block)).is_err() {
        return (doc.clone(), point.clone());
    }

    let mut caret_path = new_block_path;
    caret_path.push(0);
    (out, Point::new(caret_path, 0))
}

/// Clamps a point onto the nearest valid position in the document: an
/// invalid path falls back to the closest text leaf at or before it, and the
/// offset is clamped to the leaf's length.
pub fn clamp_point(doc: &Document, point: &Point) -> Point {
    if let Some(run) = doc.get_node(&point.path).and_then(Node::as_text) {
        return Point::new(point.path.clone(), point.offset.min(run.len()));
    }

    let leaves = doc.text_paths();
    if leaves.is_empty() {
        return Point::new(vec![], 0);
    }

    let fallback = leaves
        .iter()
        .rev()
        .find(|leaf| compare_paths(leaf, &point.path) != Ordering::Greater)
        .unwrap_or(&leaves[0])
        .clone();
    let len = doc
        .get_node(&fallback)
        .and_then(Node::as_text)
        .map(TextRun::len)
        .unwrap_or(0);
    Point::new(fallback, len.min(point.offset))
}

/// Splits a string at a character index.
fn split_at_char(text: &str, index: usize) -> (String, String) {
    let byte_index = text
        .char_indices()
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    let (head, tail) = text.split_at(byte_index);
    (head.to_string(), tail.to_string())
}
