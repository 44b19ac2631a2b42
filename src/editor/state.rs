//! Editor state management.
//!
//! This module provides the [`EditorState`] struct that manages all runtime
//! state for one editor: the document tree, the selection, the caret's
//! pending marks, the mode, the dirty flag, and the cached HTML rendition of
//! the document.
//!
//! `EditorState` is an explicit, owned object with no ambient editor
//! singleton behind it, so multiple independent editors can coexist safely.
//!
//! Every accepted mutation synchronously re-serializes the document and
//! hands the fresh HTML string to the owner-supplied change callback.
//! The callback is fire-and-forget: no acknowledgement or retry, and what
//! the owner does with the string (persistence, preview) is the owner's
//! business.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::{Block, Mark, Node};
//! use htmlquill::document::tree::Document;
//! use htmlquill::editor::state::EditorState;
//!
//! let doc = Document::new(vec![Node::Block(Block::paragraph("Hello world"))]);
//! let mut state = EditorState::new(doc);
//!
//! assert_eq!(state.html(), "<p>Hello world</p>");
//! assert!(!state.is_dirty());
//!
//! state.select_all();
//! state.toggle_mark(Mark::Bold);
//! assert_eq!(state.html(), "<p><strong>Hello world</strong></p>");
//! assert!(state.is_dirty());
//! ```

use crate::document::node::{BlockFormat, Mark, MarkSet};
use crate::document::tree::Document;
use crate::editor::commands;
use crate::editor::mode::EditorMode;
use crate::editor::selection::{Point, Selection};
use crate::editor::transform;
use crate::html::serializer;

/// A message to display to the user in the message area.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Owner-supplied change callback, invoked with the serialized HTML after
/// every accepted mutation.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Manages the complete runtime state of one editor.
pub struct EditorState {
    document: Document,
    selection: Selection,
    pending_marks: Option<MarkSet>,
    mode: EditorMode,
    dirty: bool,
    filename: Option<String>,
    html: String,
    on_change: Option<ChangeCallback>,
    message: Option<Message>,
    scroll_offset: usize,
    show_help: bool,
    help_scroll: usize,
    /// When set, cursor movement extends the selection from this anchor
    /// instead of collapsing it.
    selecting: bool,
    /// Armed after a quit attempt on a dirty document; the next quit goes
    /// through.
    quit_pending: bool,
}

impl EditorState {
    /// Creates an editor over the given document, with the caret at the
    /// start of the first text leaf.
    pub fn new(document: Document) -> Self {
        let caret = transform::clamp_point(&document, &Point::new(vec![0, 0], 0));
        let html = serializer::serialize(document.children());
        Self {
            document,
            selection: Selection::caret(caret),
            pending_marks: None,
            mode: EditorMode::default(),
            dirty: false,
            filename: None,
            html,
            on_change: None,
            message: None,
            scroll_offset: 0,
            show_help: false,
            help_scroll: 0,
            selecting: false,
            quit_pending: false,
        }
    }

    /// Registers the owner's change callback and immediately feeds it the
    /// current HTML, so the owner starts from a known rendition.
    pub fn set_on_change(&mut self, mut callback: ChangeCallback) {
        callback(&self.html);
        self.on_change = Some(callback);
    }

    // --- accessors -------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The caret: the focus end of the selection.
    pub fn caret(&self) -> &Point {
        &self.selection.focus
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    /// The serialized HTML rendition of the current document. Kept in sync
    /// with every mutation; this is what gets persisted.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn pending_marks(&self) -> Option<MarkSet> {
        self.pending_marks
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll = 0;
    }

    pub fn help_scroll(&self) -> usize {
        self.help_scroll
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Arms or disarms selection extension: while armed, cursor movement
    /// drags the focus and leaves the anchor pinned.
    pub fn toggle_selecting(&mut self) {
        self.selecting = !self.selecting;
        if !self.selecting {
            self.selection = Selection::caret(self.selection.focus.clone());
        }
    }

    /// Arms the dirty-quit confirmation. Returns true when quitting may
    /// proceed: the document is clean, or the user already saw the warning.
    pub fn confirm_quit(&mut self) -> bool {
        if !self.dirty || self.quit_pending {
            return true;
        }
        self.quit_pending = true;
        self.set_message(
            "Unsaved changes, press Ctrl+Q again to quit".to_string(),
            MessageLevel::Warning,
        );
        false
    }

    // --- formatting commands --------------------------------------------

    /// Toggles a block format at the current selection.
    pub fn toggle_block(&mut self, format: BlockFormat) {
        if !self.mode.is_editable() {
            return;
        }
        self.document = commands::toggle_block(&self.document, &self.selection, format);
        self.reclamp_selection();
        self.apply_change();
    }

    /// Toggles an inline mark at the current selection. A collapsed
    /// selection only flips the pending marks and does not mutate the
    /// document.
    pub fn toggle_mark(&mut self, mark: Mark) {
        if !self.mode.is_editable() {
            return;
        }
        let result =
            commands::toggle_mark(&self.document, &self.selection, self.pending_marks, mark);
        let mutated = result.document != self.document;
        self.document = result.document;
        self.selection = result.selection;
        self.pending_marks = result.pending_marks;
        if mutated {
            self.apply_change();
        }
    }

    /// Returns whether a block format is active at the selection.
    pub fn is_block_active(&self, format: BlockFormat) -> bool {
        commands::is_block_active(&self.document, &self.selection, format)
    }

    /// Returns whether a mark is active at the caret.
    pub fn is_mark_active(&self, mark: Mark) -> bool {
        commands::is_mark_active(&self.document, &self.selection, self.pending_marks, mark)
    }

    // --- text editing ----------------------------------------------------

    /// Types a character at the caret, replacing the selection if one is
    /// open. Typed text takes the caret's pending marks.
    pub fn insert_char(&mut self, ch: char) {
        self.insert_str(&ch.to_string());
    }

    /// Types a string at the caret, replacing the selection if one is open.
    pub fn insert_str(&mut self, text: &str) {
        if !self.mode.is_editable() {
            return;
        }
        self.collapse_selection_by_delete();

        let caret = self.selection.focus.clone();
        let marks = self
            .pending_marks
            .unwrap_or_else(|| commands::marks_at(&self.document, &caret));
        let (document, caret) = transform::insert_text(&self.document, &caret, text, marks);
        self.document = document;
        self.selection = Selection::caret(caret);
        self.pending_marks = None;
        self.apply_change();
    }

    /// Deletes backward: the selection when one is open, otherwise one
    /// character (merging blocks at a block start).
    pub fn delete_backward(&mut self) {
        if !self.mode.is_editable() {
            return;
        }
        if !self.selection.is_collapsed() {
            self.collapse_selection_by_delete();
        } else {
            let caret = self.selection.focus.clone();
            let (document, caret) = transform::delete_backward(&self.document, &caret);
            self.document = document;
            self.selection = Selection::caret(caret);
        }
        self.pending_marks = None;
        self.apply_change();
    }

    /// Splits the current block at the caret (Enter).
    pub fn insert_newline(&mut self) {
        if !self.mode.is_editable() {
            return;
        }
        self.collapse_selection_by_delete();
        let caret = self.selection.focus.clone();
        let (document, caret) = transform::split_block(&self.document, &caret);
        self.document = document;
        self.selection = Selection::caret(caret);
        self.pending_marks = None;
        self.apply_change();
    }

    /// If the selection is open, deletes its contents and collapses to the
    /// range start.
    fn collapse_selection_by_delete(&mut self) {
        if self.selection.is_collapsed() {
            return;
        }
        let (start, end) = self.selection.unhung_range(&self.document);
        let (document, caret) = transform::delete_range(&self.document, &start, &end);
        self.document = document;
        self.selection = Selection::caret(caret);
        self.selecting = false;
    }

    // --- cursor movement -------------------------------------------------

    /// Moves the caret one character left, crossing into the previous leaf
    /// at a boundary.
    pub fn move_left(&mut self) {
        let caret = self.selection.focus.clone();
        let next = if caret.offset > 0 {
            Point::new(caret.path.clone(), caret.offset - 1)
        } else {
            match self.neighbor_leaf(&caret.path, -1) {
                Some(prev) => {
                    let len = self.leaf_len(&prev);
                    Point::new(prev, len)
                }
                None => caret,
            }
        };
        self.move_caret(next);
    }

    /// Moves the caret one character right, crossing into the next leaf at
    /// a boundary.
    pub fn move_right(&mut self) {
        let caret = self.selection.focus.clone();
        let len = self.leaf_len(&caret.path);
        let next = if caret.offset < len {
            Point::new(caret.path.clone(), caret.offset + 1)
        } else {
            match self.neighbor_leaf(&caret.path, 1) {
                Some(next) => Point::new(next, 0),
                None => caret,
            }
        };
        self.move_caret(next);
    }

    /// Moves the caret to the previous leaf block, keeping the offset where
    /// possible.
    pub fn move_up(&mut self) {
        self.move_vertically(-1);
    }

    /// Moves the caret to the next leaf block, keeping the offset where
    /// possible.
    pub fn move_down(&mut self) {
        self.move_vertically(1);
    }

    /// Moves the caret to the start of the current leaf.
    pub fn move_home(&mut self) {
        let caret = self.selection.focus.clone();
        self.move_caret(Point::new(caret.path, 0));
    }

    /// Moves the caret to the end of the current leaf.
    pub fn move_end(&mut self) {
        let caret = self.selection.focus.clone();
        let len = self.leaf_len(&caret.path);
        self.move_caret(Point::new(caret.path, len));
    }

    /// Selects the whole document.
    pub fn select_all(&mut self) {
        let leaves = self.document.text_paths();
        let (Some(first), Some(last)) = (leaves.first(), leaves.last()) else {
            return;
        };
        let len = self.leaf_len(last);
        self.selection = Selection::new(
            Point::new(first.clone(), 0),
            Point::new(last.clone(), len),
        );
        self.selecting = false;
    }

    fn move_vertically(&mut self, direction: isize) {
        let caret = self.selection.focus.clone();
        let block_path: Vec<usize> = caret.path[..caret.path.len().saturating_sub(1)].to_vec();

        let leaf_blocks: Vec<Vec<usize>> = self
            .document
            .block_paths()
            .into_iter()
            .filter(|path| {
                self.document
                    .get_block(path)
                    .is_some_and(|block| block.is_leaf_block())
            })
            .collect();
        let Some(position) = leaf_blocks.iter().position(|path| *path == block_path) else {
            return;
        };
        let target = position.checked_add_signed(direction).and_then(|i| leaf_blocks.get(i));
        let Some(target) = target else {
            return;
        };

        let mut leaf = target.clone();
        leaf.push(0);
        let next = transform::clamp_point(
            &self.document,
            &Point::new(leaf, caret.offset),
        );
        self.move_caret(next);
    }

    fn move_caret(&mut self, focus: Point) {
        if self.selecting {
            self.selection.focus = focus;
        } else {
            self.selection = Selection::caret(focus);
        }
        // Movement re-reads marks from the new position
        self.pending_marks = None;
        self.quit_pending = false;
    }

    fn neighbor_leaf(&self, path: &[usize], direction: isize) -> Option<Vec<usize>> {
        let leaves = self.document.text_paths();
        let position = leaves.iter().position(|p| p == path)?;
        let target = position.checked_add_signed(direction)?;
        leaves.get(target).cloned()
    }

    fn leaf_len(&self, path: &[usize]) -> usize {
        self.document
            .get_node(path)
            .and_then(|node| node.as_text())
            .map(|run| run.len())
            .unwrap_or(0)
    }

    // --- change plumbing -------------------------------------------------

    /// Re-clamps both selection endpoints after a structural transform
    /// renumbered paths.
    fn reclamp_selection(&mut self) {
        let anchor = transform::clamp_point(&self.document, &self.selection.anchor);
        let focus = transform::clamp_point(&self.document, &self.selection.focus);
        self.selection = Selection::new(anchor, focus);
    }

    /// Serializes the document, caches the HTML, notifies the owner, and
    /// marks the buffer dirty. Runs synchronously inside the mutating event
    /// handler.
    fn apply_change(&mut self) {
        self.html = serializer::serialize(self.document.children());
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.html);
        }
        self.dirty = true;
        self.quit_pending = false;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{Block, BlockKind, Node};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hello_state() -> EditorState {
        EditorState::new(Document::new(vec![Node::Block(Block::paragraph(
            "Hello world",
        ))]))
    }

    #[test]
    fn test_initial_state() {
        let state = hello_state();
        assert_eq!(state.mode(), EditorMode::Edit);
        assert!(!state.is_dirty());
        assert_eq!(state.filename(), None);
        assert_eq!(state.html(), "<p>Hello world</p>");
        assert_eq!(state.caret(), &Point::new(vec![0, 0], 0));
    }

    #[test]
    fn test_on_change_fires_on_mutation() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut state = hello_state();
        state.set_on_change(Box::new(move |html| {
            sink.borrow_mut().push(html.to_string());
        }));

        state.select_all();
        state.toggle_mark(Mark::Bold);

        let seen = seen.borrow();
        // Initial rendition plus one mutation
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], "<p>Hello world</p>");
        assert_eq!(seen[1], "<p><strong>Hello world</strong></p>");
    }

    #[test]
    fn test_pending_mark_does_not_fire_on_change() {
        let count: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut state = hello_state();
        state.set_on_change(Box::new(move |_| {
            *sink.borrow_mut() += 1;
        }));
        assert_eq!(*count.borrow(), 1); // initial rendition

        // Collapsed selection: only the pending set flips
        state.toggle_mark(Mark::Bold);
        assert_eq!(*count.borrow(), 1);
        assert!(state.is_mark_active(Mark::Bold));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_typing_realizes_pending_marks() {
        let mut state = hello_state();
        state.move_end();
        state.toggle_mark(Mark::Bold);
        state.insert_char('!');

        assert_eq!(state.html(), "<p>Hello world<strong>!</strong></p>");
    }

    #[test]
    fn test_view_mode_rejects_mutations() {
        let mut state = hello_state();
        state.set_mode(EditorMode::View);

        state.insert_char('x');
        state.select_all();
        state.toggle_mark(Mark::Bold);
        state.toggle_block(BlockFormat::Kind(BlockKind::HeadingOne));
        state.delete_backward();

        assert_eq!(state.html(), "<p>Hello world</p>");
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_block_toggle_reclamps_selection() {
        let mut state = hello_state();
        state.toggle_block(BlockFormat::Kind(BlockKind::BulletedList));

        // The caret followed the text into the list item
        assert_eq!(state.caret().path, vec![0, 0, 0]);
        assert_eq!(state.html(), "<ul><li>Hello world</li></ul>");
    }

    #[test]
    fn test_selection_extension() {
        let mut state = hello_state();
        state.toggle_selecting();
        for _ in 0..5 {
            state.move_right();
        }
        assert!(!state.selection().is_collapsed());

        state.toggle_mark(Mark::Italic);
        assert_eq!(state.html(), "<p><em>Hello</em> world</p>");
    }

    #[test]
    fn test_movement_across_blocks() {
        let mut state = EditorState::new(Document::new(vec![
            Node::Block(Block::paragraph("ab")),
            Node::Block(Block::paragraph("cd")),
        ]));

        state.move_end();
        state.move_right();
        assert_eq!(state.caret(), &Point::new(vec![1, 0], 0));

        state.move_left();
        assert_eq!(state.caret(), &Point::new(vec![0, 0], 2));

        state.move_down();
        assert_eq!(state.caret().path, vec![1, 0]);
        state.move_up();
        assert_eq!(state.caret().path, vec![0, 0]);
    }

    #[test]
    fn test_confirm_quit_two_step() {
        let mut state = hello_state();
        assert!(state.confirm_quit()); // clean: quits immediately

        state.insert_char('!');
        assert!(!state.confirm_quit()); // dirty: warns first
        assert!(state.confirm_quit()); // armed: quits
    }

    #[test]
    fn test_backspace_and_enter() {
        let mut state = hello_state();
        state.move_end();
        state.delete_backward();
        assert_eq!(state.html(), "<p>Hello worl</p>");

        state.insert_newline();
        assert_eq!(state.html(), "<p>Hello worl</p><p></p>");
    }
}
