//! Rich text node representation.
//!
//! This module provides the core data structures for representing rich text
//! documents in htmlquill. A document is a tree of [`Node`]s: block nodes
//! (paragraphs, headings, quotes, lists, list items) that carry children, and
//! text leaves that carry a string payload plus a set of inline marks.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::{Block, BlockKind, MarkSet, Node, TextRun};
//!
//! // A paragraph holding a single bold text run
//! let mut marks = MarkSet::default();
//! marks.bold = true;
//!
//! let para = Block {
//!     kind: BlockKind::Paragraph,
//!     align: None,
//!     children: vec![Node::Text(TextRun {
//!         text: "hello".to_string(),
//!         marks,
//!     })],
//! };
//! assert_eq!(para.kind, BlockKind::Paragraph);
//! assert!(para.is_leaf_block());
//! ```

use std::fmt;

/// The kind of a block node.
///
/// This is a closed set: the renderer and the HTML serializer both match
/// exhaustively over it, so adding a kind forces updates in both places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Plain paragraph. Also the kind blocks reset to when a toggle clears
    /// their current kind.
    Paragraph,
    /// Top-level heading.
    HeadingOne,
    /// Second-level heading.
    HeadingTwo,
    /// Block quotation.
    BlockQuote,
    /// Ordered list container. Direct children are list items.
    NumberedList,
    /// Unordered list container. Direct children are list items.
    BulletedList,
    /// A single item inside a list container.
    ListItem,
}

impl BlockKind {
    /// Returns true for the two list container kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::node::BlockKind;
    ///
    /// assert!(BlockKind::BulletedList.is_list());
    /// assert!(BlockKind::NumberedList.is_list());
    /// assert!(!BlockKind::ListItem.is_list());
    /// assert!(!BlockKind::Paragraph.is_list());
    /// ```
    pub fn is_list(&self) -> bool {
        matches!(self, BlockKind::NumberedList | BlockKind::BulletedList)
    }

    /// Returns the stable name for this kind, as used in the persisted
    /// vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::HeadingOne => "heading-one",
            BlockKind::HeadingTwo => "heading-two",
            BlockKind::BlockQuote => "block-quote",
            BlockKind::NumberedList => "numbered-list",
            BlockKind::BulletedList => "bulleted-list",
            BlockKind::ListItem => "list-item",
        }
    }

    /// Parses a kind from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "paragraph" => Some(BlockKind::Paragraph),
            "heading-one" => Some(BlockKind::HeadingOne),
            "heading-two" => Some(BlockKind::HeadingTwo),
            "block-quote" => Some(BlockKind::BlockQuote),
            "numbered-list" => Some(BlockKind::NumberedList),
            "bulleted-list" => Some(BlockKind::BulletedList),
            "list-item" => Some(BlockKind::ListItem),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Block-level text alignment.
///
/// Alignment is orthogonal to [`BlockKind`]: any block may carry any
/// alignment, and toggling one axis never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// The fixed set of alignment names. Membership in this set is what
/// distinguishes an alignment toggle from a block-kind toggle when a format
/// arrives as a bare name.
pub const ALIGNMENT_NAMES: [&str; 4] = ["left", "center", "right", "justify"];

impl Alignment {
    /// Returns the stable name for this alignment.
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// Parses an alignment from its stable name.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::node::Alignment;
    ///
    /// assert_eq!(Alignment::from_name("center"), Some(Alignment::Center));
    /// assert_eq!(Alignment::from_name("middle"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "justify" => Some(Alignment::Justify),
            _ => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the four inline text marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    /// Returns the stable name for this mark.
    pub fn name(&self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of inline marks attached to a text run.
///
/// The four marks are independent booleans: any subset may be set at once.
///
/// # Example
///
/// ```
/// use htmlquill::document::node::{Mark, MarkSet};
///
/// let mut marks = MarkSet::default();
/// assert!(marks.is_empty());
///
/// marks.insert(Mark::Bold);
/// marks.toggle(Mark::Code);
/// assert!(marks.contains(Mark::Bold));
/// assert!(marks.contains(Mark::Code));
///
/// marks.toggle(Mark::Code);
/// assert!(!marks.contains(Mark::Code));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
}

impl MarkSet {
    /// Returns true if no mark is set.
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.underline || self.code)
    }

    /// Returns whether the given mark is set.
    pub fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Code => self.code,
        }
    }

    /// Sets the given mark.
    pub fn insert(&mut self, mark: Mark) {
        self.set(mark, true);
    }

    /// Clears the given mark.
    pub fn remove(&mut self, mark: Mark) {
        self.set(mark, false);
    }

    /// Sets or clears the given mark.
    pub fn set(&mut self, mark: Mark, on: bool) {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Underline => self.underline = on,
            Mark::Code => self.code = on,
        }
    }

    /// Flips the given mark.
    pub fn toggle(&mut self, mark: Mark) {
        self.set(mark, !self.contains(mark));
    }
}

/// A text leaf: a string payload plus its marks. Text nodes never carry
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub marks: MarkSet,
}

impl TextRun {
    /// Creates an unmarked text run.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::node::TextRun;
    ///
    /// let run = TextRun::new("hello");
    /// assert_eq!(run.text, "hello");
    /// assert!(run.marks.is_empty());
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: MarkSet::default(),
        }
    }

    /// Creates a text run with the given marks.
    pub fn with_marks(text: impl Into<String>, marks: MarkSet) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    /// Returns the length of the payload in characters, which is the unit
    /// selection offsets are measured in.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A block node: a kind, an optional alignment, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub align: Option<Alignment>,
    pub children: Vec<Node>,
}

impl Block {
    /// Creates an empty block of the given kind with no alignment.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            align: None,
            children: Vec::new(),
        }
    }

    /// Creates a paragraph holding a single unmarked text run.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::node::{Block, BlockKind};
    ///
    /// let para = Block::paragraph("hello");
    /// assert_eq!(para.kind, BlockKind::Paragraph);
    /// assert_eq!(para.children.len(), 1);
    /// ```
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            align: None,
            children: vec![Node::Text(TextRun::new(text))],
        }
    }

    /// Returns true if this block holds only text leaves (or nothing).
    ///
    /// Leaf blocks are where inline content lives; list containers are the
    /// only non-leaf blocks in a well-formed document.
    pub fn is_leaf_block(&self) -> bool {
        self.children.iter().all(|child| child.is_text())
    }

    /// Returns the concatenated text of every leaf below this block.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(run) => out.push_str(&run.text),
                Node::Block(block) => out.push_str(&block.plain_text()),
            }
        }
        out
    }
}

/// A node in the document tree: either a block or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Block(Block),
    Text(TextRun),
}

impl Node {
    /// Returns true if this node is a block.
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block(_))
    }

    /// Returns true if this node is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Returns the block, if this node is one.
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Text(_) => None,
        }
    }

    /// Returns the text run, if this node is one.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Node::Text(run) => Some(run),
            Node::Block(_) => None,
        }
    }

    /// Returns the text run mutably, if this node is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextRun> {
        match self {
            Node::Text(run) => Some(run),
            Node::Block(_) => None,
        }
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<TextRun> for Node {
    fn from(run: TextRun) -> Self {
        Node::Text(run)
    }
}

/// A toggleable block format: either a block kind or an alignment.
///
/// `toggle_block` accepts both namespaces through this type. When a format
/// arrives as a bare name (configuration, tooling), [`BlockFormat::from_name`]
/// disambiguates by checking membership in the fixed alignment-name set
/// first, then falling back to the block-kind vocabulary.
///
/// # Example
///
/// ```
/// use htmlquill::document::node::{Alignment, BlockFormat, BlockKind};
///
/// assert_eq!(
///     BlockFormat::from_name("center"),
///     Some(BlockFormat::Align(Alignment::Center))
/// );
/// assert_eq!(
///     BlockFormat::from_name("bulleted-list"),
///     Some(BlockFormat::Kind(BlockKind::BulletedList))
/// );
/// assert_eq!(BlockFormat::from_name("marquee"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    Kind(BlockKind),
    Align(Alignment),
}

impl BlockFormat {
    /// Parses a format name into a kind or an alignment.
    pub fn from_name(name: &str) -> Option<Self> {
        if ALIGNMENT_NAMES.contains(&name) {
            Alignment::from_name(name).map(BlockFormat::Align)
        } else {
            BlockKind::from_name(name).map(BlockFormat::Kind)
        }
    }
}
