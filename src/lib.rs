//! HTMLQuill - A terminal-based structural rich text editor.
//!
//! htmlquill edits a block/inline document tree of paragraphs, headings,
//! quotes, lists, and marked text runs in the terminal, and persists it
//! as HTML. The crate is organized as:
//!
//! - [`document`]: the node model, the path-addressed tree, and lossy
//!   construction from incoming content
//! - [`editor`]: selection, pure tree transforms, the command layer, and
//!   the editor state with its change callback
//! - [`input`]: keyboard chord mapping and the event handler
//! - [`html`]: the HTML serializer
//! - [`ui`]: the ratatui interface (toolbar, editor view, status line)
//! - [`theme`]: built-in color themes
//! - [`config`]: TOML configuration
//! - [`file`]: loading and atomic saving
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::Mark;
//! use htmlquill::document::parser::parse_input_or_placeholder;
//! use htmlquill::editor::state::EditorState;
//!
//! let doc = parse_input_or_placeholder("Hello world");
//! let mut state = EditorState::new(doc);
//!
//! state.select_all();
//! state.toggle_mark(Mark::Bold);
//! assert_eq!(state.html(), "<p><strong>Hello world</strong></p>");
//! ```

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod html;
pub mod input;
pub mod theme;
pub mod ui;
