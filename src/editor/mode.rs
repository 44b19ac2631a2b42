//! Editor mode management.
//!
//! htmlquill has two modes: `Edit`, where keystrokes type into the document
//! and chords run formatting commands, and `View`, a read-only mode where
//! only navigation works. The mode is displayed in the status bar using the
//! `Display` implementation.
//!
//! # Example
//!
//! ```
//! use htmlquill::editor::mode::EditorMode;
//!
//! // The editor starts in Edit mode by default
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Edit);
//! assert_eq!(format!("{}", mode), "EDIT");
//!
//! assert_eq!(format!("{}", EditorMode::View), "VIEW");
//! ```

use std::fmt;

/// The current editing mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Normal editing: typing mutates the document, chords run commands.
    Edit,
    /// Read-only: navigation and queries only; every mutation is rejected.
    View,
}

impl EditorMode {
    /// Returns true when mutations are allowed.
    pub fn is_editable(&self) -> bool {
        matches!(self, EditorMode::Edit)
    }
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Edit => write!(f, "EDIT"),
            EditorMode::View => write!(f, "VIEW"),
        }
    }
}

impl Default for EditorMode {
    /// Returns `EditorMode::Edit`; an editor is editable unless the caller
    /// asked for read-only.
    fn default() -> Self {
        EditorMode::Edit
    }
}
