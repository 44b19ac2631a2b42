//! Editor state, selection, and editing commands.
//!
//! This module provides the editing core: the ephemeral selection model
//! ([`selection`]), pure structural transforms over the document tree
//! ([`transform`]), the selection-scoped command layer ([`commands`]), the
//! mode enum ([`mode`]), and the central state container ([`state`]) that
//! ties them to the change callback.
//!
//! # Example
//!
//! ```
//! use htmlquill::editor::mode::EditorMode;
//!
//! // Editors are editable unless opened read-only
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Edit);
//! ```

pub mod commands;
pub mod mode;
pub mod selection;
pub mod state;
pub mod transform;
