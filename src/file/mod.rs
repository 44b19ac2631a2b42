//! File I/O operations for editor content.
//!
//! This module provides functionality to load editor content from disk or
//! stdin, and save the serialized HTML back to files with atomic write
//! operations and optional backups.

pub mod loader;
pub mod saver;
