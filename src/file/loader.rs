//! Document loading functionality.
//!
//! This module provides functions to load editor content from files or
//! stdin. Content goes through the lossy plain-text construction: markup in
//! the input is stripped, and if extraction fails outright the fixed
//! placeholder document is substituted silently. Opening a document never
//! fails on content, only on I/O.

use crate::document::parser::parse_input_or_placeholder;
use crate::document::tree::Document;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads a document from a file on disk.
///
/// The file's contents run through the lossy construction; malformed
/// markup degrades to the placeholder document rather than erroring.
///
/// # Errors
///
/// Returns an error only if the file cannot be read (missing, permissions,
/// not valid UTF-8).
///
/// # Examples
///
/// ```no_run
/// use htmlquill::file::loader::load_document;
///
/// let doc = load_document("page.html").unwrap();
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let content = fs::read_to_string(path.as_ref()).context("Failed to read file")?;
    Ok(parse_input_or_placeholder(&content))
}

/// Loads a document from standard input.
///
/// Reads stdin to EOF and runs the contents through the lossy construction.
/// Useful for piping content into the editor.
///
/// # Errors
///
/// Returns an error only if reading stdin fails.
pub fn load_document_from_stdin() -> Result<Document> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(parse_input_or_placeholder(&content))
}
