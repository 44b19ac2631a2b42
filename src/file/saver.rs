//! Document saving functionality.
//!
//! This module writes the serialized HTML rendition of a document to disk
//! with atomic write operations and optional backup creation. What happens
//! to the HTML after that (syncing, publishing) is the caller's business;
//! this module only owns the local write.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves an HTML string to a file.
///
/// The write is atomic: the content goes to a temporary file first, which
/// is then renamed over the target, so the target is never left in a
/// partially written state. When `config.create_backup` is set and the
/// target exists, a `.bak` copy of the original is made first.
///
/// # Errors
///
/// Returns an error if:
/// - Backup creation fails (if requested)
/// - Writing the temp file fails
/// - Renaming the temp file to the target fails
///
/// # Examples
///
/// ```no_run
/// use htmlquill::config::Config;
/// use htmlquill::file::saver::save_html_file;
///
/// let config = Config::default();
/// save_html_file("page.html", "<p>Hello world</p>", &config).unwrap();
/// ```
pub fn save_html_file<P: AsRef<Path>>(path: P, html: &str, config: &Config) -> Result<()> {
    let path = path.as_ref();

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    write_file_atomic(path, html.as_bytes())
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically via a temp file and rename.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
