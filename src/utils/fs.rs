//! Filesystem helpers for the build pipeline.

use crate::log;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Recursively copy a directory tree, creating destination directories as
/// needed. Existing files are overwritten.
pub fn copy_dir_all(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Copy a directory tree if the source exists.
///
/// An absent source is valid and does nothing. Copy failures (permissions,
/// odd file types) are logged and do not abort the build.
pub fn copy_if_exists(source: &Path, destination: &Path) {
    if !source.exists() {
        return;
    }
    if let Err(e) = copy_dir_all(source, destination) {
        log!("warn"; "failed to copy {}: {:#}", source.display(), e);
    }
}

/// Write `content` to `path`, creating parent directories first.
pub fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
