//! Generator marker injection.
//!
//! Stamps the homepage with a `<meta name="generator">` tag right after
//! the opening `<head>`, so the produced site advertises what built it.
//! Injection is idempotent: rebuilding over an already-stamped output
//! leaves a single tag.

use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The marker tag inserted into the homepage head.
pub const GENERATOR_TAG: &str = r#"<meta name="generator" content="Bestatic" />"#;

/// Inject the generator tag into `<output_root>/index.html`.
///
/// A missing homepage (e.g. a theme without an index template) is logged
/// and skipped rather than failing the build.
pub fn inject_generator_tag(output_root: &Path) -> Result<()> {
    let index_path = output_root.join("index.html");

    if !index_path.is_file() {
        log!("warn"; "no index.html at output root, skipping generator tag");
        return Ok(());
    }

    let html = fs::read_to_string(&index_path)
        .with_context(|| format!("failed to read {}", index_path.display()))?;

    if html.contains(GENERATOR_TAG) {
        return Ok(());
    }

    let Some(head_end) = html.find("<head>").map(|i| i + "<head>".len()) else {
        log!("warn"; "no <head> in index.html, skipping generator tag");
        return Ok(());
    };

    let mut stamped = String::with_capacity(html.len() + GENERATOR_TAG.len() + 1);
    stamped.push_str(&html[..head_end]);
    stamped.push('\n');
    stamped.push_str(GENERATOR_TAG);
    stamped.push_str(&html[head_end..]);

    fs::write(&index_path, stamped)
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
