//! Sitemap generation.
//!
//! Walks the finished output tree and emits `sitemap.xml` (sitemaps.org
//! 0.9 schema) at the output root.
//!
//! A directory qualifies as a sitemap entry iff it contains exactly one
//! `index.html` — that is how generated leaf pages are told apart from
//! intermediate directories. The `404` page is excluded by name.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/posts</loc>
//!     <lastmod>2025-01-01T12:00:00</lastmod>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build the sitemap for `output_root` and write it to
/// `<output_root>/sitemap.xml`.
pub fn build_sitemap(output_root: &Path, base_url: &str) -> Result<()> {
    let entries = collect_leaf_entries(output_root, base_url)?;
    let xml = into_xml(&entries);

    let sitemap_path = output_root.join("sitemap.xml");
    fs::write(&sitemap_path, xml)
        .with_context(|| format!("failed to write sitemap to {}", sitemap_path.display()))?;

    Ok(())
}

// ============================================================================
// Implementation
// ============================================================================

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification timestamp (ISO-8601, local time)
    lastmod: String,
}

/// Walk the output tree and collect one entry per leaf page directory.
fn collect_leaf_entries(output_root: &Path, base_url: &str) -> Result<Vec<UrlEntry>> {
    let mut entries = Vec::new();

    for dir in WalkDir::new(output_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
    {
        let Some(index) = single_index_html(dir.path())? else {
            continue;
        };

        let relative = dir
            .path()
            .strip_prefix(output_root)
            .unwrap_or(dir.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if relative == "404" {
            continue;
        }

        entries.push(UrlEntry {
            loc: format!("{base_url}/{relative}"),
            lastmod: last_modified_iso(&index)?,
        });
    }

    Ok(entries)
}

/// Return the path of the directory's `index.html` iff it contains exactly
/// one (case-insensitive); zero or multiple disqualify the directory.
fn single_index_html(dir: &Path) -> Result<Option<std::path::PathBuf>> {
    let mut found = None;
    let mut count = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().to_lowercase() == "index.html" {
            count += 1;
            found = Some(entry.path());
        }
    }

    Ok(if count == 1 { found } else { None })
}

/// ISO-8601 formatted mtime of a file, in local time.
fn last_modified_iso(path: &Path) -> Result<String> {
    let mtime = fs::metadata(path)?.modified()?;
    let datetime: DateTime<Local> = mtime.into();
    Ok(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Generate the sitemap XML string.
fn into_xml(entries: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
