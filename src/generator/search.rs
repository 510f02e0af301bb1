//! Search index generation.
//!
//! Emits `index.json` at the output root: a flat array of
//! `{uri, title, content}` records covering every post and page, for
//! client-side search scripts to fetch. The `content` field is the
//! tag-stripped plain text of the document, and the `404` page is left
//! out since it is not a destination anyone searches for.

use crate::config::SiteConfig;
use crate::content::Document;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Single record in the search index
#[derive(Debug, Serialize)]
pub struct SearchEntry {
    /// Site-absolute URI of the rendered page
    pub uri: String,
    pub title: String,
    /// Plain-text body, HTML stripped
    pub content: String,
}

/// Build the search index and write it to `<output>/index.json`.
pub fn build_search_index(
    posts: &[&Document],
    pages: &[&Document],
    config: &SiteConfig,
) -> Result<()> {
    let entries = collect_entries(posts, pages, config);

    let json = serde_json::to_string_pretty(&entries)
        .context("failed to serialize search index")?;

    let index_path = config.output_dir().join("index.json");
    fs::write(&index_path, json)
        .with_context(|| format!("failed to write search index to {}", index_path.display()))?;

    Ok(())
}

// ============================================================================
// Implementation
// ============================================================================

fn collect_entries(
    posts: &[&Document],
    pages: &[&Document],
    config: &SiteConfig,
) -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(posts.len() + pages.len());

    for post in posts {
        entries.push(SearchEntry {
            uri: format!("/{}/{}", config.build.post_dir, post.slug_path()),
            title: post.title.clone(),
            content: post.plain_text.clone(),
        });
    }

    for page in pages {
        if page.slug == "404" {
            continue;
        }
        entries.push(SearchEntry {
            uri: format!("/{}", page.slug_path()),
            title: page.title.clone(),
            content: page.plain_text.clone(),
        });
    }

    entries
}

// ============================================================================
// Tests
// ============================================================================
