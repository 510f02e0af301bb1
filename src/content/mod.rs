//! Content file parsing.
//!
//! Turns one Markdown source file into an immutable [`Document`]: front
//! matter split off, shortcodes expanded, body converted to HTML, plain
//! text and summary derived, slug and tags resolved. Documents are created
//! once at build start and never mutated afterwards.

pub mod front_matter;
pub mod markdown;
pub mod shortcode;

use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::taxonomy;
use crate::utils::slug::slugify;
use crate::utils::text::{strip_html, summarize};
use anyhow::{Context, Result};
use front_matter::{FrontMatter, split_front_matter};
use serde::Serialize;
use shortcode::ShortcodeRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker comment splitting a rendered body into sections
/// (used when the front matter sets `section: true`).
const SECTION_MARKER: &str = "<!-- section -->";

// ============================================================================
// Document
// ============================================================================

/// One parsed content file (a post or a page; same shape, different
/// collections).
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Source file path as given to the parser.
    pub source_path: PathBuf,

    /// Bare file name, the collection key.
    pub file_name: String,

    /// Directory portion of the source path relative to its content root,
    /// `/`-separated, empty for top-level files. Preserved in output URLs.
    pub path_info: String,

    /// Parsed front matter (typed fields plus ordered extras).
    pub metadata: FrontMatter,

    /// Document title (guaranteed present).
    pub title: String,

    /// URL slug (guaranteed non-empty).
    pub slug: String,

    /// Body converted from Markdown to HTML.
    pub html: String,

    /// Body split on section markers; empty unless `section: true`.
    pub sections: Vec<String>,

    /// HTML stripped to visible text, for summary and search index.
    pub plain_text: String,

    /// Truncated plain text with ellipsis marker.
    pub summary: String,

    /// Deduplicated taxonomy terms from the `tags` field.
    pub tags: Vec<String>,
}

impl Document {
    /// Parse a content file into a Document.
    ///
    /// Pure transformation aside from reading the source file. A missing
    /// `title` is the one fatal metadata error at this stage.
    pub fn parse(
        path: &Path,
        content_root: &Path,
        registry: &ShortcodeRegistry,
        config: &SiteConfig,
    ) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;

        let (metadata, body) = split_front_matter(&raw)
            .with_context(|| format!("in `{}`", path.display()))?;

        let title = metadata
            .title
            .clone()
            .ok_or_else(|| BuildError::MissingTitle(path.to_path_buf()))?;

        let expanded = registry.expand(body);
        let html = markdown::to_html(&expanded, &config.build.markdown);

        let sections = if metadata.section {
            html.split(SECTION_MARKER).map(str::to_owned).collect()
        } else {
            Vec::new()
        };

        let plain_text = strip_html(&html);
        let summary = summarize(plain_text.trim(), config.build.summary_length);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let slug = resolve_slug(&metadata, &title, path);
        let tags = metadata
            .tags
            .as_ref()
            .map(taxonomy::split_terms)
            .unwrap_or_default();

        Ok(Self {
            source_path: path.to_path_buf(),
            file_name,
            path_info: path_info(path, content_root),
            metadata,
            title,
            slug,
            html,
            sections,
            plain_text,
            summary,
            tags,
        })
    }

    /// URL path of this document relative to its collection root:
    /// `<path_info>/<slug>` or just `<slug>` for top-level files.
    pub fn slug_path(&self) -> String {
        if self.path_info.is_empty() {
            self.slug.clone()
        } else {
            format!("{}/{}", self.path_info, self.slug)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Explicit slug, else slugified title, else slugified file stem.
/// The result is never empty.
fn resolve_slug(metadata: &FrontMatter, title: &str, path: &Path) -> String {
    if let Some(slug) = &metadata.slug
        && !slug.is_empty()
    {
        return slug.clone();
    }

    let derived = slugify(title);
    if !derived.is_empty() {
        return derived;
    }

    slugify(&path.file_stem().unwrap_or_default().to_string_lossy())
}

/// Directory of `path` relative to `content_root`, `/`-separated.
fn path_info(path: &Path, content_root: &Path) -> String {
    let parent = path.parent().unwrap_or(Path::new(""));
    let relative = parent.strip_prefix(content_root).unwrap_or(parent);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tests
// ============================================================================
