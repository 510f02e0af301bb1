//! Root-absolute path rewriting for project sites.
//!
//! Sites deployed under a sub-path (e.g. `https://user.github.io/repo/`)
//! need every root-absolute reference prefixed with that sub-path. Rather
//! than threading the prefix through templating, this runs as a post-pass
//! over the finished output tree:
//!
//! - `.html`: `href="/…"`, `src="/…"` and `data-search-index="/…"` attributes
//! - `.css`: `url(/…)` references
//! - `index.json`: `"uri"` fields of the search index
//!
//! Protocol-relative URLs (`//cdn.example.com/…`) are left alone, and
//! already-prefixed paths are skipped so the pass is idempotent.

use anyhow::{Context, Result, bail};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

// ============================================================================
// Patterns
// ============================================================================

static HTML_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<attr>href|src|data-search-index)="(?P<path>/[^"]*)""#).unwrap()
});

static CSS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\((?P<path>/[^)]+)\)").unwrap());

static JSON_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""uri": "(?P<path>/[^"]*)""#).unwrap());

// ============================================================================
// Public API
// ============================================================================

/// Rewrite root-absolute references under `output_root` to live below
/// `base_path` (e.g. `/repo`).
pub fn rewrite_paths(output_root: &Path, base_path: &str) -> Result<()> {
    let base = normalize_base_path(base_path)?;
    if base.is_empty() {
        return Ok(());
    }

    for entry in WalkDir::new(output_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "html" => rewrite_file(path, &HTML_ATTR_RE, &base, html_replacer)?,
            "css" => rewrite_file(path, &CSS_URL_RE, &base, css_replacer)?,
            "json" if path.file_name().is_some_and(|n| n == "index.json") => {
                rewrite_file(path, &JSON_URI_RE, &base, json_replacer)?;
            }
            _ => {}
        }
    }

    Ok(())
}

// ============================================================================
// Implementation
// ============================================================================

/// Validate and trim the base path: leading slash required, trailing
/// slash dropped. `/` alone means no rewriting is needed.
fn normalize_base_path(base_path: &str) -> Result<String> {
    let trimmed = base_path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        bail!("project site path must start with '/': {base_path}");
    }
    Ok(trimmed.to_string())
}

/// True when a matched path should not be prefixed: protocol-relative,
/// or already carrying the base prefix.
fn skip_path(path: &str, base: &str) -> bool {
    path.starts_with("//") || path == base || path.starts_with(&format!("{base}/"))
}

fn html_replacer(caps: &Captures, base: &str) -> String {
    let path = &caps["path"];
    if skip_path(path, base) {
        caps[0].to_string()
    } else {
        format!(r#"{}="{}{}""#, &caps["attr"], base, path)
    }
}

fn css_replacer(caps: &Captures, base: &str) -> String {
    let path = &caps["path"];
    if skip_path(path, base) {
        caps[0].to_string()
    } else {
        format!("url({base}{path})")
    }
}

fn json_replacer(caps: &Captures, base: &str) -> String {
    let path = &caps["path"];
    if skip_path(path, base) {
        caps[0].to_string()
    } else {
        format!(r#""uri": "{base}{path}""#)
    }
}

fn rewrite_file(
    path: &Path,
    pattern: &Regex,
    base: &str,
    replacer: fn(&Captures, &str) -> String,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let rewritten = pattern.replace_all(&content, |caps: &Captures| replacer(caps, base));

    if rewritten != content {
        fs::write(path, rewritten.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path("/repo").unwrap(), "/repo");
        assert_eq!(normalize_base_path("/repo/").unwrap(), "/repo");
        assert_eq!(normalize_base_path("/").unwrap(), "");
        assert_eq!(normalize_base_path("").unwrap(), "");
        assert!(normalize_base_path("repo").is_err());
    }

    #[test]
    fn test_html_attributes_rewritten() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<a href="/posts"><img src="/img/a.png"><div data-search-index="/index.json">"#,
        )
        .unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"href="/repo/posts""#));
        assert!(html.contains(r#"src="/repo/img/a.png""#));
        assert!(html.contains(r#"data-search-index="/repo/index.json""#));
    }

    #[test]
    fn test_protocol_relative_untouched() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<script src="//cdn.example.com/lib.js"></script>"#,
        )
        .unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"src="//cdn.example.com/lib.js""#));
    }

    #[test]
    fn test_relative_links_untouched() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<a href="about/index.html">about</a>"#,
        )
        .unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"href="about/index.html""#));
    }

    #[test]
    fn test_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), r#"<a href="/posts">"#).unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();
        rewrite_paths(dir.path(), "/repo").unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"href="/repo/posts""#));
        assert!(!html.contains("/repo/repo"));
    }

    #[test]
    fn test_css_urls_rewritten() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("style.css"),
            "body { background: url(/img/bg.png); }",
        )
        .unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();

        let css = fs::read_to_string(dir.path().join("style.css")).unwrap();
        assert!(css.contains("url(/repo/img/bg.png)"));
    }

    #[test]
    fn test_search_index_uris_rewritten() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.json"),
            r#"[{"uri": "/post/hello","title": "t","content": "c"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("other.json"), r#"{"uri": "/keep"}"#).unwrap();

        rewrite_paths(dir.path(), "/repo").unwrap();

        let index = fs::read_to_string(dir.path().join("index.json")).unwrap();
        assert!(index.contains(r#""uri": "/repo/post/hello""#));
        let other = fs::read_to_string(dir.path().join("other.json")).unwrap();
        assert!(other.contains(r#""uri": "/keep""#));
    }

    #[test]
    fn test_root_base_is_noop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), r#"<a href="/posts">"#).unwrap();

        rewrite_paths(dir.path(), "/").unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"href="/posts""#));
    }
}
