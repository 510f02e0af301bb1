//! Content scaffolding for the `new-post` and `new-page` commands.
//!
//! Drops a ready-to-edit Markdown file with sample front matter into the
//! content tree, so a fresh site has something to build immediately.

use crate::log;
use anyhow::{Context, Result, bail};
use chrono::Local;
use std::fs;
use std::path::Path;

/// Date format used for scaffolded posts, matching the default
/// `time_format` so the sample builds out of the box.
const SCAFFOLD_DATE_FORMAT: &str = "%B %d, %Y";

// ============================================================================
// Public API
// ============================================================================

/// Create `posts/<name>.md` with sample post front matter.
pub fn new_post(root: &Path, name: &str) -> Result<()> {
    let title = humanize(name);
    let date = Local::now().format(SCAFFOLD_DATE_FORMAT);
    let content = format!(
        "---\ntitle: {title}\ndate: {date}\ntags: sample\n---\n\nWrite your post here.\n"
    );

    write_scaffold(&root.join("posts"), name, &content, "post")
}

/// Create `pages/<name>.md` with sample page front matter.
pub fn new_page(root: &Path, name: &str) -> Result<()> {
    let title = humanize(name);
    let content = format!("---\ntitle: {title}\n---\n\nWrite your page here.\n");

    write_scaffold(&root.join("pages"), name, &content, "page")
}

// ============================================================================
// Implementation
// ============================================================================

fn write_scaffold(dir: &Path, name: &str, content: &str, kind: &str) -> Result<()> {
    let stem = name.trim().trim_end_matches(".md");
    if stem.is_empty() {
        bail!("{kind} name must not be empty");
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(format!("{stem}.md"));
    if path.exists() {
        bail!("{kind} already exists: {}", path.display());
    }

    fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("new"; "created {kind} {}", path.display());
    Ok(())
}

/// Turn a file-name-ish argument into a presentable title:
/// `my-first-post` -> `My First Post`.
fn humanize(name: &str) -> String {
    name.trim()
        .trim_end_matches(".md")
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("my-first-post"), "My First Post");
        assert_eq!(humanize("about_me.md"), "About Me");
        assert_eq!(humanize("hello"), "Hello");
    }

    #[test]
    fn test_new_post_scaffold() {
        let dir = tempdir().unwrap();
        new_post(dir.path(), "my-first-post").unwrap();

        let content = fs::read_to_string(dir.path().join("posts/my-first-post.md")).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("title: My First Post"));
        assert!(content.contains("date: "));
    }

    #[test]
    fn test_new_page_has_no_date() {
        let dir = tempdir().unwrap();
        new_page(dir.path(), "about").unwrap();

        let content = fs::read_to_string(dir.path().join("pages/about.md")).unwrap();
        assert!(content.contains("title: About"));
        assert!(!content.contains("date:"));
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let dir = tempdir().unwrap();
        new_post(dir.path(), "dup").unwrap();
        assert!(new_post(dir.path(), "dup").is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let dir = tempdir().unwrap();
        assert!(new_post(dir.path(), "  ").is_err());
    }
}
