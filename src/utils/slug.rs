//! URL slugification.
//!
//! Derives URL-safe identifier segments from document titles. Slugs must be
//! stable across rebuilds so that output paths never move for unchanged input.

use deunicode::deunicode;

/// Convert a title to a URL-safe slug.
///
/// Rules:
/// - Unicode is transliterated to ASCII first ("你好" → "ni hao")
/// - Everything is lowercased
/// - Runs of non-alphanumeric characters collapse to a single hyphen
/// - Leading and trailing hyphens are trimmed
///
/// The result contains only `[a-z0-9]` and single interior hyphens.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple_title() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Hello --- World!!!"), "hello-world");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  (Hello)  "), "hello");
        assert_eq!(slugify("...dots..."), "dots");
    }

    #[test]
    fn test_slugify_preserves_digits() {
        assert_eq!(slugify("Top 10 Posts of 2024"), "top-10-posts-of-2024");
    }

    #[test]
    fn test_slugify_unicode_transliteration() {
        assert_eq!(slugify("Café au lait"), "cafe-au-lait");
        assert_eq!(slugify("你好"), "ni-hao");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_stable() {
        let title = "Ünïcode & Symbols: a (test)";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn test_slugify_output_charset() {
        let slug = slugify("Some, really| odd ~ title -- 42");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}
