//! Front-matter parsing.
//!
//! Content files start with a YAML metadata block delimited by `---` lines,
//! followed by the Markdown body:
//!
//! ```text
//! ---
//! title: My First Post
//! date: January 15, 2024
//! tags: rust, blog
//! ---
//! Body text...
//! ```
//!
//! Metadata keys the pipeline consumes are typed fields; everything else is
//! kept in `extra` (insertion-ordered) and passed through to templates.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// FrontMatter
// ============================================================================

/// Parsed metadata header of one content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Document title. The one mandatory field; absence is fatal.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub title: Option<String>,

    /// Publish date, parsed against the configured time format (posts only).
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub date: Option<String>,

    /// Explicit URL slug. Derived from `title` when absent.
    /// Scalar-coerced so `slug: 404` works without quoting.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub slug: Option<String>,

    /// Taxonomy terms, as a raw string ("a, b") or a list.
    #[serde(default)]
    pub tags: Option<TagsValue>,

    /// Per-document template override.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub template: Option<String>,

    /// Split the rendered body on section markers for the template.
    #[serde(default)]
    pub section: bool,

    /// Unrecognized keys, preserved in order for templates.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A `tags`-like front-matter value: either one raw string or a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsValue {
    One(String),
    Many(Vec<String>),
}

// ============================================================================
// Splitting
// ============================================================================

/// Split raw file content into (front matter, body).
///
/// Returns default (empty) front matter when the file has no header block;
/// the missing-title check happens downstream. A malformed YAML block is an
/// error naming the problem.
pub fn split_front_matter(raw: &str) -> anyhow::Result<(FrontMatter, &str)> {
    let Some(rest) = strip_opening_delimiter(raw) else {
        return Ok((FrontMatter::default(), raw));
    };

    let Some((header, body)) = split_closing_delimiter(rest) else {
        // Opening delimiter without a closing one: treat the whole file as body
        return Ok((FrontMatter::default(), raw));
    };

    let matter: FrontMatter = serde_yaml::from_str(header)
        .map_err(|e| anyhow::anyhow!("invalid front matter: {e}"))?;
    Ok((matter, body))
}

fn strip_opening_delimiter(raw: &str) -> Option<&str> {
    raw.strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))
}

fn split_closing_delimiter(rest: &str) -> Option<(&str, &str)> {
    for (idx, line) in line_spans(rest) {
        if line.trim_end() == "---" {
            let header = &rest[..idx];
            let body_start = idx + line.len();
            let body = rest[body_start..]
                .strip_prefix('\n')
                .unwrap_or(&rest[body_start..]);
            return Some((header, body));
        }
    }
    None
}

/// Iterate (byte offset, line without trailing newline) pairs.
fn line_spans(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    s.split_inclusive('\n').map(move |chunk| {
        let start = offset;
        offset += chunk.len();
        (start, chunk.trim_end_matches('\n'))
    })
}

// ============================================================================
// Deserialization helpers
// ============================================================================

/// Accept any YAML scalar (string, number, bool) as a string.
fn de_opt_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a scalar value, got: {other:?}"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let raw = "---\ntitle: Hello\n---\nBody text\n";
        let (matter, body) = split_front_matter(raw).unwrap();

        assert_eq!(matter.title.as_deref(), Some("Hello"));
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn test_split_no_front_matter() {
        let raw = "Just a body\n";
        let (matter, body) = split_front_matter(raw).unwrap();

        assert!(matter.title.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_split_unterminated_header() {
        let raw = "---\ntitle: Hello\nno closing delimiter";
        let (matter, body) = split_front_matter(raw).unwrap();

        assert!(matter.title.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_numeric_slug_coerced_to_string() {
        let raw = "---\ntitle: Not Found\nslug: 404\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        assert_eq!(matter.slug.as_deref(), Some("404"));
    }

    #[test]
    fn test_tags_as_string() {
        let raw = "---\ntitle: T\ntags: rust, blog\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        match matter.tags.unwrap() {
            TagsValue::One(s) => assert_eq!(s, "rust, blog"),
            TagsValue::Many(_) => panic!("expected raw string"),
        }
    }

    #[test]
    fn test_tags_as_list() {
        let raw = "---\ntitle: T\ntags:\n  - rust\n  - blog\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        match matter.tags.unwrap() {
            TagsValue::Many(v) => assert_eq!(v, vec!["rust", "blog"]),
            TagsValue::One(_) => panic!("expected list"),
        }
    }

    #[test]
    fn test_extra_keys_preserved_in_order() {
        let raw = "---\ntitle: T\nzebra: 1\nalpha: 2\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        let keys: Vec<_> = matter.extra.keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_section_flag() {
        let raw = "---\ntitle: T\nsection: true\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        assert!(matter.section);
    }

    #[test]
    fn test_template_override() {
        let raw = "---\ntitle: T\ntemplate: fancy.html\n---\n";
        let (matter, _) = split_front_matter(raw).unwrap();

        assert_eq!(matter.template.as_deref(), Some("fancy.html"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let raw = "---\ntitle: [unclosed\n---\n";
        assert!(split_front_matter(raw).is_err());
    }

    #[test]
    fn test_crlf_delimiters() {
        let raw = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (matter, body) = split_front_matter(raw).unwrap();

        assert_eq!(matter.title.as_deref(), Some("Hello"));
        assert_eq!(body.trim_start_matches('\r').trim_start(), "Body");
    }
}
