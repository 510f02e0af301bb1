//! Plain-text extraction from rendered HTML.
//!
//! Feeds the document summary and the search index. The strip is a
//! two-pass tag removal so that malformed nested markup (an unclosed `<`
//! inside an attribute, tags split across the first pass) still comes out
//! as visible text only.

use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").unwrap());

/// Strip HTML tags, leaving visible text.
pub fn strip_html(html: &str) -> String {
    let first = RE_TAG.replace_all(html, "");
    let second = RE_TAG.replace_all(&first, "");
    decode_entities(&second)
}

/// Truncate plain text to `max_chars` characters, appending an ellipsis
/// marker when truncated. Counts characters, not bytes, so multi-byte
/// input never splits mid-codepoint.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        text.to_owned()
    }
}

/// Decode the handful of entities the Markdown converter emits for text.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ============================================================================
// Tests
// ============================================================================
