//! Taxonomy term extraction and grouping.
//!
//! A taxonomy is a named classification scheme (tags by default) whose
//! terms are declared in front matter, either as a raw separated string
//! ("rust, blog") or as a YAML list. Terms are recomputed fresh each
//! build; there is no incremental update.

use crate::content::Document;
use crate::content::front_matter::TagsValue;
use indexmap::IndexMap;

// ============================================================================
// Term extraction
// ============================================================================

/// Split a raw taxonomy value into deduplicated terms.
///
/// Raw strings split on whitespace, comma, and period separators, dropping
/// empty tokens. List values are deduplicated as-is, with no re-splitting.
/// First-seen order is preserved so downstream output is deterministic.
pub fn split_terms(value: &TagsValue) -> Vec<String> {
    match value {
        TagsValue::One(raw) => dedupe(
            raw.split(|c: char| c.is_whitespace() || c == ',' || c == '.')
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
        ),
        TagsValue::Many(list) => dedupe(list.iter().filter(|t| !t.is_empty()).cloned()),
    }
}

/// Terms of `document` under the named taxonomy.
///
/// `tags` is the typed front-matter field; other taxonomies read the
/// equally-named extra key. Documents without the field carry no terms.
pub fn terms_of(document: &Document, taxonomy: &str) -> Vec<String> {
    let value = if taxonomy == "tags" {
        document.metadata.tags.clone()
    } else {
        document
            .metadata
            .extra
            .get(taxonomy)
            .and_then(yaml_to_tags_value)
    };

    value.as_ref().map(split_terms).unwrap_or_default()
}

/// Group documents by taxonomy term (many-to-many: a document appears
/// under every term it carries). Term order follows first appearance
/// across the document sequence.
pub fn group_by_term<'a>(
    documents: &'a [&'a Document],
    taxonomy: &str,
) -> IndexMap<String, Vec<&'a Document>> {
    let mut groups: IndexMap<String, Vec<&Document>> = IndexMap::new();

    for document in documents {
        for term in terms_of(document, taxonomy) {
            groups.entry(term).or_default().push(document);
        }
    }

    groups
}

// ============================================================================
// Helpers
// ============================================================================

fn dedupe(terms: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for term in terms {
        if !seen.contains(&term) {
            seen.push(term);
        }
    }
    seen
}

fn yaml_to_tags_value(value: &serde_yaml::Value) -> Option<TagsValue> {
    match value {
        serde_yaml::Value::String(s) => Some(TagsValue::One(s.clone())),
        serde_yaml::Value::Sequence(seq) => Some(TagsValue::Many(
            seq.iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect(),
        )),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
