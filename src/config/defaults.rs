//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> String {
        "https://example.org".into()
    }

    pub fn title() -> String {
        "A Demo Site for Bestatic".into()
    }

    pub fn description() -> String {
        "A Demo Site for Bestatic".into()
    }

    pub fn theme() -> String {
        "Amazing".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use super::super::TaxonomyConfig;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "_output".into()
    }

    pub fn time_format() -> String {
        "%B %d, %Y".into()
    }

    pub fn timezone() -> String {
        "UTC".into()
    }

    pub fn summary_length() -> usize {
        250
    }

    pub fn post_dir() -> String {
        "post".into()
    }

    pub fn posts_dir() -> String {
        "posts".into()
    }

    pub fn number_of_pages() -> usize {
        1
    }

    pub fn project_site() -> Option<String> {
        None
    }

    pub fn taxonomies() -> IndexMap<String, TaxonomyConfig> {
        let mut map = IndexMap::new();
        map.insert("tags".to_owned(), TaxonomyConfig::default());
        map
    }

    pub mod taxonomy {
        pub fn template() -> String {
            "taglist.html".into()
        }

        pub fn directory() -> String {
            "tags".into()
        }
    }
}
