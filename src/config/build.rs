//! `[build]` section configuration.
//!
//! Controls the generation pipeline: output layout, pagination fan-out,
//! date handling, taxonomies, Markdown extensions, and the project-site
//! path prefix.

use super::defaults;
use educe::Educe;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// What the site root `index.html` is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomepageType {
    /// Render the theme's `home.html` template (default).
    #[default]
    Default,
    /// The first paginated post list supplants the home page.
    List,
}

// ============================================================================
// Main BuildSection
// ============================================================================

/// `[build]` section in bestatic.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "_output"
/// rss = true
/// homepage_type = "list"
/// number_of_pages = 3
///
/// [build.taxonomies.tags]
/// template = "taglist.html"
/// directory = "tags"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSection {
    /// Build output directory, relative to the site root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Enable RSS feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub rss: bool,

    /// Homepage behavior (`default` or `list`).
    #[serde(default)]
    pub homepage_type: HomepageType,

    /// strftime-style format for post `date` front-matter values.
    #[serde(default = "defaults::build::time_format")]
    #[educe(Default = defaults::build::time_format())]
    pub time_format: String,

    /// IANA timezone name used to localize feed publish dates.
    #[serde(default = "defaults::build::timezone")]
    #[educe(Default = defaults::build::timezone())]
    pub timezone: String,

    /// Maximum summary length in characters.
    #[serde(default = "defaults::build::summary_length")]
    #[educe(Default = defaults::build::summary_length())]
    pub summary_length: usize,

    /// Output path segment for individual posts (singular).
    #[serde(default = "defaults::build::post_dir")]
    #[educe(Default = defaults::build::post_dir())]
    pub post_dir: String,

    /// Output path segment for post list pages (plural).
    #[serde(default = "defaults::build::posts_dir")]
    #[educe(Default = defaults::build::posts_dir())]
    pub posts_dir: String,

    /// Pagination fan-out: number of list pages to split posts into.
    #[serde(default = "defaults::build::number_of_pages")]
    #[educe(Default = defaults::build::number_of_pages())]
    pub number_of_pages: usize,

    /// Base path prefix for sub-path ("project site") deployment.
    /// When set, root-relative references in the output are rewritten.
    #[serde(default = "defaults::build::project_site")]
    #[educe(Default = defaults::build::project_site())]
    pub project_site: Option<String>,

    /// Inject the generator marker tag into the root page `<head>`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub inject_tag: bool,

    /// Markdown extension configuration.
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Taxonomy name → rendering configuration.
    #[serde(default = "defaults::build::taxonomies")]
    #[educe(Default = defaults::build::taxonomies())]
    pub taxonomies: IndexMap<String, TaxonomyConfig>,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.markdown]` section - Markdown extension set.
///
/// `extensions` is merged with the built-in default set unless `replace`
/// is true, in which case it replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Extension names (e.g. "tables", "footnotes", "tasklists").
    pub extensions: Vec<String>,

    /// Replace the default extension set instead of merging with it.
    pub replace: bool,
}

/// One entry of `[build.taxonomies]` - how a taxonomy is rendered.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct TaxonomyConfig {
    /// Theme template rendered once per term.
    #[serde(default = "defaults::build::taxonomy::template")]
    #[educe(Default = defaults::build::taxonomy::template())]
    pub template: String,

    /// Output directory segment under the post directory.
    #[serde(default = "defaults::build::taxonomy::directory")]
    #[educe(Default = defaults::build::taxonomy::directory())]
    pub directory: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_section_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("_output"));
        assert!(config.build.rss);
        assert_eq!(config.build.homepage_type, HomepageType::Default);
        assert_eq!(config.build.time_format, "%B %d, %Y");
        assert_eq!(config.build.timezone, "UTC");
        assert_eq!(config.build.summary_length, 250);
        assert_eq!(config.build.post_dir, "post");
        assert_eq!(config.build.posts_dir, "posts");
        assert_eq!(config.build.number_of_pages, 1);
        assert_eq!(config.build.project_site, None);
        assert!(config.build.inject_tag);
    }

    #[test]
    fn test_default_taxonomy_is_tags() {
        let config: SiteConfig = toml::from_str("").unwrap();
        let tags = config.build.taxonomies.get("tags").unwrap();

        assert_eq!(tags.template, "taglist.html");
        assert_eq!(tags.directory, "tags");
    }

    #[test]
    fn test_custom_taxonomies() {
        let config = r#"
            [build.taxonomies.categories]
            template = "catlist.html"
            directory = "categories"

            [build.taxonomies.tags]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        let cats = config.build.taxonomies.get("categories").unwrap();
        assert_eq!(cats.template, "catlist.html");
        assert_eq!(cats.directory, "categories");

        // Partial entries fall back to defaults
        let tags = config.build.taxonomies.get("tags").unwrap();
        assert_eq!(tags.template, "taglist.html");
    }

    #[test]
    fn test_homepage_type_list() {
        let config = r#"
            [build]
            homepage_type = "list"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.homepage_type, HomepageType::List);
    }

    #[test]
    fn test_markdown_config() {
        let config = r#"
            [build.markdown]
            extensions = ["smart-punctuation"]
            replace = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.markdown.extensions, vec!["smart-punctuation"]);
        assert!(!config.build.markdown.replace);
    }

    #[test]
    fn test_project_site_prefix() {
        let config = r#"
            [build]
            project_site = "/myproject"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.project_site.as_deref(), Some("/myproject"));
    }
}
