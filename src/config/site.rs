//! `[site]` section configuration.
//!
//! Contains basic site information like title, description, URL, theme.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in bestatic.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "My Blog"
/// description = "A personal blog about Rust"
/// url = "https://myblog.com"
/// theme = "Amazing"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Base URL for absolute links in rss/sitemap.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Site title displayed in browser tab and headers.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Site description for SEO meta tags and the feed channel.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Theme name, resolved against the `themes/` directory.
    #[serde(default = "defaults::site::theme")]
    #[educe(Default = defaults::site::theme())]
    pub theme: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_section_full() {
        let config = r#"
            [site]
            url = "https://myblog.com"
            title = "My Blog"
            description = "Notes and rants"
            theme = "Documentation"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.url, "https://myblog.com");
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.site.description, "Notes and rants");
        assert_eq!(config.site.theme, "Documentation");
    }

    #[test]
    fn test_site_section_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.site.url, "https://example.org");
        assert_eq!(config.site.title, "A Demo Site for Bestatic");
        assert_eq!(config.site.theme, "Amazing");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
