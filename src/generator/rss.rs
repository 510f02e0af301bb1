//! RSS feed generation.
//!
//! Emits an RSS 2.0 feed (`index.rss` at the output root) from the sorted
//! post collection. Items appear in ascending date order, the reverse of
//! the newest-first collection the orchestrator holds, and publish dates
//! are localized to the configured timezone.

use crate::config::SiteConfig;
use crate::content::Document;
use crate::utils::date::parse_date;
use anyhow::{Context, Result, anyhow};
use chrono::TimeZone;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Build the feed and write it to `<output>/index.rss`.
///
/// `posts_descending` is the date-sorted (newest first) post collection.
pub fn build_rss(posts_descending: &[&Document], config: &SiteConfig) -> Result<()> {
    let xml = into_xml(posts_descending, config)?;
    let rss_path = config.output_dir().join("index.rss");

    fs::write(&rss_path, xml)
        .with_context(|| format!("failed to write feed to {}", rss_path.display()))?;

    Ok(())
}

// ============================================================================
// Implementation
// ============================================================================

/// Generate the feed XML string.
fn into_xml(posts_descending: &[&Document], config: &SiteConfig) -> Result<String> {
    let items: Vec<_> = posts_descending
        .iter()
        .rev()
        .filter_map(|post| post_to_rss_item(post, config))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.title)
        .link(format!("{}/{}", config.base_url(), config.build.posts_dir))
        .description(&config.site.description)
        .generator("Bestatic".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

/// Convert a Document to an rss item.
/// Returns None if the post has no parsable date (already validated
/// upstream; this guards standalone use).
fn post_to_rss_item(post: &Document, config: &SiteConfig) -> Option<rss::Item> {
    let raw_date = post.metadata.date.as_deref()?;
    let naive = parse_date(raw_date, &config.build.time_format)?;
    let localized = config.timezone().from_local_datetime(&naive).single()?;

    let link = format!(
        "{}/{}/{}",
        config.base_url(),
        config.build.post_dir,
        post.slug_path()
    );

    Some(
        ItemBuilder::default()
            .title(post.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(post.plain_text.clone())
            .pub_date(localized.to_rfc2822())
            .build(),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::shortcode::ShortcodeRegistry;
    use std::path::Path;
    use tempfile::tempdir;

    fn make_post(dir: &Path, name: &str, title: &str, date: &str) -> Document {
        let path = dir.join(name);
        fs::write(
            &path,
            format!("---\ntitle: {title}\ndate: {date}\n---\nSome body text\n"),
        )
        .unwrap();
        Document::parse(
            &path,
            dir,
            &ShortcodeRegistry::new(),
            &SiteConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_feed_contains_posts_in_ascending_order() {
        let dir = tempdir().unwrap();
        let newer = make_post(dir.path(), "new.md", "Newer Post", "February 01, 2024");
        let older = make_post(dir.path(), "old.md", "Older Post", "January 01, 2024");
        let config = SiteConfig::default();

        // Descending in, ascending out
        let xml = into_xml(&[&newer, &older], &config).unwrap();

        let older_pos = xml.find("Older Post").unwrap();
        let newer_pos = xml.find("Newer Post").unwrap();
        assert!(older_pos < newer_pos);
    }

    #[test]
    fn test_item_link_uses_post_dir_and_slug() {
        let dir = tempdir().unwrap();
        let post = make_post(dir.path(), "a.md", "Hello World", "January 15, 2024");
        let config = SiteConfig::default();

        let xml = into_xml(&[&post], &config).unwrap();
        assert!(xml.contains("https://example.org/post/hello-world"));
    }

    #[test]
    fn test_channel_metadata() {
        let dir = tempdir().unwrap();
        let post = make_post(dir.path(), "a.md", "T", "January 15, 2024");
        let mut config = SiteConfig::default();
        config.site.title = "My Site".into();
        config.site.description = "About things".into();

        let xml = into_xml(&[&post], &config).unwrap();
        assert!(xml.contains("<title>My Site</title>"));
        assert!(xml.contains("About things"));
        assert!(xml.contains("https://example.org/posts"));
        assert!(xml.contains("Bestatic"));
    }

    #[test]
    fn test_pub_date_localized() {
        let dir = tempdir().unwrap();
        let post = make_post(dir.path(), "a.md", "T", "January 15, 2024");
        let mut config = SiteConfig::default();
        config.build.timezone = "Asia/Kolkata".into();

        let xml = into_xml(&[&post], &config).unwrap();
        // IST is UTC+05:30
        assert!(xml.contains("+0530"));
    }

    #[test]
    fn test_build_rss_writes_file() {
        let dir = tempdir().unwrap();
        let post = make_post(dir.path(), "a.md", "T", "January 15, 2024");
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        fs::create_dir_all(config.output_dir()).unwrap();

        build_rss(&[&post], &config).unwrap();
        let xml = fs::read_to_string(config.output_dir().join("index.rss")).unwrap();
        assert!(xml.contains("<rss"));
    }
}
