//! Site configuration management for `bestatic.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Site metadata (title, description, url, theme)   |
//! | `[build]`   | Pipeline settings (pagination, rss, taxonomies)  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//! theme = "Amazing"
//!
//! [build]
//! number_of_pages = 2
//! homepage_type = "list"
//!
//! [build.taxonomies.tags]
//! template = "taglist.html"
//! directory = "tags"
//! ```
//!
//! The configuration is loaded once per build and passed by reference into
//! every pipeline component. There is no global mutable state.

mod build;
pub mod defaults;
mod error;
mod site;

// Re-export public types used by other modules
pub use build::{HomepageType, MarkdownConfig, TaxonomyConfig};

use crate::cli::Cli;
use anyhow::{Result, bail};
use build::BuildSection;
use chrono_tz::Tz;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use site::SiteSection;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing bestatic.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site root directory (set from CLI after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.root = cli.root_dir().to_path_buf();

        if let Some(theme) = &cli.theme {
            self.site.theme = theme.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
    }

    /// Validate configuration before a build
    pub fn validate(&self) -> Result<()> {
        if self.build.number_of_pages == 0 {
            bail!(ConfigError::Validation(
                "[build.number_of_pages] must be at least 1".into()
            ));
        }

        if Tz::from_str(&self.build.timezone).is_err() {
            bail!(ConfigError::Validation(format!(
                "[build.timezone] `{}` is not a valid IANA timezone",
                self.build.timezone
            )));
        }

        if !self.site.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if let Some(prefix) = &self.build.project_site
            && !prefix.starts_with('/')
        {
            bail!(ConfigError::Validation(
                "[build.project_site] must start with `/`".into()
            ));
        }

        Ok(())
    }

    /// Parsed timezone for feed date localization.
    ///
    /// Callers must run `validate()` first; an unknown zone falls back to UTC.
    pub fn timezone(&self) -> Tz {
        Tz::from_str(&self.build.timezone).unwrap_or(Tz::UTC)
    }

    /// Site URL without a trailing slash, for joining with `/`-prefixed paths.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    // ------------------------------------------------------------------------
    // Path helpers (all relative to the site root)
    // ------------------------------------------------------------------------

    /// Theme root: `<root>/themes/<theme>`
    pub fn theme_dir(&self) -> PathBuf {
        self.root.join("themes").join(&self.site.theme)
    }

    /// Theme templates: `<root>/themes/<theme>/templates`
    pub fn templates_dir(&self) -> PathBuf {
        self.theme_dir().join("templates")
    }

    /// Theme static assets: `<root>/themes/<theme>/static`
    pub fn theme_static_dir(&self) -> PathBuf {
        self.theme_dir().join("static")
    }

    /// Site static assets: `<root>/static-content`
    pub fn static_content_dir(&self) -> PathBuf {
        self.root.join("static-content")
    }

    /// Post sources: `<root>/posts`
    pub fn posts_source_dir(&self) -> PathBuf {
        self.root.join("posts")
    }

    /// Page sources: `<root>/pages`
    pub fn pages_source_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    /// Build output: `<root>/<build.output>`
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }
}

// ============================================================================
// Tests
// ============================================================================
