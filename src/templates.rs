//! Template engine wrapper.
//!
//! Template rendering is delegated to Tera behind a narrow contract:
//! templates are looked up by file name within the theme's `templates/`
//! directory and rendered with named variables. Auto-escaping is off
//! because document bodies arrive as already-rendered HTML.

pub use tera::Context;

use anyhow::{Context as _, Result};
use std::path::Path;
use tera::Tera;

/// Theme template store, loaded once per build.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load every `.html` template under the theme templates directory.
    pub fn from_theme(templates_dir: &Path) -> Result<Self> {
        let glob = format!("{}/**/*.html", templates_dir.display());
        let mut tera = Tera::new(&glob)
            .with_context(|| format!("failed to load templates from `{}`", templates_dir.display()))?;
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    /// Whether a template with this file name exists in the theme.
    pub fn has(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a template by file name.
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .with_context(|| format!("failed to render template `{name}`"))
    }
}

// ============================================================================
// Tests
// ============================================================================
