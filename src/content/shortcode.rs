//! Shortcode macro expansion.
//!
//! Shortcodes are `{!!{name attr=val ...}!!}`-delimited macros in raw
//! content text, expanded to HTML fragments before Markdown conversion.
//! Render functions are registered explicitly at startup; there is no
//! dynamic module loading.
//!
//! Expansion is never fatal: an unknown name or a failing render function
//! keeps the original shortcode text verbatim and logs a warning.

use crate::log;
use anyhow::{Result, bail};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{!!\{[^}]+\}!!\}").unwrap());

/// A shortcode render function: attributes in, HTML fragment out.
pub type RenderFn = Box<dyn Fn(&HashMap<String, String>) -> Result<String>>;

// ============================================================================
// Registry
// ============================================================================

/// Named shortcode render functions.
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, RenderFn>,
}

impl ShortcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in shortcodes.
    ///
    /// `image`: `{!!{image src=/img/a.png alt="A picture" align=center}!!}`
    /// renders an `<img>` tag (the `align` wrapping applies as usual).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("image", |attrs| {
            let Some(src) = attrs.get("src") else {
                bail!("image shortcode requires a `src` attribute");
            };
            let alt = attrs.get("alt").map(String::as_str).unwrap_or_default();
            Ok(format!("<img src=\"{src}\" alt=\"{alt}\" />"))
        });
        registry
    }

    /// Register a render function under `name`.
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&HashMap<String, String>) -> Result<String> + 'static,
    {
        self.handlers.insert(name.to_owned(), Box::new(f));
    }

    /// Expand all shortcodes in `content`.
    ///
    /// Each failure is isolated to its own occurrence; the rest of the
    /// content still expands.
    pub fn expand(&self, content: &str) -> String {
        RE_SHORTCODE
            .replace_all(content, |caps: &regex::Captures| {
                let raw = &caps[0];
                self.expand_one(raw).unwrap_or_else(|| raw.to_owned())
            })
            .into_owned()
    }

    /// Expand a single occurrence. Returns None to keep the literal text.
    fn expand_one(&self, raw: &str) -> Option<String> {
        let (name, attrs) = parse_shortcode(raw)?;

        let Some(handler) = self.handlers.get(&name) else {
            log!("warn"; "unknown shortcode `{name}`, keeping original content");
            return None;
        };

        match handler(&attrs) {
            Ok(rendered) => Some(wrap_aligned(rendered, attrs.get("align"))),
            Err(e) => {
                log!("warn"; "error rendering shortcode `{name}`: {e:#}");
                None
            }
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse `{!!{name key=value bare words}!!}` into a name and attributes.
///
/// `key=value` pairs become attributes (surrounding quotes stripped);
/// bare words accumulate into the `content` attribute.
fn parse_shortcode(raw: &str) -> Option<(String, HashMap<String, String>)> {
    let inner = raw.strip_prefix("{!!{")?.strip_suffix("}!!}")?.trim();
    if inner.is_empty() {
        log!("warn"; "empty shortcode found, skipping");
        return None;
    }

    let mut parts = inner.split_whitespace();
    let name = parts.next()?.to_owned();
    let mut attrs = HashMap::new();

    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            attrs.insert(key.to_owned(), value.trim_matches(['"', '\'']).to_owned());
        } else if let Some(existing) = attrs.get_mut("content") {
            existing.push(' ');
            existing.push_str(part);
        } else {
            attrs.insert("content".to_owned(), part.to_owned());
        }
    }

    Some((name, attrs))
}

/// Wrap the rendered fragment in a div when an `align` class was given.
fn wrap_aligned(rendered: String, align: Option<&String>) -> String {
    match align {
        Some(class) => format!("<div class=\"{class}\">\n{rendered}\n</div>"),
        None => rendered,
    }
}

// ============================================================================
// Tests
// ============================================================================
