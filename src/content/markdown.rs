//! Markdown to HTML conversion.
//!
//! Thin wrapper over pulldown-cmark. The default extension set covers what
//! themes expect (tables, footnotes, strikethrough, task lists, heading
//! attributes); user-configured extensions merge with the defaults unless
//! `replace = true` swaps the set wholesale.

use crate::config::MarkdownConfig;
use crate::log;
use pulldown_cmark::{Options, Parser, html};

/// Extensions enabled when the user configures nothing.
const DEFAULT_EXTENSIONS: &[&str] = &[
    "tables",
    "footnotes",
    "strikethrough",
    "tasklists",
    "heading-attributes",
];

/// Convert a Markdown body to HTML with the configured extension set.
pub fn to_html(body: &str, config: &MarkdownConfig) -> String {
    let options = build_options(config);
    let parser = Parser::new_ext(body, options);

    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Resolve the extension set: defaults merged with (or replaced by) config.
fn build_options(config: &MarkdownConfig) -> Options {
    let mut options = Options::empty();

    if !config.replace {
        for name in DEFAULT_EXTENSIONS {
            options |= extension_flag(name).unwrap_or_else(Options::empty);
        }
    }

    for name in &config.extensions {
        match extension_flag(name) {
            Some(flag) => options |= flag,
            None => log!("warn"; "unknown markdown extension `{name}`, ignoring"),
        }
    }

    options
}

/// Map an extension name to its pulldown-cmark option flag.
fn extension_flag(name: &str) -> Option<Options> {
    match name {
        "tables" => Some(Options::ENABLE_TABLES),
        "footnotes" => Some(Options::ENABLE_FOOTNOTES),
        "strikethrough" => Some(Options::ENABLE_STRIKETHROUGH),
        "tasklists" => Some(Options::ENABLE_TASKLISTS),
        "smart-punctuation" => Some(Options::ENABLE_SMART_PUNCTUATION),
        "heading-attributes" => Some(Options::ENABLE_HEADING_ATTRIBUTES),
        "definition-list" => Some(Options::ENABLE_DEFINITION_LIST),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
