//! The build pipeline.
//!
//! One build is a single-threaded, sequential pass: clean the output
//! directory, copy static assets, parse every content file, then render
//! and write pages, posts, list pages and taxonomy pages before emitting
//! the search index, sitemap and feed. The output directory is deleted
//! and regenerated from scratch each time; nothing is incremental.
//!
//! Failure semantics: cleaning and asset copying are best-effort and only
//! log; everything downstream that involves required templates or required
//! front matter (`title`, post `date`) aborts the build with a specific
//! error.

use crate::config::{HomepageType, SiteConfig};
use crate::content::Document;
use crate::content::shortcode::ShortcodeRegistry;
use crate::error::BuildError;
use crate::generator::{inject, rss, search, sitemap};
use crate::log;
use crate::pagination;
use crate::rewrite;
use crate::taxonomy;
use crate::templates::{Context as TemplateContext, TemplateEngine};
use crate::utils::date::parse_date;
use crate::utils::fs::{copy_if_exists, write_page};
use anyhow::{Result, bail};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

// ============================================================================
// Entry point
// ============================================================================

/// Run one full site build.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let started = Instant::now();

    clean_output(config);
    copy_static_assets(config);

    let templates = TemplateEngine::from_theme(&config.templates_dir())?;
    let registry = ShortcodeRegistry::with_builtins();

    let posts = parse_collection(&config.posts_source_dir(), &registry, config)?;
    let pages = parse_collection(&config.pages_source_dir(), &registry, config)?;
    log!("parse"; "{} posts, {} pages", posts.len(), pages.len());

    require_templates(&templates, !posts.is_empty(), !pages.is_empty())?;

    let sorted_posts = sort_posts_descending(&posts, config)?;
    let all_pages: Vec<&Document> = pages.values().collect();

    render_home(&templates, &sorted_posts, &all_pages, config)?;
    render_pages(&templates, &all_pages, config)?;
    render_posts(&templates, &sorted_posts, config)?;
    render_lists(&templates, &sorted_posts, config)?;
    render_taxonomies(&templates, &sorted_posts, config)?;

    search::build_search_index(&sorted_posts, &all_pages, config)?;
    sitemap::build_sitemap(&config.output_dir(), config.base_url())?;

    if config.build.rss && !sorted_posts.is_empty() {
        rss::build_rss(&sorted_posts, config)?;
        log!("rss"; "feed written");
    }

    if let Some(base) = &config.build.project_site {
        rewrite::rewrite_paths(&config.output_dir(), base)?;
        log!("rewrite"; "paths prefixed with `{base}`");
    }

    if config.build.inject_tag {
        inject::inject_generator_tag(&config.output_dir())?;
    }

    log!("build"; "site built in {:.2?}", started.elapsed());
    Ok(())
}

// ============================================================================
// Preparation
// ============================================================================

/// Delete the previous output directory. Best-effort: a failure here is
/// logged, the build continues and individual writes surface real errors.
fn clean_output(config: &SiteConfig) {
    let output = config.output_dir();
    if output.exists()
        && let Err(e) = fs::remove_dir_all(&output)
    {
        log!("warn"; "failed to clean {}: {:#}", output.display(), e);
    }
}

/// Copy the theme's static assets and the site's static content into the
/// output tree. Either source being absent is fine.
fn copy_static_assets(config: &SiteConfig) {
    let output = config.output_dir();
    copy_if_exists(&config.theme_static_dir(), &output.join("static"));
    copy_if_exists(&config.static_content_dir(), &output.join("static-content"));
}

/// Walk a content directory and parse every Markdown file.
///
/// The collection is keyed by bare file name, so same-named files in
/// different subdirectories collide: the later walk entry wins and a
/// warning points at both. An absent directory yields an empty collection.
fn parse_collection(
    source: &Path,
    registry: &ShortcodeRegistry,
    config: &SiteConfig,
) -> Result<IndexMap<String, Document>> {
    let mut documents: IndexMap<String, Document> = IndexMap::new();

    if !source.is_dir() {
        return Ok(documents);
    }

    for entry in WalkDir::new(source)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("md" | "markdown")
        ) {
            continue;
        }

        let document = Document::parse(path, source, registry, config)?;
        if let Some(previous) = documents.insert(document.file_name.clone(), document) {
            log!(
                "warn";
                "duplicate file name `{}`: replacing `{}`",
                previous.file_name,
                previous.source_path.display()
            );
        }
    }

    Ok(documents)
}

/// Fail early when the content present requires templates the theme does
/// not provide.
fn require_templates(templates: &TemplateEngine, has_posts: bool, has_pages: bool) -> Result<()> {
    if has_pages && !templates.has("page.html") {
        bail!(BuildError::MissingTemplate {
            name: "page.html".into(),
            purpose: "pages",
        });
    }
    if has_posts {
        if !templates.has("post.html") {
            bail!(BuildError::MissingTemplate {
                name: "post.html".into(),
                purpose: "posts",
            });
        }
        if !templates.has("list.html") {
            bail!(BuildError::MissingTemplate {
                name: "list.html".into(),
                purpose: "post list pages",
            });
        }
    }
    Ok(())
}

/// Sort posts by date, newest first. Posts are temporally ordered by
/// contract, so a missing or unparsable date aborts the build. The sort
/// is stable: equal dates keep their walk order.
fn sort_posts_descending<'a>(
    posts: &'a IndexMap<String, Document>,
    config: &SiteConfig,
) -> Result<Vec<&'a Document>> {
    let mut dated = Vec::with_capacity(posts.len());

    for post in posts.values() {
        let Some(raw) = post.metadata.date.as_deref() else {
            bail!(
                "missing required `date` in front matter of `{}`",
                post.source_path.display()
            );
        };
        let parsed =
            parse_date(raw, &config.build.time_format).ok_or_else(|| BuildError::InvalidDate {
                path: post.source_path.clone(),
                value: raw.to_owned(),
                format: config.build.time_format.clone(),
            })?;
        dated.push((parsed, post));
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, post)| post).collect())
}

// ============================================================================
// Rendering
// ============================================================================

/// Adjacent-post link passed to the post template.
#[derive(Debug, Serialize)]
struct NavLink {
    slug: String,
    title: String,
}

impl NavLink {
    fn of(post: &Document) -> Self {
        Self {
            slug: post.slug_path(),
            title: post.title.clone(),
        }
    }
}

fn base_context(config: &SiteConfig) -> TemplateContext {
    let mut context = TemplateContext::new();
    context.insert("site", &config.site);
    context
}

/// Render `home.html` to the site root. Skipped when the first list page
/// will supplant it, which only happens when posts exist; a post-less
/// list-homepage site still gets its home template. Themes without a home
/// template get no root page here.
fn render_home(
    templates: &TemplateEngine,
    posts: &[&Document],
    pages: &[&Document],
    config: &SiteConfig,
) -> Result<()> {
    let list_supplants = config.build.homepage_type == HomepageType::List && !posts.is_empty();
    if list_supplants || !templates.has("home.html") {
        return Ok(());
    }

    let mut context = base_context(config);
    context.insert("posts", posts);
    context.insert("pages", pages);

    let html = templates.render("home.html", &context)?;
    write_page(&config.output_dir().join("index.html"), &html)?;
    log!("render"; "home page");
    Ok(())
}

/// Render every page to `<path_info>/<slug>/index.html`. The literal slug
/// `index.html` maps to the site root instead.
fn render_pages(templates: &TemplateEngine, pages: &[&Document], config: &SiteConfig) -> Result<()> {
    for page in pages {
        let template = page_template(templates, page);

        let mut context = base_context(config);
        context.insert("page", page);
        let html = templates.render(&template, &context)?;

        let target = if page.slug == "index.html" {
            config.output_dir().join("index.html")
        } else {
            config
                .output_dir()
                .join(page.slug_path())
                .join("index.html")
        };
        write_page(&target, &html)?;
    }

    log!("render"; "{} pages", pages.len());
    Ok(())
}

/// Per-page override template when declared, the error template for the
/// literal slug `404`, else the default page template.
fn page_template(templates: &TemplateEngine, page: &Document) -> String {
    if let Some(template) = &page.metadata.template {
        return template.clone();
    }
    if page.slug == "404" && templates.has("404.html") {
        return "404.html".into();
    }
    "page.html".into()
}

/// Render every post to `<post_dir>/<path_info>/<slug>/index.html`,
/// linking each to its chronological neighbors: `next` is the next older
/// post, `prev` the next newer one.
fn render_posts(
    templates: &TemplateEngine,
    sorted_posts: &[&Document],
    config: &SiteConfig,
) -> Result<()> {
    for (i, post) in sorted_posts.iter().enumerate() {
        let prev = (i > 0).then(|| NavLink::of(sorted_posts[i - 1]));
        let next = sorted_posts.get(i + 1).map(|p| NavLink::of(p));

        let mut context = base_context(config);
        context.insert("post", post);
        context.insert("next", &next);
        context.insert("prev", &prev);
        let html = templates.render("post.html", &context)?;

        let target = config
            .output_dir()
            .join(&config.build.post_dir)
            .join(post.slug_path())
            .join("index.html");
        write_page(&target, &html)?;
    }

    log!("render"; "{} posts", sorted_posts.len());
    Ok(())
}

/// Split posts into list pages at `<posts_dir>/`, `<posts_dir>/2/`, etc.
/// (1-indexed, first page unsuffixed). With `homepage_type = "list"` the
/// first page is also written as the site root.
fn render_lists(
    templates: &TemplateEngine,
    sorted_posts: &[&Document],
    config: &SiteConfig,
) -> Result<()> {
    if sorted_posts.is_empty() {
        return Ok(());
    }

    let chunks = pagination::split(sorted_posts, config.build.number_of_pages)?;
    let total = chunks.len();

    for (i, chunk) in chunks.iter().enumerate() {
        let index = i + 1;

        let mut context = base_context(config);
        context.insert("posts", chunk);
        context.insert("index", &index);
        context.insert("total", &total);
        let html = templates.render("list.html", &context)?;

        let list_dir = config.output_dir().join(&config.build.posts_dir);
        let target = if index == 1 {
            list_dir.join("index.html")
        } else {
            list_dir.join(index.to_string()).join("index.html")
        };
        write_page(&target, &html)?;

        if index == 1 && config.build.homepage_type == HomepageType::List {
            write_page(&config.output_dir().join("index.html"), &html)?;
        }
    }

    log!("render"; "{total} list pages");
    Ok(())
}

/// Render one listing per taxonomy term at
/// `<post_dir>/<taxonomy_dir>/<term>/index.html`. Taxonomies without any
/// term across the post collection produce nothing.
fn render_taxonomies(
    templates: &TemplateEngine,
    sorted_posts: &[&Document],
    config: &SiteConfig,
) -> Result<()> {
    for (name, taxonomy_config) in &config.build.taxonomies {
        let groups = taxonomy::group_by_term(sorted_posts, name);
        if groups.is_empty() {
            continue;
        }

        if !templates.has(&taxonomy_config.template) {
            bail!(BuildError::MissingTemplate {
                name: taxonomy_config.template.clone(),
                purpose: "taxonomy listings",
            });
        }

        for (term, documents) in &groups {
            let mut context = base_context(config);
            context.insert("term", term);
            context.insert("posts", documents);
            let html = templates.render(&taxonomy_config.template, &context)?;

            let target = config
                .output_dir()
                .join(&config.build.post_dir)
                .join(&taxonomy_config.directory)
                .join(term)
                .join("index.html");
            write_page(&target, &html)?;
        }

        log!("render"; "{} `{name}` term pages", groups.len());
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
