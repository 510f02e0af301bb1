//! Bestatic - A static site generator for Markdown blogs.

mod build;
mod cli;
mod config;
mod content;
mod error;
mod generator;
mod newcontent;
mod pagination;
mod rewrite;
mod taxonomy;
mod templates;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use newcontent::{new_page, new_post};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build => {
            let config = load_config(&cli)?;
            build_site(&config)
        }
        Commands::NewPost { name } => new_post(cli.root_dir(), name),
        Commands::NewPage { name } => new_page(cli.root_dir(), name),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root_dir();
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    if !theme_exists(&config) {
        bail!(
            "Theme directory does not exist: {}. Please make sure a proper theme is present in the themes directory.",
            config.theme_dir().display()
        );
    }

    Ok(config)
}

fn theme_exists(config: &SiteConfig) -> bool {
    let theme = config.theme_dir();
    Path::new(&theme).is_dir()
}
