//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Bestatic static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: bestatic.toml)
    #[arg(short = 'C', long, default_value = "bestatic.toml")]
    pub config: PathBuf,

    /// Theme name, overriding the one in the config file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Deletes the output directory if there is one and rebuilds the site
    Build,

    /// Create a sample post under posts/ with today's date
    NewPost {
        /// File name without extension (.md is added automatically)
        name: String,
    },

    /// Create a sample page under pages/
    NewPage {
        /// File name without extension (.md is added automatically)
        name: String,
    },
}

impl Cli {
    pub fn root_dir(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }
}
