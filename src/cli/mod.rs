//! Command-line interface for bizdir.
//!
//! Each command lives in its own module with its argument struct and an
//! `execute` method; [`Cli`] parses the global options, loads the
//! configuration and dispatches.
//!
//! # Available Commands
//!
//! ## Site generation
//! - `pages` - Write one HTML page per business plus `GENERATION_SUMMARY.json`
//! - `sitemap` - Write `sitemap.xml`
//! - `build` - `pages` then `sitemap` from a single dataset load
//!
//! ## Browsing
//! - `browse` - Filter, sort and page through the directory
//! - `categories` - Category counts
//! - `suggest` - Search-box suggestions
//!
//! ## Preferences
//! - `favorites` - Toggle, list or clear favorite businesses
//! - `theme` - Show or set the color theme
//!
//! ## Setup
//! - `init` - Write a starter `bizdir.toml`
//!
//! # Basic Workflow
//!
//! ```bash
//! bizdir init
//! bizdir build --data data/businesses.json --out public
//! bizdir browse --category "FOOD & RESTAURANTS" --sort rating
//! bizdir favorites toggle 12
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only errors
//! - `--no-progress` - Disable progress bars and spinners
//! - `--config` - Path to a config file other than `./bizdir.toml`

mod browse;
mod build;
mod categories;
pub mod common;
mod favorites;
mod init;
mod pages;
mod sitemap;
mod suggest;
mod theme;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::utils::progress::disable_progress;

/// Runtime settings derived from the global flags.
///
/// Kept separate from [`Cli`] so tests can build one directly.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: &'static str,

    /// Hide progress bars and spinners.
    pub no_progress: bool,

    /// Explicit config file; must exist when set.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_level: "info",
            ..Self::default()
        }
    }

    /// Apply process-wide settings. Call once, before running a command.
    pub fn apply(&self) {
        if self.no_progress {
            disable_progress();
        }
    }
}

/// Static local-business directory generator and browser.
#[derive(Parser, Debug)]
#[command(
    name = "bizdir",
    about = "Local business directory - generate pages and sitemap, browse listings",
    version,
    author,
    long_about = "bizdir turns a businesses.json dataset into one SEO-ready HTML page per business \
                  plus a sitemap, and lets you filter, search and bookmark the directory from the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (defaults to ./bizdir.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable progress bars and spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one HTML page per business
    Pages(pages::PagesCommand),

    /// Generate sitemap.xml
    Sitemap(sitemap::SitemapCommand),

    /// Generate the pages and the sitemap
    Build(build::BuildCommand),

    /// Filter, sort and page through the directory
    Browse(browse::BrowseCommand),

    /// List categories with business counts
    Categories(categories::CategoriesCommand),

    /// Show search suggestions for a term
    Suggest(suggest::SuggestCommand),

    /// Manage favorite businesses
    Favorites(favorites::FavoritesCommand),

    /// Show or set the color theme
    Theme(theme::ThemeCommand),

    /// Create a bizdir.toml with default settings
    Init(init::InitCommand),
}

impl Cli {
    /// Run the parsed command with settings from its own flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress,
            config_path: self.config.clone(),
        }
    }

    /// Run the parsed command with explicit settings.
    pub async fn execute_with_config(self, cli_config: CliConfig) -> Result<()> {
        cli_config.apply();

        if let Commands::Init(cmd) = self.command {
            return cmd.execute().await;
        }

        let config = Config::load(cli_config.config_path.as_deref()).await?;
        match self.command {
            Commands::Pages(cmd) => cmd.execute(&config).await,
            Commands::Sitemap(cmd) => cmd.execute(&config).await,
            Commands::Build(cmd) => cmd.execute(&config).await,
            Commands::Browse(cmd) => cmd.execute(&config).await,
            Commands::Categories(cmd) => cmd.execute(&config).await,
            Commands::Suggest(cmd) => cmd.execute(&config).await,
            Commands::Favorites(cmd) => cmd.execute(&config).await,
            Commands::Theme(cmd) => cmd.execute(&config).await,
            Commands::Init(cmd) => cmd.execute().await,
        }
    }
}
