//! Manage favorite businesses.
//!
//! Favorites are business ids (dataset positions, as printed by `browse`)
//! kept in the preference store.
//!
//! ```bash
//! bizdir favorites toggle 42
//! bizdir favorites list
//! bizdir favorites clear --store ./prefs.json
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::DirectoryError;
use crate::favorites::FavoritesStore;

use super::common::{dataset_location, load_dataset, open_store};

/// Command to toggle, list or clear favorites.
#[derive(Args, Debug)]
pub struct FavoritesCommand {
    #[command(subcommand)]
    pub action: FavoritesAction,

    /// Preference store file (overrides `[paths].store`)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Dataset used to check ids and show names (overrides `[paths].data`)
    #[arg(short, long, global = true)]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// Add a business to favorites, or remove it if already there
    Toggle {
        /// Business id
        id: usize,
    },
    /// List favorite businesses
    List,
    /// Remove all favorites
    Clear,
}

impl FavoritesCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let mut favorites = FavoritesStore::new(open_store(self.store.as_deref(), config)?);

        match self.action {
            FavoritesAction::Toggle { id } => {
                let dataset =
                    load_dataset(dataset_location(self.data.as_deref(), config)).await?;
                let Some(record) = dataset.businesses.get(id) else {
                    return Err(DirectoryError::BusinessNotFound {
                        id,
                        total: dataset.businesses.len(),
                    }
                    .into());
                };

                if favorites.toggle(id)? {
                    println!("{} Added {} to favorites", "♥".red(), record.name().bold());
                } else {
                    println!("{} Removed {} from favorites", "✓".green(), record.name().bold());
                }
            }
            FavoritesAction::List => {
                if favorites.is_empty() {
                    println!("No favorites yet.");
                    return Ok(());
                }
                // Names are a convenience; ids alone are still useful without data.
                let dataset =
                    match load_dataset(dataset_location(self.data.as_deref(), config)).await {
                        Ok(dataset) => Some(dataset),
                        Err(e) => {
                            tracing::warn!("Listing favorites without names: {:#}", e);
                            None
                        }
                    };
                for &id in favorites.all() {
                    let name = dataset
                        .as_ref()
                        .and_then(|d| d.businesses.get(id))
                        .map(|r| r.name().to_string())
                        .unwrap_or_else(|| "(unknown)".dimmed().to_string());
                    println!("[{id}] {name}");
                }
            }
            FavoritesAction::Clear => {
                let count = favorites.len();
                favorites.clear()?;
                println!("{} Cleared {} favorites", "✓".green(), count);
            }
        }
        Ok(())
    }
}
