//! List categories with their business counts.
//!
//! Default order is the category grid's: most businesses first, first 15
//! only. `--all` lifts the limit and `--alphabetical` switches to the order of
//! the category filter.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::constants::INITIAL_CATEGORY_COUNT;
use crate::directory::DirectoryController;

use super::common::{OutputFormat, dataset_location, load_dataset};

/// Command to list categories.
#[derive(Args, Debug, Default)]
pub struct CategoriesCommand {
    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Show every category instead of the first 15
    #[arg(short, long)]
    pub all: bool,

    /// Sort by name instead of by count
    #[arg(long)]
    pub alphabetical: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CategoriesCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        let controller =
            DirectoryController::new(dataset.businesses).with_categories(dataset.categories);

        let mut categories = if self.alphabetical {
            controller.category_options()
        } else {
            controller.categories_by_count()
        };
        let hidden = if self.all {
            0
        } else {
            categories.len().saturating_sub(INITIAL_CATEGORY_COUNT)
        };
        categories.truncate(categories.len() - hidden);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
            OutputFormat::Text => {
                for category in &categories {
                    println!("{:>5}  {}", category.count.to_string().cyan(), category.name);
                }
                if hidden > 0 {
                    println!("{}", format!("... and {hidden} more (use --all)").dimmed());
                }
            }
        }
        Ok(())
    }
}
