//! Write `sitemap.xml` for the static pages and every business page.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::SITEMAP_FILE;
use crate::models::Dataset;
use crate::sitemap::{build_entries, render_xml};
use crate::utils::fs::safe_write;

use super::common::{dataset_location, load_dataset, output_dir};

/// Command to generate the sitemap.
#[derive(Args, Debug, Default)]
pub struct SitemapCommand {
    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Directory receiving sitemap.xml (overrides `[paths].output_dir`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl SitemapCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        write_sitemap(&dataset, config, output_dir(self.out.as_deref(), config))?;
        Ok(())
    }
}

/// Build and write the sitemap; returns its path.
pub(crate) fn write_sitemap(dataset: &Dataset, config: &Config, out: &Path) -> Result<PathBuf> {
    let entries = build_entries(&dataset.businesses, config);
    let path = out.join(SITEMAP_FILE);
    safe_write(&path, &render_xml(&entries))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Sitemap generated with {} URLs", entries.len());
    println!("{} Wrote {} with {} URLs", "✓".green(), path.display(), entries.len());
    Ok(path)
}
