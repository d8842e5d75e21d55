//! Generate the pages and the sitemap from a single dataset load.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

use super::common::{dataset_location, load_dataset, output_dir};
use super::pages::generate_pages;
use super::sitemap::write_sitemap;

/// Command to run `pages` then `sitemap`.
#[derive(Args, Debug, Default)]
pub struct BuildCommand {
    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output root (overrides `[paths].output_dir`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl BuildCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        let out = output_dir(self.out.as_deref(), config);

        generate_pages(&dataset, config, out)?;
        write_sitemap(&dataset, config, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_build_writes_pages_and_sitemap() {
        let temp = tempdir().unwrap();
        let data = temp.path().join("businesses.json");
        std::fs::write(
            &data,
            r#"{ "businesses": [ { "name": "Kipling Dental", "neighborhood": "Kingsview Village" } ] }"#,
        )
        .unwrap();

        BuildCommand {
            data: Some(data.display().to_string()),
            out: Some(temp.path().join("site")),
        }
        .execute(&Config::default())
        .await
        .unwrap();

        let site = temp.path().join("site");
        assert!(site.join("businesses/kipling-dental-kingsview-village.html").is_file());
        assert!(site.join("sitemap.xml").is_file());
    }
}
