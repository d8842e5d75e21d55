//! Generate one static HTML page per business.
//!
//! ```bash
//! bizdir pages
//! bizdir pages --data https://rexdalejobs.com/data/businesses.json --out public
//! ```
//!
//! Pages go to `<out>/businesses/<slug>.html` and the run summary to
//! `<out>/businesses/GENERATION_SUMMARY.json`. Records that fail are listed in the
//! summary; they do not fail the command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::generator::{GenerationSummary, PageGenerator};
use crate::models::Dataset;
use crate::templating::PageRenderer;

use super::common::{dataset_location, load_dataset, output_dir};

/// Command to generate the business pages.
#[derive(Args, Debug, Default)]
pub struct PagesCommand {
    /// Dataset path or http(s) URL (overrides `[paths].data`)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output root; pages are written under `<out>/businesses` (overrides `[paths].output_dir`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl PagesCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let dataset = load_dataset(dataset_location(self.data.as_deref(), config)).await?;
        generate_pages(&dataset, config, output_dir(self.out.as_deref(), config))?;
        Ok(())
    }
}

/// Run the page generator and report the outcome.
pub(crate) fn generate_pages(
    dataset: &Dataset,
    config: &Config,
    out: &Path,
) -> Result<GenerationSummary> {
    let generator = PageGenerator::new(config.site.clone(), PageRenderer::new()?, out);
    let summary = generator.generate(dataset)?;

    println!(
        "{} Created {} business pages in {}",
        "✓".green(),
        summary.pages_created,
        generator.pages_dir().display()
    );
    if summary.pages_failed > 0 {
        println!(
            "{} {} of {} records failed; see {}",
            "⚠".yellow(),
            summary.pages_failed,
            summary.total_businesses,
            generator.summary_path().display()
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_pages_command_writes_pages() {
        let temp = tempdir().unwrap();
        let data = temp.path().join("businesses.json");
        std::fs::write(
            &data,
            r#"{ "businesses": [ { "name": "A Cafe", "neighborhood": "Rexdale" } ], "categories": [] }"#,
        )
        .unwrap();

        let cmd = PagesCommand {
            data: Some(data.display().to_string()),
            out: Some(temp.path().join("public")),
        };
        cmd.execute(&Config::default()).await.unwrap();

        assert!(temp.path().join("public/businesses/a-cafe-rexdale.html").is_file());
        assert!(temp.path().join("public/businesses/GENERATION_SUMMARY.json").is_file());
    }

    #[tokio::test]
    async fn test_missing_dataset_fails() {
        let temp = tempdir().unwrap();
        let cmd = PagesCommand {
            data: Some(temp.path().join("nope.json").display().to_string()),
            out: Some(temp.path().to_path_buf()),
        };
        let err = cmd.execute(&Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("Dataset not found"));
    }
}
