//! Static page generation.
//!
//! [`PageGenerator::generate`] walks the dataset in input order and writes
//! `businesses/<slug>.html` for each record. A record that cannot be rendered or
//! written is logged and counted, and the run moves on; dataset entries rejected
//! at load time are counted the same way. Every run ends by writing
//! `businesses/GENERATION_SUMMARY.json`.
//!
//! Only two failures abort a run: the output directory cannot be created, or
//! the summary cannot be written.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::constants::{BUSINESSES_DIR, GENERATION_SUMMARY_FILE, PROGRESS_LOG_INTERVAL};
use crate::models::{BusinessRecord, Dataset};
use crate::shaper::PageData;
use crate::slug::assign_slugs;
use crate::templating::PageRenderer;
use crate::utils::fs::{atomic_write, ensure_dir, write_json_file};
use crate::utils::progress::ProgressBar;

/// Outcome of a generation run, as written to `GENERATION_SUMMARY.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    /// Entries in the dataset, rejected ones included.
    pub total_businesses: usize,
    pub pages_created: usize,
    pub pages_failed: usize,
    pub timestamp: DateTime<Utc>,
    /// File names (relative to `businesses/`) in creation order.
    pub created_files: Vec<String>,
    pub failures: Vec<GenerationFailure>,
}

/// A record for which no page was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationFailure {
    /// Position in the dataset's `businesses` array.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reason: String,
}

/// Renders and writes every business page of a dataset.
pub struct PageGenerator {
    site: SiteConfig,
    renderer: PageRenderer,
    pages_dir: PathBuf,
}

impl PageGenerator {
    /// Generator writing into `<output_dir>/businesses`.
    pub fn new(site: SiteConfig, renderer: PageRenderer, output_dir: &Path) -> Self {
        Self {
            site,
            renderer,
            pages_dir: output_dir.join(BUSINESSES_DIR),
        }
    }

    /// Directory receiving the pages and the summary.
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Path of the summary file this generator writes.
    pub fn summary_path(&self) -> PathBuf {
        self.pages_dir.join(GENERATION_SUMMARY_FILE)
    }

    /// Generate all pages and write the summary.
    pub fn generate(&self, dataset: &Dataset) -> Result<GenerationSummary> {
        ensure_dir(&self.pages_dir).with_context(|| {
            format!("Failed to create output directory {}", self.pages_dir.display())
        })?;

        let total = dataset.total_entries();
        tracing::info!("Starting generation of {} business pages...", total);

        let slugs = assign_slugs(&dataset.businesses);
        let mut records = dataset.businesses.iter().zip(slugs.iter());
        let mut rejected = dataset.rejected.iter().peekable();

        let mut created_files = Vec::with_capacity(dataset.businesses.len());
        let mut failures = Vec::new();

        let progress = ProgressBar::new(total as u64);
        progress.set_prefix("Pages");

        for index in 0..total {
            if let Some(rejection) = rejected.next_if(|r| r.index == index) {
                tracing::error!(
                    "Failed to create page for business {}: {}",
                    index,
                    rejection.reason
                );
                failures.push(GenerationFailure {
                    index,
                    name: rejection.name.clone(),
                    reason: rejection.reason.clone(),
                });
            } else if let Some((record, slug)) = records.next() {
                match self.write_page(record, slug) {
                    Ok(file_name) => created_files.push(file_name),
                    Err(e) => {
                        let reason = format!("{e:#}");
                        tracing::error!(
                            "Failed to create page for business {} ({}): {}",
                            index,
                            record.name(),
                            reason
                        );
                        failures.push(GenerationFailure {
                            index,
                            name: Some(record.name().to_string()),
                            reason,
                        });
                    }
                }
            }

            progress.inc(1);
            let processed = index + 1;
            if processed % PROGRESS_LOG_INTERVAL == 0 {
                tracing::info!("Progress: {}/{} processed...", processed, total);
            }
        }
        progress.finish_and_clear();

        let summary = GenerationSummary {
            total_businesses: total,
            pages_created: created_files.len(),
            pages_failed: failures.len(),
            timestamp: Utc::now(),
            created_files,
            failures,
        };

        let summary_path = self.summary_path();
        write_json_file(&summary_path, &summary, true)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;

        tracing::info!(
            "Generation complete: {} created, {} failed. Summary saved to {}",
            summary.pages_created,
            summary.pages_failed,
            summary_path.display()
        );
        Ok(summary)
    }

    fn write_page(&self, record: &BusinessRecord, slug: &str) -> Result<String> {
        let page = PageData::from_record(record, slug, &self.site);
        let html = self.renderer.render(&page)?;

        let file_name = format!("{slug}.html");
        atomic_write(&self.pages_dir.join(&file_name), html.as_bytes())?;
        tracing::debug!("Wrote {}", file_name);
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::read_json_file;
    use tempfile::tempdir;

    fn generator(output: &Path) -> PageGenerator {
        PageGenerator::new(SiteConfig::default(), PageRenderer::new().unwrap(), output)
    }

    #[test]
    fn test_generates_pages_and_summary() {
        let temp = tempdir().unwrap();
        let dataset = Dataset::from_records(vec![
            BusinessRecord::named("A Cafe", "Rexdale"),
            BusinessRecord::named("A Cafe", "Rexdale"),
            BusinessRecord::named("Kipling Dental", "Kingsview Village"),
        ]);

        let summary = generator(temp.path()).generate(&dataset).unwrap();

        assert_eq!(summary.total_businesses, 3);
        assert_eq!(summary.pages_created, 3);
        assert_eq!(summary.pages_failed, 0);
        assert_eq!(
            summary.created_files,
            vec![
                "a-cafe-rexdale.html",
                "a-cafe-rexdale-1.html",
                "kipling-dental-kingsview-village.html"
            ]
        );
        for file in &summary.created_files {
            assert!(temp.path().join("businesses").join(file).is_file());
        }

        let on_disk: GenerationSummary =
            read_json_file(&temp.path().join("businesses/GENERATION_SUMMARY.json")).unwrap();
        assert_eq!(on_disk, summary);
    }

    #[test]
    fn test_summary_uses_camel_case_keys() {
        let temp = tempdir().unwrap();
        let dataset = Dataset::from_records(vec![BusinessRecord::named("A", "B")]);
        generator(temp.path()).generate(&dataset).unwrap();

        let raw: serde_json::Value =
            read_json_file(&temp.path().join("businesses/GENERATION_SUMMARY.json")).unwrap();
        for key in ["totalBusinesses", "pagesCreated", "pagesFailed", "timestamp", "createdFiles"] {
            assert!(raw.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_rejected_entries_count_as_failures() {
        crate::test_utils::init_test_logging(None);
        let temp = tempdir().unwrap();
        let json = r#"{ "businesses": [ { "name": "A" }, 42, { "name": "B" } ] }"#;
        let dataset = Dataset::from_json_str(json, "test").unwrap();

        let summary = generator(temp.path()).generate(&dataset).unwrap();
        assert_eq!(summary.total_businesses, 3);
        assert_eq!(summary.pages_created, 2);
        assert_eq!(summary.pages_failed, 1);
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.created_files, vec!["a-rexdale.html", "b-rexdale.html"]);
    }

    #[test]
    fn test_render_failure_is_isolated() {
        crate::test_utils::init_test_logging(None);
        let temp = tempdir().unwrap();
        // Fails only for records with a rating.
        let renderer =
            PageRenderer::with_template("{{ name }}{% if rating %}{{ not_in_context }}{% endif %}")
                .unwrap();
        let generator = PageGenerator::new(SiteConfig::default(), renderer, temp.path());

        let mut rated = BusinessRecord::named("Rated", "Rexdale");
        rated.rating = Some(4.0);
        let dataset = Dataset::from_records(vec![
            BusinessRecord::named("First", "Rexdale"),
            rated,
            BusinessRecord::named("Last", "Rexdale"),
        ]);

        let summary = generator.generate(&dataset).unwrap();
        assert_eq!(summary.pages_created, 2);
        assert_eq!(summary.pages_failed, 1);
        assert_eq!(summary.failures[0].index, 1);
        assert_eq!(summary.failures[0].name.as_deref(), Some("Rated"));
        assert!(temp.path().join("businesses/last-rexdale.html").is_file());
    }

    #[test]
    fn test_output_dir_blocked_by_file_is_fatal() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("businesses"), "not a dir").unwrap();

        let dataset = Dataset::from_records(vec![BusinessRecord::named("A", "B")]);
        assert!(generator(temp.path()).generate(&dataset).is_err());
    }

    #[test]
    fn test_empty_dataset_still_writes_summary() {
        let temp = tempdir().unwrap();
        let summary = generator(temp.path()).generate(&Dataset::default()).unwrap();
        assert_eq!(summary.total_businesses, 0);
        assert!(temp.path().join("businesses/GENERATION_SUMMARY.json").is_file());
    }
}
