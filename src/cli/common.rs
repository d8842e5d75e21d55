//! Helpers shared by the subcommands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::DirectoryError;
use crate::favorites::JsonFileStore;
use crate::models::Dataset;
use crate::source::DatasetSource;
use crate::utils::progress::ProgressBar;

/// Output format for commands that print listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Dataset location from `--data`, falling back to `[paths].data`.
pub fn dataset_location<'a>(data: Option<&'a str>, config: &'a Config) -> &'a str {
    data.unwrap_or(&config.paths.data)
}

/// Output root from `--out`, falling back to `[paths].output_dir`.
pub fn output_dir<'a>(out: Option<&'a Path>, config: &'a Config) -> &'a Path {
    out.unwrap_or(&config.paths.output_dir)
}

/// Load the dataset behind a spinner.
pub async fn load_dataset(location: &str) -> Result<Dataset> {
    let source = DatasetSource::parse(location);
    let spinner = ProgressBar::new_spinner();
    spinner.set_prefix("Data");
    spinner.set_message(format!("Loading {source}"));

    let result = source.load().await;
    spinner.finish_and_clear();
    Ok(result?)
}

/// Open the preference store: `--store`, then `[paths].store`, then the
/// per-user data directory.
pub fn open_store(store: Option<&Path>, config: &Config) -> Result<JsonFileStore> {
    let path: PathBuf = match store.or(config.paths.store.as_deref()) {
        Some(path) => path.to_path_buf(),
        None => JsonFileStore::default_path().ok_or_else(|| DirectoryError::Other {
            message: "Could not determine a data directory for preferences; pass --store <file>"
                .to_string(),
        })?,
    };
    JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open preference store {}", path.display()))
}
