//! Dataset sources.
//!
//! A dataset location is either a local path or an `http(s)://` URL. Both are
//! read fully into memory and parsed with [`Dataset::from_json_str`]. Failures
//! are reported once; there are no retries.

use std::fmt;
use std::path::PathBuf;

use crate::core::DirectoryError;
use crate::models::Dataset;

/// Where a dataset is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Classify a location string. Anything that is not an `http(s)://` URL is a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.trim().to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Fetch and parse the dataset.
    pub async fn load(&self) -> Result<Dataset, DirectoryError> {
        let text = self.read_text().await?;
        let dataset = Dataset::from_json_str(&text, &self.to_string())?;
        tracing::info!(
            "Loaded {} businesses and {} categories from {}",
            dataset.businesses.len(),
            dataset.categories.len(),
            self
        );
        Ok(dataset)
    }

    async fn read_text(&self) -> Result<String, DirectoryError> {
        match self {
            Self::File(path) => {
                tracing::debug!("Reading dataset file {}", path.display());
                tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => DirectoryError::DatasetNotFound {
                        path: path.display().to_string(),
                    },
                    std::io::ErrorKind::PermissionDenied => DirectoryError::PermissionDenied {
                        operation: "read dataset".to_string(),
                        path: path.display().to_string(),
                    },
                    _ => DirectoryError::DatasetParseError {
                        location: path.display().to_string(),
                        reason: e.to_string(),
                    },
                })
            }
            Self::Url(url) => {
                tracing::debug!("Fetching dataset from {}", url);
                let fetch_failed = |reason: String| DirectoryError::DatasetFetchFailed {
                    location: url.clone(),
                    reason,
                };

                let response = reqwest::get(url)
                    .await
                    .map_err(|e| fetch_failed(e.to_string()))?
                    .error_for_status()
                    .map_err(|e| fetch_failed(e.to_string()))?;

                response.text().await.map_err(|e| fetch_failed(e.to_string()))
            }
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
