//! The `{ businesses, categories }` dataset document.

use serde::Deserialize;
use serde_json::Value;

use super::BusinessRecord;
use crate::core::DirectoryError;

/// A dataset entry that could not be decoded as a [`BusinessRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position of the entry in the original `businesses` array
    pub index: usize,
    /// Name if the entry carried one, for logging
    pub name: Option<String>,
    pub reason: String,
}

/// Loaded dataset.
///
/// `businesses` holds the decodable records in input order; their positions in
/// this vector are the business ids used by favorites and the browsing engine.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub businesses: Vec<BusinessRecord>,
    pub categories: Vec<String>,
    pub rejected: Vec<RejectedRecord>,
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    businesses: Vec<Value>,
    #[serde(default)]
    categories: Vec<String>,
}

impl Dataset {
    /// Parse a dataset document.
    ///
    /// Only a malformed document fails; malformed entries are moved to
    /// [`Dataset::rejected`]. When the document carries no category list, one is
    /// derived from the records in first-seen order.
    pub fn from_json_str(json: &str, location: &str) -> Result<Self, DirectoryError> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| DirectoryError::DatasetParseError {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        let mut businesses = Vec::with_capacity(raw.businesses.len());
        let mut rejected = Vec::new();

        for (index, entry) in raw.businesses.into_iter().enumerate() {
            if !entry.is_object() {
                rejected.push(RejectedRecord {
                    index,
                    name: None,
                    reason: format!("expected a JSON object, found {}", json_kind(&entry)),
                });
                continue;
            }

            let name = entry.get("name").and_then(Value::as_str).map(str::to_string);
            match serde_json::from_value::<BusinessRecord>(entry) {
                Ok(record) => businesses.push(record),
                Err(e) => rejected.push(RejectedRecord {
                    index,
                    name,
                    reason: e.to_string(),
                }),
            }
        }

        for rejection in &rejected {
            tracing::warn!(
                "Skipping business #{} ({}): {}",
                rejection.index,
                rejection.name.as_deref().unwrap_or("unnamed"),
                rejection.reason
            );
        }

        let categories = if raw.categories.is_empty() {
            derive_categories(&businesses)
        } else {
            raw.categories
        };

        Ok(Self {
            businesses,
            categories,
            rejected,
        })
    }

    /// Build a dataset directly from records, deriving its categories.
    pub fn from_records(businesses: Vec<BusinessRecord>) -> Self {
        let categories = derive_categories(&businesses);
        Self {
            businesses,
            categories,
            rejected: Vec::new(),
        }
    }

    /// Number of entries in the source document, rejected ones included.
    pub fn total_entries(&self) -> usize {
        self.businesses.len() + self.rejected.len()
    }
}

fn derive_categories(businesses: &[BusinessRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for business in businesses {
        if !categories.iter().any(|c| c == business.category()) {
            categories.push(business.category().to_string());
        }
    }
    categories
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
