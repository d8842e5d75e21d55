//! The business record as it appears in the dataset.
//!
//! Records come from hand-maintained JSON, so every field decodes leniently:
//! `null` and missing keys are the same thing, numbers are accepted where
//! strings are expected, and the legacy `halal_status` text field is read as
//! the `halal` flag.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_BUSINESS_NAME, DEFAULT_CATEGORY, DEFAULT_NEIGHBORHOOD};

/// One business in the directory.
///
/// Fields with a documented default (`name`, `category`, `neighborhood`) are
/// stored as read and resolved through the accessor methods, so a record
/// round-trips without gaining values it never had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Rating on a 1–5 scale.
    #[serde(default, deserialize_with = "lenient_rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(
        default,
        alias = "halal_status",
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub halal: Option<bool>,
}

impl BusinessRecord {
    /// Record with only a name and neighborhood, the two slug inputs.
    pub fn named(name: impl Into<String>, neighborhood: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            neighborhood: Some(neighborhood.into()),
            ..Self::default()
        }
    }

    /// Business name, or [`DEFAULT_BUSINESS_NAME`] when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_BUSINESS_NAME)
    }

    /// Category, or [`DEFAULT_CATEGORY`] when absent.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Neighborhood, or [`DEFAULT_NEIGHBORHOOD`] when absent.
    pub fn neighborhood(&self) -> &str {
        self.neighborhood.as_deref().unwrap_or(DEFAULT_NEIGHBORHOOD)
    }

    /// Rating with a missing value read as zero, as used for ordering.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Fields scanned by the free-text search, in display order.
    pub fn search_fields(&self) -> [Option<&str>; 5] {
        [
            Some(self.name()),
            Some(self.category()),
            non_blank(self.address.as_deref()),
            non_blank(self.services.as_deref()),
            non_blank(self.notes.as_deref()),
        ]
    }
}

/// `Some` only for strings with visible content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let rating = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_leading_number(&s),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            match s.as_str() {
                "" => None,
                "no" | "false" | "0" | "n" | "not halal" => Some(false),
                _ => Some(true),
            }
        }
        _ => None,
    })
}

/// Parse "4.5", "4.5 stars" or "4.5/5" as 4.5.
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let end = text.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(text.len());
    text[..end].parse().ok()
}
