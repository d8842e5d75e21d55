//! Sample dataset fixtures.
//!
//! The sample covers every filter at least once: halal, rated, with and
//! without a usable website or phone, three categories, several
//! neighborhoods, and two records that share a base slug.

use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::models::{BusinessRecord, Dataset};

/// The sample dataset as a `{ businesses, categories }` JSON document.
///
/// | id | name            | category            | notable                          |
/// |----|-----------------|---------------------|----------------------------------|
/// | 0  | Patty King      | FOOD & RESTAURANTS  | halal, rated 4.5, phone, website |
/// | 1  | Kipling Dental  | HEALTH & MEDICAL    | rated 4.8, phone, website        |
/// | 2  | Albion Hardware | RETAIL & SHOPPING   | website "N/A", Thistletown       |
/// | 3  | Mega Mart       | RETAIL & SHOPPING   | services text, phone "none"      |
/// | 4  | Zara Boutique   | RETAIL & SHOPPING   | rated 3.9, Humberwood            |
/// | 5  | Pizza Nova      | FOOD & RESTAURANTS  | phone, not halal                 |
/// | 6  | Patty King      | FOOD & RESTAURANTS  | same slug base as 0              |
pub fn sample_dataset_json() -> String {
    json!({
        "businesses": [
            {
                "name": "Patty King",
                "category": "FOOD & RESTAURANTS",
                "neighborhood": "Rexdale",
                "address": "1530 Albion Rd, Etobicoke, ON",
                "phone": "416-555-0100",
                "website": "pattyking.ca",
                "services": "Jamaican patties, catering, coco bread",
                "rating": 4.5,
                "halal": true
            },
            {
                "name": "Kipling Dental",
                "category": "HEALTH & MEDICAL",
                "neighborhood": "Kingsview Village",
                "address": "2 Kipling Ave",
                "phone": "(416) 555-0199",
                "website": "https://www.kiplingdental.com/",
                "services": "Cleanings, implants",
                "rating": 4.8
            },
            {
                "name": "Albion Hardware",
                "category": "RETAIL & SHOPPING",
                "neighborhood": "Thistletown",
                "address": "1200 Albion Rd",
                "website": "N/A"
            },
            {
                "name": "Mega Mart",
                "category": "RETAIL & SHOPPING",
                "neighborhood": "Rexdale",
                "phone": "none",
                "services": "Groceries, produce, household goods"
            },
            {
                "name": "Zara Boutique",
                "category": "RETAIL & SHOPPING",
                "neighborhood": "Humberwood",
                "rating": 3.9
            },
            {
                "name": "Pizza Nova",
                "category": "FOOD & RESTAURANTS",
                "neighborhood": "Rexdale",
                "phone": "416 555 0142",
                "halal": false
            },
            {
                "name": "Patty King",
                "category": "FOOD & RESTAURANTS",
                "neighborhood": "Rexdale"
            }
        ],
        "categories": ["FOOD & RESTAURANTS", "HEALTH & MEDICAL", "RETAIL & SHOPPING"]
    })
    .to_string()
}

/// The sample dataset's records.
pub fn sample_businesses() -> Vec<BusinessRecord> {
    Dataset::from_json_str(&sample_dataset_json(), "sample")
        .expect("sample dataset is valid")
        .businesses
}

/// Write `json` to `<dir>/businesses.json` and return the path.
pub fn write_dataset(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("businesses.json");
    std::fs::write(&path, json).expect("failed to write dataset fixture");
    path
}

/// Write the sample dataset to `<dir>/businesses.json` and return the path.
pub fn write_sample_dataset(dir: &Path) -> PathBuf {
    write_dataset(dir, &sample_dataset_json())
}

/// A fresh temporary directory holding the sample dataset.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
pub fn sample_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data = write_sample_dataset(temp.path());
    (temp, data)
}
