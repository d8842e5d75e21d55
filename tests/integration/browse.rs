use bizdir_cli::test_utils::{sample_workspace, write_dataset};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use crate::{bizdir, stdout_json};

fn ids(output: &Value) -> Vec<u64> {
    output["results"].as_array().unwrap().iter().map(|r| r["id"].as_u64().unwrap()).collect()
}

#[test]
fn test_browse_category_json() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["browse", "--format", "json", "--category", "RETAIL & SHOPPING", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total"], 3);
    let names: Vec<&str> =
        json["results"].as_array().unwrap().iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Albion Hardware", "Mega Mart", "Zara Boutique"]);
    assert_eq!(json["filters"]["category"], "RETAIL & SHOPPING");
    // A single page has no pagination bar.
    assert!(json.get("pagination").is_none());
}

#[test]
fn test_browse_sort_by_rating() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["browse", "--format", "json", "--sort", "rating", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(ids(&json)[..3], [1, 0, 4]);
}

#[test]
fn test_browse_paging() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["browse", "--format", "json", "--page-size", "2", "--page", "2", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["page"], 2);
    assert_eq!(json["total_pages"], 4);
    assert_eq!(ids(&json), vec![3, 0]);
    assert_eq!(json["pagination"]["has_prev"], true);
    assert_eq!(json["pagination"]["has_next"], true);
}

#[test]
fn test_browse_page_out_of_range_falls_back() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["browse", "--page", "9", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::contains("Page 9 is out of range (1-1)"))
        .stdout(predicate::str::contains("Showing 1-7 of 7 businesses"));
}

#[test]
fn test_browse_text_listing() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["browse", "--halal", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-1 of 1 businesses"))
        .stdout(predicate::str::contains("[0] Patty King"))
        .stdout(predicate::str::contains("pattyking.ca"));
}

#[test]
fn test_browse_no_results() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["browse", "--search", "sushi", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No businesses found."))
        .stdout(predicate::str::contains("Try adjusting your search or filters."));
}

#[test]
fn test_browse_unknown_category_hint() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["browse", "--category", "RETAIL & SHOPING", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stderr(predicate::str::contains("Did you mean 'RETAIL & SHOPPING'?"))
        .stdout(predicate::str::contains("No businesses found."));
}

#[test]
fn test_browse_favorites_only() {
    let (temp, data) = sample_workspace();
    let store = temp.path().join("prefs.json");

    bizdir(temp.path())
        .args(["favorites", "toggle", "4", "--data"])
        .arg(&data)
        .arg("--store")
        .arg(&store)
        .assert()
        .success();

    let output = bizdir(temp.path())
        .args(["browse", "--favorites-only", "--format", "json", "--data"])
        .arg(&data)
        .arg("--store")
        .arg(&store)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(ids(&json), vec![4]);
    assert_eq!(json["results"][0]["favorite"], true);
}

#[test]
fn test_categories_by_count() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["categories", "--format", "json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names: Vec<&str> =
        json.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["FOOD & RESTAURANTS", "RETAIL & SHOPPING", "HEALTH & MEDICAL"]);
    assert_eq!(json[2]["count"], 1);
}

#[test]
fn test_categories_follow_declared_order() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(
        temp.path(),
        r#"{
  "businesses": [
    { "name": "Patty King", "category": "FOOD" },
    { "name": "Kipling Dental", "category": "HEALTH" },
    { "name": "Mega Mart", "category": "RETAIL" }
  ],
  "categories": ["RETAIL", "PLUMBING", "HEALTH", "FOOD"]
}"#,
    );

    let output = bizdir(temp.path())
        .args(["categories", "--format", "json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names: Vec<&str> =
        json.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["RETAIL", "HEALTH", "FOOD"]);
}
