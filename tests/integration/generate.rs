use bizdir_cli::test_utils::{sample_workspace, write_dataset};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::bizdir;

#[test]
fn test_pages_writes_one_page_per_business() {
    let (temp, data) = sample_workspace();
    let out = temp.path().join("public");

    bizdir(temp.path())
        .args(["pages", "--data"])
        .arg(&data)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 7 business pages"));

    let pages = out.join("businesses");
    assert!(pages.join("patty-king-rexdale.html").is_file());
    assert!(pages.join("patty-king-rexdale-1.html").is_file());
    assert!(pages.join("kipling-dental-kingsview-village.html").is_file());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(pages.join("GENERATION_SUMMARY.json")).unwrap())
            .unwrap();
    assert_eq!(summary["totalBusinesses"], 7);
    assert_eq!(summary["pagesCreated"], 7);
    assert_eq!(summary["pagesFailed"], 0);
    assert_eq!(summary["createdFiles"].as_array().unwrap().len(), 7);
}

#[test]
fn test_page_content() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path()).args(["pages", "--data"]).arg(&data).assert().success();

    let html =
        fs::read_to_string(temp.path().join("businesses/kipling-dental-kingsview-village.html"))
            .unwrap();
    assert!(html.contains("<title>Kipling Dental"));
    assert!(html.contains("application/ld+json"));
    assert!(html.contains("tel:4165550199"));
    assert!(html.contains("kiplingdental.com"));
}

#[test]
fn test_rejected_records_are_counted_not_fatal() {
    let temp = TempDir::new().unwrap();
    let data = write_dataset(
        temp.path(),
        r#"{ "businesses": [ { "name": "A Cafe" }, "oops", { "name": "B Bakery" } ] }"#,
    );

    bizdir(temp.path())
        .args(["pages", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 records failed"));

    let summary: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp.path().join("businesses/GENERATION_SUMMARY.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["pagesCreated"], 2);
    assert_eq!(summary["failures"][0]["index"], 1);
}

#[test]
fn test_sitemap_lists_static_and_business_pages() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["sitemap", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("with 42 URLs"));

    let xml = fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();
    assert_eq!(xml.matches("<url>").count(), 42);
    assert!(xml.contains("<loc>https://rexdalejobs.com/</loc>"));
    assert!(xml.contains("<loc>https://rexdalejobs.com/businesses/patty-king-rexdale-1.html</loc>"));
}

#[test]
fn test_build_uses_config_file() {
    let (temp, _) = sample_workspace();
    fs::write(
        temp.path().join("bizdir.toml"),
        r#"
[site]
base_url = "https://example.org/"

[paths]
data = "businesses.json"
output_dir = "site"

[sitemap]
lastmod = "2026-01-31"
"#,
    )
    .unwrap();

    bizdir(temp.path()).arg("build").assert().success();

    let site = temp.path().join("site");
    assert!(site.join("businesses/pizza-nova-rexdale.html").is_file());
    let xml = fs::read_to_string(site.join("sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://example.org/businesses/pizza-nova-rexdale.html</loc>"));
    assert!(xml.contains("<lastmod>2026-01-31</lastmod>"));
}

#[test]
fn test_missing_dataset_reports_suggestion() {
    let temp = TempDir::new().unwrap();

    bizdir(temp.path())
        .args(["pages", "--data", "nowhere.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Dataset not found: nowhere.json"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_unreachable_url_reports_loading_error() {
    let temp = TempDir::new().unwrap();

    bizdir(temp.path())
        .args(["pages", "--data", "http://127.0.0.1:9/businesses.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading data"));
}
