use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::bizdir;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    bizdir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"))
        .stdout(predicate::str::contains("bizdir build"));

    let content = fs::read_to_string(temp.path().join("bizdir.toml")).unwrap();
    assert!(content.contains("[site]"));
    assert!(content.contains("base_url = \"https://rexdalejobs.com\""));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bizdir.toml"), "# mine\n").unwrap();

    bizdir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(temp.path().join("bizdir.toml")).unwrap(), "# mine\n");

    bizdir(temp.path()).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(temp.path().join("bizdir.toml")).unwrap().contains("[paths]"));
}

#[test]
fn test_init_into_directory() {
    let temp = TempDir::new().unwrap();

    bizdir(temp.path()).args(["init", "--path", "site"]).assert().success();
    assert!(temp.path().join("site/bizdir.toml").is_file());
}

#[test]
fn test_generated_config_loads() {
    let temp = TempDir::new().unwrap();
    bizdir(temp.path()).arg("init").assert().success();

    // The template points at data/businesses.json, which does not exist yet.
    bizdir(temp.path())
        .arg("pages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found: data/businesses.json"));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();

    bizdir(temp.path())
        .args(["--config", "missing.toml", "browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found: missing.toml"));
}

#[test]
fn test_invalid_config_syntax() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bizdir.toml"), "[site\nbase_url = ").unwrap();

    bizdir(temp.path())
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_zero_page_size_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bizdir.toml"), "[directory]\npage_size = 0\n").unwrap();

    bizdir(temp.path())
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}
