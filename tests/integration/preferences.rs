use bizdir_cli::test_utils::sample_workspace;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

use crate::bizdir;

fn favorites(dir: &Path, data: &Path, store: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    bizdir(dir)
        .arg("favorites")
        .args(args)
        .arg("--data")
        .arg(data)
        .arg("--store")
        .arg(store)
        .assert()
}

#[test]
fn test_toggle_adds_then_removes() {
    let (temp, data) = sample_workspace();
    let store = temp.path().join("prefs.json");

    favorites(temp.path(), &data, &store, &["toggle", "5"])
        .success()
        .stdout(predicate::str::contains("Added Pizza Nova to favorites"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(saved["favorites"], "[5]");

    favorites(temp.path(), &data, &store, &["toggle", "5"])
        .success()
        .stdout(predicate::str::contains("Removed Pizza Nova from favorites"));
    favorites(temp.path(), &data, &store, &["list"])
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_toggle_unknown_id_fails() {
    let (temp, data) = sample_workspace();
    let store = temp.path().join("prefs.json");

    favorites(temp.path(), &data, &store, &["toggle", "99"])
        .failure()
        .stderr(predicate::str::contains("Business id 99 is out of range"));
    assert!(!store.exists());
}

#[test]
fn test_list_and_clear() {
    let (temp, data) = sample_workspace();
    let store = temp.path().join("prefs.json");

    favorites(temp.path(), &data, &store, &["toggle", "1"]).success();
    favorites(temp.path(), &data, &store, &["toggle", "3"]).success();

    favorites(temp.path(), &data, &store, &["list"])
        .success()
        .stdout(predicate::str::contains("[1] Kipling Dental"))
        .stdout(predicate::str::contains("[3] Mega Mart"));

    favorites(temp.path(), &data, &store, &["clear"])
        .success()
        .stdout(predicate::str::contains("Cleared 2 favorites"));
    favorites(temp.path(), &data, &store, &["list"])
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_theme_round_trip() {
    let (temp, _) = sample_workspace();
    let store = temp.path().join("prefs.json");
    let theme = |args: &[&str]| {
        bizdir(temp.path()).arg("theme").args(args).arg("--store").arg(&store).assert()
    };

    theme(&[]).success().stdout("system\n");
    theme(&["dark"]).success().stdout(predicate::str::contains("Theme set to dark"));
    theme(&[]).success().stdout("dark\n");

    theme(&["system"]).success();
    theme(&[]).success().stdout("system\n");
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert!(saved.get("theme").is_none());
}

#[test]
fn test_theme_rejects_unknown_value() {
    let (temp, _) = sample_workspace();

    bizdir(temp.path())
        .args(["theme", "neon"])
        .arg("--store")
        .arg(temp.path().join("prefs.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'neon'"));
}

#[test]
fn test_store_from_config() {
    let (temp, data) = sample_workspace();
    fs::write(temp.path().join("bizdir.toml"), "[paths]\nstore = \"state/prefs.json\"\n").unwrap();

    bizdir(temp.path())
        .args(["favorites", "toggle", "2", "--data"])
        .arg(&data)
        .assert()
        .success();

    assert!(temp.path().join("state/prefs.json").is_file());
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_store_in_data_dir() {
    let (temp, data) = sample_workspace();
    let data_home = temp.path().join("xdg");

    bizdir(temp.path())
        .env("XDG_DATA_HOME", &data_home)
        .args(["favorites", "toggle", "0", "--data"])
        .arg(&data)
        .assert()
        .success();

    let saved = fs::read_to_string(data_home.join("bizdir/storage.json")).unwrap();
    assert!(saved.contains("[0]"));
}
