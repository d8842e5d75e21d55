use bizdir_cli::test_utils::sample_workspace;
use predicates::prelude::*;
use serde_json::Value;

use crate::{bizdir, stdout_json};

#[test]
fn test_suggest_term_json() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["suggest", "pat", "--format", "json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["term"], "pat");
    let ids: Vec<u64> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 6]);
    assert_eq!(json["suggestions"][0]["highlighted_name"], "<strong>Pat</strong>ty King");
}

#[test]
fn test_suggest_matches_category() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["suggest", "medical", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggestions for 'medical':"))
        .stdout(predicate::str::contains("[1] Kipling Dental (HEALTH & MEDICAL)"));
}

#[test]
fn test_suggest_short_term() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["suggest", "p", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type at least 2 characters for suggestions"));
}

#[test]
fn test_suggest_no_match() {
    let (temp, data) = sample_workspace();

    bizdir(temp.path())
        .args(["suggest", "sushi", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for 'sushi'"));
}

#[test]
fn test_suggest_debounces_stdin() {
    let (temp, data) = sample_workspace();

    let output = bizdir(temp.path())
        .args(["suggest", "--format", "json", "--data"])
        .arg(&data)
        .write_stdin("p\npi\npiz\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["term"], "piz");
    assert_eq!(last["suggestions"][0]["name"], "Pizza Nova");
    assert_eq!(last["suggestions"].as_array().unwrap().len(), 1);
}
