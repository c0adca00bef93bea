//! Integration tests for the Platter CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `platter` run from an empty directory so no stray .env is picked up
fn platter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("platter").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("MONGODB_URI")
        .env_remove("MONGODB_DATABASE")
        .env_remove("MONGODB_COLLECTION");
    cmd
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("platter"));
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("restaurants"));
}

#[test]
fn test_catalog_text() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurants (12)"))
        .stdout(predicate::str::contains("Sushi World"))
        .stdout(predicate::str::contains("35-45 min"));
}

#[test]
fn test_catalog_json() {
    let dir = TempDir::new().unwrap();
    let output = platter(&dir)
        .args(["catalog", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let restaurants = body["restaurants"].as_array().unwrap();
    assert_eq!(restaurants.len(), 12);
    assert_eq!(restaurants[0]["name"], "Pizza Palace");
    assert!(restaurants.iter().all(|r| r.get("_id").is_none()));
}

#[test]
fn test_catalog_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .args(["catalog", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_seed_requires_store_uri() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mongodb-uri"));
}

#[test]
fn test_restaurants_rejects_malformed_uri() {
    let dir = TempDir::new().unwrap();
    platter(&dir)
        .args(["restaurants", "--mongodb-uri", "not-a-uri"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create store client"));
}

#[test]
fn test_store_uri_read_from_dotenv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "MONGODB_URI=still-not-a-uri\n").unwrap();

    // Gets past argument parsing, then fails on the malformed URI.
    platter(&dir)
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create store client"));
}
