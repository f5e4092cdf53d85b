//! Integration tests for the bylines CLI
//!
//! These tests drive the binary against a records file in a temp
//! directory: add → update → show → list → remove.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a bylines command isolated in `dir`
///
/// HOME points into the temp dir so no real user config is read.
fn bylines(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("bylines"));
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn long_content() -> String {
    "All work and no play. ".repeat(15)
}

// =============================================================================
// AUTHOR WORKFLOW
// =============================================================================

#[test]
fn test_author_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    bylines(dir)
        .args(["author", "add", "Jane Doe", "--phone", "1234567890"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author created"))
        .stdout(predicate::str::contains("Jane Doe"));

    assert!(dir.join(".bylines/records.toml").exists());

    bylines(dir).args(["author", "add", "John Roe"]).assert().success();

    // Renaming onto an existing name fails and leaves the record alone
    bylines(dir)
        .args(["author", "update", "1", "--name", "John Roe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Author name must be unique"));

    bylines(dir)
        .args(["author", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("updated: -"));

    bylines(dir)
        .args(["author", "update", "1", "--clear-phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author updated"))
        .stdout(predicate::str::contains("phone:   -"));

    bylines(dir)
        .args(["author", "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author removed"));

    bylines(dir)
        .args(["author", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("John Roe").not());
}

#[test]
fn test_author_rejections() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    bylines(dir)
        .args(["author", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Author name cannot be empty"));

    bylines(dir)
        .args(["author", "add", "Jane Doe", "--phone", "555-123-4567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number must be exactly 10 digits"));

    bylines(dir)
        .args(["author", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No authors found."));
}

#[test]
fn test_author_json_output() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let output = bylines(dir)
        .args(["--json", "author", "add", "Jane Doe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "created");
    assert_eq!(json["author"]["id"], 1);
    assert!(json["author"]["updated_at"].is_null());

    let output = bylines(dir)
        .args(["--json", "author", "add", "Jane Doe"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["field"], "name");
}

#[test]
fn test_missing_author() {
    let temp = TempDir::new().unwrap();

    bylines(temp.path())
        .args(["author", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author not found: 42"));
}

// =============================================================================
// POST WORKFLOW
// =============================================================================

#[test]
fn test_post_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let content = long_content();

    bylines(dir)
        .args(["post", "add", "Top 10 Secrets", "--content", &content, "--category", "Fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post created"))
        .stdout(predicate::str::contains("category: Fiction"));

    bylines(dir)
        .args(["post", "update", "1", "--category", "Drama"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post category must be either Fiction or Non-Fiction"));

    bylines(dir)
        .args(["post", "update", "1", "--summary", "A teaser", "--clear-category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summary:  A teaser"))
        .stdout(predicate::str::contains("category: -"));

    bylines(dir)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 10 Secrets"));

    bylines(dir)
        .args(["post", "remove", "1"])
        .assert()
        .success();

    bylines(dir)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn test_post_rejections() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    bylines(dir)
        .args(["post", "add", "My Day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post title must contain one of the following"));

    bylines(dir)
        .args(["post", "add", "Top Tips", "--content", "too short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 250 characters"));

    let summary = "s".repeat(251);
    bylines(dir)
        .args(["post", "add", "Top Tips", "--summary", &summary])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum of 250 characters"));
}

#[test]
fn test_update_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    bylines(dir).args(["post", "add", "Guess What"]).assert().success();
    bylines(dir)
        .args(["post", "update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

// =============================================================================
// GLOBAL OPTIONS
// =============================================================================

#[test]
fn test_data_flag_selects_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    bylines(dir)
        .args(["--data", "custom/records.toml", "author", "add", "Jane Doe"])
        .assert()
        .success();

    assert!(dir.join("custom/records.toml").exists());
    assert!(!dir.join(".bylines/records.toml").exists());
}

#[test]
fn test_config_selects_memory_backend() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    std::fs::create_dir_all(dir.join(".bylines")).unwrap();
    std::fs::write(dir.join(".bylines/config.toml"), "[store]\nbackend = \"memory\"\n").unwrap();

    bylines(dir)
        .args(["author", "add", "Jane Doe"])
        .assert()
        .success()
        .stderr(predicate::str::contains("memory backend selected"));

    // Nothing persisted, so the same name is accepted again
    bylines(dir).args(["author", "add", "Jane Doe"]).assert().success();
    assert!(!dir.join(".bylines/records.toml").exists());
}

#[test]
fn test_rejection_is_logged_by_default() {
    let temp = TempDir::new().unwrap();

    bylines(temp.path())
        .args(["author", "add", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rejected author create"));
}

#[test]
fn test_quiet_with_rust_log() {
    let temp = TempDir::new().unwrap();

    bylines(temp.path())
        .env("RUST_LOG", "error")
        .args(["author", "add", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rejected author create").not());
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();

    bylines(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bylines v"));
}
