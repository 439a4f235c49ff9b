//! Integration tests for the CLI surface: help, version, validate, config errors.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

pub fn shipa_action() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shipa-action"));
    cmd.env("NO_COLOR", "1")
        .env_remove("SHIPA_HOST")
        .env_remove("SHIPA_TOKEN")
        .env_remove("SHIPA_DEBUG")
        .env_remove("SHIPA_TIMEOUT_SECS")
        .env_remove("SHIPA_MANIFEST")
        .env_remove("RUST_LOG");
    cmd
}

fn write_manifest(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("shipa.yaml");
    std::fs::write(&path, content).expect("write manifest");
    path.display().to_string()
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_requires_subcommand() {
    shipa_action()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires a subcommand"));
}

#[test]
fn test_numeric_env_flags_are_accepted() {
    shipa_action()
        .env("SHIPA_DEBUG", "1")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shipa-action 0.1.0"));
}

#[test]
fn test_falsey_no_color_is_accepted() {
    shipa_action()
        .env("NO_COLOR", "0")
        .env("SHIPA_DEBUG", "false")
        .arg("version")
        .assert()
        .success();
}

#[test]
fn test_cli_help_lists_commands() {
    shipa_action()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_version_command_shows_version() {
    shipa_action()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shipa-action 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    shipa_action()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version": "0.1.0""#));
}

// --- validate ---

#[test]
fn test_validate_lists_sections() {
    let dir = TempDir::new().expect("tempdir");
    let manifest = write_manifest(
        &dir,
        "app:\n  name: billing\n  framework: dev\njob:\n  name: nightly\n",
    );
    shipa_action()
        .args(["validate", &manifest])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest is valid"))
        .stdout(predicate::str::contains("app"))
        .stdout(predicate::str::contains("job"));
}

#[test]
fn test_validate_json_reports_sections() {
    let dir = TempDir::new().expect("tempdir");
    let manifest = write_manifest(&dir, "framework:\n  name: dev\n");
    let output = shipa_action()
        .args(["validate", "--json", &manifest])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["valid"], true);
    assert_eq!(value["sections"], serde_json::json!(["framework"]));
}

#[test]
fn test_validate_missing_field_fails() {
    let dir = TempDir::new().expect("tempdir");
    let manifest = write_manifest(&dir, "app-deploy:\n  app: billing\n");
    shipa_action()
        .args(["validate", &manifest])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("app-deploy: 'image' is required"));
}

#[test]
fn test_validate_without_manifest_fails() {
    shipa_action()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no manifest given"));
}

// --- apply configuration errors ---

#[test]
fn test_apply_without_host_fails() {
    let dir = TempDir::new().expect("tempdir");
    let manifest = write_manifest(&dir, "framework:\n  name: dev\n");
    shipa_action()
        .env("SHIPA_TOKEN", "t")
        .args(["apply", &manifest])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("SHIPA_HOST env not set"));
}

#[test]
fn test_apply_without_token_fails_as_json() {
    let dir = TempDir::new().expect("tempdir");
    let manifest = write_manifest(&dir, "framework:\n  name: dev\n");
    let output = shipa_action()
        .env("SHIPA_HOST", "http://127.0.0.1:9")
        .args(["apply", "--json", &manifest])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "config");
    assert_eq!(value["message"], "SHIPA_TOKEN env not set");
}
