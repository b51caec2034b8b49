//! Integration tests for the `unifi-rest` binary.
//!
//! Argument parsing, help output, completions and configuration errors,
//! all without a live controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command with env isolation so tests never read the user's
/// real configuration.
fn unifi_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifi-rest");
    cmd.env("HOME", "/tmp/unifi-rest-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unifi-rest-cli-test-nonexistent")
        .env_remove("UNIFI_REST_CONFIG")
        .env_remove("UNIFI_URL")
        .env_remove("UNIFI_USER")
        .env_remove("UNIFI_PASS")
        .env_remove("UNIFI_NEW")
        .env_remove("UNIFI_SITES")
        .env_remove("RUST_LOG");
    cmd
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unifi_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in output:\n{stderr}");
}

#[test]
fn test_help_lists_commands() {
    unifi_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("UniFi")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("clients"))
            .and(predicate::str::contains("anomalies"))
            .and(predicate::str::contains("--insecure")),
    );
}

#[test]
fn test_version() {
    unifi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("unifi-rest "));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    unifi_cmd().arg("reboot").assert().code(2);
}

#[test]
fn test_events_hours_must_be_numeric() {
    unifi_cmd()
        .args(["events", "--hours", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--hours"));
}

// ── Completions ─────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    unifi_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unifi-rest"));
}

#[test]
fn test_completions_zsh() {
    unifi_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef unifi-rest"));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_missing_password_is_auth_error() {
    unifi_cmd()
        .args(["--url", "https://127.0.0.1:1", "--new", "status"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No password configured for user 'unifi'"));
}

#[test]
fn test_config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unifi.toml");
    std::fs::write(&path, "url = \"not a url\"\npass = \"pw\"\nnew = true\n").unwrap();

    unifi_cmd()
        .arg("--config")
        .arg(&path)
        .arg("sites")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid url"));
}

#[test]
fn test_unreachable_controller_is_connection_error() {
    unifi_cmd()
        .args([
            "--url",
            "http://127.0.0.1:1",
            "--pass",
            "pw",
            "--new",
            "status",
        ])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not connect"));
}
