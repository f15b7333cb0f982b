use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".courier-admin").join("config.json")
}

const BINARY_NAME: &str = "courier-admin";

/// Nothing listens on the discard port, so any request would fail fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("dashboard"))
        .stdout(contains("users"))
        .stdout(contains("shops"));
}

#[test]
/// Logout command should delete an existing config file.
fn logout_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("logout")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Logging out"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
fn config_set_writes_url_and_token() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["config", "set", "--api-url", "http://localhost:3000", "--token", "abc"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["api_url"], "http://localhost:3000");
    assert_eq!(saved["auth_token"], "abc");

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["config", "show"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("http://localhost:3000"))
        .stdout(contains("Token:   set"));
}

#[test]
/// A short password is rejected before any request is made.
fn invalid_shop_is_rejected_without_network() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", UNREACHABLE_API, "shops", "create"])
        .args(["--name", "Fourno", "--email", "f@shops.gr"])
        .args(["--password", "12345", "--afm", "123456789"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Password must be at least 6 characters"));
}

#[test]
fn unreachable_server_fails_listing() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", UNREACHABLE_API, "users", "list"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("The back office is not answering"));
}
