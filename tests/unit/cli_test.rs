//! Integration tests for the stringcalc CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::TempConfig;

/// Run the binary with an empty config dir so user config can't leak in
fn stringcalc(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("stringcalc"));
    cmd.env("HOME", home.path()).env("XDG_CONFIG_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    stringcalc(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stringcalc"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    stringcalc(&home).assert().success().stdout(predicate::str::contains("stringcalc v"));
}

#[test]
fn test_add_argument() {
    let home = TempDir::new().unwrap();
    stringcalc(&home).args(["add", "1,2,3,4"]).assert().success().stdout("10\n");
}

#[test]
fn test_add_escaped_newline_directive() {
    let home = TempDir::new().unwrap();
    stringcalc(&home).args(["add", "//;\\n1;2"]).assert().success().stdout("3\n");
}

#[test]
fn test_add_raw_keeps_backslash() {
    let home = TempDir::new().unwrap();
    stringcalc(&home)
        .args(["add", "--raw", "1\\n2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn test_add_from_stdin() {
    let home = TempDir::new().unwrap();
    stringcalc(&home).arg("add").write_stdin("1\n2,3\n").assert().success().stdout("6\n");
}

#[test]
fn test_add_negative_numbers_fails() {
    let home = TempDir::new().unwrap();
    stringcalc(&home)
        .args(["add", "1,-2,3,-4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Negative numbers not allowed: -2, -4"));
}

#[test]
fn test_add_json_success() {
    let home = TempDir::new().unwrap();
    let output = stringcalc(&home).args(["--json", "add", "1,2"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sum"], 3);
}

#[test]
fn test_add_json_negative_error() {
    let home = TempDir::new().unwrap();
    let output = stringcalc(&home).args(["--json", "add", "-1,-2"]).output().unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"]["kind"], "negative_numbers");
    assert_eq!(json["error"]["negatives"], serde_json::json!([-1, -2]));
}

#[test]
fn test_add_uses_config_delimiter() {
    let home = TempDir::new().unwrap();
    let config = TempConfig::new("[calculator]\ndefault_delimiter = \";\"\n");
    stringcalc(&home)
        .arg("--config")
        .arg(config.path())
        .args(["add", "1;2;3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_config_json_output_setting() {
    let home = TempDir::new().unwrap();
    let config = TempConfig::new("[output]\njson = true\n");
    stringcalc(&home)
        .arg("--config")
        .arg(config.path())
        .args(["add", "4,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sum\": 9"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    let config = TempConfig::missing();
    stringcalc(&home)
        .arg("--config")
        .arg(config.path())
        .args(["add", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
