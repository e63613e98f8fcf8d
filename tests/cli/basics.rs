use crate::support::{pathways, setup_data_dir};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    pathways()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathways"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("connect"))
        .stdout(predicate::str::contains("buildings"));
}

#[test]
fn test_version_flag() {
    pathways()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathways"));
}

#[test]
fn test_no_command_prints_hint() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pathways --help"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    pathways().arg("teleport").assert().code(2);
}

#[test]
fn test_json_usage_error_envelope() {
    let output = pathways()
        .args(["--format", "json", "route", "BAG"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 2);
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_bad_format_value_rejected() {
    pathways()
        .args(["--format", "xml", "buildings"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}
