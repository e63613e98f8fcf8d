use crate::support::{json_stdout, pathways, setup_data_dir};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_connect_human() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["connect", "SPIDER-MAN", "THING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path from SPIDER-MAN to THING:"))
        .stdout(predicate::str::contains(
            "SPIDER-MAN to MARY JANE via AMAZING 1",
        ))
        .stdout(predicate::str::contains("MARY JANE to THING via FANTASTIC 4"));
}

#[test]
fn test_connect_json() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "connect", "THING", "SPIDER-MAN"]),
    );
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 2);
    assert_eq!(
        json["path"][0],
        serde_json::json!({"from": "THING", "to": "MARY JANE", "label": "FANTASTIC 4"})
    );
}

#[test]
fn test_connect_unconnected() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["connect", "LONER", "THING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path found"));

    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "connect", "LONER", "THING"]),
    );
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
}

#[test]
fn test_connect_self_is_empty_path() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "connect", "LONER", "LONER"]),
    );
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 0);
}

#[test]
fn test_connect_unknown_character() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["connect", "HULK", "ZOD"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown characters: HULK, ZOD"));
}

#[test]
fn test_connect_data_flag() {
    let dir = setup_data_dir();
    fs::write(dir.path().join("tiny.tsv"), "hero\tbook\nA\tX\nB\tX\n").unwrap();

    pathways()
        .current_dir(dir.path())
        .args(["connect", "A", "B", "--data", "tiny.tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A to B via X"));
}
