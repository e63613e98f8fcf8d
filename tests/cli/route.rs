use crate::support::{json_stdout, pathways, setup_data_dir};
use predicates::prelude::*;

#[test]
fn test_route_human() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["route", "BAG", "CSE"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path from Bagley Hall (East Entrance) to Paul G. Allen Center",
        ))
        .stdout(predicate::str::contains("(1915, 1709) -> (2000, 1710) (86 feet)"))
        .stdout(predicate::str::contains("Total distance: 345 feet"));
}

#[test]
fn test_route_json() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "route", "CSE", "BAG"]),
    );
    assert_eq!(json["found"], true);
    assert!((json["cost"].as_f64().unwrap() - 345.3).abs() < 1e-9);

    let segments = json["path"]["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["start"]["x"], 2259.7112);
    assert_eq!(segments[1]["end"]["y"], 1708.8816);
}

#[test]
fn test_route_to_same_building_is_empty() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "route", "BAG", "BAG"]),
    );
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 0.0);
    assert!(json["path"]["segments"].as_array().unwrap().is_empty());
}

#[test]
fn test_route_not_found_is_not_an_error() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["route", "BAG", "MUS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from BAG to MUS"));

    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "route", "BAG", "MUS"]),
    );
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert!(json["cost"].is_null());
}

#[test]
fn test_route_unknown_building() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["route", "BAG", "NOPE"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown building: NOPE"));
}

#[test]
fn test_route_unknown_buildings_json_lists_all() {
    let dir = setup_data_dir();
    let output = pathways()
        .current_dir(dir.path())
        .args(["--format", "json", "route", "XYZ", "QQQ"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unknown_building");
    assert_eq!(err["error"]["names"], serde_json::json!(["XYZ", "QQQ"]));
}

#[test]
fn test_route_quiet_suppresses_error_text() {
    let dir = setup_data_dir();
    pathways()
        .current_dir(dir.path())
        .args(["--quiet", "route", "BAG", "NOPE"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}
