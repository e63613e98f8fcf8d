use crate::support::{json_stdout, pathways, setup_data_dir};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_buildings_human_sorted_by_short_name() {
    let dir = setup_data_dir();
    let output = pathways()
        .current_dir(dir.path())
        .arg("buildings")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let shorts: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split('\t').next())
        .collect();
    assert_eq!(shorts, vec!["BAG", "CSE", "MUS"]);
    assert!(stdout.contains("BAG\tBagley Hall (East Entrance)"));
}

#[test]
fn test_buildings_json_map() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "buildings"]),
    );
    assert_eq!(json["MUS"], "Music Building");
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn test_buildings_file_flags_override_defaults() {
    let dir = setup_data_dir();
    let other = dir.path().join("other");
    fs::create_dir(&other).unwrap();
    fs::write(
        other.join("b.tsv"),
        "shortName\tlongName\tx\ty\nHUB\tStudent Union\t1.0\t2.0\n",
    )
    .unwrap();
    fs::write(other.join("p.tsv"), "x1\ty1\tx2\ty2\tdistance\n").unwrap();

    pathways()
        .current_dir(dir.path())
        .args(["buildings", "--buildings", "other/b.tsv", "--paths", "other/p.tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HUB\tStudent Union"))
        .stdout(predicate::str::contains("BAG").not());
}

#[test]
fn test_missing_dataset_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    pathways()
        .current_dir(dir.path())
        .arg("buildings")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn test_malformed_dataset_reports_line() {
    let dir = setup_data_dir();
    fs::write(
        dir.path().join("campus_buildings.tsv"),
        "shortName\tlongName\tx\ty\nBAG\tBagley\tnot-a-number\t1.0\n",
    )
    .unwrap();

    let output = pathways()
        .current_dir(dir.path())
        .args(["--format", "json", "buildings"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_record");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap()
        .contains("line 2"));
}
