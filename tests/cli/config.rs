use crate::support::{json_stdout, pathways, setup_data_dir};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_defaults_resolve_against_cwd() {
    let dir = setup_data_dir();
    let json = json_stdout(
        pathways()
            .current_dir(dir.path())
            .args(["--format", "json", "config"]),
    );
    let buildings = json["campus"]["buildings"].as_str().unwrap();
    assert!(buildings.ends_with("campus_buildings.tsv"));
    assert!(std::path::Path::new(buildings).is_absolute());
}

#[test]
fn test_local_config_file_is_used() {
    let dir = setup_data_dir();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("heroes.tsv"), "hero\tbook\nA\tX\nB\tX\n").unwrap();
    fs::write(
        dir.path().join("pathways.toml"),
        "[network]\ndata = \"data/heroes.tsv\"\n",
    )
    .unwrap();

    pathways()
        .current_dir(dir.path())
        .args(["connect", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A to B via X"));

    pathways()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("heroes.tsv"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = setup_data_dir();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg = cfg_dir.path().join("custom.toml");
    fs::write(
        &cfg,
        format!(
            "[campus]\nbuildings = \"{}\"\npaths = \"{}\"\n",
            dir.path().join("campus_buildings.tsv").display(),
            dir.path().join("campus_paths.tsv").display()
        ),
    )
    .unwrap();

    pathways()
        .args(["--config", cfg.to_str().unwrap(), "route", "BAG", "CSE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = setup_data_dir();
    fs::write(dir.path().join("pathways.toml"), "[campus\nbroken").unwrap();

    pathways()
        .current_dir(dir.path())
        .arg("buildings")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML"));
}
