use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

pub const BUILDINGS: &str = "shortName\tlongName\tx\ty\n\
    BAG\tBagley Hall (East Entrance)\t1914.5103\t1708.8816\n\
    CSE\tPaul G. Allen Center for Computer Science & Engineering\t2259.7112\t1715.5273\n\
    MUS\tMusic Building\t1500.0\t900.0\n";

pub const PATHS: &str = "x1\ty1\tx2\ty2\tdistance\n\
    1914.5103\t1708.8816\t2000.0\t1710.0\t85.5\n\
    2000.0\t1710.0\t2259.7112\t1715.5273\t259.8\n\
    2259.7112\t1715.5273\t2000.0\t1710.0\t259.8\n\
    2000.0\t1710.0\t1914.5103\t1708.8816\t85.5\n";

pub const MARVEL: &str = "hero\tbook\n\
    SPIDER-MAN\tAMAZING 1\n\
    MARY JANE\tAMAZING 1\n\
    MARY JANE\tFANTASTIC 4\n\
    THING\tFANTASTIC 4\n\
    LONER\tSOLO 1\n";

/// Get a Command for pathways, isolated from any user-wide config
pub fn pathways() -> Command {
    let mut cmd = cargo_bin_cmd!("pathways");
    cmd.env_remove("PATHWAYS_CONFIG")
        .env_remove("PATHWAYS_LOG")
        .env_remove("RUST_LOG")
        .env("PATHWAYS_CONFIG_DIR", "/nonexistent/pathways-test-config");
    cmd
}

/// Temporary directory holding every dataset under its default file name
pub fn setup_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("campus_buildings.tsv"), BUILDINGS).unwrap();
    fs::write(dir.path().join("campus_paths.tsv"), PATHS).unwrap();
    fs::write(dir.path().join("marvel.tsv"), MARVEL).unwrap();
    dir
}

/// Parse stdout of a successful `--format json` run
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
