//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Build command for the circuitfile-cli binary (finds it in target/debug when run via cargo test).
fn circuitfile_cli() -> Command {
    cargo_bin_cmd!("circuitfile-cli")
}

const VALID_DOC: &str = r#"{
    "version": 1,
    "circuits": {
        "main": {
            "components": [
                { "name": "wiring.Pin", "x": 3, "y": 4,
                  "properties": { "bits": 8, "label": "A" } }
            ],
            "wires": [
                { "x": 1, "y": 2, "length": 3, "isHorizontal": true }
            ]
        }
    }
}"#;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = circuitfile_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Circuit design file"));
}

#[test]
fn test_cli_version() {
    let mut cmd = circuitfile_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_check_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("check").arg(path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_cli_check_version_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("check").arg(path).arg("--file-version").arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("incompatible file version"));
}

#[test]
fn test_cli_check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("check").arg(path).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"ok\":true"));
}

#[test]
fn test_cli_check_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "broken.circ", "{ not json");

    let mut cmd = circuitfile_cli();
    cmd.arg("check").arg(path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed document"));
}

#[test]
fn test_cli_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("info").arg(path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("main: 1 components, 1 wires"));
}

#[test]
fn test_cli_normalize_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("normalize").arg(path).arg("--stdout");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"version\": 1"));
}

#[test]
fn test_cli_normalize_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "design.circ", VALID_DOC);

    let mut cmd = circuitfile_cli();
    cmd.arg("normalize").arg(&path);
    cmd.assert().success();

    // The rewritten file must still check out.
    let mut check = circuitfile_cli();
    check.arg("check").arg(&path);
    check.assert().success();
}
