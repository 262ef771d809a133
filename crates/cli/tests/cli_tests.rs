use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("surveymap").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Survey comment map dashboard"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("surveymap").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_preprocess_help() {
    let mut cmd = Command::cargo_bin("surveymap").unwrap();
    cmd.arg("preprocess")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workbook"));
}

#[test]
fn test_preprocess_aborts_on_missing_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("surveymap").unwrap();
    cmd.arg("preprocess")
        .arg("--workbook")
        .arg(dir.path().join("missing.xlsx"))
        .arg("--boundary")
        .arg(dir.path().join("missing.shp"))
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_serve_aborts_on_missing_datasets() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("surveymap").unwrap();
    cmd.arg("serve")
        .arg("--boundaries")
        .arg(dir.path().join("sa.geojson"))
        .arg("--comments")
        .arg(dir.path().join("comments.geojson"))
        .assert()
        .failure();
}
