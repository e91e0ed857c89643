//! End-to-end CLI tests for the ledgerlift binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledgerlift() -> Command {
    Command::cargo_bin("ledgerlift").unwrap()
}

#[test]
fn test_template_then_import_statements() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("statements.xlsx");

    ledgerlift()
        .args(["template", "statements", "-o"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template written"));

    assert!(template.exists());

    ledgerlift()
        .arg("import")
        .arg(&template)
        .arg("--statements")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL REVENUE"))
        .stdout(predicate::str::contains("\"assumptions\""));
}

#[test]
fn test_template_then_import_business_to_file() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("business.xlsx");
    let output = dir.path().join("body.json");

    ledgerlift()
        .args(["template", "business", "--company-type", "service", "-o"])
        .arg(&template)
        .assert()
        .success();

    ledgerlift()
        .arg("import")
        .arg(&template)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Import complete"));

    let body: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let expenses = &body["businessData"]["expenses"];
    assert_eq!(expenses[0]["year"], 2023);
    assert_eq!(expenses[0]["items"].as_array().unwrap().len(), 8);
}

#[test]
fn test_inspect_lists_sheets() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("statements.xlsx");

    ledgerlift()
        .args(["template", "statements", "-o"])
        .arg(&template)
        .assert()
        .success();

    ledgerlift()
        .arg("inspect")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Income Statement"))
        .stdout(predicate::str::contains("Balance Sheet"))
        .stdout(predicate::str::contains("Cash Flow Statement"));
}

#[test]
fn test_import_rejects_wrong_file_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

    ledgerlift()
        .arg("import")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidFileType"));
}

#[test]
fn test_import_rejects_garbage_xlsx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.xlsx");
    std::fs::write(&path, b"definitely not a workbook").unwrap();

    ledgerlift()
        .arg("import")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ParseFailure"));
}
