//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{header_row, sample_export, workbook_bytes};
use predicates::prelude::*;
use sample_grouper::excel::SpreadsheetParser;
use sample_grouper::types::HeaderLabels;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, bytes: Vec<u8>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample-grouper"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample-grouper"));
}

#[test]
fn test_export_help() {
    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Samples_Export.xlsx"));
}

// ═══════════════════════════════════════════════════════════════════════════
// GROUP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_group_prints_tables() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("group")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample B"))
        .stdout(predicate::str::contains("(Count: 2)"))
        .stdout(predicate::str::contains("De Hoeve (Ede)"))
        .stdout(predicate::str::contains("01-01-2021"))
        .stdout(predicate::str::contains("Total samples:"));
}

#[test]
fn test_group_with_sort() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.args(["group", "--sort", "order", "--desc"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD2"));
}

#[test]
fn test_group_invalid_sort_column() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.args(["group", "--sort", "price"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown column"));
}

#[test]
fn test_group_reports_missing_headers() {
    let dir = TempDir::new().unwrap();
    let mut header = header_row(&HeaderLabels::english());
    header.truncate(6);
    let input = write_fixture(&dir, "partial.xlsx", workbook_bytes(&[header]));

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("group")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing columns: Excl. VAT"));
}

#[test]
fn test_group_missing_file() {
    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.args(["group", "does-not-exist.xlsx"]).assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// ORDERS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_orders_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("orders")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD1, ORD2, ORD4"));
}

#[test]
fn test_orders_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());
    let output = dir.path().join("orders.txt");

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("orders")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 order numbers"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "ORD1, ORD2, ORD4");
}

#[test]
fn test_orders_to_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());
    let output = dir.path().join("missing-dir").join("orders.txt");

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("orders")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to copy order numbers"));
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_to_path() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());
    let output = dir.path().join("grouped.xlsx");

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("export")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Export Complete"));

    let sheets = SpreadsheetParser::parse_workbook(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(sheets.len(), 3);
}

#[test]
fn test_export_default_filename() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "tasks.xlsx", sample_export());

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.current_dir(dir.path())
        .arg("export")
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("Samples_Export.xlsx").exists());
}

#[test]
fn test_export_without_data_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "empty.xlsx", workbook_bytes(&[]));
    let output = dir.path().join("grouped.xlsx");

    let mut cmd = Command::cargo_bin("sample-grouper").unwrap();
    cmd.arg("export")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data available for export"));

    assert!(!output.exists());
}
