use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use chrono::NaiveDate;
use predicates::prelude::*;
use rust_xlsxwriter::{Format, Workbook};
use tempfile::TempDir;

fn sheetpick() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sheetpick"))
}

fn write_term_sheet(dir: &Path) -> PathBuf {
    let mut workbook = Workbook::new();
    let date = Format::new().set_num_format("mm/dd/yyyy");
    let sheet = workbook.add_worksheet();

    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2027, 2, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    sheet.write_string(0, 1, "John Roe").unwrap();
    sheet.write_string(1, 1, "77").unwrap();
    sheet.write_number(10, 1, 1500.0).unwrap();
    sheet.write_datetime_with_format(11, 1, &start, &date).unwrap();
    sheet.write_number(12, 1, 36.0).unwrap();
    sheet.write_number(18, 1, 4500.0).unwrap();
    sheet.write_string(19, 1, "125x12;125x12;125x12").unwrap();
    sheet.write_datetime_with_format(20, 1, &start, &date).unwrap();
    sheet.write_datetime_with_format(21, 1, &end, &date).unwrap();
    sheet.write_number(23, 1, 6000.0).unwrap();

    let path = dir.join("roe.xlsx");
    workbook.save(&path).unwrap();
    path
}

fn write_report(dir: &Path) -> PathBuf {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in ["PLACEMENT", "ACTION", "AMT"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    let rows = [
        ("MADPL1", "PTP", 10.0),
        ("N/A", "PTP", 20.0),
        ("MADPL 150DPD", "CALLBACK", 30.0),
    ];
    for (i, (placement, action, amount)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *placement).unwrap();
        sheet.write_string(row, 1, *action).unwrap();
        sheet.write_number(row, 2, *amount).unwrap();
    }

    let path = dir.join("Daily Report.xlsx");
    workbook.save(&path).unwrap();
    path
}

#[test]
fn straight_prints_tab_line() {
    let dir = TempDir::new().unwrap();
    let input = write_term_sheet(dir.path());

    sheetpick()
        .arg("straight")
        .arg(&input)
        .args(["--address", "1 Pine St"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "John Roe\t000077\t1 Pine St\t6000\t1500\t03/01/2024\t4500\t36\t125x12;125x12;125x12\t03/01/2024\t1\t02/01/2027",
        ));
}

#[test]
fn balloon_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_term_sheet(dir.path());

    let assert = sheetpick()
        .args(["balloon", "-f", "json"])
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["MA 3"], "125");
    assert_eq!(json["MONTH 2"], 12);
    assert_eq!(json["START 2"], "03/01/2025");
    assert_eq!(json["REM BAL"], 4500);
}

#[test]
fn extract_help_lists_copy() {
    sheetpick()
        .args(["balloon", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--copy"))
        .stdout(predicate::str::contains("clipboard"));
}

#[test]
fn extract_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_term_sheet(dir.path());
    let output = dir.path().join("record.csv");

    sheetpick()
        .args(["balloon", "-f", "csv", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("NAME,ACCOUNT NUMBER,ADDRESS,TOTAL/FACE"));
}

#[test]
fn extract_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.csv");
    fs::write(&input, "a,b").unwrap();

    sheetpick()
        .arg("straight")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type 'csv'"));
}

#[test]
fn missing_input_fails() {
    sheetpick()
        .args(["balloon", "does-not-exist.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn clean_writes_archive() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path());
    let out_dir = dir.path().join("out");

    sheetpick()
        .arg("clean")
        .arg(&input)
        .arg("-o")
        .arg(&out_dir)
        .args(["--preview", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Report_MADPL_file_2.xlsx"))
        .stdout(predicate::str::contains("PLACEMENT\tACTION\tAMT\nMADPL1\tPTP\t10"));

    assert!(out_dir.join("Daily Report_cleaned_files.zip").exists());
}

#[test]
fn config_roundtrip_with_explicit_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let config = config.to_str().unwrap();

    sheetpick()
        .args(["-c", config, "config", "init"])
        .assert()
        .success();

    sheetpick()
        .args(["-c", config, "config", "set", "extraction.pad_width", "8"])
        .assert()
        .success();

    sheetpick()
        .args(["-c", config, "config", "get", "extraction.pad_width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8"));

    sheetpick()
        .args(["-c", config, "config", "set", "extraction.missing", "1"])
        .assert()
        .failure();
}

#[test]
fn config_from_file_changes_padding() {
    let dir = TempDir::new().unwrap();
    let input = write_term_sheet(dir.path());
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"extraction": {"pad_width": 4}}"#).unwrap();

    sheetpick()
        .arg("-c")
        .arg(&config)
        .arg("straight")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("John Roe\t0077\t"));
}
