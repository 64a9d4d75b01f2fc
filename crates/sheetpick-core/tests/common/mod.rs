//! Workbook fixtures built in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use chrono::{NaiveDate, NaiveDateTime};
use ms_offcrypto_writer::Ecma376AgileWriter;
use rand::{rngs::StdRng, SeedableRng as _};
use rust_xlsxwriter::{Format, Workbook};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A filled-in term sheet: labels in column A, values in column B.
pub fn term_sheet_xlsx(descriptor: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date = Format::new().set_num_format("mm/dd/yyyy");
    let sheet = workbook.add_worksheet();

    let labels = [
        (0, "Name"),
        (1, "Account"),
        (10, "Down payment"),
        (11, "DP date"),
        (12, "Term"),
        (18, "Remaining"),
        (19, "Installments"),
        (20, "Start"),
        (21, "End"),
        (23, "Total/Face"),
    ];
    for (row, label) in labels {
        sheet.write_string(row, 0, label).unwrap();
    }

    sheet.write_string(0, 1, "Jane Doe").unwrap();
    sheet.write_string(1, 1, "4512").unwrap();
    sheet.write_number(10, 1, 2000.0).unwrap();
    sheet
        .write_datetime_with_format(11, 1, &ymd(2024, 1, 5), &date)
        .unwrap();
    sheet.write_number(12, 1, 36.0).unwrap();
    sheet.write_number(18, 1, 8000.0).unwrap();
    sheet.write_string(19, 1, descriptor).unwrap();
    sheet
        .write_datetime_with_format(20, 1, &ymd(2024, 2, 15), &date)
        .unwrap();
    sheet
        .write_datetime_with_format(21, 1, &ymd(2027, 1, 15), &date)
        .unwrap();
    sheet.write_number(23, 1, 10000.0).unwrap();

    workbook.save_to_buffer().unwrap()
}

/// A daily report with every column the cleaner looks at.
pub fn report_xlsx() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = ["ACCOUNT", "PLACEMENT", "ACTION", "REACTION", "AMT", "WHEN"];
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }

    let rows: [(&str, &str, &str, f64, f64, &str); 6] = [
        ("A-1", "MADPL1", "PTP", 0.0, 500.0, "FRIDAY"),
        ("A-2", "N/A", "PTP", 1.0, 100.0, "MONDAY"),
        ("A-3", "MADPL 150DPD", "EXCLUDE IN REPORT", 2.0, 300.0, "MONDAY"),
        ("A-4", "MADPL 150DPD", "CALLBACK", 3.0, 900.0, "TUESDAY"),
        ("A-5", "MADPL 150DPD", "PTP", 0.0, 250.0, "WEDNESDAY"),
        ("A-6", "MADPL2", "NO ANSWER", 4.0, 50.0, "THURSDAY"),
    ];
    for (index, (account, placement, action, reaction, amount, when)) in rows.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, *account).unwrap();
        sheet.write_string(row, 1, *placement).unwrap();
        sheet.write_string(row, 2, *action).unwrap();
        sheet.write_number(row, 3, *reaction).unwrap();
        sheet.write_number(row, 4, *amount).unwrap();
        sheet.write_string(row, 5, *when).unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

/// Wrap a plain OOXML package in an ECMA-376 Agile encrypted container.
pub fn encrypt(package: &[u8], password: &str) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    let mut rng = StdRng::from_seed([0u8; 32]);
    let mut agile =
        Ecma376AgileWriter::create(&mut rng, password, &mut cursor).expect("create agile writer");
    agile.write_all(package).expect("write package");
    agile.finalize().expect("finalize agile writer");
    cursor.into_inner()
}
