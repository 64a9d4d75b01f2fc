mod common;

use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use sheetpick_core::models::Cell;
use sheetpick_core::{clean_report, SheetpickConfig, Table, WorkbookReader};
use zip::ZipArchive;

use common::report_xlsx;

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Table {
    let mut bytes = Vec::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_end(&mut bytes)
        .unwrap();
    WorkbookReader::load(&bytes).unwrap().table().unwrap()
}

fn accounts(table: &Table) -> Vec<String> {
    (0..table.len())
        .map(|row| table.value(row, "ACCOUNT").unwrap().to_string())
        .collect()
}

#[test]
fn cleaned_archive_contents() {
    let output = clean_report(
        report_xlsx(),
        None,
        "Daily 0412.xlsx",
        &SheetpickConfig::default(),
    )
    .unwrap();

    assert_eq!(output.archive.file_name, "Daily 0412_cleaned_files.zip");
    assert_eq!(
        output.archive.entries,
        vec![
            "Daily 0412_cleaned.xlsx",
            "Daily 0412_MADPL_file_1.xlsx",
            "Daily 0412_MADPL_file_2.xlsx",
        ]
    );

    let mut archive = ZipArchive::new(Cursor::new(output.archive.bytes.clone())).unwrap();

    let cleaned = read_entry(&mut archive, "Daily 0412_cleaned.xlsx");
    assert_eq!(accounts(&cleaned), vec!["A-1", "A-4", "A-5", "A-6"]);
    assert_eq!(
        cleaned.columns(),
        &["ACCOUNT", "PLACEMENT", "ACTION", "REACTION", "AMT", "WHEN"]
    );

    // A-1 is PTP with a zero reaction
    assert_eq!(cleaned.value(0, "AMT"), Some(&Cell::Number(500.0)));
    assert_eq!(cleaned.value(0, "REACTION"), Some(&Cell::Empty));
    // A-4 is a callback: amount and timing cleared
    assert_eq!(cleaned.value(1, "AMT"), Some(&Cell::Empty));
    assert_eq!(cleaned.value(1, "WHEN"), Some(&Cell::Empty));
    assert_eq!(cleaned.value(1, "REACTION"), Some(&Cell::Number(3.0)));

    let dpd = read_entry(&mut archive, "Daily 0412_MADPL_file_1.xlsx");
    assert_eq!(accounts(&dpd), vec!["A-4", "A-5"]);

    let madpl1 = read_entry(&mut archive, "Daily 0412_MADPL_file_2.xlsx");
    assert_eq!(accounts(&madpl1), vec!["A-1"]);
}

#[test]
fn preview_is_first_rows_of_cleaned_table() {
    let output = clean_report(report_xlsx(), None, "report.xlsx", &SheetpickConfig::default())
        .unwrap();

    let preview = output.preview(2);
    assert_eq!(preview.len(), 2);
    assert_eq!(accounts(&preview), vec!["A-1", "A-4"]);
    assert!(preview.to_text().starts_with("ACCOUNT\tPLACEMENT"));
}

#[test]
fn report_without_placement_has_no_subsets() {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "ACTION").unwrap();
    sheet.write_string(1, 0, "PTP").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let output = clean_report(bytes, None, "plain.xlsx", &SheetpickConfig::default()).unwrap();
    assert!(output.report.subsets.is_empty());
    assert_eq!(output.archive.entries, vec!["plain_cleaned.xlsx"]);
}
