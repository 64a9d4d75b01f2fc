mod common;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sheetpick_core::{
    extract_term_sheet, ExtractionError, FieldValue, SheetpickConfig, SheetpickError, TermVariant,
};

use common::term_sheet_xlsx;

fn extract(bytes: Vec<u8>, variant: TermVariant) -> sheetpick_core::Result<sheetpick_core::ExtractedRecord> {
    extract_term_sheet(bytes, None, "7 Elm Road", variant, &SheetpickConfig::default())
}

#[test]
fn straight_term_sheet_from_xlsx() {
    let record = extract(term_sheet_xlsx("500x12"), TermVariant::Straight).unwrap();

    assert_eq!(
        record.to_tab_line(6),
        "Jane Doe\t004512\t7 Elm Road\t10000\t2000\t01/05/2024\t8000\t36\t500x12\t02/15/2024\t15\t01/15/2027"
    );
}

#[test]
fn balloon_term_sheet_from_xlsx() {
    let record = extract(term_sheet_xlsx("500x12;600x12;700x12"), TermVariant::Balloon).unwrap();

    let expected = [
        ("REM BAL", "8000"),
        ("TERM", "36"),
        ("MA 1", "500"),
        ("START", "02/15/2024"),
        ("DAY", "15"),
        ("MONTH", "12"),
        ("END", "01/15/2025"),
        ("MA 2", "600"),
        ("START 2", "02/15/2025"),
        ("END 2", "01/15/2026"),
        ("MA 3", "700"),
        ("START 3", "02/15/2026"),
        ("DAY 3", "15"),
        ("END 3", "01/15/2027"),
    ];
    for (field, value) in expected {
        assert_eq!(
            record.get(field).map(ToString::to_string).as_deref(),
            Some(value),
            "{}",
            field
        );
    }
    assert_eq!(record.get("MONTH 3"), Some(&FieldValue::Number(Decimal::from(12))));
}

#[test]
fn balloon_day_is_padded_on_clipboard_line() {
    let record = extract(term_sheet_xlsx("500x12"), TermVariant::Balloon).unwrap();
    let line = record.to_tab_line(6);
    let values: Vec<&str> = line.split('\t').collect();

    assert_eq!(values.len(), 23);
    assert_eq!(values[10], "000015");
    assert_eq!(values[13], "");
}

#[test]
fn straight_rejects_sheet_without_template() {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    workbook
        .add_worksheet()
        .write_string(0, 1, "Jane Doe")
        .unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let err = extract(bytes.clone(), TermVariant::Straight).unwrap_err();
    assert!(matches!(
        err,
        SheetpickError::Extraction(ExtractionError::OutOfRange { .. })
    ));

    // The balloon variant still returns every field
    let record = extract(bytes, TermVariant::Balloon).unwrap();
    assert_eq!(record.len(), 23);
    assert_eq!(record.get("NAME"), Some(&FieldValue::text("Jane Doe")));
}
