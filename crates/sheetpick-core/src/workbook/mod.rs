//! Workbook reading and writing.

mod reader;
mod writer;

pub use reader::WorkbookReader;
pub use writer::{write_table, DATE_CELL_FORMAT};

use std::path::Path;

use crate::error::WorkbookError;

/// Result type for workbook operations.
pub type Result<T> = std::result::Result<T, WorkbookError>;

/// Extensions the report cleaner accepts.
pub const REPORT_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// Extensions the term-sheet extractors accept.
pub const TERM_SHEET_EXTENSIONS: &[&str] = &["xlsx"];

/// Check an uploaded file name against a list of allowed extensions.
pub fn check_extension(file_name: &str, allowed: &[&str]) -> Result<()> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(WorkbookError::UnsupportedExtension {
            extension,
            allowed: allowed.join(", "),
        })
    }
}

/// File name without directories and without a spreadsheet extension.
///
/// `reports/Daily 0412.xlsx` becomes `Daily 0412`; names with any other
/// extension are kept whole.
pub fn upload_stem(file_name: &str) -> String {
    let path = Path::new(file_name);
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let is_spreadsheet = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| REPORT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);

    if is_spreadsheet {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string()
    } else {
        name.to_string()
    }
}
