//! Table export using rust_xlsxwriter.

use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use tracing::debug;

use super::Result;
use crate::error::WorkbookError;
use crate::models::cell::{Cell, Table};

/// Excel number format applied to date cells.
pub const DATE_CELL_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write a table to xlsx bytes: one sheet, bold header row, no index column.
pub fn write_table(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let date_format = Format::new().set_num_format(DATE_CELL_FORMAT);

    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|e| WorkbookError::Write(e.to_string()))?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let row_num = index as u32 + 1;

        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            let written = match cell {
                Cell::Empty => continue,
                Cell::Text(s) | Cell::Error(s) => worksheet.write_string(row_num, col, s),
                Cell::Number(n) => worksheet.write_number(row_num, col, *n),
                Cell::Bool(b) => worksheet.write_boolean(row_num, col, *b),
                Cell::Date(dt) => worksheet.write_datetime_with_format(row_num, col, dt, &date_format),
            };
            written.map_err(|e| WorkbookError::Write(e.to_string()))?;
        }
    }

    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| WorkbookError::Write(e.to_string()))?;

    debug!(
        "Wrote {} rows x {} columns ({} bytes)",
        table.len(),
        table.columns().len(),
        bytes.len()
    );

    Ok(bytes)
}
