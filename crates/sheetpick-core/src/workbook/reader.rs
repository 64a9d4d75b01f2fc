//! Workbook loading using calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, trace};

use super::Result;
use crate::error::WorkbookError;
use crate::models::cell::{Cell, Grid, Table};

/// First worksheet of an uploaded workbook.
///
/// Only the first sheet is read; both views are built from the same range.
pub struct WorkbookReader {
    sheet_name: String,
    range: Range<Data>,
}

impl WorkbookReader {
    /// Open workbook bytes (xlsx, xlsm, xlsb, xls or ods; detected from content).
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| WorkbookError::Open(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(WorkbookError::NoWorksheet)?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(WorkbookError::NoWorksheet)?
            .map_err(|e| WorkbookError::Sheet {
                sheet: sheet_name.clone(),
                reason: e.to_string(),
            })?;

        debug!(
            "Loaded sheet '{}' with used range {:?}..{:?}",
            sheet_name,
            range.start(),
            range.end()
        );

        Ok(Self { sheet_name, range })
    }

    /// Name of the sheet that was read.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Positional view with absolute coordinates.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new();

        let (Some((start_row, start_col)), Some((end_row, end_col))) =
            (self.range.start(), self.range.end())
        else {
            return grid;
        };

        // Claim the full bounding box first so blanks inside it read as empty.
        grid.set(end_row as usize, end_col as usize, Cell::Empty);

        for (row, col, data) in self.range.used_cells() {
            let abs_row = start_row as usize + row;
            let abs_col = start_col as usize + col;
            trace!("cell ({}, {}) = {:?}", abs_row, abs_col, data);
            grid.set(abs_row, abs_col, to_cell(data));
        }

        grid
    }

    /// Header-based view: the first used row names the columns.
    ///
    /// Columns start at absolute column A, so blank leading columns appear
    /// as `Unnamed: {index}`. Returns `None` for a sheet with no cells at all.
    pub fn table(&self) -> Option<Table> {
        let (_, start_col) = self.range.start()?;
        let widen = |row: &[Data]| -> Vec<Cell> {
            std::iter::repeat(Cell::Empty)
                .take(start_col as usize)
                .chain(row.iter().map(to_cell))
                .collect()
        };

        let mut rows = self.range.rows();
        let header = widen(rows.next()?);
        let body: Vec<Vec<Cell>> = rows.map(widen).collect();

        debug!("Read {} columns and {} data rows", header.len(), body.len());

        Some(Table::from_header_row(&header, body))
    }
}

/// Convert a calamine value into a [`Cell`].
fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(format!("#{:?}", e)),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>().ok().or_else(|| {
        s.parse::<NaiveDate>()
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}
