//! Untyped spreadsheet cells and the two views the pipeline reads them through.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Format used when a date cell is rendered as plain text.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single spreadsheet cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Blank cell.
    #[default]
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value (integers are stored as floats, as in the file format).
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Date or date-time value.
    Date(NaiveDateTime),
    /// Spreadsheet error value such as `#N/A`.
    Error(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Borrow the text of a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check whether this is a text cell equal to `value`.
    pub fn is_text(&self, value: &str) -> bool {
        self.as_text() == Some(value)
    }

    /// Check whether this is a number cell equal to zero (`0` or `0.0`).
    pub fn is_zero(&self) -> bool {
        self.as_number() == Some(0.0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => {
                // Integers without decimals
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Cell::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Cell::Date(dt) => write!(f, "{}", dt.format(DATETIME_DISPLAY_FORMAT)),
            Cell::Error(e) => f.write_str(e),
        }
    }
}

/// Positional view of a worksheet: no header, zero-based absolute coordinates.
///
/// `cell(23, 1)` is always spreadsheet cell `B24`, wherever the used range
/// of the sheet starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, including leading blank ones.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get a cell, or `None` when the coordinate is outside the worksheet.
    ///
    /// Coordinates inside the sheet's bounding box but past the end of a
    /// short row read as [`Cell::Empty`].
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        const EMPTY: &Cell = &Cell::Empty;

        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.rows[row].get(col).unwrap_or(EMPTY))
    }

    /// Set a cell, growing the grid as needed.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, Cell::Empty);
        }
        cells[col] = cell;
    }
}

/// Header-based view of a worksheet: named columns over rows of equal width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table, padding or truncating every row to the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Build a table whose first row supplies the column names.
    ///
    /// Blank header cells are named `Unnamed: {index}`; repeated names get
    /// `.1`, `.2`, ... suffixes so every column stays addressable.
    pub fn from_header_row(header: &[Cell], rows: Vec<Vec<Cell>>) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(header.len());

        for (index, cell) in header.iter().enumerate() {
            let base = match cell {
                Cell::Empty => format!("Unnamed: {}", index),
                other => other.to_string(),
            };

            let mut name = base.clone();
            let mut suffix = 1;
            while columns.contains(&name) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }
            columns.push(name);
        }

        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of a named column in a given row.
    pub fn value(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Keep only rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// New table with the same columns and only rows matching `select`.
    pub fn select_rows<F>(&self, mut select: F) -> Table
    where
        F: FnMut(&[Cell]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| select(row)).cloned().collect(),
        }
    }

    /// Mutable access to every row, for in-place value rewrites.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Vec<Cell>> {
        self.rows.iter_mut()
    }

    /// First `n` rows as a new table.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Render the table as tab-separated text with a header line.
    pub fn to_text(&self) -> String {
        let mut output = self.columns.join("\t");
        for row in &self.rows {
            output.push('\n');
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            output.push_str(&line.join("\t"));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(8000.0).to_string(), "8000");
        assert_eq!(Cell::Number(12.5).to_string(), "12.5");
        assert_eq!(Cell::Bool(true).to_string(), "TRUE");
        assert_eq!(Cell::Empty.to_string(), "");

        let dt = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Cell::Date(dt).to_string(), "2024-01-15 00:00:00");
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new();
        grid.set(2, 1, Cell::text("B3"));
        grid.set(0, 0, Cell::text("A1"));

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(2, 1), Some(&Cell::text("B3")));
        // Short row inside the bounding box
        assert_eq!(grid.cell(1, 1), Some(&Cell::Empty));
        assert_eq!(grid.cell(3, 0), None);
        assert_eq!(grid.cell(0, 2), None);
    }

    #[test]
    fn test_header_names() {
        let header = vec![
            Cell::text("AMT"),
            Cell::Empty,
            Cell::text("AMT"),
            Cell::Number(7.0),
        ];
        let table = Table::from_header_row(&header, vec![vec![Cell::Number(1.0)]]);

        assert_eq!(table.columns(), &["AMT", "Unnamed: 1", "AMT.1", "7"]);
        assert_eq!(table.rows()[0].len(), 4);
        assert_eq!(table.value(0, "AMT"), Some(&Cell::Number(1.0)));
        assert_eq!(table.value(0, "AMT.1"), Some(&Cell::Empty));
    }

    #[test]
    fn test_select_and_head() {
        let table = Table::new(
            vec!["K".to_string()],
            vec![
                vec![Cell::text("a")],
                vec![Cell::text("b")],
                vec![Cell::text("a")],
            ],
        );

        let picked = table.select_rows(|row| row[0].is_text("a"));
        assert_eq!(picked.len(), 2);
        assert_eq!(table.head(1).len(), 1);
        assert_eq!(table.to_text(), "K\na\nb\na");
    }
}
