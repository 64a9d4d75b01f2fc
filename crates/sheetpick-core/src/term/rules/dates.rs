//! Date reading and month arithmetic for term sheets.

use chrono::{Months, NaiveDate, NaiveDateTime};

use super::patterns::{DATE_MDY, DATE_YMD};
use crate::models::{Cell, FieldValue};

/// Read a cell as a date.
///
/// Date cells are used directly; text is accepted in `YYYY-MM-DD` (with an
/// optional time) or month-first `MM/DD/YYYY` form. Empty cells, numbers and
/// anything else yield `None`.
pub fn cell_datetime(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::Date(dt) => Some(*dt),
        Cell::Text(s) => parse_date_text(s),
        _ => None,
    }
}

/// Parse a date written as text.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Some(caps) = DATE_YMD.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let hour: u32 = caps.get(4).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let minute: u32 = caps.get(5).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let second: u32 = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;

        return NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second);
    }

    if let Some(caps) = DATE_MDY.captures(text) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;

        return NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0);
    }

    None
}

/// Add calendar months, clamping to the last day of a shorter month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    date.checked_add_months(Months::new(months))
}

/// Format an optional date; a missing date renders as an empty field.
pub fn format_date(date: Option<NaiveDateTime>, format: &str) -> FieldValue {
    match date {
        Some(dt) => FieldValue::Text(dt.format(format).to_string()),
        None => FieldValue::Empty,
    }
}

/// Two-digit day of month as text ("07"); a missing date renders as empty.
pub fn day_of_month(date: Option<NaiveDateTime>) -> FieldValue {
    format_date(date, "%d")
}
