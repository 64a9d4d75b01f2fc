//! Ordered field/value records produced by the term-sheet extractor.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::cell::Cell;

/// Width that pure-digit text is zero-padded to in the tab-separated line.
pub const DEFAULT_PAD_WIDTH: usize = 6;

/// A single extracted value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value, rendered as-is (pure-digit text is padded on the clipboard line).
    Text(String),
    /// Numeric value, never padded.
    Number(Decimal),
    /// Missing or unparseable source data, rendered as an empty string.
    Empty,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Convert a raw cell without interpretation.
    ///
    /// Numbers become [`FieldValue::Number`]; dates, booleans and error
    /// values keep their display text.
    pub fn from_cell(cell: &Cell) -> Self {
        match cell {
            Cell::Empty => FieldValue::Empty,
            Cell::Text(s) => FieldValue::Text(s.clone()),
            Cell::Number(n) => Decimal::from_f64(*n)
                .map(|d| FieldValue::Number(d.normalize()))
                .unwrap_or_else(|| FieldValue::Text(cell.to_string())),
            other => FieldValue::Text(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Render for the tab-separated clipboard line.
    ///
    /// Text made only of ASCII digits is left-padded with zeros to
    /// `pad_width`; longer digit strings, other text and numbers are unchanged.
    pub fn clipboard_text(&self, pad_width: usize) -> String {
        match self {
            FieldValue::Text(s) if is_pure_digits(s) => format!("{:0>width$}", s, width = pad_width),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n.normalize()),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Text)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => match n.normalize().to_i64() {
                Some(i) if n.fract().is_zero() => serializer.serialize_i64(i),
                _ => serializer.serialize_f64(n.to_f64().unwrap_or(f64::NAN)),
            },
            FieldValue::Empty => serializer.serialize_str(""),
        }
    }
}

fn is_pure_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Ordered mapping from field name to value.
///
/// Field order is the order fields were pushed and drives every rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ExtractedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Pushing an existing name replaces its value in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Horizontal tab-separated line of values, suitable for a clipboard.
    pub fn to_tab_line(&self, pad_width: usize) -> String {
        self.values()
            .map(|v| v.clipboard_text(pad_width))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
