//! Layout-driven extractor shared by both agreement types.
//!
//! Extraction runs in two passes. Every slot the variant lists is read
//! according to its [`SlotKind`]; the record is then assembled in the
//! variant's field order, taking each field either from a value computed
//! for that variant or from the slot carrying the same label.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::ExtractionError;
use crate::models::{Cell, ExtractedRecord, ExtractionConfig, FieldValue, Grid};

use super::layout::{ReadPolicy, Slot, SlotKind};
use super::rules::{
    cell_datetime, day_of_month, format_date, installment_amounts, months_per_installment,
    remaining_balance, safe_term, InstallmentSchedule, MAX_INSTALLMENTS,
};
use super::{Result, TermExtractor, TermVariant};

/// Template values read for one extraction.
#[derive(Debug, Default)]
struct SlotValues {
    cells: HashMap<Slot, Cell>,
    dates: HashMap<Slot, NaiveDateTime>,
}

impl SlotValues {
    fn cell(&self, slot: Slot) -> Option<&Cell> {
        self.cells.get(&slot)
    }

    fn date(&self, slot: Slot) -> Option<NaiveDateTime> {
        self.dates.get(&slot).copied()
    }
}

/// Term-sheet extractor parameterized by agreement type.
#[derive(Debug, Clone)]
pub struct TermSheetExtractor {
    variant: TermVariant,
    /// chrono format for rendered dates.
    date_format: String,
    /// Months from installment start to end.
    span_months: u32,
    /// Months from installment end to the next start.
    gap_months: u32,
}

impl TermSheetExtractor {
    /// Create an extractor with default settings.
    pub fn new(variant: TermVariant) -> Self {
        Self::from_config(variant, &ExtractionConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(variant: TermVariant, config: &ExtractionConfig) -> Self {
        Self {
            variant,
            date_format: config.date_format.clone(),
            span_months: config.installment_span_months,
            gap_months: config.installment_gap_months,
        }
    }

    /// Set the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set installment span and gap, in months.
    pub fn with_installment_months(mut self, span: u32, gap: u32) -> Self {
        self.span_months = span;
        self.gap_months = gap;
        self
    }

    fn policy(&self) -> ReadPolicy {
        self.variant.policy()
    }

    /// Cell for a slot; `None` only in lenient mode when it is outside the sheet.
    fn read_cell<'a>(&self, grid: &'a Grid, slot: Slot) -> Result<Option<&'a Cell>> {
        let at = slot.cell();
        match grid.cell(at.row, at.col) {
            Some(cell) => Ok(Some(cell)),
            None => match self.policy() {
                ReadPolicy::Strict => Err(ExtractionError::OutOfRange {
                    field: slot.label().to_string(),
                    cell: at.to_string(),
                }),
                ReadPolicy::Lenient => {
                    warn!("{} ({}) is outside the worksheet", slot.label(), at);
                    Ok(None)
                }
            },
        }
    }

    fn read_date(&self, grid: &Grid, slot: Slot) -> Result<Option<NaiveDateTime>> {
        let cell = self.read_cell(grid, slot)?;

        match cell.and_then(cell_datetime) {
            Some(date) => Ok(Some(date)),
            None if self.policy() == ReadPolicy::Strict => Err(ExtractionError::InvalidDate {
                field: slot.label().to_string(),
                cell: slot.cell().to_string(),
                value: cell.map(ToString::to_string).unwrap_or_default(),
            }),
            None => {
                if let Some(cell) = cell.filter(|c| !c.is_empty()) {
                    warn!("{} ({}) is not a date: {:?}", slot.label(), slot.cell(), cell);
                }
                Ok(None)
            }
        }
    }

    /// Read the variant's slots in order, each according to its kind.
    fn read_slots(&self, grid: &Grid) -> Result<SlotValues> {
        let mut values = SlotValues::default();

        for &slot in self.variant.slots() {
            match slot.kind() {
                SlotKind::Raw => {
                    if let Some(cell) = self.read_cell(grid, slot)? {
                        values.cells.insert(slot, cell.clone());
                    }
                }
                SlotKind::Date => {
                    if let Some(date) = self.read_date(grid, slot)? {
                        values.dates.insert(slot, date);
                    }
                }
            }
        }

        debug!(
            "Read {} cells and {} dates",
            values.cells.len(),
            values.dates.len()
        );
        Ok(values)
    }

    /// Record value of a slot read as-is.
    fn slot_value(&self, values: &SlotValues, slot: Slot) -> FieldValue {
        match slot.kind() {
            SlotKind::Raw => values.cell(slot).map_or(FieldValue::Empty, FieldValue::from_cell),
            SlotKind::Date => format_date(values.date(slot), &self.date_format),
        }
    }

    /// Fields of a straight agreement that are not a slot's own value.
    fn straight_fields(&self, values: &SlotValues, address: &str) -> ExtractedRecord {
        let mut fields = ExtractedRecord::new();

        fields.push("ADDRESS", address_value(address));
        fields.push(
            "DAY",
            values
                .date(Slot::StartDate)
                .map_or(FieldValue::Empty, |d| Decimal::from(d.day()).into()),
        );

        fields
    }

    /// Fields of a balloon agreement computed from the slots.
    fn balloon_fields(&self, values: &SlotValues, address: &str) -> ExtractedRecord {
        let mut fields = ExtractedRecord::new();
        let empty = Cell::Empty;

        fields.push("ADDRESS", address_value(address));

        let total_face = values.cell(Slot::TotalFace).unwrap_or(&empty);
        let down_payment = values.cell(Slot::DownPayment).unwrap_or(&empty);
        fields.push(
            "REM BAL",
            remaining_balance(total_face, down_payment).map_or(FieldValue::Empty, FieldValue::from),
        );

        let term = values.cell(Slot::Term).map_or(Decimal::ZERO, safe_term);
        fields.push("TERM", term);

        // Numeric descriptors are read as their display text
        let descriptor = values
            .cell(Slot::Installments)
            .map(ToString::to_string)
            .unwrap_or_default();
        let amounts = installment_amounts(&descriptor);
        let months = months_per_installment(term, MAX_INSTALLMENTS as u32);

        let schedule = InstallmentSchedule::build(
            values.date(Slot::StartDate),
            amounts,
            months,
            self.span_months,
            self.gap_months,
        );

        for (index, installment) in schedule.iter().enumerate() {
            let suffix = match index {
                0 => String::new(),
                n => format!(" {}", n + 1),
            };

            fields.push(format!("MA {}", index + 1), installment.amount.clone());
            fields.push(
                format!("START{}", suffix),
                format_date(installment.start, &self.date_format),
            );
            fields.push(format!("DAY{}", suffix), day_of_month(installment.start));
            fields.push(format!("MONTH{}", suffix), installment.months);
            fields.push(
                format!("END{}", suffix),
                format_date(installment.end, &self.date_format),
            );
        }

        fields
    }

    /// Lay out the record in the variant's field order.
    fn assemble(&self, values: &SlotValues, computed: &ExtractedRecord) -> ExtractedRecord {
        let slots = self.variant.slots();
        let mut record = ExtractedRecord::new();

        for &name in self.variant.field_names() {
            let value = match computed.get(name) {
                Some(value) => value.clone(),
                None => Slot::from_label(name)
                    .filter(|slot| slots.contains(slot))
                    .map_or(FieldValue::Empty, |slot| self.slot_value(values, slot)),
            };
            record.push(name, value);
        }

        record
    }
}

impl TermExtractor for TermSheetExtractor {
    fn extract(&self, grid: &Grid, address: &str) -> Result<ExtractedRecord> {
        info!("Extracting {} term sheet", self.variant);
        debug!("Grid is {} rows x {} columns", grid.height(), grid.width());

        let values = self.read_slots(grid)?;
        let computed = match self.variant {
            TermVariant::Straight => self.straight_fields(&values, address),
            TermVariant::Balloon => self.balloon_fields(&values, address),
        };
        let record = self.assemble(&values, &computed);

        debug!("Extracted {} fields", record.len());
        Ok(record)
    }
}

fn address_value(address: &str) -> FieldValue {
    if address.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::text(address)
    }
}
