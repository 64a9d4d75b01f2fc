//! Term-sheet field extraction.
//!
//! Both agreement types read the same template (see [`layout`]); they differ
//! in which fields they report and in how strictly cells are read.

mod extractor;
pub mod layout;
pub mod rules;

pub use extractor::TermSheetExtractor;
pub use layout::{CellRef, ReadPolicy, Slot, SlotKind, SlotSpec, TERM_SHEET_LAYOUT};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::models::{ExtractedRecord, Grid};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Output fields of a straight-term agreement, in order.
pub const STRAIGHT_FIELDS: [&str; 12] = [
    "NAME",
    "ACCOUNT NUMBER",
    "ADDRESS",
    "TOTAL/FACE",
    "DP AMOUNT",
    "DP DATE",
    "REM AMOUNT",
    "TERM",
    "MA",
    "START",
    "DAY",
    "END",
];

/// Output fields of a balloon-term agreement, in order.
pub const BALLOON_FIELDS: [&str; 23] = [
    "NAME",
    "ACCOUNT NUMBER",
    "ADDRESS",
    "TOTAL/FACE",
    "DP AMOUNT",
    "DP DATE",
    "REM BAL",
    "TERM",
    "MA 1",
    "START",
    "DAY",
    "MONTH",
    "END",
    "MA 2",
    "START 2",
    "DAY 2",
    "MONTH 2",
    "END 2",
    "MA 3",
    "START 3",
    "DAY 3",
    "MONTH 3",
    "END 3",
];

/// Agreement type of a term sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermVariant {
    /// Single payment plan with explicit start and end dates.
    Straight,
    /// Three chained installments over three years.
    Balloon,
}

impl TermVariant {
    /// Heading shown above extracted data.
    pub fn title(self) -> &'static str {
        match self {
            TermVariant::Straight => "STRAIGHT TERM AGREEMENT",
            TermVariant::Balloon => "BALLOON TERM AGREEMENT (3 YEARS)",
        }
    }

    pub fn policy(self) -> ReadPolicy {
        match self {
            TermVariant::Straight => ReadPolicy::Strict,
            TermVariant::Balloon => ReadPolicy::Lenient,
        }
    }

    /// Template slots this variant reads.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            TermVariant::Straight => &[
                Slot::Name,
                Slot::AccountNumber,
                Slot::TotalFace,
                Slot::DownPayment,
                Slot::DownPaymentDate,
                Slot::RemainingAmount,
                Slot::Term,
                Slot::Installments,
                Slot::StartDate,
                Slot::EndDate,
            ],
            TermVariant::Balloon => &[
                Slot::Name,
                Slot::AccountNumber,
                Slot::TotalFace,
                Slot::DownPayment,
                Slot::DownPaymentDate,
                Slot::Term,
                Slot::Installments,
                Slot::StartDate,
            ],
        }
    }

    /// Output field names, in order.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            TermVariant::Straight => &STRAIGHT_FIELDS,
            TermVariant::Balloon => &BALLOON_FIELDS,
        }
    }
}

impl fmt::Display for TermVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermVariant::Straight => f.write_str("straight"),
            TermVariant::Balloon => f.write_str("balloon"),
        }
    }
}

impl FromStr for TermVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(TermVariant::Straight),
            "balloon" => Ok(TermVariant::Balloon),
            other => Err(format!("unknown term variant: {}", other)),
        }
    }
}

/// Trait for term-sheet extractors.
pub trait TermExtractor {
    /// Extract the variant's fields from a worksheet grid.
    ///
    /// `address` is supplied by the caller and copied into the record.
    fn extract(&self, grid: &Grid, address: &str) -> Result<ExtractedRecord>;
}
