//! Configuration structures for the extraction and cleaning pipelines.

use serde::{Deserialize, Serialize};

use super::record::DEFAULT_PAD_WIDTH;

/// Main configuration for sheetpick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetpickConfig {
    /// Term-sheet extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report cleaner configuration.
    pub cleaner: CleanerConfig,
}

/// Term-sheet extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// chrono format string for rendered dates.
    pub date_format: String,

    /// Width pure-digit text is zero-padded to on the clipboard line.
    pub pad_width: usize,

    /// Months from an installment's start to its end.
    pub installment_span_months: u32,

    /// Months from an installment's end to the next installment's start.
    pub installment_gap_months: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            date_format: "%m/%d/%Y".to_string(),
            pad_width: DEFAULT_PAD_WIDTH,
            installment_span_months: 11,
            installment_gap_months: 1,
        }
    }
}

/// Report cleaner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Column holding the placement tag.
    pub placement_column: String,

    /// Column holding the action status.
    pub action_column: String,

    /// Column whose zero values are blanked.
    pub reaction_column: String,

    /// Amount column blanked for non-retained actions.
    pub amount_column: String,

    /// Timing column blanked for non-retained actions.
    pub when_column: String,

    /// Placement value whose rows are dropped.
    pub excluded_placement: String,

    /// Action value whose rows are dropped.
    pub excluded_action: String,

    /// Action value that keeps amount and timing.
    pub retained_action: String,

    /// Placement values split out into their own files, in output order.
    pub subset_placements: Vec<String>,

    /// Rows shown in the cleaned-data preview.
    pub preview_rows: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            placement_column: "PLACEMENT".to_string(),
            action_column: "ACTION".to_string(),
            reaction_column: "REACTION".to_string(),
            amount_column: "AMT".to_string(),
            when_column: "WHEN".to_string(),
            excluded_placement: "N/A".to_string(),
            excluded_action: "EXCLUDE IN REPORT".to_string(),
            retained_action: "PTP".to_string(),
            subset_placements: vec!["MADPL 150DPD".to_string(), "MADPL1".to_string()],
            preview_rows: 5,
        }
    }
}

impl SheetpickConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
