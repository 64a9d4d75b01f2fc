//! Row filter for the MADPL daily report.
//!
//! Rules run in order and each one is skipped when its column is missing:
//!
//! 1. rows whose placement is the excluded placement (`N/A`) are dropped;
//! 2. rows whose action is the excluded action (`EXCLUDE IN REPORT`) are dropped;
//! 3. amount and timing are blanked on rows whose action is not `PTP`;
//! 4. numeric zero reactions are blanked.
//!
//! The cleaned table is then split into one subset per configured placement.

mod bundle;

pub use bundle::{
    archive_name, build_archive, bundle_report, cleaned_entry_name, subset_entry_name,
    ArchiveEntry, ReportArchive,
};

use tracing::{debug, info};

use crate::models::{Cell, CleanerConfig, Table};

/// Rows of the cleaned report that carry one placement value.
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    /// Placement value the rows were selected by.
    pub placement: String,
    pub table: Table,
}

/// Output of the cleaner.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedReport {
    /// Report after all rules.
    pub cleaned: Table,
    /// One subset per configured placement, in configuration order.
    /// Empty when the report has no placement column.
    pub subsets: Vec<Subset>,
}

/// Trait for report filters.
pub trait ReportFilter {
    /// Apply the filter rules to a header-based table.
    fn clean(&self, table: Table) -> CleanedReport;
}

/// Rule-based MADPL report cleaner.
#[derive(Debug, Clone, Default)]
pub struct ReportCleaner {
    config: CleanerConfig,
}

impl ReportCleaner {
    /// Create a cleaner with default column names and values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cleaner from configuration.
    pub fn from_config(config: &CleanerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Set the placements split out into subsets.
    pub fn with_subset_placements(mut self, placements: Vec<String>) -> Self {
        self.config.subset_placements = placements;
        self
    }

    fn drop_rows_with(&self, table: &mut Table, column: &str, value: &str) {
        let Some(index) = table.column_index(column) else {
            debug!("No {} column, skipping", column);
            return;
        };

        let before = table.len();
        table.retain_rows(|row| !row[index].is_text(value));
        debug!(
            "Dropped {} rows where {} == {:?} ({} remain)",
            before - table.len(),
            column,
            value,
            table.len()
        );
    }

    fn blank_unretained_actions(&self, table: &mut Table) {
        let config = &self.config;
        let Some(action) = table.column_index(&config.action_column) else {
            return;
        };

        let targets: Vec<usize> = [&config.amount_column, &config.when_column]
            .into_iter()
            .filter_map(|name| table.column_index(name))
            .collect();
        if targets.is_empty() {
            return;
        }

        let mut blanked = 0;
        for row in table.rows_mut() {
            if row[action].is_text(&config.retained_action) {
                continue;
            }
            for &col in &targets {
                row[col] = Cell::Empty;
            }
            blanked += 1;
        }
        debug!(
            "Blanked {} and {} on {} rows without {:?}",
            config.amount_column, config.when_column, blanked, config.retained_action
        );
    }

    fn blank_zero_reactions(&self, table: &mut Table) {
        let Some(reaction) = table.column_index(&self.config.reaction_column) else {
            return;
        };

        let mut blanked = 0;
        for row in table.rows_mut() {
            if row[reaction].is_zero() {
                row[reaction] = Cell::Empty;
                blanked += 1;
            }
        }
        debug!("Blanked {} zero {} values", blanked, self.config.reaction_column);
    }

    fn split_subsets(&self, table: &Table) -> Vec<Subset> {
        let Some(placement) = table.column_index(&self.config.placement_column) else {
            debug!("No {} column, no subsets", self.config.placement_column);
            return Vec::new();
        };

        self.config
            .subset_placements
            .iter()
            .map(|value| {
                let subset = table.select_rows(|row| row[placement].is_text(value));
                debug!("Subset {:?}: {} rows", value, subset.len());
                Subset {
                    placement: value.clone(),
                    table: subset,
                }
            })
            .collect()
    }
}

impl ReportFilter for ReportCleaner {
    fn clean(&self, mut table: Table) -> CleanedReport {
        let config = &self.config;
        let input_rows = table.len();

        self.drop_rows_with(&mut table, &config.placement_column, &config.excluded_placement);
        self.drop_rows_with(&mut table, &config.action_column, &config.excluded_action);
        self.blank_unretained_actions(&mut table);
        self.blank_zero_reactions(&mut table);

        let subsets = self.split_subsets(&table);

        info!(
            "Cleaned report: {} of {} rows kept, {} subsets",
            table.len(),
            input_rows,
            subsets.len()
        );

        CleanedReport {
            cleaned: table,
            subsets,
        }
    }
}

/// Clean a table with the given configuration.
pub fn clean_table(table: Table, config: &CleanerConfig) -> CleanedReport {
    ReportCleaner::from_config(config).clean(table)
}
