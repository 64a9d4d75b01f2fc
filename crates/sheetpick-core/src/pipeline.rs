//! End-to-end entry points: bytes in, record or archive out.

use tracing::info;

use crate::cleaner::{bundle_report, clean_table, CleanedReport, ReportArchive};
use crate::crypto;
use crate::error::{ExtractionError, FilterError, Result};
use crate::models::{ExtractedRecord, SheetpickConfig, Table};
use crate::term::{TermExtractor, TermSheetExtractor, TermVariant};
use crate::workbook::{check_extension, upload_stem, WorkbookReader, REPORT_EXTENSIONS};

/// Result of cleaning a report upload.
#[derive(Debug, Clone)]
pub struct CleanOutput {
    /// Zip archive with the cleaned report and its subsets.
    pub archive: ReportArchive,
    pub report: CleanedReport,
}

impl CleanOutput {
    /// First `rows` rows of the cleaned table.
    pub fn preview(&self, rows: usize) -> Table {
        self.report.cleaned.head(rows)
    }
}

/// Decrypt a term sheet if needed and extract the variant's fields.
pub fn extract_term_sheet(
    bytes: Vec<u8>,
    password: Option<&str>,
    address: &str,
    variant: TermVariant,
    config: &SheetpickConfig,
) -> Result<ExtractedRecord> {
    info!("Reading {} byte term sheet", bytes.len());

    let bytes = crypto::decrypt(bytes, password)?;
    let reader = WorkbookReader::load(&bytes).map_err(ExtractionError::from)?;
    let grid = reader.grid();

    let record = TermSheetExtractor::from_config(variant, &config.extraction).extract(&grid, address)?;

    info!("Extracted {} fields from sheet '{}'", record.len(), reader.sheet_name());
    Ok(record)
}

/// Decrypt a report if needed, clean it and bundle the results.
///
/// `file_name` is the uploaded file's name; it is checked against the
/// accepted extensions and names the archive and its entries.
pub fn clean_report(
    bytes: Vec<u8>,
    password: Option<&str>,
    file_name: &str,
    config: &SheetpickConfig,
) -> Result<CleanOutput> {
    check_extension(file_name, REPORT_EXTENSIONS).map_err(FilterError::from)?;
    info!("Reading {} byte report {}", bytes.len(), file_name);

    let bytes = crypto::decrypt(bytes, password)?;
    let reader = WorkbookReader::load(&bytes).map_err(FilterError::from)?;
    let table = reader.table().ok_or(FilterError::MissingHeader)?;

    let report = clean_table(table, &config.cleaner);

    let stem = upload_stem(file_name);
    let archive = bundle_report(&report, &stem).map_err(FilterError::from)?;

    info!(
        "Bundled {} files into {} ({} bytes)",
        archive.entries.len(),
        archive.file_name,
        archive.bytes.len()
    );

    Ok(CleanOutput { archive, report })
}
