//! Zip bundling of the cleaned report and its subsets.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::CleanedReport;
use crate::error::WorkbookError;
use crate::workbook::write_table;

/// A named file inside the output archive.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Finished archive ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ReportArchive {
    /// Suggested file name, `{stem}_cleaned_files.zip`.
    pub file_name: String,
    /// Entry names in archive order.
    pub entries: Vec<String>,
    pub bytes: Vec<u8>,
}

pub fn cleaned_entry_name(stem: &str) -> String {
    format!("{}_cleaned.xlsx", stem)
}

/// Entry name of the `index`-th subset (1-based).
pub fn subset_entry_name(stem: &str, index: usize) -> String {
    format!("{}_MADPL_file_{}.xlsx", stem, index)
}

pub fn archive_name(stem: &str) -> String {
    format!("{}_cleaned_files.zip", stem)
}

/// Write entries into an in-memory zip archive, in order.
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>, WorkbookError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        writer
            .start_file(entry.name.as_str(), options)
            .map_err(|e| WorkbookError::Archive(e.to_string()))?;
        writer
            .write_all(&entry.bytes)
            .map_err(|e| WorkbookError::Archive(e.to_string()))?;
        debug!("Added {} ({} bytes)", entry.name, entry.bytes.len());
    }

    let cursor = writer
        .finish()
        .map_err(|e| WorkbookError::Archive(e.to_string()))?;

    Ok(cursor.into_inner())
}

/// Export the cleaned table and each subset as xlsx and zip them together.
pub fn bundle_report(report: &CleanedReport, stem: &str) -> Result<ReportArchive, WorkbookError> {
    let mut entries = vec![ArchiveEntry::new(
        cleaned_entry_name(stem),
        write_table(&report.cleaned)?,
    )];

    for (index, subset) in report.subsets.iter().enumerate() {
        entries.push(ArchiveEntry::new(
            subset_entry_name(stem, index + 1),
            write_table(&subset.table)?,
        ));
    }

    let bytes = build_archive(&entries)?;

    Ok(ReportArchive {
        file_name: archive_name(stem),
        entries: entries.into_iter().map(|e| e.name).collect(),
        bytes,
    })
}
