//! Core library for spreadsheet term-sheet extraction and report cleaning.
//!
//! This crate provides:
//! - Decryption of password-protected Office workbooks
//! - Positional and header-based worksheet views (calamine)
//! - Straight and balloon term-sheet field extraction from a fixed template
//! - The MADPL daily report cleaner with xlsx/zip export

pub mod cleaner;
pub mod crypto;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod term;
pub mod workbook;

pub use cleaner::{clean_table, CleanedReport, ReportArchive, ReportCleaner, ReportFilter, Subset};
pub use crypto::{decrypt, Decryptor, OfficeDecryptor};
pub use error::{DecryptionError, ExtractionError, FilterError, Result, SheetpickError, WorkbookError};
pub use models::{Cell, ExtractedRecord, FieldValue, Grid, SheetpickConfig, Table};
pub use pipeline::{clean_report, extract_term_sheet, CleanOutput};
pub use term::{TermExtractor, TermSheetExtractor, TermVariant};
pub use workbook::WorkbookReader;
