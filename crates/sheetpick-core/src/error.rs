//! Error types for the sheetpick-core library.

use thiserror::Error;

/// Main error type for the sheetpick library.
#[derive(Error, Debug)]
pub enum SheetpickError {
    /// Decryption of a password-protected workbook failed.
    #[error("decryption error: {0}")]
    Decryption(#[from] DecryptionError),

    /// Term-sheet field extraction failed.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Report cleaning failed.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decrypting a protected workbook.
#[derive(Error, Debug)]
pub enum DecryptionError {
    /// The password did not unlock the package.
    #[error("incorrect password or corrupt encrypted container")]
    IncorrectPassword,

    /// The encrypted container could not be processed.
    #[error("failed to decrypt file: {0}")]
    Container(String),
}

/// Errors related to reading and writing workbook bytes.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The bytes are not a readable spreadsheet.
    #[error("failed to open workbook: {0}")]
    Open(String),

    /// The workbook has no worksheet to read.
    #[error("workbook contains no worksheet")]
    NoWorksheet,

    /// The first worksheet could not be read.
    #[error("failed to read worksheet '{sheet}': {reason}")]
    Sheet { sheet: String, reason: String },

    /// Writing a worksheet failed.
    #[error("failed to write workbook: {0}")]
    Write(String),

    /// Bundling output files into an archive failed.
    #[error("failed to build archive: {0}")]
    Archive(String),

    /// The upload has an extension that is not accepted.
    #[error("unsupported file type '{extension}', expected one of: {allowed}")]
    UnsupportedExtension { extension: String, allowed: String },
}

/// Errors related to term-sheet field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The workbook could not be read at all.
    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    /// A fixed-position cell lies outside the worksheet.
    #[error("cell {cell} for {field} is outside the worksheet")]
    OutOfRange { field: String, cell: String },

    /// A date field held an empty or non-date value.
    #[error("invalid date in {cell} for {field}: {value:?}")]
    InvalidDate {
        field: String,
        cell: String,
        value: String,
    },
}

/// Errors related to the report cleaner.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The workbook could not be read or written.
    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    /// The worksheet has no header row.
    #[error("worksheet has no header row")]
    MissingHeader,
}

/// Result type for the sheetpick library.
pub type Result<T> = std::result::Result<T, SheetpickError>;
