//! Data models shared by the extraction and cleaning pipelines.

pub mod cell;
pub mod config;
pub mod record;

pub use cell::{Cell, Grid, Table};
pub use config::{CleanerConfig, ExtractionConfig, SheetpickConfig};
pub use record::{ExtractedRecord, FieldValue};
