//! Common regex patterns for term-sheet values stored as text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 2024-01-15, 2024/01/15, optionally followed by a time
    pub static ref DATE_YMD: Regex = Regex::new(
        r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[ T](\d{1,2}):(\d{2})(?::(\d{2}))?(?:\.\d+)?)?$"
    ).unwrap();

    // 01/15/2024 or 1-15-2024 (month first)
    pub static ref DATE_MDY: Regex = Regex::new(
        r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$"
    ).unwrap();

    // Leading amount of an installment entry such as "1,500.00x12"
    pub static ref AMOUNT_TEXT: Regex = Regex::new(
        r"^-?\$?\s*\d{1,3}(?:,?\d{3})*(?:\.\d+)?$"
    ).unwrap();
}
