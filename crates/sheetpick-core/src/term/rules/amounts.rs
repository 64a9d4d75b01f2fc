//! Amount and term parsing for term sheets.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

use super::patterns::AMOUNT_TEXT;
use crate::models::Cell;

/// Read a cell as an amount.
///
/// Number cells are used directly; text such as `"10,000.50"` or `"$ 2,000"`
/// is accepted. Anything else yields `None`.
pub fn cell_amount(cell: &Cell) -> Option<Decimal> {
    match cell {
        Cell::Number(n) => Decimal::from_f64(*n).map(|d| d.normalize()),
        Cell::Text(s) => parse_amount_text(s),
        _ => None,
    }
}

/// Parse an amount written as text (thousands separators and `$` allowed).
pub fn parse_amount_text(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if !AMOUNT_TEXT.is_match(s) {
        return None;
    }

    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned).ok().map(|d| d.normalize())
}

/// Total/face minus down-payment, or `None` when either is missing or not numeric.
pub fn remaining_balance(total_face: &Cell, down_payment: &Cell) -> Option<Decimal> {
    let total = cell_amount(total_face)?;
    let down = cell_amount(down_payment)?;
    total.checked_sub(down)
}

/// Term in months; a missing or non-numeric term counts as zero.
pub fn safe_term(cell: &Cell) -> Decimal {
    cell_amount(cell).unwrap_or(Decimal::ZERO)
}

/// Months assigned to each installment: `term / installments`, unrounded.
/// A zero term gives zero.
pub fn months_per_installment(term: Decimal, installments: u32) -> Decimal {
    if term.is_zero() || installments == 0 {
        return Decimal::ZERO;
    }
    (term / Decimal::from(installments)).normalize()
}
