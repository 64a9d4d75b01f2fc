//! Value rules shared by the term-sheet variants.

pub mod amounts;
pub mod dates;
pub mod installments;
pub mod patterns;

pub use amounts::{cell_amount, months_per_installment, parse_amount_text, remaining_balance, safe_term};
pub use dates::{add_months, cell_datetime, day_of_month, format_date, parse_date_text};
pub use installments::{installment_amounts, Installment, InstallmentSchedule, MAX_INSTALLMENTS};
pub use patterns::*;
