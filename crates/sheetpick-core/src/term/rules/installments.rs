//! Installment descriptors and the balloon-term payment schedule.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::dates::add_months;

/// Installments in a balloon-term agreement.
pub const MAX_INSTALLMENTS: usize = 3;

/// Split an installment descriptor such as `"500x12;500x12;500x12"`.
///
/// Each `;`-separated entry contributes the text before its first `x`,
/// trimmed. The result always has [`MAX_INSTALLMENTS`] slots; missing or
/// blank entries are `None` and entries past the last slot are ignored.
pub fn installment_amounts(descriptor: &str) -> [Option<String>; MAX_INSTALLMENTS] {
    let mut amounts: [Option<String>; MAX_INSTALLMENTS] = Default::default();

    for (slot, entry) in amounts.iter_mut().zip(descriptor.split(';')) {
        let amount = entry.split('x').next().unwrap_or("").trim();
        if !amount.is_empty() {
            *slot = Some(amount.to_string());
        }
    }

    amounts
}

/// One scheduled sub-payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    /// Amount text taken from the descriptor.
    pub amount: Option<String>,
    /// First payment date.
    pub start: Option<NaiveDateTime>,
    /// Months assigned to this installment.
    pub months: Decimal,
    /// Last payment date.
    pub end: Option<NaiveDateTime>,
}

/// Chain of installments, each starting `gap_months` after the previous end.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentSchedule {
    installments: Vec<Installment>,
}

impl InstallmentSchedule {
    /// Build the schedule from the first start date.
    ///
    /// Every installment ends `span_months` after its start and the next one
    /// starts `gap_months` after that end. The span is fixed and does not
    /// follow `months`. A missing first start leaves every date empty.
    pub fn build(
        first_start: Option<NaiveDateTime>,
        amounts: [Option<String>; MAX_INSTALLMENTS],
        months: Decimal,
        span_months: u32,
        gap_months: u32,
    ) -> Self {
        let mut installments = Vec::with_capacity(MAX_INSTALLMENTS);
        let mut start = first_start;

        for amount in amounts {
            let end = start.and_then(|s| add_months(s, span_months));
            installments.push(Installment {
                amount,
                start,
                months,
                end,
            });
            start = end.and_then(|e| add_months(e, gap_months));
        }

        Self { installments }
    }

    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Installment> {
        self.installments.iter()
    }
}
