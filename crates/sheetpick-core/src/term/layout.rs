//! Fixed cell positions of the term-sheet template.

use std::fmt;

/// Zero-based (row, column) coordinate of a worksheet cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A1-style rendering: `CellRef::new(23, 1)` is `B24`.
impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        letters.reverse();

        let column: String = letters.into_iter().collect();
        write!(f, "{}{}", column, self.row + 1)
    }
}

/// Logical values the template stores at fixed positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Name,
    AccountNumber,
    DownPayment,
    DownPaymentDate,
    Term,
    RemainingAmount,
    Installments,
    StartDate,
    EndDate,
    TotalFace,
}

impl Slot {
    /// Slot whose label is `label`, if any.
    pub fn from_label(label: &str) -> Option<Slot> {
        TERM_SHEET_LAYOUT
            .iter()
            .find(|spec| spec.label == label)
            .map(|spec| spec.slot)
    }

    /// Where this slot lives in the template.
    pub fn layout(self) -> &'static SlotSpec {
        &TERM_SHEET_LAYOUT[self as usize]
    }

    pub fn cell(self) -> CellRef {
        self.layout().cell
    }

    pub fn kind(self) -> SlotKind {
        self.layout().kind
    }

    /// Field name used in records and error messages.
    pub fn label(self) -> &'static str {
        self.layout().label
    }
}

/// How a slot's cell is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Passed through as found in the cell.
    Raw,
    /// Must hold a date (a date cell or recognised date text).
    Date,
}

/// One entry of the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub slot: Slot,
    pub label: &'static str,
    pub cell: CellRef,
    pub kind: SlotKind,
}

/// Term-sheet template, indexed by [`Slot`] discriminant.
pub static TERM_SHEET_LAYOUT: [SlotSpec; 10] = [
    SlotSpec {
        slot: Slot::Name,
        label: "NAME",
        cell: CellRef::new(0, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::AccountNumber,
        label: "ACCOUNT NUMBER",
        cell: CellRef::new(1, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::DownPayment,
        label: "DP AMOUNT",
        cell: CellRef::new(10, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::DownPaymentDate,
        label: "DP DATE",
        cell: CellRef::new(11, 1),
        kind: SlotKind::Date,
    },
    SlotSpec {
        slot: Slot::Term,
        label: "TERM",
        cell: CellRef::new(12, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::RemainingAmount,
        label: "REM AMOUNT",
        cell: CellRef::new(18, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::Installments,
        label: "MA",
        cell: CellRef::new(19, 1),
        kind: SlotKind::Raw,
    },
    SlotSpec {
        slot: Slot::StartDate,
        label: "START",
        cell: CellRef::new(20, 1),
        kind: SlotKind::Date,
    },
    SlotSpec {
        slot: Slot::EndDate,
        label: "END",
        cell: CellRef::new(21, 1),
        kind: SlotKind::Date,
    },
    SlotSpec {
        slot: Slot::TotalFace,
        label: "TOTAL/FACE",
        cell: CellRef::new(23, 1),
        kind: SlotKind::Raw,
    },
];

/// What happens when a slot cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Any unreadable slot fails the whole extraction.
    Strict,
    /// Unreadable slots become empty fields.
    Lenient,
}
