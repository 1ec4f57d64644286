use serde::{Deserialize, Serialize};

/// Mine classification of a cell, fixed once mines are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Count(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player marks stored by the board engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Everything a renderer needs to know about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub value: CellValue,
    pub revealed: bool,
    pub flagged: bool,
}

impl CellView {
    pub(crate) const fn new(value: CellValue, mark: CellMark) -> Self {
        Self {
            value,
            revealed: matches!(mark, CellMark::Revealed),
            flagged: matches!(mark, CellMark::Flagged),
        }
    }
}
