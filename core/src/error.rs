use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid configuration: {mines} mines do not fit in {cells} cells")]
    InvalidConfiguration { mines: CellCount, cells: CellCount },
    #[error("Unknown difficulty")]
    UnknownDifficulty,
    #[error("Malformed best-time records")]
    MalformedRecords,
}

pub type Result<T> = core::result::Result<T, GameError>;
