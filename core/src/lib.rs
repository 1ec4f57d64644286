#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use placement::*;
pub use records::*;
pub use session::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod placement;
mod records;
mod session;
mod snapshot;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated config, there must be at least one cell left over after placing every mine.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        let cells = config.total_cells();
        if mines >= cells {
            return Err(GameError::InvalidConfiguration { mines, cells });
        }
        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    /// At most 255 * 255, always fits a `CellCount`.
    pub const fn total_cells(&self) -> CellCount {
        self.size.0 as CellCount * self.size.1 as CellCount
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

/// Mine set together with the classification of every cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    values: Array2<CellValue>,
    mines: Vec<Coord2>,
}

impl MineLayout {
    /// Layout without mines, every cell counts zero.
    pub fn empty(size: Coord2) -> Self {
        Self {
            values: Array2::default(size.to_nd_index()),
            mines: Vec::new(),
        }
    }

    /// Builds a layout from explicit coordinates, duplicates are collapsed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines = Vec::with_capacity(mine_coords.len());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            if !mines.contains(&coords) {
                mines.push(coords);
            }
        }
        Ok(Self::from_distinct_mines(size, mines))
    }

    /// Callers guarantee `mines` is in bounds and free of duplicates.
    pub(crate) fn from_distinct_mines(size: Coord2, mines: Vec<Coord2>) -> Self {
        let mut values: Array2<CellValue> = Array2::default(size.to_nd_index());
        for &coords in &mines {
            values[coords.to_nd_index()] = CellValue::Mine;
        }

        for coords in iter_coords(size) {
            if values[coords.to_nd_index()].is_mine() {
                continue;
            }
            let adjacent = NeighborIter::new(coords, size)
                .filter(|&pos| values[pos.to_nd_index()].is_mine())
                .count();
            // at most 8 neighbors
            values[coords.to_nd_index()] = CellValue::Count(adjacent as u8);
        }

        Self { values, mines }
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.values.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    /// Mine coordinates, in placement order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.values[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_mines_filling_every_cell() {
        assert_eq!(
            BoardConfig::new((3, 3), 9),
            Err(GameError::InvalidConfiguration { mines: 9, cells: 9 })
        );
        assert_eq!(
            BoardConfig::new((0, 5), 0),
            Err(GameError::InvalidConfiguration { mines: 0, cells: 0 })
        );
        assert!(BoardConfig::new((3, 3), 8).is_ok());
        assert!(BoardConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn config_validates_coords() {
        let config = BoardConfig::new((16, 30), 99).unwrap();

        assert_eq!(config.validate_coords((15, 29)), Ok((15, 29)));
        assert_eq!(config.validate_coords((16, 0)), Err(GameError::InvalidCoords));
        assert_eq!(config.validate_coords((0, 30)), Err(GameError::InvalidCoords));
        assert_eq!(config.safe_cells(), 16 * 30 - 99);
    }

    #[test]
    fn layout_counts_match_neighboring_mines() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(0, 0), (0, 1), (4, 4)]).unwrap();

        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout[(0, 0)], CellValue::Mine);
        assert_eq!(layout[(1, 0)], CellValue::Count(2));
        assert_eq!(layout[(1, 1)], CellValue::Count(2));
        assert_eq!(layout[(1, 2)], CellValue::Count(1));
        assert_eq!(layout[(0, 2)], CellValue::Count(1));
        assert_eq!(layout[(2, 2)], CellValue::Count(0));
        assert_eq!(layout[(3, 3)], CellValue::Count(1));
        assert_eq!(layout[(4, 3)], CellValue::Count(1));

        for coords in iter_coords(layout.size()) {
            if let CellValue::Count(count) = layout[coords] {
                assert_eq!(count, layout.adjacent_mine_count(coords), "at {:?}", coords);
            }
        }
    }

    #[test]
    fn layout_collapses_duplicates_and_rejects_out_of_bounds() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout[(0, 0)], CellValue::Count(1));

        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn empty_layout_is_all_zero() {
        let layout = MineLayout::empty((4, 6));

        assert_eq!(layout.size(), (4, 6));
        assert_eq!(layout.mine_count(), 0);
        assert!(iter_coords((4, 6)).all(|coords| layout[coords] == CellValue::Count(0)));
    }
}
