use serde::{Deserialize, Serialize};

use super::*;

/// Predetermined layout, used for replays and deterministic boards.
///
/// The first opened cell is not moved out of the way, opening a mine on the first move loses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedPlacer {
    layout: MineLayout,
}

impl FixedPlacer {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        MineLayout::from_mine_coords(size, mine_coords).map(Self::new)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, config: BoardConfig, exclude: Coord2) -> MineLayout {
        if config != self.layout.board_config() {
            log::warn!(
                "Fixed layout {:?} does not match requested config {:?}",
                self.layout.board_config(),
                config
            );
        }
        if self.layout.contains_mine(exclude) {
            log::debug!("Fixed layout has a mine on the start cell {:?}", exclude);
        }
        self.layout.clone()
    }
}
