use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides where mines go once the first cell to open is known.
pub trait MinePlacer {
    fn place(&mut self, config: BoardConfig, exclude: Coord2) -> MineLayout;
}
