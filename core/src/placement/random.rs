use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::*;

/// Uniform rejection sampling, the excluded cell is never a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, config: BoardConfig, exclude: Coord2) -> MineLayout {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let free_cells = config.total_cells().saturating_sub(1);
        let target = if config.mines > free_cells {
            log::warn!(
                "Cannot keep start cell safe, requested {} mines but only {} cells are free",
                config.mines,
                free_cells
            );
            free_cells
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut seen: HashSet<Coord2> = HashSet::with_capacity(target.into());
        let mut mines = Vec::with_capacity(target.into());
        while mines.len() < usize::from(target) {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            if coords == exclude || !seen.insert(coords) {
                continue;
            }
            mines.push(coords);
        }

        log::debug!(
            "Placed {} mines on {:?} avoiding {:?} (seed {})",
            mines.len(),
            config.size,
            exclude,
            self.seed
        );
        MineLayout::from_distinct_mines(config.size, mines)
    }
}
