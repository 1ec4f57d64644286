use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

/// Valid transitions:
/// - Unstarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Unstarted,
    InProgress,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::Unstarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Unstarted
    }
}

/// A single game of minesweeper from the first click to the end.
///
/// Mines are placed lazily on the first reveal so that the opened cell is never a mine. Moves
/// that the rules don't allow (revealing a flagged cell, flagging a revealed one, anything after
/// the game ended) are ignored and reported as [`RevealOutcome::NoChange`] or
/// [`MarkOutcome::NoChange`]. Only out-of-bounds coordinates are errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board<P = RandomPlacer> {
    config: BoardConfig,
    placer: P,
    layout: MineLayout,
    marks: Array2<CellMark>,
    mines_placed: bool,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board<FixedPlacer> {
    /// Board with a predetermined layout, mostly useful for tests and replays.
    pub fn with_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let placer = FixedPlacer::from_mine_coords(size, mine_coords)?;
        let config = BoardConfig::new(size, placer.layout().mine_count())?;
        Ok(Self::new(config, placer))
    }
}

impl<P: MinePlacer> Board<P> {
    pub fn new(config: BoardConfig, placer: P) -> Self {
        let size = config.size;
        Self {
            config,
            placer,
            layout: MineLayout::empty(size),
            marks: Array2::default(size.to_nd_index()),
            mines_placed: false,
            revealed_count: 0,
            flagged_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags, negative when the player placed more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn has_mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// Mine coordinates, empty until the first reveal.
    pub fn mines(&self) -> &[Coord2] {
        self.layout.mines()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.view(coords))
    }

    /// Every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        iter_coords(self.size()).map(|coords| (coords, self.view(coords)))
    }

    /// Places mines avoiding `exclude`, only the first call has any effect.
    ///
    /// Reveals do this themselves, `exclude` must be the cell the next reveal opens.
    #[cfg(test)]
    pub(crate) fn place_mines(&mut self, exclude: Coord2) -> Result<()> {
        let exclude = self.config.validate_coords(exclude)?;
        self.place_mines_at(exclude);
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.reveal_cell(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellMark::*;
        use MarkOutcome::*;

        let coords = self.config.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(NoChange);
        }

        Ok(match self.marks[coords.to_nd_index()] {
            Hidden => {
                self.marks[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                self.marks[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// All safe cells are revealed, flags play no part in it.
    pub fn check_win(&self) -> bool {
        !matches!(self.state, BoardState::Lost)
            && self.revealed_count == self.config.safe_cells()
    }

    /// First cell in row-major order that is hidden, unflagged and safe.
    ///
    /// Before mines are placed nothing is known to be a mine, so this is the first hidden cell.
    pub fn hint_target(&self) -> Option<Coord2> {
        if self.state.is_finished() {
            return None;
        }

        iter_coords(self.size()).find(|&coords| {
            self.marks[coords.to_nd_index()] == CellMark::Hidden
                && !(self.mines_placed && self.layout.contains_mine(coords))
        })
    }

    /// Reveals the [`hint_target`](Self::hint_target), if there is one.
    ///
    /// On an unstarted board mines are placed around the first candidate before picking the cell,
    /// so a hint never opens a mine even when the placer ignores the excluded cell.
    pub fn hint(&mut self) -> RevealOutcome {
        if !self.mines_placed {
            if let Some(first) = self.hint_target() {
                self.place_mines_at(first);
            }
        }

        match self.hint_target() {
            Some(coords) => {
                log::debug!("Hint reveals {:?}", coords);
                self.reveal_cell(coords)
            }
            None => RevealOutcome::NoChange,
        }
    }

    fn view(&self, coords: Coord2) -> CellView {
        CellView::new(self.layout[coords], self.marks[coords.to_nd_index()])
    }

    fn place_mines_at(&mut self, exclude: Coord2) {
        if self.mines_placed {
            log::warn!("Mines were already placed, ignoring placement around {:?}", exclude);
            return;
        }

        let layout = self.placer.place(self.config, exclude);
        self.mines_placed = true;
        if layout.size() != self.config.size {
            log::error!(
                "Placed layout size {:?} does not fit the {:?} board, playing without mines",
                layout.size(),
                self.config.size
            );
            self.config = BoardConfig::new_unchecked(self.config.size, 0);
            return;
        }
        if layout.board_config() != self.config {
            log::warn!(
                "Placed layout {:?} differs from {:?}, using the placed one",
                layout.board_config(),
                self.config
            );
            self.config = layout.board_config();
        }
        self.layout = layout;
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() || self.marks[coords.to_nd_index()] != CellMark::Hidden {
            return RevealOutcome::NoChange;
        }

        if !self.mines_placed {
            self.place_mines_at(coords);
        }
        self.mark_started();

        if self.layout.contains_mine(coords) {
            self.open(coords);
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        let mut to_visit: SmallVec<[Coord2; 32]> = smallvec![coords];
        while let Some(visit_coords) = to_visit.pop() {
            // revealed and flagged cells are never descended into again
            if self.marks[visit_coords.to_nd_index()] != CellMark::Hidden {
                continue;
            }

            self.open(visit_coords);
            log::trace!(
                "Opened {:?}, value: {:?}",
                visit_coords,
                self.layout[visit_coords]
            );

            if self.layout[visit_coords] == CellValue::Count(0) {
                let marks = &self.marks;
                to_visit.extend(
                    self.layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| marks[pos.to_nd_index()] == CellMark::Hidden),
                );
            }
        }

        if self.check_win() {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn open(&mut self, coords: Coord2) {
        self.marks[coords.to_nd_index()] = CellMark::Revealed;
        self.revealed_count += 1;
    }

    fn mark_started(&mut self) {
        if matches!(self.state, BoardState::Unstarted) {
            log::debug!("Board {:?} started", self.config.size);
            self.state = BoardState::InProgress;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            BoardState::Won
        } else {
            BoardState::Lost
        };
        log::debug!("Board ended: {:?}", self.state);

        if !won {
            self.show_mines();
        }
    }

    /// Flagged mines keep their flag, every other mine is opened.
    fn show_mines(&mut self) {
        for index in 0..self.layout.mines().len() {
            let coords = self.layout.mines()[index];
            if self.marks[coords.to_nd_index()] == CellMark::Hidden {
                self.open(coords);
            }
        }
    }
}
