use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine shown after the game was lost.
    Mine,
    /// The mine that ended the game.
    Exploded,
}

/// Player-visible state of a board, the renderer redraws from this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub state: BoardState,
    pub mines_left: isize,
    pub cells: Array2<VisibleCell>,
}

impl BoardSnapshot {
    pub fn from_board<P: MinePlacer>(board: &Board<P>) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), VisibleCell::Hidden);

        for (coords, view) in board.iter_cells() {
            cells[coords.to_nd_index()] = match view {
                CellView { flagged: true, .. } => VisibleCell::Flagged,
                CellView { revealed: false, .. } => VisibleCell::Hidden,
                CellView {
                    value: CellValue::Count(count),
                    ..
                } => VisibleCell::Revealed(count),
                CellView {
                    value: CellValue::Mine,
                    ..
                } if board.triggered_mine() == Some(coords) => VisibleCell::Exploded,
                CellView {
                    value: CellValue::Mine,
                    ..
                } => VisibleCell::Mine,
            };
        }

        Self {
            size,
            state: board.state(),
            mines_left: board.mines_left(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<VisibleCell> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(self.cells[coords.to_nd_index()])
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_maps_revealed_and_flagged_cells() {
        let mut board = Board::with_mine_coords((2, 2), &[(0, 0)]).unwrap();

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.state, BoardState::InProgress);
        assert_eq!(snapshot.cell((1, 1)), Ok(VisibleCell::Revealed(1)));
        assert_eq!(snapshot.cell((0, 0)), Ok(VisibleCell::Flagged));
        assert_eq!(snapshot.cell((0, 1)), Ok(VisibleCell::Hidden));
        assert_eq!(snapshot.cell((2, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn lost_board_shows_mines_and_the_exploded_one() {
        let mut board = Board::with_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        board.reveal((1, 1)).unwrap();
        board.reveal((2, 2)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);

        assert_eq!(snapshot.state, BoardState::Lost);
        assert_eq!(snapshot.cells[[2, 2]], VisibleCell::Exploded);
        assert_eq!(snapshot.cells[[0, 0]], VisibleCell::Mine);
        assert_eq!(snapshot.cells[[0, 1]], VisibleCell::Hidden);
    }

    #[test]
    fn hidden_mines_do_not_leak() {
        let mut board = Board::with_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        board.reveal((0, 2)).unwrap();

        let snapshot = BoardSnapshot::from_board(&board);

        assert!(!snapshot.cells.iter().any(|cell| matches!(
            cell,
            VisibleCell::Mine | VisibleCell::Exploded
        )));
    }

    #[test]
    fn serializes_to_json() {
        let board = Board::with_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let snapshot = BoardSnapshot::from_board(&board);

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["state"], "Unstarted");
        assert_eq!(json["mines_left"], 1);
        let back: BoardSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
