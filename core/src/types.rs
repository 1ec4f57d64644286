/// Single coordinate axis used for board rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Row-major iteration over every coordinate of a `size` grid.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

/// The up-to-8 in-bounds neighbors of a cell in row-major order, without wraparound.
///
/// Walks the 3x3 window around `center` clipped to the board, skipping the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    row: u16,
    col: u16,
    row_end: u16,
    col_start: u16,
    col_end: u16,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = (u16::from(center.0), u16::from(center.1));
        let row_start = row.saturating_sub(1);
        let col_start = col.saturating_sub(1);
        let row_end = (row + 2).min(bounds.0.into());
        let col_end = (col + 2).min(bounds.1.into());
        Self {
            center,
            // an empty column span means there is nothing to visit at all
            row: if col_start < col_end { row_start } else { row_end },
            col: col_start,
            row_end,
            col_start,
            col_end,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.row_end {
            // window never leaves the board, so both fit in a `Coord`
            let pos = (self.row as Coord, self.col as Coord);
            self.col += 1;
            if self.col >= self.col_end {
                self.col = self.col_start;
                self.row += 1;
            }
            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (5, 5)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(NeighborIter::new((0, 2), (5, 5)).count(), 5);
        assert_eq!(NeighborIter::new((4, 2), (5, 5)).count(), 5);
        assert_eq!(NeighborIter::new((2, 4), (5, 5)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((2, 2), (5, 5)).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn far_corner_stays_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((15, 29), (16, 30)).collect();

        assert_eq!(neighbors, [(14, 28), (14, 29), (15, 28)]);
        assert_eq!(NeighborIter::new((254, 254), (255, 255)).count(), 3);
        assert_eq!(NeighborIter::new((0, 0), (3, 0)).count(), 0);
    }

    #[test]
    fn iter_coords_is_row_major() {
        let coords: Vec<_> = iter_coords((2, 3)).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
