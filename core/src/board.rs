use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::tile::{self, Cell};
use crate::{Coord, Coord2, ToNdIndex};

/// Side length of the playing grid.
pub const SIDE: Coord = 4;

/// The square grid of cells. Owned by the session controller; the slide
/// engine and the spawner mutate it through crate-private access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// All-zero grid.
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((SIDE as usize, SIDE as usize)),
        }
    }

    /// Builds a board from row-major literals. Handy in tests and frontends.
    pub fn from_rows(rows: [[Cell; SIDE as usize]; SIDE as usize]) -> Self {
        let mut board = Self::empty();
        for (i, row) in rows.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                board.cells[[i, j]] = cell;
            }
        }
        board
    }

    pub fn side(&self) -> Coord {
        SIDE
    }

    pub fn get(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set(&mut self, coords: Coord2, value: Cell) {
        self.cells[coords.to_nd_index()] = value;
    }

    /// Coordinates of all empty cells, in row-major order.
    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| tile::is_empty(cell))
            .map(|((i, j), _)| (i as Coord, j as Coord))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| tile::is_empty(cell)).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Sum of all tile values on the board.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&cell| u64::from(cell)).sum()
    }

    /// Rotates by `times` clockwise quarter turns.
    ///
    /// One turn maps `new[j][N-1-i] = old[i][j]`; four turns compose to the
    /// identity.
    pub fn rotate_cw(&mut self, times: u32) {
        let n = SIDE as usize;
        for _ in 0..times % 4 {
            let mut rotated: Array2<Cell> = Array2::default((n, n));
            for ((i, j), &cell) in self.cells.indexed_iter() {
                rotated[[j, n - 1 - i]] = cell;
            }
            self.cells = rotated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_all_zero() {
        let board = Board::empty();
        assert_eq!(board.empty_count(), 16);
        assert!(!board.is_full());
        assert_eq!(board.tile_sum(), 0);
    }

    #[test]
    fn from_rows_matches_row_col_indexing() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 0, 8, 0],
            [0, 0, 0, 16],
        ]);
        assert_eq!(board.get((0, 0)), 2);
        assert_eq!(board.get((1, 1)), 4);
        assert_eq!(board.get((2, 2)), 8);
        assert_eq!(board.get((3, 3)), 16);
        assert_eq!(board.empty_count(), 12);
    }

    #[test]
    fn one_turn_maps_top_row_to_right_column() {
        let mut board = Board::from_rows([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        board.rotate_cw(1);
        // new[j][N-1-i] = old[i][j], so row 0 lands in column 3
        assert_eq!(board.get((0, 3)), 2);
        assert_eq!(board.get((1, 3)), 4);
        assert_eq!(board.get((2, 3)), 8);
        assert_eq!(board.get((3, 3)), 16);
    }

    #[test]
    fn four_turns_are_the_identity() {
        let board = Board::from_rows([
            [2, 4, 0, 2],
            [0, 8, 16, 0],
            [2, 0, 4, 32],
            [64, 2, 0, 128],
        ]);
        let mut rotated = board.clone();
        rotated.rotate_cw(4);
        assert_eq!(rotated, board);

        let mut in_two_parts = board.clone();
        in_two_parts.rotate_cw(3);
        in_two_parts.rotate_cw(1);
        assert_eq!(in_two_parts, board);
    }

    #[test]
    fn iter_empty_yields_zero_cells_only() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 4, 0],
            [0, 0, 0, 0],
        ]);
        let empties: Vec<_> = board.iter_empty().collect();
        assert_eq!(empties.len(), 14);
        assert!(!empties.contains(&(0, 0)));
        assert!(!empties.contains(&(2, 2)));
        assert!(empties.contains(&(3, 3)));
    }
}
