//! The move engine: every direction is normalised onto a leftward slide by
//! rotating the board, collapsed row by row, then rotated back.

use crate::board::SIDE;
use crate::tile::{self, Cell};
use crate::{Board, Coord, Direction, Score};

const N: usize = SIDE as usize;

/// What a single slide did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True iff any cell differs from the pre-slide board.
    pub changed: bool,
    /// Sum of the values of tiles created by merges during this slide.
    pub score_delta: Score,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        self.changed
    }
}

/// Clockwise quarter turns that map `direction` onto a leftward slide.
///
/// The mapping is coupled to the rotation being clockwise: LEFT needs none,
/// DOWN one, RIGHT two, UP three.
const fn rotations_for(direction: Direction) -> u32 {
    match direction {
        Direction::Left => 0,
        Direction::Down => 1,
        Direction::Right => 2,
        Direction::Up => 3,
    }
}

/// Slides and merges all tiles toward `direction`.
///
/// Does not spawn tiles and does not detect the end of the game; the
/// session controller does both.
pub fn apply(board: &mut Board, direction: Direction) -> MoveOutcome {
    let turns = rotations_for(direction);
    board.rotate_cw(turns);
    let outcome = collapse_left(board);
    board.rotate_cw((4 - turns) % 4);
    outcome
}

/// Collapses every row toward column 0, enforcing the single-merge rule:
/// a tile created by a merge cannot merge again during the same slide.
fn collapse_left(board: &mut Board) -> MoveOutcome {
    let mut changed = false;
    let mut score_delta: Score = 0;

    for i in 0..SIDE {
        let old_row: [Cell; N] = core::array::from_fn(|j| board.get((i, j as Coord)));
        let mut new_row = [tile::EMPTY; N];
        let mut pos = 0;
        let mut merged_last = false;

        for &cell in old_row.iter().filter(|&&cell| !tile::is_empty(cell)) {
            if pos > 0 && new_row[pos - 1] == cell && !merged_last {
                new_row[pos - 1] = tile::merged(cell);
                score_delta += new_row[pos - 1];
                merged_last = true;
            } else {
                new_row[pos] = cell;
                pos += 1;
                merged_last = false;
            }
        }

        // a shift without merges still counts as a change, so compare
        // structurally instead of tracking moves inline
        if new_row != old_row {
            changed = true;
            for (j, &cell) in new_row.iter().enumerate() {
                board.set((i, j as Coord), cell);
            }
        }
    }

    MoveOutcome {
        changed,
        score_delta,
    }
}
