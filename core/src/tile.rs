//! Cell value vocabulary: `EMPTY` or a power of two >= 2.

/// A single board cell.
pub type Cell = u32;

pub const EMPTY: Cell = 0;

/// Value written by nine out of ten spawns.
pub const SPAWN_SMALL: Cell = 2;
pub const SPAWN_BIG: Cell = 4;

/// Probability that a spawn produces `SPAWN_BIG` instead of `SPAWN_SMALL`.
pub const BIG_SPAWN_CHANCE: f32 = 0.1;

pub const fn is_empty(cell: Cell) -> bool {
    cell == EMPTY
}

/// A valid non-empty tile value.
pub const fn is_tile(cell: Cell) -> bool {
    cell >= 2 && cell.is_power_of_two()
}

/// Value of the tile created by merging two `cell` tiles.
pub const fn merged(cell: Cell) -> Cell {
    cell * 2
}
