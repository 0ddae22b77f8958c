use crate::{Board, Coord2, Result};

pub use random::*;

mod random;

/// Strategy that places a freshly spawned tile on the board.
pub trait TileSpawner {
    /// Writes one new tile into an empty cell and returns where it landed.
    ///
    /// Fails with [`crate::GameError::BoardFull`] when no empty cell exists.
    fn spawn(&mut self, board: &mut Board) -> Result<Coord2>;
}
