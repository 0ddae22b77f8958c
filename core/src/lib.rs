use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use input::*;
pub use slide::MoveOutcome;
pub use spawner::*;
pub use store::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod input;
pub mod slide;
mod spawner;
mod store;
pub mod tile;
mod types;

/// One of the four slide directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Outcome of feeding one direction to a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The board did not change: either the game is already over or the
    /// slide had nothing to move. No tile was spawned.
    NoOp,
    /// The board changed, the score grew by `score_delta` and a tile was
    /// spawned. `game_over` reports whether that spawn sealed the board.
    Moved { score_delta: Score, game_over: bool },
}

impl StepOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoOp => false,
            Self::Moved { .. } => true,
        }
    }
}
