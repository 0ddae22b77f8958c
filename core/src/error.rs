use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No empty cell left to spawn into")]
    BoardFull,
}

pub type Result<T> = core::result::Result<T, GameError>;
