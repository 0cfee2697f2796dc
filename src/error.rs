use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    #[error("mine count exceeds the cells available outside the safe zone")]
    TooManyMines,
    #[error("mine coordinates fall outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
