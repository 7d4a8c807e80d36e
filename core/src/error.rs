use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimension,
    #[error("Start probability must be within [0, 1]")]
    InvalidProbability,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Invalid cell character {0:?}")]
    InvalidCell(char),
    #[error("Saved game state does not match its board")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
