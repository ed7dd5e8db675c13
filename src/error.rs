use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No game in progress, start a new game first")]
    NotStarted,
    #[error("Tile {index} is out of bounds for a board of {len} tiles")]
    OutOfBounds { index: usize, len: usize },
    #[error("Invalid board size {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },
    #[error("Layout has {actual} cells but the board needs {expected}")]
    LayoutMismatch { expected: usize, actual: usize },
    #[error("Unknown layout character {0:?}, expected '*' or '.'")]
    InvalidLayoutChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected two coordinates: x y")]
    MissingCoordinate,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

/// Failures that end the interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
