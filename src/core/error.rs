//! Error types for the engine.

use thiserror::Error;

use super::player::Player;

/// Why a move was not applied.
///
/// Checks run in declaration order: a finished game is reported before any
/// coordinate problem, an off-board anchor before a missing partner cell,
/// and both before occupancy.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("game already over")]
    GameAlreadyOver,

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("no room for a {player} domino anchored at ({row}, {col})")]
    WrongOrientationUnavailable { player: Player, row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Invalid game configuration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is too small (minimum {min})")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is too large (maximum {max})")]
    BoardTooLarge { size: usize, max: usize },
}

/// Failure to parse a board from its text form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board text has no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    NotSquare { row: usize, got: usize, expected: usize },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCell { character: char, row: usize, col: usize },

    #[error("board of size {size} needs {expected} cells, got {got}")]
    CellCount { size: usize, expected: usize, got: usize },

    #[error("{player} cells starting at ({row}, {col}) cannot be paired into dominoes")]
    UnpairedCells { player: Player, row: usize, col: usize },
}
