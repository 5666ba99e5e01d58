use thiserror::Error;

use crate::types::{Player, MAX_LEVEL, SIZE};

/// Errors surfaced by the board operations. All of them are recoverable by
/// the caller and leave the board involved untouched.
///
/// A rules-rejected move (in range, but no capturing direction) is not an
/// error: [`crate::Board::make_move`] reports it as `Ok(None)`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside `1..=SIZE` were passed to a board operation.
    #[error("row or col out of range, expected 1..={SIZE}: got ({row}, {col})")]
    CoordinatesOutOfRange { row: usize, col: usize },

    /// A level outside `1..=MAX_LEVEL` was requested.
    #[error("level out of range, expected 1..={MAX_LEVEL}: got {level}")]
    LevelOutOfRange { level: i32 },

    /// A move was attempted on a finished game.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// A player tried to move while the other one is to move.
    #[error("it is the {0}'s turn")]
    OutOfTurn(Player),

    /// The winner was queried while the game is still running.
    #[error("the game is not over yet")]
    GameNotOver,
}
