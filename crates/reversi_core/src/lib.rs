//! Core Reversi/Othello game logic.
//!
//! The crate provides the rules of the game only: board snapshots,
//! legality checking, move execution and turn/pass resolution. Picking the
//! machine's move is the job of an [`Engine`] implementation (see the
//! `minimax_engine` crate); rendering and command handling belong to a
//! front-end driving a [`Session`].

pub mod board;
pub mod errors;
pub mod movegen;
pub mod perft;
pub mod session;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use errors::*;
pub use movegen::*;
pub use perft::perft;
pub use session::*;
pub use types::*;

/// Trait implemented by every machine-move provider.
///
/// Implementations must not mutate the board they are given: the chosen
/// follow-up position is returned as a fresh value.
pub trait Engine {
    /// Picks and executes the machine's move on `board`.
    ///
    /// Fails with [`GameError::GameAlreadyOver`] on a finished board and
    /// with [`GameError::OutOfTurn`] when the human is to move. Blocks the
    /// caller until the search is complete.
    fn machine_move(&mut self, board: &Board) -> Result<Board, GameError>;

    /// Engine name for identification.
    fn name(&self) -> &str;
}
