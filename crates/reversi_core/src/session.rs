//! Session state for a front-end driving one game at a time.

use crate::board::Board;
use crate::errors::GameError;
use crate::types::Player;
use crate::Engine;

/// Owns the current board of a running game.
///
/// Front-end command handlers operate on a `Session` instead of a global
/// mutable game: every successful move commits the follow-up board, failed
/// operations leave the session untouched.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
}

impl Session {
    /// Starts a session with the default game settings.
    pub fn new() -> Self {
        Session {
            board: Board::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Discards the current game and starts a fresh one, keeping the
    /// opener and level of the old game.
    pub fn new_game(&mut self) {
        self.board = self.board.restarted();
    }

    /// Starts a fresh game with the opposite opener, keeping the level.
    pub fn switch_opener(&mut self) {
        self.board = self.board.restarted_with(self.board.first_player().inverse());
    }

    /// Sets the machine's search depth for the current game.
    pub fn set_level(&mut self, level: i32) -> Result<(), GameError> {
        self.board.set_level(level)
    }

    /// Plays a human move. `Ok(false)` means the rules rejected the move
    /// and the board is unchanged; the caller decides how to tell the user.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        match self.board.make_move(row, col)? {
            Some(board) => {
                self.board = board;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Lets `engine` pick and commit the machine's move.
    pub fn machine_move(&mut self, engine: &mut dyn Engine) -> Result<&Board, GameError> {
        self.board = engine.machine_move(&self.board)?;
        Ok(&self.board)
    }

    /// Whose turn it is on the current board.
    pub fn next(&self) -> Player {
        self.board.next()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
