//! Minimax Reversi engine.
//!
//! Searches the full game tree to the board's configured level and scores
//! leaves with a positional/mobility heuristic. Deliberately exhaustive:
//! the chosen move must match what an unpruned reference search would
//! pick, ties resolved in row-major move order.

pub mod eval;
pub mod search;

use std::time::Instant;

use tracing::debug;

use reversi_core::{Board, Engine, GameError, Player};

pub use eval::evaluate;
pub use search::pick_best_move;

/// Depth-bounded full-width minimax engine.
#[derive(Clone, Debug, Default)]
pub struct MinimaxEngine {
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes expanded by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn machine_move(&mut self, board: &Board) -> Result<Board, GameError> {
        if board.game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if board.next() != Player::Machine {
            return Err(GameError::OutOfTurn(board.next()));
        }

        self.nodes = 0;
        let start = Instant::now();
        let (chosen, score) = search::pick_best_move(board, board.level(), &mut self.nodes)
            .expect("machine to move on a live board must have a legal move");

        debug!(
            level = board.level(),
            nodes = self.nodes,
            score,
            elapsed = ?start.elapsed(),
            "search complete"
        );
        Ok(chosen)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}
