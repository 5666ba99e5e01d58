//! Full-width minimax over an eagerly built game tree.
//!
//! No pruning and no transposition table: every continuation down to the
//! requested depth is expanded and scored, so move selection is exactly
//! reproducible.

use reversi_core::{move_for_next_player, Board, Player, SIZE};

use crate::eval::evaluate;

/// One expanded position: the board, the player whose move produced it,
/// and every position one legal move away.
struct Node {
    board: Board,
    last_mover: Player,
    children: Vec<Node>,
}

impl Node {
    fn expand(board: Board, last_mover: Player, depth: u8, nodes: &mut u64) -> Node {
        *nodes += 1;
        let children = if depth > 0 && !board.game_over() {
            expand_children(&board, depth, nodes)
        } else {
            Vec::new()
        };
        Node {
            board,
            last_mover,
            children,
        }
    }

    /// Minimax backup: this node's own evaluation plus the extremal child
    /// score. The human minimizes, the machine maximizes.
    fn score(&self) -> f64 {
        let extremal = match self.board.next() {
            Player::Human => f64::min,
            Player::Machine => f64::max,
        };
        let mut score = evaluate(&self.board, self.last_mover);
        if let Some(extreme) = self.children.iter().map(Node::score).reduce(extremal) {
            score += extreme;
        }
        score
    }
}

/// Child nodes in row-major move order, each expanded `depth - 1` further
/// plies.
fn expand_children(board: &Board, depth: u8, nodes: &mut u64) -> Vec<Node> {
    let mut children = Vec::new();
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            if let Some(next) = move_for_next_player(board, row, col) {
                children.push(Node::expand(next, board.next(), depth - 1, nodes));
            }
        }
    }
    children
}

/// Searches `depth` plies ahead and returns the best follow-up position
/// for the player to move, together with its backed-up score.
///
/// Ties go to the move generated first, i.e. the smallest (row, col) in
/// row-major order. Returns `None` only when the player to move has no
/// legal move, which cannot happen on a live board.
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64) -> Option<(Board, f64)> {
    debug_assert!(depth > 0);
    debug_assert!(!board.game_over());

    let mut children = expand_children(board, depth, nodes);

    let mut best: Option<(usize, f64)> = None;
    for (index, child) in children.iter().enumerate() {
        let score = child.score();
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, score)| (children.swap_remove(index).board, score))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
