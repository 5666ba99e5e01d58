//! Legality checking, capture execution and turn resolution.
//!
//! A move is legal iff it has at least one capturing direction: a
//! contiguous run of opposing discs starting right next to the placed disc
//! and terminated by an own disc, with no empty gap. Executing a move flips
//! every such run and then resolves whose turn it is, folding forced
//! passes into the move itself.

use crate::board::Board;
use crate::types::{Direction, Player, SIZE};

/// Directions in which placing a disc of `player` at 1-indexed (row, col)
/// would flip at least one opposing run. An empty result means the move is
/// illegal; an occupied target yields an empty result, not an error.
pub fn legal_directions(board: &Board, row: usize, col: usize, player: Player) -> Vec<Direction> {
    debug_assert!(Board::in_range(row) && Board::in_range(col));

    if board.slot(row, col).is_some() {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter(|&dir| captures_along(board, row, col, player, dir))
        .collect()
}

/// Executes a move for whichever player is to move, without any turn or
/// game-over checking. This is the raw executor behind
/// [`Board::make_move`] and the search tree; front-end callers should go
/// through the checked board API instead.
///
/// Returns `None` when the move has no capturing direction. Otherwise the
/// returned board has the disc placed, every run flipped and the turn
/// resolved per the pass rules; `board` itself is untouched.
pub fn move_for_next_player(board: &Board, row: usize, col: usize) -> Option<Board> {
    debug_assert!(!board.game_over);

    let mover = board.next_player;
    let directions = legal_directions(board, row, col, mover);
    if directions.is_empty() {
        return None;
    }

    let mut next = board.clone();
    next.put(row, col, mover);
    for dir in directions {
        flip_run(&mut next, row, col, dir, mover);
    }
    advance_turn(&mut next, mover);
    Some(next)
}

/// Number of fields on which `player` could legally move.
pub fn number_of_legal_moves(board: &Board, player: Player) -> usize {
    let mut count = 0;
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            if is_legal(board, row, col, player) {
                count += 1;
            }
        }
    }
    count
}

/// Short-circuit variant of [`number_of_legal_moves`] for the pass check.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            if is_legal(board, row, col, player) {
                return true;
            }
        }
    }
    false
}

fn is_legal(board: &Board, row: usize, col: usize, player: Player) -> bool {
    board.slot(row, col).is_none()
        && Direction::ALL
            .into_iter()
            .any(|dir| captures_along(board, row, col, player, dir))
}

/// Walks outward from (row, col) and reports whether the line holds a
/// non-empty run of opposing discs terminated by an own disc. Runs that
/// reach an empty field or the board edge capture nothing.
fn captures_along(board: &Board, row: usize, col: usize, player: Player, dir: Direction) -> bool {
    let (dr, dc) = dir.delta();
    let mut r = row as i32 + dr as i32;
    let mut c = col as i32 + dc as i32;
    let mut run = 0;

    while in_bounds(r, c) {
        match board.slot(r as usize, c as usize) {
            Some(p) if p == player.inverse() => run += 1,
            Some(_) => return run > 0,
            None => return false,
        }
        r += dr as i32;
        c += dc as i32;
    }
    false
}

/// Flips the opposing run next to (row, col) along `dir`. The direction
/// must have been reported legal for `mover`; the run is then guaranteed
/// to be terminated by an own disc, which stays untouched.
fn flip_run(board: &mut Board, row: usize, col: usize, dir: Direction, mover: Player) {
    let (dr, dc) = dir.delta();
    let mut r = row as i32 + dr as i32;
    let mut c = col as i32 + dc as i32;

    while in_bounds(r, c) {
        match board.slot(r as usize, c as usize) {
            Some(p) if p == mover.inverse() => board.put(r as usize, c as usize, mover),
            _ => break,
        }
        r += dr as i32;
        c += dc as i32;
    }
}

/// Alternates the mover after a completed move. A blocked opponent is
/// skipped (pass); when the original mover is blocked as well, the game is
/// over and the mover stays the blocked opponent.
fn advance_turn(board: &mut Board, mover: Player) {
    board.next_player = mover.inverse();
    if !has_legal_move(board, board.next_player) {
        if has_legal_move(board, mover) {
            board.next_player = mover;
        } else {
            board.game_over = true;
        }
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (1..=SIZE as i32).contains(&row) && (1..=SIZE as i32).contains(&col)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
