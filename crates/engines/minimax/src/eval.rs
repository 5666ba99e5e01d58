//! Board evaluation: positional weights, mobility and potential mobility.

use reversi_core::{number_of_legal_moves, Board, Direction, Player, NUM_FIELDS, SIZE};

/// Per-field weights, mirror-symmetric in both axes. Corners dominate
/// everything; the fields touching a corner are poison while the corner
/// itself is open. Hardcoded for the 8x8 board.
const FIELD_SCORES: [[i32; SIZE]; SIZE] = [
    [9999, 5, 500, 200, 200, 500, 5, 9999],
    [5, 1, 50, 150, 150, 50, 1, 5],
    [500, 50, 250, 100, 100, 250, 50, 500],
    [200, 150, 100, 50, 50, 100, 150, 200],
    [200, 150, 100, 50, 50, 100, 150, 200],
    [500, 50, 250, 100, 100, 250, 50, 500],
    [5, 1, 50, 150, 150, 50, 1, 5],
    [9999, 5, 500, 200, 200, 500, 5, 9999],
];

/// Scores `board` from the perspective of `player`.
///
/// Sum of three terms: the positional field score, the current mobility
/// and the potential mobility. The two mobility terms are scaled down as
/// the board fills up.
pub fn evaluate(board: &Board, player: Player) -> f64 {
    // The clamp only matters on a completely empty board, which real play
    // never reaches; division by zero must still be impossible.
    let taken = board.taken_fields().max(1);
    field_score(board, player)
        + mobility_score(board, player, taken)
        + potential_score(board, player, taken)
}

fn field_score(board: &Board, player: Player) -> f64 {
    let mut own = 0;
    let mut enemy = 0;
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            match board.slot(row, col) {
                Some(p) if p == player => own += FIELD_SCORES[row - 1][col - 1],
                Some(_) => enemy += FIELD_SCORES[row - 1][col - 1],
                None => {}
            }
        }
    }
    f64::from(own) - 1.5 * f64::from(enemy)
}

fn mobility_score(board: &Board, player: Player, taken: usize) -> f64 {
    let own = number_of_legal_moves(board, player) as f64;
    let enemy = number_of_legal_moves(board, player.inverse()) as f64;
    (NUM_FIELDS as f64 / taken as f64) * (3.0 * own - 4.0 * enemy)
}

fn potential_score(board: &Board, player: Player, taken: usize) -> f64 {
    let mut own = 0;
    let mut enemy = 0;
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            match board.slot(row, col) {
                // Exposed frontier discs are a liability for their owner,
                // so each side scores the other side's frontier.
                Some(p) if p == player => enemy += empty_neighbors(board, row, col),
                Some(_) => own += empty_neighbors(board, row, col),
                None => {}
            }
        }
    }
    (NUM_FIELDS as f64 / (2.0 * taken as f64)) * (2.5 * own as f64 - 3.0 * enemy as f64)
}

/// Number of empty fields bordering (row, col); off-board neighbors do
/// not count.
fn empty_neighbors(board: &Board, row: usize, col: usize) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|dir| {
            let (dr, dc) = dir.delta();
            let r = row as i32 + i32::from(dr);
            let c = col as i32 + i32::from(dc);
            (1..=SIZE as i32).contains(&r)
                && (1..=SIZE as i32).contains(&c)
                && board.slot(r as usize, c as usize).is_none()
        })
        .count()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
