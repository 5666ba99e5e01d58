use rayon::prelude::*;

use reversi_core::{perft, Board, Player};

/// Known game-tree node counts from the starting position. No forced
/// passes occur this early, so the totals match the classical Othello
/// movegen numbers.
const EXPECTED: [(u8, u64); 6] = [(1, 4), (2, 12), (3, 56), (4, 244), (5, 1396), (6, 8200)];

#[test]
fn perft_matches_known_node_counts() {
    EXPECTED.par_iter().for_each(|&(depth, expected)| {
        let got = perft(&Board::new(), depth);
        assert_eq!(got, expected, "perft mismatch at depth {}", depth);
    });
}

#[test]
fn perft_is_opener_symmetric() {
    // The opening position is point-symmetric, so the machine opening
    // produces the same node counts as the human opening.
    let machine_opens = Board::new().restarted_with(Player::Machine);
    EXPECTED.par_iter().for_each(|&(depth, expected)| {
        assert_eq!(perft(&machine_opens, depth), expected);
    });
}
