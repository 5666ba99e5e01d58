use crate::board::Board;
use crate::movegen::move_for_next_player;
use crate::types::SIZE;

/// Pure node count of the game tree.
///
/// Counts all boards reachable from `board` in exactly `depth` applied
/// moves. Forced passes are folded into the preceding move, matching the
/// engine semantics; a finished board contributes no nodes below itself.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            if let Some(next) = move_for_next_player(board, row, col) {
                if next.game_over() {
                    nodes += u64::from(depth == 1);
                } else {
                    nodes += perft(&next, depth - 1);
                }
            }
        }
    }
    nodes
}
