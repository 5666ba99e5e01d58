//! Plays complete games with the engine in the loop to check that search,
//! rules and session plumbing agree from the first move to the outcome.

use minimax_engine::MinimaxEngine;
use reversi_core::{move_for_next_player, Board, Outcome, Player, Session, SIZE};

/// First field the player to move can legally play, in row-major order.
fn first_field(board: &Board) -> Option<(usize, usize)> {
    for row in 1..=SIZE {
        for col in 1..=SIZE {
            if move_for_next_player(board, row, col).is_some() {
                return Some((row, col));
            }
        }
    }
    None
}

#[test]
fn test_engine_finishes_a_full_game_against_a_greedy_human() {
    let mut session = Session::new();
    session.set_level(2).unwrap();
    let mut engine = MinimaxEngine::new();

    let mut moves = 0;
    while !session.board().game_over() {
        moves += 1;
        assert!(moves <= 60, "a game cannot outlast the empty fields");

        match session.next() {
            Player::Human => {
                let (row, col) = first_field(session.board()).expect("live board offers a move");
                assert_eq!(session.make_move(row, col), Ok(true));
            }
            Player::Machine => {
                session.machine_move(&mut engine).unwrap();
                assert!(engine.nodes() > 0);
            }
        }
    }

    let board = session.board();
    assert_eq!(board.human_tiles() + board.machine_tiles(), board.taken_fields());
    match board.winner().unwrap() {
        Outcome::Winner(player) => {
            assert!(board.count_tiles(player) > board.count_tiles(player.inverse()));
        }
        Outcome::Draw => assert_eq!(board.human_tiles(), board.machine_tiles()),
    }
}

#[test]
fn test_machine_opening_game_reaches_an_outcome_too() {
    let mut session = Session::new();
    session.set_level(1).unwrap();
    session.switch_opener();
    let mut engine = MinimaxEngine::new();

    while !session.board().game_over() {
        match session.next() {
            Player::Human => {
                let (row, col) = first_field(session.board()).unwrap();
                session.make_move(row, col).unwrap();
            }
            Player::Machine => {
                session.machine_move(&mut engine).unwrap();
            }
        }
    }
    assert!(session.board().winner().is_ok());
}
