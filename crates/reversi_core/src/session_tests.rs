use super::*;
use crate::movegen;
use crate::types::{DEFAULT_LEVEL, SIZE};

/// Minimal engine for session tests: plays the first legal move in
/// row-major order.
struct FirstMoveEngine;

impl Engine for FirstMoveEngine {
    fn machine_move(&mut self, board: &Board) -> Result<Board, GameError> {
        if board.game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if board.next() != Player::Machine {
            return Err(GameError::OutOfTurn(board.next()));
        }
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                if let Some(next) = movegen::move_for_next_player(board, row, col) {
                    return Ok(next);
                }
            }
        }
        unreachable!("machine to move on a live board must have a legal move");
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

#[test]
fn test_new_session_defaults() {
    let session = Session::new();
    assert_eq!(session.next(), Player::Human);
    assert_eq!(session.board().level(), DEFAULT_LEVEL);
    assert_eq!(session.board().taken_fields(), 4);
}

#[test]
fn test_make_move_commits_the_board() {
    let mut session = Session::new();
    assert_eq!(session.make_move(4, 3), Ok(true));
    assert_eq!(session.board().get_slot(4, 3), Ok(Some(Player::Human)));
    assert_eq!(session.next(), Player::Machine);
}

#[test]
fn test_rejected_move_leaves_the_board() {
    let mut session = Session::new();
    assert_eq!(session.make_move(1, 1), Ok(false));
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_new_game_keeps_opener_and_level() {
    let mut session = Session::new();
    session.set_level(6).unwrap();
    session.make_move(4, 3).unwrap();

    session.new_game();
    assert_eq!(session.board().level(), 6);
    assert_eq!(session.board().first_player(), Player::Human);
    assert_eq!(session.board().taken_fields(), 4);
}

#[test]
fn test_switch_opener_flips_and_restarts() {
    let mut session = Session::new();
    session.set_level(4).unwrap();

    session.switch_opener();
    assert_eq!(session.board().first_player(), Player::Machine);
    assert_eq!(session.next(), Player::Machine);
    assert_eq!(session.board().level(), 4);

    session.switch_opener();
    assert_eq!(session.board().first_player(), Player::Human);
}

#[test]
fn test_machine_move_commits_the_chosen_board() {
    let mut session = Session::new();
    session.switch_opener();

    let mut engine = FirstMoveEngine;
    let board = session.machine_move(&mut engine).unwrap().clone();
    assert_eq!(board.next(), Player::Human);
    assert_eq!(board.machine_tiles(), 4);
    assert_eq!(session.board(), &board);
}

#[test]
fn test_machine_move_out_of_turn_leaves_the_board() {
    let mut session = Session::new();
    let before = session.board().clone();

    let mut engine = FirstMoveEngine;
    assert_eq!(
        session.machine_move(&mut engine).err(),
        Some(GameError::OutOfTurn(Player::Human))
    );
    assert_eq!(session.board(), &before);
}

#[test]
fn test_set_level_propagates_errors() {
    let mut session = Session::new();
    assert_eq!(
        session.set_level(0),
        Err(GameError::LevelOutOfRange { level: 0 })
    );
    assert_eq!(session.board().level(), DEFAULT_LEVEL);
}
