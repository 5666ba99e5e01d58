use std::fmt;

use crate::errors::GameError;
use crate::movegen;
use crate::types::{Outcome, Player, DEFAULT_LEVEL, MAX_LEVEL, NUM_FIELDS, SIZE};

/// Complete state of one game position.
///
/// Boards are value snapshots: every completed move produces a fresh
/// `Board` while the input stays valid and unmodified. A search tree can
/// therefore hold many board versions at once without aliasing.
///
/// Rows and columns are 1-indexed, `1..=SIZE`, row 1 being the top row of
/// the canonical rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [Option<Player>; NUM_FIELDS],
    first_player: Player,
    pub(crate) next_player: Player,
    level: u8,
    pub(crate) game_over: bool,
}

impl Board {
    /// A fresh game with the default settings: the human opens, level 3.
    pub fn new() -> Self {
        Self::start(Player::Human, DEFAULT_LEVEL)
    }

    /// A fresh game carrying over this board's opener and level.
    pub fn restarted(&self) -> Self {
        Self::start(self.first_player, self.level)
    }

    /// A fresh game with the given opener, keeping this board's level.
    pub fn restarted_with(&self, first_player: Player) -> Self {
        Self::start(first_player, self.level)
    }

    fn start(first_player: Player, level: u8) -> Self {
        let mut board = Board {
            grid: [None; NUM_FIELDS],
            first_player,
            next_player: first_player,
            level,
            game_over: false,
        };

        // Center block, 1-indexed: the opener takes the off-diagonal.
        let median = SIZE / 2;
        board.put(median, median, first_player.inverse());
        board.put(median + 1, median, first_player);
        board.put(median, median + 1, first_player);
        board.put(median + 1, median + 1, first_player.inverse());
        board
    }

    /// Builds a board from its canonical rendering (one row per
    /// whitespace-separated token, `.`/`X`/`O` cells) with the given player
    /// to move. The game-over flag is derived from the position. Used by
    /// tests and tooling.
    ///
    /// # Panics
    /// Panics on malformed input or when `next_player` would be blocked on
    /// a live board; both are programming defects, not game conditions.
    pub fn from_text(text: &str, next_player: Player) -> Self {
        let rows: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rows.len(), SIZE, "expected {} rows of board text", SIZE);

        let mut grid = [None; NUM_FIELDS];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), SIZE, "expected {} cells in row {}", SIZE, r + 1);
            for (c, ch) in row.chars().enumerate() {
                grid[r * SIZE + c] = match ch {
                    '.' => None,
                    'X' => Some(Player::Human),
                    'O' => Some(Player::Machine),
                    _ => panic!("invalid cell character: {}", ch),
                };
            }
        }

        let mut board = Board {
            grid,
            first_player: next_player,
            next_player,
            level: DEFAULT_LEVEL,
            game_over: false,
        };
        let next_blocked = !movegen::has_legal_move(&board, next_player);
        let other_blocked = !movegen::has_legal_move(&board, next_player.inverse());
        assert!(
            !next_blocked || other_blocked,
            "next player must not be blocked while the opponent can move"
        );
        board.game_over = next_blocked && other_blocked;
        board
    }

    /// The player who opened the game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// The player who is to move. Not meaningful once the game is over.
    pub fn next(&self) -> Player {
        self.next_player
    }

    /// Current search depth of the machine.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Whether neither player has a legal move left.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Sets the machine's search depth for subsequent games and moves.
    pub fn set_level(&mut self, level: i32) -> Result<(), GameError> {
        if (1..=MAX_LEVEL as i32).contains(&level) {
            self.level = level as u8;
            Ok(())
        } else {
            Err(GameError::LevelOutOfRange { level })
        }
    }

    /// Content of the field at 1-indexed (row, col); `None` is empty.
    pub fn get_slot(&self, row: usize, col: usize) -> Result<Option<Player>, GameError> {
        if Self::in_range(row) && Self::in_range(col) {
            Ok(self.slot(row, col))
        } else {
            Err(GameError::CoordinatesOutOfRange { row, col })
        }
    }

    /// Unvalidated variant of [`get_slot`](Self::get_slot) for scan loops.
    ///
    /// # Panics
    /// Panics outside `1..=SIZE`; passing such coordinates is a defect.
    pub fn slot(&self, row: usize, col: usize) -> Option<Player> {
        assert!(Self::in_range(row) && Self::in_range(col));
        self.grid[Self::index(row, col)]
    }

    /// Number of discs `player` holds.
    pub fn count_tiles(&self, player: Player) -> usize {
        self.grid.iter().filter(|slot| **slot == Some(player)).count()
    }

    /// Number of discs the human holds.
    pub fn human_tiles(&self) -> usize {
        self.count_tiles(Player::Human)
    }

    /// Number of discs the machine holds.
    pub fn machine_tiles(&self) -> usize {
        self.count_tiles(Player::Machine)
    }

    /// Number of occupied fields.
    pub fn taken_fields(&self) -> usize {
        self.grid.iter().filter(|slot| slot.is_some()).count()
    }

    /// Executes a move of the human at 1-indexed (row, col).
    ///
    /// Returns `Ok(Some(board))` with the follow-up position when the move
    /// is legal, and `Ok(None)` when the rules reject it (no capturing
    /// direction from that field). This board is never modified.
    pub fn make_move(&self, row: usize, col: usize) -> Result<Option<Board>, GameError> {
        if !Self::in_range(row) || !Self::in_range(col) {
            return Err(GameError::CoordinatesOutOfRange { row, col });
        }
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if self.next_player != Player::Human {
            return Err(GameError::OutOfTurn(self.next_player));
        }
        Ok(movegen::move_for_next_player(self, row, col))
    }

    /// The winner of a finished game, or [`Outcome::Draw`] on equal disc
    /// counts. Whoever holds more discs wins.
    pub fn winner(&self) -> Result<Outcome, GameError> {
        if !self.game_over {
            return Err(GameError::GameNotOver);
        }
        let human = self.human_tiles();
        let machine = self.machine_tiles();
        Ok(if human > machine {
            Outcome::Winner(Player::Human)
        } else if machine > human {
            Outcome::Winner(Player::Machine)
        } else {
            Outcome::Draw
        })
    }

    pub(crate) fn in_range(coord: usize) -> bool {
        (1..=SIZE).contains(&coord)
    }

    pub(crate) fn index(row: usize, col: usize) -> usize {
        (row - 1) * SIZE + (col - 1)
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, player: Player) {
        self.grid[Self::index(row, col)] = Some(player);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical rendering: one line per row, `.` empty, `X` human,
/// `O` machine, no separators, a newline after every row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let ch = match self.slot(row, col) {
                    None => '.',
                    Some(player) => player.symbol(),
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
