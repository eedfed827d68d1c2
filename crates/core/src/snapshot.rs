use serde::{Deserialize, Serialize};

use crate::types::{Outcome, Player, BOARD_COLUMNS, BOARD_ROWS, LINE_LENGTH};

/// Plain-data copy of a game for presentation layers and test tooling.
///
/// Board markers are 0 for empty, 1 or 2 for a player; `outcome` uses the
/// [`Outcome::code`] numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub turn: u8,
    pub pieces_played: u8,
    pub outcome: u8,
    pub winning_line: Option<[u8; LINE_LENGTH]>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];
        self.turn = Player::One.marker();
        self.pieces_played = 0;
        self.outcome = Outcome::InProgress.code();
        self.winning_line = None;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_code(self.outcome)
    }

    pub fn playable(&self) -> bool {
        self.outcome() == Some(Outcome::InProgress)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            turn: 0,
            pieces_played: 0,
            outcome: 0,
            winning_line: None,
        };
        s.clear();
        s
    }
}
