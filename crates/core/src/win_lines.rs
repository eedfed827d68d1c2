//! Win-line table - every four-in-a-row window on the board
//!
//! The table is built once per process and shared by reference with every
//! game. Its order is fixed so win checks are reproducible:
//!
//! 1. Horizontal windows, row by row, left to right
//! 2. Vertical windows, column by column, top to bottom
//! 3. Forward diagonals `/`, anchored on the bottom-left cell
//! 4. Back diagonals `\`, anchored on the top-left cell
//!
//! When several lines complete at once, the first one in this order decides
//! the winner.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{
    Outcome, Player, BOARD_COLUMNS, BOARD_ROWS, LINE_LENGTH, MIN_PIECES_FOR_WIN, WIN_LINE_COUNT,
};

const WIDTH: i16 = BOARD_COLUMNS as i16;

/// Four board indices that win when one player owns all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([u8; LINE_LENGTH]);

impl WinLine {
    /// Line starting at `anchor` and advancing `step` indices per cell
    fn stepping(anchor: u8, step: i16) -> Self {
        let mut cells = [0u8; LINE_LENGTH];
        for (k, cell) in cells.iter_mut().enumerate() {
            *cell = (anchor as i16 + step * k as i16) as u8;
        }
        Self(cells)
    }

    pub fn cells(&self) -> [u8; LINE_LENGTH] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.iter().any(|&cell| cell as usize == index)
    }

    /// The player holding all four cells, if any
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let cells = board.cells();
        let first = cells[self.0[0] as usize]?;
        self.0[1..]
            .iter()
            .all(|&idx| cells[idx as usize] == Some(first))
            .then_some(first)
    }
}

/// Immutable table of all 69 win lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLines {
    lines: ArrayVec<WinLine, WIN_LINE_COUNT>,
}

impl WinLines {
    /// Build the table from scratch
    ///
    /// Prefer [`WinLines::shared`], which builds it at most once per process.
    pub fn compute() -> Self {
        let mut lines = ArrayVec::new();
        let last_start_col = BOARD_COLUMNS - LINE_LENGTH as u8;
        let last_start_row = BOARD_ROWS - LINE_LENGTH as u8;

        // Horizontal
        for row in 0..BOARD_ROWS {
            for col in 0..=last_start_col {
                lines.push(WinLine::stepping(row * BOARD_COLUMNS + col, 1));
            }
        }

        // Vertical
        for col in 0..BOARD_COLUMNS {
            for row in 0..=last_start_row {
                lines.push(WinLine::stepping(row * BOARD_COLUMNS + col, WIDTH));
            }
        }

        // Forward diagonal "/": up one row, right one column
        for col in 0..=last_start_col {
            for row in (LINE_LENGTH as u8 - 1)..BOARD_ROWS {
                lines.push(WinLine::stepping(row * BOARD_COLUMNS + col, 1 - WIDTH));
            }
        }

        // Back diagonal "\": down one row, right one column
        for col in 0..=last_start_col {
            for row in 0..=last_start_row {
                lines.push(WinLine::stepping(row * BOARD_COLUMNS + col, WIDTH + 1));
            }
        }

        Self { lines }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static WinLines {
        static TABLE: OnceLock<WinLines> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table = Self::compute();
            tracing::debug!(lines = table.len(), "win-line table built");
            table
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&WinLine> {
        self.lines.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WinLine> {
        self.lines.iter()
    }

    /// First line in table order owned entirely by one player
    pub fn first_complete(&self, board: &Board) -> Option<&WinLine> {
        self.lines.iter().find(|line| line.owner(board).is_some())
    }

    /// Classify a board
    ///
    /// Boards with fewer than 7 pieces are never scanned. Otherwise the first
    /// complete line decides the winner; a full board without one is a draw.
    pub fn outcome(&self, board: &Board) -> Outcome {
        if board.piece_count() < MIN_PIECES_FOR_WIN {
            return Outcome::InProgress;
        }

        if let Some(player) = self.first_complete(board).and_then(|line| line.owner(board)) {
            return Outcome::Win(player);
        }

        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl<'a> IntoIterator for &'a WinLines {
    type Item = &'a WinLine;
    type IntoIter = std::slice::Iter<'a, WinLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
