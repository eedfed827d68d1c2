//! Board module - manages the game grid
//!
//! The board is a 7x6 grid where each cell can be empty or hold one player's piece.
//! Uses a flat array for better cache locality and zero-allocation.
//! Indices are row-major (`row * 7 + column`), row 0 is the top row, so the
//! bottom row holds indices 35..=41 and pieces fall towards higher indices.

use arrayvec::ArrayVec;

use crate::types::{Cell, Column, Player, BOARD_COLUMNS, BOARD_ROWS, BOARD_SIZE};

const WIDTH: usize = BOARD_COLUMNS as usize;

/// The game board - 7 columns x 6 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + column)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from numeric markers (0 empty, 1 or 2 for a player)
    ///
    /// Returns `None` if any marker is not 0, 1 or 2, or if a piece would float
    /// above an empty cell.
    pub fn from_markers(markers: [u8; BOARD_SIZE]) -> Option<Self> {
        let mut cells = [None; BOARD_SIZE];
        for (cell, &marker) in cells.iter_mut().zip(markers.iter()) {
            *cell = match marker {
                0 => None,
                m => Some(Player::from_marker(m)?),
            };
        }

        let board = Self { cells };
        let floating = (0..BOARD_SIZE - WIDTH)
            .any(|idx| board.cells[idx].is_some() && board.cells[idx + WIDTH].is_none());
        if floating {
            return None;
        }
        Some(board)
    }

    /// Calculate flat index from (row, column) coordinates
    #[inline(always)]
    pub fn index(row: u8, column: u8) -> Option<usize> {
        if row >= BOARD_ROWS || column >= BOARD_COLUMNS {
            return None;
        }
        Some(row as usize * WIDTH + column as usize)
    }

    /// Row (0 = top) of a board index
    pub fn row_of(index: usize) -> u8 {
        (index / WIDTH) as u8
    }

    /// Column of a board index
    pub fn column_of(index: usize) -> u8 {
        (index % WIDTH) as u8
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_COLUMNS
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at a flat index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get cell at (row, column)
    pub fn cell_at(&self, row: u8, column: u8) -> Option<Cell> {
        Self::index(row, column).map(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }

    /// A column is full once its top cell is occupied
    pub fn is_column_full(&self, column: Column) -> bool {
        self.cells[column.top_index()].is_some()
    }

    /// Index a piece dropped into `column` would come to rest at, if the column has room
    pub fn landing_index(&self, column: Column) -> Option<usize> {
        if self.is_column_full(column) {
            return None;
        }

        // Walk down while the cell below is still empty
        let mut landing = column.top_index();
        while landing + WIDTH < BOARD_SIZE && self.cells[landing + WIDTH].is_none() {
            landing += WIDTH;
        }
        Some(landing)
    }

    /// Drop a piece for `player` into `column`
    /// Returns the landing index, or None if the column is full
    pub(crate) fn place(&mut self, column: Column, player: Player) -> Option<usize> {
        let landing = self.landing_index(column)?;
        self.cells[landing] = Some(player);
        Some(landing)
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> ArrayVec<Column, { BOARD_COLUMNS as usize }> {
        Column::ALL
            .iter()
            .copied()
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write numeric markers into a row-major grid (0 empty, 1 or 2)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * WIDTH;
            for (dst, cell) in out_row.iter_mut().zip(&self.cells[start..start + WIDTH]) {
                *dst = cell.map_or(0, |player| player.marker());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
