//! Game state module - manages the complete game state
//!
//! This module ties together the board, the shared win-line table and the
//! engine configuration. It handles piece drops, turn alternation, win checks
//! and the game lifecycle.
//!
//! The turn is stored explicitly and toggled after every accepted drop.
//! `drop_piece` is the only path that writes to the board, so the stored turn
//! always matches the parity of the pieces played.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::win_lines::{WinLine, WinLines};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Player,
    /// Shared, immutable; survives resets.
    win_lines: &'static WinLines,
    config: EngineConfig,
}

impl GameState {
    /// Create a new game with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new game using the process-wide win-line table
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_win_lines(config, WinLines::shared())
    }

    /// Create a new game with an explicit win-line table
    pub fn with_win_lines(config: EngineConfig, win_lines: &'static WinLines) -> Self {
        Self {
            board: Board::new(),
            turn: Player::One,
            win_lines,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who makes the next drop
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn win_lines(&self) -> &'static WinLines {
        self.win_lines
    }

    /// Pieces on the board (derived from occupancy)
    pub fn pieces_played(&self) -> usize {
        self.board.piece_count()
    }

    /// Current outcome; see [`WinLines::outcome`]
    pub fn check_win(&self) -> Outcome {
        self.win_lines.outcome(&self.board)
    }

    /// The first complete line in table order, for highlighting a win
    pub fn winning_line(&self) -> Option<&'static WinLine> {
        if self.pieces_played() < MIN_PIECES_FOR_WIN {
            return None;
        }
        self.win_lines.first_complete(&self.board)
    }

    pub fn legal_columns(&self) -> ArrayVec<Column, { BOARD_COLUMNS as usize }> {
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`
    ///
    /// Returns the landing index and hands the turn to the other player.
    /// Fails with [`EngineError::ColumnFull`] if the column's top cell is taken,
    /// or with [`EngineError::GameOver`] if the game has already ended and the
    /// configuration enforces it. A failed drop changes nothing.
    pub fn drop_piece(&mut self, column: Column) -> Result<usize, EngineError> {
        if self.config.enforce_game_over_blocks_moves {
            let outcome = self.check_win();
            if outcome.is_terminal() {
                return Err(EngineError::GameOver { outcome });
            }
        }

        let player = self.turn;
        let landing = self
            .board
            .place(column, player)
            .ok_or(EngineError::ColumnFull { column })?;
        self.turn = player.other();

        tracing::trace!(
            column = column.index(),
            landing,
            player = player.marker(),
            "piece dropped"
        );

        if tracing::enabled!(tracing::Level::DEBUG) {
            let outcome = self.check_win();
            if outcome.is_terminal() {
                tracing::debug!(
                    %outcome,
                    pieces = self.pieces_played(),
                    "game concluded"
                );
            }
        }

        Ok(landing)
    }

    /// Clear the board and give the first move back to player 1
    ///
    /// The win-line table and configuration are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::One;
        tracing::debug!("board reset");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.turn = self.turn.marker();
        out.pieces_played = self.pieces_played() as u8;
        out.outcome = self.check_win().code();
        out.winning_line = self.winning_line().map(WinLine::cells);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
