//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Connect Four rules and state management.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: The same sequence of drops always produces the same game
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run behind a console prompt, a GUI, or headless
//! - **Fast**: Fixed-size storage, no allocation per move
//!
//! # Module Structure
//!
//! - [`board`]: 7x6 grid with gravity placement
//! - [`win_lines`]: The 69 four-in-a-row windows, built once per process
//! - [`game_state`]: Board, turn, and win checks for one game
//! - [`config`]: Rule switches that differ between hosts
//! - [`error`]: Rejected drops
//! - [`snapshot`]: Serializable copy of a game
//!
//! # Game Rules
//!
//! - **Gravity**: A dropped piece rests on the lowest empty cell of its column
//! - **Turns**: Player 1 moves first, then turns strictly alternate
//! - **Win**: Four of one player's pieces in a row, column or diagonal
//! - **Draw**: Full board with no four-in-a-row
//! - **Game over**: Optionally, drops after a win or draw are rejected
//!
//! # Example
//!
//! ```
//! use connect_four_core::{EngineError, GameState};
//! use connect_four_types::{Column, Outcome, Player};
//!
//! let mut game = GameState::new();
//! let col = |i| Column::new(i).unwrap();
//!
//! // Pieces land on the bottom row first
//! assert_eq!(game.drop_piece(col(3)), Ok(38));
//! assert_eq!(game.turn(), Player::Two);
//!
//! // Player 1 stacks column 0, player 2 answers in column 1
//! game.reset();
//! for c in [0, 1, 0, 1, 0, 1] {
//!     game.drop_piece(col(c)).unwrap();
//! }
//! assert_eq!(game.check_win(), Outcome::InProgress);
//!
//! game.drop_piece(col(0)).unwrap();
//! assert_eq!(game.check_win(), Outcome::Win(Player::One));
//!
//! // Full columns are rejected
//! let mut game = GameState::new();
//! for _ in 0..6 {
//!     game.drop_piece(col(4)).unwrap();
//! }
//! assert_eq!(
//!     game.drop_piece(col(4)),
//!     Err(EngineError::ColumnFull { column: col(4) })
//! );
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod snapshot;
pub mod win_lines;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{EngineConfig, ENFORCE_GAME_OVER_ENV};
pub use error::EngineError;
pub use game_state::GameState;
pub use snapshot::GameSnapshot;
pub use win_lines::{WinLine, WinLines};
