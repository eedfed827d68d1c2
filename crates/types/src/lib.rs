//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, presentation layers, test tooling).
//!
//! # Board Dimensions
//!
//! Standard Connect Four grid:
//!
//! - **Columns**: 7 (indexed 0-6, left to right)
//! - **Rows**: 6 (indexed 0-5, top to bottom)
//! - **Cells**: 42, row-major, `index = row * 7 + column`
//!
//! The bottom row holds indices 35..=41, so gravity moves a piece towards
//! higher indices.
//!
//! # Win Lines
//!
//! | Family | Windows |
//! |--------|---------|
//! | Horizontal | 6 rows x 4 |
//! | Vertical | 7 columns x 3 |
//! | Forward diagonal `/` | 4 columns x 3 |
//! | Back diagonal `\` | 4 columns x 3 |
//! | **Total** | **69** |
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Column, Outcome, Player, BOARD_COLUMNS, BOARD_ROWS};
//!
//! // Player 1 always moves first
//! let first = Player::One;
//! assert_eq!(first.other(), Player::Two);
//!
//! // Columns are validated on construction
//! assert!(Column::new(6).is_some());
//! assert!(Column::new(7).is_none());
//!
//! // Parse column from console input
//! assert_eq!(Column::from_str(" 3 "), Column::new(3));
//!
//! // Outcome codes
//! assert_eq!(Outcome::Draw.code(), 3);
//!
//! // Board dimensions
//! assert_eq!(BOARD_COLUMNS, 7);
//! assert_eq!(BOARD_ROWS, 6);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_COLUMNS: u8 = 7;

/// Board height in cells (6 rows)
pub const BOARD_ROWS: u8 = 6;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_COLUMNS as usize) * (BOARD_ROWS as usize);

/// Number of same-player cells in a row required to win
pub const LINE_LENGTH: usize = 4;

/// Number of distinct four-in-a-row windows on the board
pub const WIN_LINE_COUNT: usize = 69;

/// Fewest pieces on the board that can contain a win (4 for the winner, 3 for the opponent)
pub const MIN_PIECES_FOR_WIN: usize = 7;


/// The two players
///
/// Player 1 always makes the first move of a game. On the board each player
/// is stored as its numeric marker (1 or 2); 0 means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Numeric board marker (1 or 2)
    pub fn marker(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a board marker back into a player
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Player;
    ///
    /// assert_eq!(Player::from_marker(1), Some(Player::One));
    /// assert_eq!(Player::from_marker(2), Some(Player::Two));
    /// assert_eq!(Player::from_marker(0), None);
    /// ```
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opponent
    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell holding that player's piece
pub type Cell = Option<Player>;

/// A validated board column (0-6)
///
/// Constructing a `Column` is the only range check the engine needs, so an
/// out-of-range drop can never reach the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u8);

impl Column {
    /// Every column, left to right
    pub const ALL: [Column; BOARD_COLUMNS as usize] = [
        Column(0),
        Column(1),
        Column(2),
        Column(3),
        Column(4),
        Column(5),
        Column(6),
    ];

    /// Returns `None` if `index` is not in 0..7
    pub fn new(index: u8) -> Option<Self> {
        if index < BOARD_COLUMNS {
            Some(Column(index))
        } else {
            None
        }
    }

    /// Parse a column from user input (surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Column;
    ///
    /// assert_eq!(Column::from_str("0"), Column::new(0));
    /// assert_eq!(Column::from_str("6\n"), Column::new(6));
    /// assert_eq!(Column::from_str("7"), None);
    /// assert_eq!(Column::from_str("left"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    /// Board index of the column's top cell (row 0)
    pub fn top_index(&self) -> usize {
        self.0 as usize
    }

    /// Board index of the column's bottom cell (row 5)
    pub fn bottom_index(&self) -> usize {
        BOARD_SIZE - BOARD_COLUMNS as usize + self.0 as usize
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a win check
///
/// Each outcome has a stable numeric code used in snapshots:
/// - **InProgress**: 0, no winner yet and moves remain
/// - **Win(One)**: 1
/// - **Win(Two)**: 2
/// - **Draw**: 3, the board is full with no four-in-a-row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Outcome::InProgress => 0,
            Outcome::Win(player) => player.marker(),
            Outcome::Draw => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::InProgress),
            1 | 2 => Player::from_marker(code).map(Outcome::Win),
            3 => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// True for a win or a draw
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "none",
            Outcome::Win(Player::One) => "player1",
            Outcome::Win(Player::Two) => "player2",
            Outcome::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
