use crate::types::{Column, Outcome};

/// Reasons a drop is rejected. The board is left untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is full")]
    ColumnFull { column: Column },

    #[error("game is over ({outcome})")]
    GameOver { outcome: Outcome },
}
