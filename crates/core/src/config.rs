//! Engine configuration

use serde::{Deserialize, Serialize};

/// Environment variable that turns on [`EngineConfig::enforce_game_over_blocks_moves`]
pub const ENFORCE_GAME_OVER_ENV: &str = "CONNECT_FOUR_ENFORCE_GAME_OVER";

/// Rules that differ between hosts of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject drops once the game has a winner or is drawn.
    ///
    /// Off by default: the host decides when to stop taking moves.
    pub enforce_game_over_blocks_moves: bool,
}

impl EngineConfig {
    /// Configuration that rejects moves after the game has ended
    pub fn enforcing_game_over() -> Self {
        Self {
            enforce_game_over_blocks_moves: true,
        }
    }

    /// Create from environment variables
    ///
    /// Unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ENFORCE_GAME_OVER_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let enforce = value
            .map(|v| {
                let v = v.trim();
                v == "1" || v.to_lowercase() == "true"
            })
            .unwrap_or(false);

        Self {
            enforce_game_over_blocks_moves: enforce,
        }
    }
}
