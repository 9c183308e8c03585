//! Session configuration, loadable from a TOML file. Every field has a
//! default so a partial (or absent) file still yields a playable setup.

use std::path::Path;
use std::time::Duration;

use chess_core::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The color the human plays. A separate type rather than `Player`, since a
/// configured side can never be "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanColor {
    White,
    Black,
}

impl From<HumanColor> for Player {
    fn from(color: HumanColor) -> Player {
        match color {
            HumanColor::White => Player::White,
            HumanColor::Black => Player::Black,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side the human plays.
    pub human_color: HumanColor,
    /// Engine search depth in plies.
    pub difficulty: u8,
    /// Engine wall-clock budget per move, in milliseconds.
    pub move_time_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_color: HumanColor::White,
            difficulty: 3,
            move_time_ms: 4000,
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
