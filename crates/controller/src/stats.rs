//! Session statistics, persisted as a local JSON file.

use std::fs;
use std::path::Path;

use chess_core::{GameResult, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats file io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stats file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Win/loss/draw tally from the human's point of view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl GameStats {
    /// Tally one finished game. `human` is the color the human played.
    pub fn record(&mut self, result: GameResult, human: Player) {
        self.games_played += 1;
        if result.winner == Player::None {
            self.draws += 1;
        } else if result.winner == human {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Win percentage over all recorded games, 0 when none were played.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games_played) * 100.0
    }

    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
