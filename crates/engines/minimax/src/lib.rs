//! Minimax Chess Engine
//!
//! Negamax with alpha-beta pruning, piece-square evaluation, and a
//! wall-clock budget per move. Search depth doubles as the difficulty
//! setting.

mod eval;
mod search;

use std::time::Duration;

use chess_core::time_control::Deadline;
use chess_core::{Engine, GameState, Move, Player};

pub use eval::{evaluate, piece_value};
pub use search::SearchStats;

/// Default wall-clock budget per move.
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_millis(4000);

/// Chess engine playing one fixed side.
///
/// Stateless between moves apart from counters; the transposition cache
/// lives and dies inside a single search.
#[derive(Debug, Clone)]
pub struct ChessAi {
    player: Player,
    depth: u8,
    move_time: Duration,
    stats: SearchStats,
}

impl ChessAi {
    /// An engine for `player` searching `difficulty` plies with the default
    /// time budget.
    pub fn new(player: Player, difficulty: u8) -> Self {
        Self::with_move_time(player, difficulty, DEFAULT_MOVE_TIME)
    }

    pub fn with_move_time(player: Player, difficulty: u8, move_time: Duration) -> Self {
        Self {
            player,
            depth: difficulty,
            move_time,
            stats: SearchStats::default(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Nodes entered during the last search.
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }

    /// Static evaluations computed during the last search.
    pub fn evals(&self) -> u64 {
        self.stats.evals
    }
}

impl Engine for ChessAi {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_game_over() || state.current_player() != self.player {
            return None;
        }

        self.stats = SearchStats::default();
        let deadline = Deadline::start(self.move_time);
        search::pick_best_move(state, self.depth, &deadline, &mut self.stats)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }
}
