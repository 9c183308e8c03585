pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

/// Trait implemented by move-choosing engines, so callers can swap search
/// strategies behind one seam. `Send` so a think can run off the thread
/// driving user interaction.
pub trait Engine: Send {
    /// Pick a move for the side to move, or `None` when no legal move
    /// exists or the game is already over. Never mutates `state`.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;

    /// Engine name for display and logging.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
