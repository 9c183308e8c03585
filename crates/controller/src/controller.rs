use chess_core::{Engine, GameState, Move, Player, Position};
use minimax_engine::ChessAi;
use tracing::{debug, info};

/// Thin coordinator between a human and an engine sharing one GameState.
///
/// All rule questions are delegated to the state; the controller only
/// enforces whose turn it is.
pub struct GameController {
    state: GameState,
    engine: Box<dyn Engine>,
    human: Player,
}

impl GameController {
    /// A fresh standard game with the engine on the opposite color.
    pub fn human_vs_ai(human: Player, difficulty: u8) -> Self {
        let ai = human.opponent();
        info!(?human, difficulty, "starting human vs AI game");
        Self::with_engine(human, Box::new(ChessAi::new(ai, difficulty)))
    }

    /// Same, with a caller-supplied engine for the opposite color.
    pub fn with_engine(human: Player, engine: Box<dyn Engine>) -> Self {
        Self {
            state: GameState::new(),
            engine,
            human,
        }
    }

    /// Reset to the initial position, keeping players and engine.
    pub fn restart(&mut self) {
        info!("restarting game");
        self.state = GameState::new();
        self.engine.new_game();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn human_player(&self) -> Player {
        self.human
    }

    pub fn ai_player(&self) -> Player {
        self.human.opponent()
    }

    pub fn is_human_turn(&self) -> bool {
        self.state.current_player() == self.human
    }

    /// Apply a human move iff the game is live, it is the human's turn, and
    /// the move is currently legal. No mutation on rejection.
    pub fn try_make_move(&mut self, mv: Move) -> bool {
        if self.state.is_game_over() || !self.is_human_turn() {
            return false;
        }
        let legal = self.state.all_legal_moves_for(self.state.current_player());
        if !legal.contains(&mv) {
            debug!(%mv, "rejected illegal move");
            return false;
        }

        self.state.make_move(mv);
        info!(%mv, "human move");
        true
    }

    /// Ask the engine for a move and apply it, iff it is the engine's turn
    /// in a live game.
    pub fn make_ai_move(&mut self) -> Option<Move> {
        if self.state.is_game_over() || self.is_human_turn() {
            return None;
        }

        let mv = self.engine.choose_move(&self.state)?;
        self.state.make_move(mv);
        info!(%mv, engine = self.engine.name(), "ai move");
        Some(mv)
    }

    /// Legal moves of the piece on `pos`, empty when it is not the human's
    /// turn or the game is over.
    pub fn legal_moves_for_piece(&self, pos: Position) -> Vec<Move> {
        if !self.is_human_turn() {
            return Vec::new();
        }
        self.state.legal_moves_for_piece(pos)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
