use std::collections::HashMap;

use crate::board::Board;
use crate::movegen::{legal_moves, pseudo_legal_moves};
use crate::moves::Move;
use crate::types::{Player, Position};
use crate::zobrist::ZOBRIST;

/// Why a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

/// Outcome of a finished game. `winner` is `Player::None` for draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub end_reason: EndReason,
}

impl GameResult {
    pub fn win(winner: Player, end_reason: EndReason) -> Self {
        Self { winner, end_reason }
    }

    pub fn draw(end_reason: EndReason) -> Self {
        Self {
            winner: Player::None,
            end_reason,
        }
    }
}

/// The sole mutator of game progress: board, side to move, the fifty-move
/// clock, and the signature history for threefold repetition.
///
/// `make_move` must only be called with a move drawn from
/// `all_legal_moves_for(current_player)`; once a result is set, further
/// moves are ignored.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: Option<GameResult>,
    /// Half-moves since the last capture or pawn move.
    no_capture_or_pawn_moves: u32,
    /// Occurrence counts of position signatures since the last irreversible
    /// move. Capture and pawn moves clear it: earlier positions can never
    /// repeat after one.
    state_history: HashMap<u64, u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::initial(), Player::White)
    }

    /// A game continuing from an arbitrary board. Used by AI simulation
    /// and tests.
    pub fn with_board(board: Board, current_player: Player) -> Self {
        let mut state_history = HashMap::new();
        state_history.insert(ZOBRIST.signature(&board, current_player), 1);
        Self {
            board,
            current_player,
            result: None,
            no_capture_or_pawn_moves: 0,
            state_history,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Half-moves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.no_capture_or_pawn_moves
    }

    /// Signature of the current position (pieces, side to move, castling
    /// rights, usable en-passant file).
    pub fn signature(&self) -> u64 {
        ZOBRIST.signature(&self.board, self.current_player)
    }

    /// Legal moves of the piece on `pos`, empty unless it belongs to the
    /// side to move in a live game.
    pub fn legal_moves_for_piece(&self, pos: Position) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.current_player => {
                pseudo_legal_moves(&self.board, pos)
                    .into_iter()
                    .filter(|mv| mv.is_legal(&self.board))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move `player` has on the current board, regardless of
    /// whose turn it is. The evaluation's mobility and hanging-piece terms
    /// need the off-turn variant.
    pub fn all_legal_moves_for(&self, player: Player) -> Vec<Move> {
        legal_moves(&self.board, player)
    }

    /// Apply a legal move: execute it, flip the side to move, update the
    /// fifty-move clock and repetition history, and detect terminal states.
    pub fn make_move(&mut self, mv: Move) {
        if self.is_game_over() {
            return;
        }

        // The mover's en-passant target from two half-moves ago is stale.
        self.board.set_pawn_skip(self.current_player, None);

        let capture_or_pawn = mv.execute(&mut self.board);
        if capture_or_pawn {
            self.no_capture_or_pawn_moves = 0;
            self.state_history.clear();
        } else {
            self.no_capture_or_pawn_moves += 1;
        }

        self.current_player = self.current_player.opponent();
        let repeats = {
            let entry = self.state_history.entry(self.signature()).or_insert(0);
            *entry += 1;
            *entry
        };
        self.check_for_game_over(repeats);
    }

    /// Terminal detection. Mate and stalemate take priority over the
    /// counting-based draws.
    fn check_for_game_over(&mut self, repeats: u32) {
        if self.all_legal_moves_for(self.current_player).is_empty() {
            self.result = Some(if self.board.is_in_check(self.current_player) {
                GameResult::win(self.current_player.opponent(), EndReason::Checkmate)
            } else {
                GameResult::draw(EndReason::Stalemate)
            });
        } else if self.no_capture_or_pawn_moves >= 100 {
            self.result = Some(GameResult::draw(EndReason::FiftyMoveRule));
        } else if repeats >= 3 {
            self.result = Some(GameResult::draw(EndReason::ThreefoldRepetition));
        } else if self.board.insufficient_material() {
            self.result = Some(GameResult::draw(EndReason::InsufficientMaterial));
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
