//! Zobrist signatures for repetition detection and search memoization.
//!
//! A position's 64-bit signature XORs together fixed random values for each
//! piece on each square, the side to move, the four castling rights, and the
//! en-passant file when a capture there is actually possible. Signatures are
//! recomputed from scratch per half-move; O(64) is cheap at this scale.

use crate::board::Board;
use crate::types::{Piece, Player, Position};

/// Pre-computed random values, generated at compile time with a fixed-seed
/// xorshift64 so signatures are reproducible across runs.
pub struct ZobristKeys {
    /// Indexed by [color][piece kind][square]
    pieces: [[[u64; 64]; 6]; 2],
    /// XORed in when Black is to move
    side_to_move: u64,
    /// [white king-side, white queen-side, black king-side, black queen-side]
    castling: [u64; 4],
    /// En-passant target file (0-7)
    en_passant: [u64; 8],
}

impl ZobristKeys {
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    fn piece_key(&self, piece: Piece, pos: Position) -> Option<u64> {
        let color = match piece.color {
            Player::White => 0,
            Player::Black => 1,
            Player::None => return None,
        };
        let sq = (pos.row * 8 + pos.col) as usize;
        Some(self.pieces[color][piece.kind.idx()][sq])
    }

    /// Full position signature: pieces, side to move, castling rights, and
    /// the en-passant file if `to_move` can actually capture there. The
    /// `has_moved` flags enter only through the castling-rights queries, so
    /// positions that differ solely in irrelevant flags collide on purpose.
    pub fn signature(&self, board: &Board, to_move: Player) -> u64 {
        let mut hash = 0u64;

        for pos in board.piece_positions() {
            if let Some(piece) = board.piece_at(pos) {
                if let Some(key) = self.piece_key(piece, pos) {
                    hash ^= key;
                }
            }
        }

        if to_move == Player::Black {
            hash ^= self.side_to_move;
        }

        if board.castle_right_king_side(Player::White) {
            hash ^= self.castling[0];
        }
        if board.castle_right_queen_side(Player::White) {
            hash ^= self.castling[1];
        }
        if board.castle_right_king_side(Player::Black) {
            hash ^= self.castling[2];
        }
        if board.castle_right_queen_side(Player::Black) {
            hash ^= self.castling[3];
        }

        if board.can_capture_en_passant(to_move) {
            if let Some(target) = board.pawn_skip(to_move.opponent()) {
                hash ^= self.en_passant[target.col as usize];
            }
        }

        hash
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
