use std::fmt;

use crate::board::Board;
use crate::types::*;

/// A move, tagged by kind. Each kind knows how to apply itself to a board
/// and whether it is legal (does not leave the mover's own king in check
/// after simulated application).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Normal { from: Position, to: Position },
    DoublePawnPush { from: Position, to: Position },
    CastleKingSide { from: Position, to: Position },
    CastleQueenSide { from: Position, to: Position },
    EnPassant { from: Position, to: Position },
    Promotion {
        from: Position,
        to: Position,
        promoted: PieceType,
    },
}

impl Move {
    pub fn from(&self) -> Position {
        match *self {
            Move::Normal { from, .. }
            | Move::DoublePawnPush { from, .. }
            | Move::CastleKingSide { from, .. }
            | Move::CastleQueenSide { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
        }
    }

    pub fn to(&self) -> Position {
        match *self {
            Move::Normal { to, .. }
            | Move::DoublePawnPush { to, .. }
            | Move::CastleKingSide { to, .. }
            | Move::CastleQueenSide { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. } => to,
        }
    }

    pub fn promoted(&self) -> Option<PieceType> {
        match *self {
            Move::Promotion { promoted, .. } => Some(promoted),
            _ => None,
        }
    }

    /// Apply the move to `board`, with all side effects: captures, the
    /// en-passant pawn removal, the castle rook relocation, the promotion
    /// piece swap, has-moved flags, and the mover's pawn-skip target.
    ///
    /// Returns whether this was a capture or a pawn move (the fifty-move
    /// clock resets on those).
    pub fn execute(&self, board: &mut Board) -> bool {
        let mut piece = match board.piece_at(self.from()) {
            Some(p) => p,
            None => return false,
        };
        piece.has_moved = true;

        match *self {
            Move::Normal { from, to } => {
                let capture = board.piece_at(to).is_some();
                board.set(from, None);
                board.set(to, Some(piece));
                capture || piece.kind == PieceType::Pawn
            }
            Move::DoublePawnPush { from, to } => {
                let skipped = Position::new((from.row + to.row) / 2, from.col);
                board.set(from, None);
                board.set(to, Some(piece));
                board.set_pawn_skip(piece.color, Some(skipped));
                true
            }
            Move::CastleKingSide { from, to } => {
                let rook_from = Position::new(from.row, 7);
                let rook_to = Position::new(from.row, 5);
                board.set(from, None);
                board.set(to, Some(piece));
                if let Some(mut rook) = board.piece_at(rook_from) {
                    rook.has_moved = true;
                    board.set(rook_from, None);
                    board.set(rook_to, Some(rook));
                }
                false
            }
            Move::CastleQueenSide { from, to } => {
                let rook_from = Position::new(from.row, 0);
                let rook_to = Position::new(from.row, 3);
                board.set(from, None);
                board.set(to, Some(piece));
                if let Some(mut rook) = board.piece_at(rook_from) {
                    rook.has_moved = true;
                    board.set(rook_from, None);
                    board.set(rook_to, Some(rook));
                }
                false
            }
            Move::EnPassant { from, to } => {
                let captured = Position::new(from.row, to.col);
                board.set(from, None);
                board.set(to, Some(piece));
                board.set(captured, None);
                true
            }
            Move::Promotion { from, to, promoted } => {
                board.set(from, None);
                let mut promoted_piece = Piece::new(promoted, piece.color);
                promoted_piece.has_moved = true;
                board.set(to, Some(promoted_piece));
                true
            }
        }
    }

    /// Simulate the move on a clone of `board` and accept iff the mover's
    /// king is not in check afterwards. Castle moves additionally verify
    /// the squares between king and rook are empty and that the king does
    /// not start in, pass through, or land on an attacked square.
    pub fn is_legal(&self, board: &Board) -> bool {
        let player = match board.piece_at(self.from()) {
            Some(p) => p.color,
            None => return false,
        };

        match *self {
            Move::CastleKingSide { from, .. } => {
                Self::castle_path_legal(board, player, from, &[5, 6], &[5, 6])
            }
            Move::CastleQueenSide { from, .. } => {
                Self::castle_path_legal(board, player, from, &[1, 2, 3], &[3, 2])
            }
            _ => {
                let mut copy = board.clone();
                self.execute(&mut copy);
                !copy.is_in_check(player)
            }
        }
    }

    /// `between` are the columns that must be empty; `crossed` the columns
    /// the king occupies on its way (including the destination), which must
    /// not be attacked.
    fn castle_path_legal(
        board: &Board,
        player: Player,
        king_from: Position,
        between: &[i8],
        crossed: &[i8],
    ) -> bool {
        if between
            .iter()
            .any(|&col| !board.is_empty(Position::new(king_from.row, col)))
        {
            return false;
        }
        if board.is_in_check(player) {
            return false;
        }

        let king = match board.piece_at(king_from) {
            Some(k) => k,
            None => return false,
        };
        crossed.iter().all(|&col| {
            let mut copy = board.clone();
            copy.set(king_from, None);
            copy.set(Position::new(king_from.row, col), Some(king));
            !copy.is_in_check(player)
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promoted) = self.promoted() {
            let c = match promoted {
                PieceType::Knight => 'n',
                PieceType::Bishop => 'b',
                PieceType::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
