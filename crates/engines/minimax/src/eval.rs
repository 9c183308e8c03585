//! Static position evaluation: material, piece-square tables, and a handful
//! of positional terms (king-to-edge endgame pressure, hanging pieces, rook
//! activity, center control, mobility).

use chess_core::{Board, GameState, Piece, PieceType, Player, Position};

/// Score returned for a position already decided in the perspective's favor.
pub const WIN_SCORE: i32 = 999_999;

/// Base material values.
pub fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::Pawn => 100,
        PieceType::Knight => 300,
        PieceType::Bishop => 350,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 2000,
    }
}

// Piece-square tables, indexed [rank-from-own-side][file]: row 0 is the
// owner's back rank, row 7 the far rank. `position_bonus` handles the flip
// for White.

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [99, 99, 99, 99, 99, 99, 99, 99],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 27, 27, 10,  5,  5],
    [ 0,  0,  0, 25, 25,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-25,-25, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 20, 15, 15, 20,  0,-40],
    [-30,  5, 15, 25, 25, 15,  5,-30],
    [-30,  0, 15, 25, 25, 15,  0,-30],
    [-10,  5, 30, 15, 15, 30,  5,-10],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [ 10,  5,  0,  0,  0,  0,  5, 10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [10, 10, 10, 10, 10, 10, 10, 10],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  5,  5,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  3,  5,  5,  3,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_MIDDLEGAME_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 13, 13,  0,  0,  0,  0, 13, 13],
    [ 15, 17,  0,  0,  0,  0, 17, 15],
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-20,-20,-30,-40,-50],
    [-40,-20,-10,  0,  0,-10,-20,-30],
    [-40,-20, 20, 25, 25, 20,-20,-40],
    [-40,-20, 25, 35, 35, 25,-20,-40],
    [-40,-20, 25, 35, 35, 25,-20,-40],
    [-40,-20, 20, 25, 25, 20,-20,-40],
    [-40,-30,  0,  0,  0,  0,-30,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

/// The king switches to its endgame table once this few pieces remain.
const ENDGAME_PIECE_COUNT: usize = 12;

/// The four central squares d4, e4, d5, e5.
pub(crate) const CENTER: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

fn position_bonus(piece: Piece, pos: Position, endgame: bool) -> i32 {
    let row = if piece.color == Player::White {
        (7 - pos.row) as usize
    } else {
        pos.row as usize
    };
    let col = pos.col as usize;

    let table = match piece.kind {
        PieceType::Pawn => &PAWN_TABLE,
        PieceType::Knight => &KNIGHT_TABLE,
        PieceType::Bishop => &BISHOP_TABLE,
        PieceType::Rook => &ROOK_TABLE,
        PieceType::Queen => &QUEEN_TABLE,
        PieceType::King if endgame => &KING_ENDGAME_TABLE,
        PieceType::King => &KING_MIDDLEGAME_TABLE,
    };
    table[row][col]
}

/// Evaluates `state` from `perspective`'s point of view: positive means the
/// position favors `perspective`. Terminal positions short-circuit to
/// win/loss/draw scores.
pub fn evaluate(state: &GameState, perspective: Player) -> i32 {
    if let Some(result) = state.result() {
        return if result.winner == perspective {
            WIN_SCORE
        } else if result.winner == perspective.opponent() {
            -WIN_SCORE
        } else {
            0
        };
    }

    let board = state.board();
    let endgame = board.piece_positions().count() <= ENDGAME_PIECE_COUNT;

    let mut score = 0;
    for pos in board.piece_positions() {
        let piece = match board.piece_at(pos) {
            Some(p) => p,
            None => continue,
        };
        let value = piece_value(piece.kind) + position_bonus(piece, pos, endgame);
        if piece.color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    if endgame {
        score += king_edge_pressure(board, perspective);
    }
    score -= hanging_piece_penalty(state, perspective);
    score += rook_activity(board, perspective);
    score += center_control(board, perspective) * 2;

    let own_moves = state.all_legal_moves_for(perspective).len() as i32;
    let opp_moves = state.all_legal_moves_for(perspective.opponent()).len() as i32;
    score + (own_moves - opp_moves) * 3
}

/// Endgame bonus that grows as the opponent's king nears the board edge,
/// rewarding the side driving it into a mating net.
fn king_edge_pressure(board: &Board, perspective: Player) -> i32 {
    match board.find_piece(perspective.opponent(), PieceType::King) {
        Some(king) => {
            let dist_from_edge = king
                .row
                .min(7 - king.row)
                .min(king.col.min(7 - king.col)) as i32;
            (4 - dist_from_edge) * 20
        }
        None => 0,
    }
}

/// Half the value of each of the perspective's non-king pieces the opponent
/// can legally move onto.
fn hanging_piece_penalty(state: &GameState, perspective: Player) -> i32 {
    let board = state.board();
    let opponent_targets: Vec<Position> = state
        .all_legal_moves_for(perspective.opponent())
        .iter()
        .map(|mv| mv.to())
        .collect();

    board
        .piece_positions_for(perspective)
        .filter_map(|pos| board.piece_at(pos).map(|piece| (pos, piece)))
        .filter(|(_, piece)| piece.kind != PieceType::King)
        .filter(|(pos, _)| opponent_targets.contains(pos))
        .map(|(_, piece)| piece_value(piece.kind) / 2)
        .sum()
}

/// Rook bonuses: +30 on a pawn-free file, +10 once developed off its home
/// square, +15 when advanced past the back rank.
fn rook_activity(board: &Board, perspective: Player) -> i32 {
    let mut score = 0;

    for pos in board.piece_positions_for(perspective) {
        let rook = match board.piece_at(pos) {
            Some(p) if p.kind == PieceType::Rook => p,
            _ => continue,
        };

        let open_file = (0..8).all(|row| {
            board
                .piece_at(Position::new(row, pos.col))
                .map(|p| p.kind != PieceType::Pawn)
                .unwrap_or(true)
        });
        if open_file {
            score += 30;
        }
        if rook.has_moved {
            score += 10;
        }
        let off_back_rank = match perspective {
            Player::White => pos.row < 7,
            Player::Black => pos.row > 0,
            Player::None => false,
        };
        if off_back_rank {
            score += 15;
        }
    }

    score
}

/// Net occupancy of the four central squares: pawns count 20, anything else
/// 15, opponent pieces negative.
fn center_control(board: &Board, perspective: Player) -> i32 {
    CENTER
        .iter()
        .filter_map(|&pos| board.piece_at(pos))
        .map(|piece| {
            let bonus = if piece.kind == PieceType::Pawn { 20 } else { 15 };
            if piece.color == perspective {
                bonus
            } else {
                -bonus
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
