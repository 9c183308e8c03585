//! Pseudo-legal move pattern generation, one exhaustive match per piece
//! kind. Legality filtering (own-king safety) lives in `Move::is_legal`.

use crate::board::Board;
use crate::moves::Move;
use crate::types::*;

const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

const KING_STEPS: [Direction; 8] = [
    Direction::NORTH,
    Direction::NORTH_EAST,
    Direction::EAST,
    Direction::SOUTH_EAST,
    Direction::SOUTH,
    Direction::SOUTH_WEST,
    Direction::WEST,
    Direction::NORTH_WEST,
];

const BISHOP_RAYS: [Direction; 4] = [
    Direction::NORTH_EAST,
    Direction::NORTH_WEST,
    Direction::SOUTH_EAST,
    Direction::SOUTH_WEST,
];

const ROOK_RAYS: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
];

fn pawn_forward(player: Player) -> Direction {
    match player {
        Player::White => Direction::NORTH,
        _ => Direction::SOUTH,
    }
}

fn pawn_start_row(player: Player) -> i8 {
    match player {
        Player::White => 6,
        _ => 1,
    }
}

fn promotion_row(player: Player) -> i8 {
    match player {
        Player::White => 0,
        _ => 7,
    }
}

/// Raw move pattern of the piece on `from`, ignoring king safety.
/// Castle moves are emitted from the board's rights query alone; their
/// path emptiness and attack safety are checked by `Move::is_legal`.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Move> {
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let mut out = Vec::new();
    match piece.kind {
        PieceType::Pawn => gen_pawn(board, from, piece.color, &mut out),
        PieceType::Knight => gen_steps(board, from, piece.color, &KNIGHT_JUMPS, &mut out),
        PieceType::Bishop => gen_slider(board, from, piece.color, &BISHOP_RAYS, &mut out),
        PieceType::Rook => gen_slider(board, from, piece.color, &ROOK_RAYS, &mut out),
        PieceType::Queen => {
            gen_slider(board, from, piece.color, &BISHOP_RAYS, &mut out);
            gen_slider(board, from, piece.color, &ROOK_RAYS, &mut out);
        }
        PieceType::King => {
            gen_steps(board, from, piece.color, &KING_STEPS, &mut out);
            gen_castle(board, from, piece.color, &mut out);
        }
    }
    out
}

/// All fully legal moves for `player` on this board.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .piece_positions_for(player)
        .flat_map(|pos| pseudo_legal_moves(board, pos))
        .filter(|mv| mv.is_legal(board))
        .collect()
}

/// Whether the piece on `from` could capture the opposing king under its
/// raw attack pattern. Used for check detection; no legality filtering.
pub fn can_capture_king(board: &Board, from: Position) -> bool {
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    let is_enemy_king = |pos: Position| {
        board.piece_at(pos).map(|p| (p.color, p.kind))
            == Some((piece.color.opponent(), PieceType::King))
    };

    match piece.kind {
        PieceType::Pawn => {
            let forward = pawn_forward(piece.color);
            [forward + Direction::EAST, forward + Direction::WEST]
                .into_iter()
                .any(|dir| {
                    let target = from + dir;
                    Board::is_inside(target) && is_enemy_king(target)
                })
        }
        PieceType::Knight => KNIGHT_JUMPS.iter().any(|&dir| {
            let target = from + dir;
            Board::is_inside(target) && is_enemy_king(target)
        }),
        PieceType::King => KING_STEPS.iter().any(|&dir| {
            let target = from + dir;
            Board::is_inside(target) && is_enemy_king(target)
        }),
        PieceType::Bishop => rays_hit_king(board, from, &BISHOP_RAYS, is_enemy_king),
        PieceType::Rook => rays_hit_king(board, from, &ROOK_RAYS, is_enemy_king),
        PieceType::Queen => {
            rays_hit_king(board, from, &BISHOP_RAYS, is_enemy_king)
                || rays_hit_king(board, from, &ROOK_RAYS, is_enemy_king)
        }
    }
}

fn rays_hit_king(
    board: &Board,
    from: Position,
    rays: &[Direction],
    is_enemy_king: impl Fn(Position) -> bool,
) -> bool {
    rays.iter().any(|&dir| {
        let mut pos = from + dir;
        while Board::is_inside(pos) {
            if board.piece_at(pos).is_some() {
                return is_enemy_king(pos);
            }
            pos = pos + dir;
        }
        false
    })
}

fn gen_pawn(board: &Board, from: Position, player: Player, out: &mut Vec<Move>) {
    let forward = pawn_forward(player);
    let promo_row = promotion_row(player);

    // Single and double pushes
    let one = from + forward;
    if Board::is_inside(one) && board.is_empty(one) {
        if one.row == promo_row {
            push_promotions(from, one, out);
        } else {
            out.push(Move::Normal { from, to: one });
            let two = from + forward * 2;
            if from.row == pawn_start_row(player) && board.is_empty(two) {
                out.push(Move::DoublePawnPush { from, to: two });
            }
        }
    }

    // Diagonal captures and en passant
    for side in [Direction::EAST, Direction::WEST] {
        let to = from + forward + side;
        if !Board::is_inside(to) {
            continue;
        }
        if let Some(target) = board.piece_at(to) {
            if target.color != player {
                if to.row == promo_row {
                    push_promotions(from, to, out);
                } else {
                    out.push(Move::Normal { from, to });
                }
            }
        } else if board.pawn_skip(player.opponent()) == Some(to) {
            out.push(Move::EnPassant { from, to });
        }
    }
}

fn push_promotions(from: Position, to: Position, out: &mut Vec<Move>) {
    for promoted in [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ] {
        out.push(Move::Promotion { from, to, promoted });
    }
}

fn gen_steps(
    board: &Board,
    from: Position,
    player: Player,
    steps: &[Direction],
    out: &mut Vec<Move>,
) {
    for &dir in steps {
        let to = from + dir;
        if !Board::is_inside(to) {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(Move::Normal { from, to }),
            Some(target) if target.color != player => out.push(Move::Normal { from, to }),
            _ => {}
        }
    }
}

fn gen_slider(
    board: &Board,
    from: Position,
    player: Player,
    rays: &[Direction],
    out: &mut Vec<Move>,
) {
    for &dir in rays {
        let mut to = from + dir;
        while Board::is_inside(to) {
            match board.piece_at(to) {
                None => out.push(Move::Normal { from, to }),
                Some(target) => {
                    if target.color != player {
                        out.push(Move::Normal { from, to });
                    }
                    break;
                }
            }
            to = to + dir;
        }
    }
}

fn gen_castle(board: &Board, from: Position, player: Player, out: &mut Vec<Move>) {
    let home = match player {
        Player::White => Position::new(7, 4),
        Player::Black => Position::new(0, 4),
        Player::None => return,
    };
    if from != home {
        return;
    }
    if board.castle_right_king_side(player) {
        out.push(Move::CastleKingSide {
            from,
            to: Position::new(from.row, 6),
        });
    }
    if board.castle_right_queen_side(player) {
        out.push(Move::CastleQueenSide {
            from,
            to: Position::new(from.row, 2),
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
