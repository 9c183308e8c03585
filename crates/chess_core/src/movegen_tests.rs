use super::*;

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn place(board: &mut Board, s: &str, kind: PieceType, color: Player) {
    board.set(pos(s), Some(Piece::new(kind, color)));
}

#[test]
fn test_startpos_has_twenty_moves_per_side() {
    let board = Board::initial();
    assert_eq!(legal_moves(&board, Player::White).len(), 20);
    assert_eq!(legal_moves(&board, Player::Black).len(), 20);
}

#[test]
fn test_startpos_move_kinds() {
    let board = Board::initial();
    let moves = legal_moves(&board, Player::White);

    let doubles = moves
        .iter()
        .filter(|m| matches!(m, Move::DoublePawnPush { .. }))
        .count();
    let singles = moves
        .iter()
        .filter(|m| matches!(m, Move::Normal { .. }))
        .count();
    assert_eq!(doubles, 8);
    assert_eq!(singles, 12); // 8 pawn pushes + 4 knight moves
}

#[test]
fn test_corner_knight_pattern() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);
    place(&mut board, "a1", PieceType::Knight, Player::White);

    let moves = pseudo_legal_moves(&board, pos("a1"));
    assert_eq!(moves.len(), 2);
    let targets: Vec<Position> = moves.iter().map(|m| m.to()).collect();
    assert!(targets.contains(&pos("b3")));
    assert!(targets.contains(&pos("c2")));
}

#[test]
fn test_slider_stops_at_blockers() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);
    place(&mut board, "a1", PieceType::Rook, Player::White);
    place(&mut board, "a4", PieceType::Pawn, Player::Black);
    place(&mut board, "c1", PieceType::Bishop, Player::White);

    let moves = pseudo_legal_moves(&board, pos("a1"));
    let targets: Vec<Position> = moves.iter().map(|m| m.to()).collect();
    assert!(targets.contains(&pos("a4")), "enemy blocker is capturable");
    assert!(!targets.contains(&pos("a5")), "ray stops at the blocker");
    assert!(targets.contains(&pos("b1")));
    assert!(!targets.contains(&pos("c1")), "own piece blocks");
}

#[test]
fn test_promotion_moves_generated() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "h8", PieceType::King, Player::Black);
    place(&mut board, "a7", PieceType::Pawn, Player::White);

    let moves = pseudo_legal_moves(&board, pos("a7"));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.promoted().is_some()));
}

#[test]
fn test_en_passant_generated_from_skip_target() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);
    place(&mut board, "e5", PieceType::Pawn, Player::White);
    place(&mut board, "d5", PieceType::Pawn, Player::Black);

    let without = pseudo_legal_moves(&board, pos("e5"));
    assert!(!without
        .iter()
        .any(|m| matches!(m, Move::EnPassant { .. })));

    board.set_pawn_skip(Player::Black, Some(pos("d6")));
    let with = pseudo_legal_moves(&board, pos("e5"));
    assert!(with.iter().any(|m| *m
        == Move::EnPassant {
            from: pos("e5"),
            to: pos("d6"),
        }));
}

#[test]
fn test_castle_generated_only_with_rights() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "h1", PieceType::Rook, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);

    let moves = pseudo_legal_moves(&board, pos("e1"));
    assert!(moves
        .iter()
        .any(|m| matches!(m, Move::CastleKingSide { .. })));
    assert!(!moves
        .iter()
        .any(|m| matches!(m, Move::CastleQueenSide { .. })));

    // Shuffle the rook; the pattern disappears with the right.
    Move::Normal {
        from: pos("h1"),
        to: pos("h2"),
    }
    .execute(&mut board);
    Move::Normal {
        from: pos("h2"),
        to: pos("h1"),
    }
    .execute(&mut board);
    let moves = pseudo_legal_moves(&board, pos("e1"));
    assert!(!moves
        .iter()
        .any(|m| matches!(m, Move::CastleKingSide { .. })));
}
