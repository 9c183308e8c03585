use super::*;
use chess_core::{Board, GameState, Move};

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn place(board: &mut Board, s: &str, kind: PieceType, color: Player) {
    board.set(pos(s), Some(Piece::new(kind, color)));
}

fn play(state: &mut GameState, from: &str, to: &str) {
    let mv = state
        .legal_moves_for_piece(pos(from))
        .into_iter()
        .find(|m| m.to() == pos(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal"));
    state.make_move(mv);
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceType::Pawn), 100);
    assert_eq!(piece_value(PieceType::Knight), 300);
    assert_eq!(piece_value(PieceType::Bishop), 350);
    assert_eq!(piece_value(PieceType::Rook), 500);
    assert_eq!(piece_value(PieceType::Queen), 900);
    assert_eq!(piece_value(PieceType::King), 2000);
}

#[test]
fn test_initial_position_is_balanced() {
    let state = GameState::new();
    assert_eq!(evaluate(&state, Player::White), 0);
    assert_eq!(evaluate(&state, Player::Black), 0);
}

#[test]
fn test_zero_sum_symmetry_on_mirrored_position() {
    let mut state = GameState::new();
    play(&mut state, "e2", "e4");
    play(&mut state, "e7", "e5");

    assert_eq!(
        evaluate(&state, Player::White),
        -evaluate(&state, Player::Black)
    );
}

#[test]
fn test_material_advantage_scores_positive() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "d1", PieceType::Queen, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);

    let state = GameState::with_board(board, Player::White);
    assert!(evaluate(&state, Player::White) > 0);
    assert!(evaluate(&state, Player::Black) < 0);
}

#[test]
fn test_checkmate_scores_as_win() {
    let mut state = GameState::new();
    play(&mut state, "f2", "f3");
    play(&mut state, "e7", "e5");
    play(&mut state, "g2", "g4");
    play(&mut state, "d8", "h4");
    assert!(state.is_game_over());

    assert_eq!(evaluate(&state, Player::Black), WIN_SCORE);
    assert_eq!(evaluate(&state, Player::White), -WIN_SCORE);
}

#[test]
fn test_drawn_game_scores_zero() {
    let mut board = Board::empty();
    place(&mut board, "a8", PieceType::King, Player::Black);
    place(&mut board, "b6", PieceType::King, Player::White);
    place(&mut board, "c3", PieceType::Queen, Player::White);

    let mut state = GameState::with_board(board, Player::White);
    play(&mut state, "c3", "c7");
    assert!(state.is_game_over());

    assert_eq!(evaluate(&state, Player::White), 0);
    assert_eq!(evaluate(&state, Player::Black), 0);
}

#[test]
fn test_hanging_piece_is_penalized() {
    // A white queen en prise to a black rook, versus the same queen on a
    // safe square. Everything else about the two boards is identical.
    let mut exposed = Board::empty();
    place(&mut exposed, "e1", PieceType::King, Player::White);
    place(&mut exposed, "e8", PieceType::King, Player::Black);
    place(&mut exposed, "a5", PieceType::Rook, Player::Black);
    place(&mut exposed, "a2", PieceType::Queen, Player::White);

    let mut safe = exposed.clone();
    safe.set(pos("a2"), None);
    place(&mut safe, "b2", PieceType::Queen, Player::White);

    let exposed_score = evaluate(&GameState::with_board(exposed, Player::White), Player::White);
    let safe_score = evaluate(&GameState::with_board(safe, Player::White), Player::White);
    assert!(
        safe_score > exposed_score,
        "safe {safe_score} vs exposed {exposed_score}"
    );
}

#[test]
fn test_live_position_scores_below_win() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "d1", PieceType::Queen, Player::White);
    place(&mut board, "e8", PieceType::King, Player::Black);
    let state = GameState::with_board(board, Player::White);

    assert!(evaluate(&state, Player::White) < WIN_SCORE);
}

#[test]
fn test_en_passant_square_does_not_unbalance_eval() {
    // After 1.e4 the skip square on e3 is not capturable and must not leak
    // into either side's score asymmetrically through mobility.
    let mut state = GameState::new();
    let mv = Move::DoublePawnPush {
        from: pos("e2"),
        to: pos("e4"),
    };
    state.make_move(mv);

    assert_eq!(
        evaluate(&state, Player::White),
        -evaluate(&state, Player::Black)
    );
}
