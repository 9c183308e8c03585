use std::time::Duration;

use super::*;
use chess_core::{Board, Engine, Piece, PieceType, Player, Position};

use crate::ChessAi;

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn place(board: &mut Board, s: &str, kind: PieceType, color: Player) {
    board.set(pos(s), Some(Piece::new(kind, color)));
}

#[test]
fn test_single_legal_move_returned_without_search() {
    // Black's king on h8 has exactly one square: h7.
    let mut board = Board::empty();
    place(&mut board, "h8", PieceType::King, Player::Black);
    place(&mut board, "f6", PieceType::King, Player::White);
    place(&mut board, "g1", PieceType::Rook, Player::White);
    let state = GameState::with_board(board, Player::Black);
    assert_eq!(state.all_legal_moves_for(Player::Black).len(), 1);

    let mut ai = ChessAi::new(Player::Black, 4);
    let mv = ai.choose_move(&state).expect("one move exists");
    assert_eq!(mv.from(), pos("h8"));
    assert_eq!(mv.to(), pos("h7"));
    assert_eq!(ai.evals(), 0, "shortcut must not evaluate anything");
}

#[test]
fn test_finds_mate_in_one() {
    let mut board = Board::empty();
    place(&mut board, "h8", PieceType::King, Player::Black);
    place(&mut board, "g6", PieceType::King, Player::White);
    place(&mut board, "b1", PieceType::Queen, Player::White);
    let state = GameState::with_board(board, Player::White);

    let mut ai = ChessAi::new(Player::White, 2);
    let mv = ai.choose_move(&state).expect("white has moves");
    assert_eq!(mv.from(), pos("b1"));
    assert_eq!(mv.to(), pos("b8"));
}

#[test]
fn test_pruned_search_matches_plain_minimax() {
    fn reference(state: &GameState, depth: u8, evals: &mut u64) -> i32 {
        if depth == 0 || state.is_game_over() {
            *evals += 1;
            return evaluate(state, state.current_player());
        }
        let mut best = -INF;
        for mv in state.all_legal_moves_for(state.current_player()) {
            best = best.max(-reference(&apply(state, mv), depth - 1, evals));
        }
        best
    }

    // Three plies below the root: the window tightens as siblings return,
    // so beta cutoffs fire inside these subtrees. A fresh searcher per
    // root reply keeps each comparison independent.
    let state = GameState::new();
    let deadline = Deadline::unlimited();
    let mut pruned_evals = 0;
    let mut reference_evals = 0;

    for mv in state
        .all_legal_moves_for(Player::White)
        .into_iter()
        .take(5)
    {
        let next = apply(&state, mv);
        let mut stats = SearchStats::default();
        let mut searcher = Searcher {
            deadline: &deadline,
            cache: HashMap::new(),
            stats: &mut stats,
        };
        assert_eq!(
            searcher.negamax(&next, 3, -INF, INF),
            reference(&next, 3, &mut reference_evals),
            "diverged after {mv}"
        );
        pruned_evals += stats.evals;
    }

    assert!(
        pruned_evals < reference_evals,
        "cutoffs should skip subtrees: {pruned_evals} vs {reference_evals}"
    );
}

#[test]
fn test_expired_deadline_falls_back_to_first_move() {
    let state = GameState::new();
    let mut ai = ChessAi::with_move_time(Player::White, 4, Duration::ZERO);

    let mv = ai.choose_move(&state).expect("fallback must produce a move");
    assert!(state.all_legal_moves_for(Player::White).contains(&mv));
    assert_eq!(ai.evals(), 0, "no time to evaluate anything");
}

#[test]
fn test_none_when_game_over_or_off_turn() {
    let state = GameState::new();
    let mut off_turn = ChessAi::new(Player::Black, 2);
    assert!(off_turn.choose_move(&state).is_none());

    // Stalemate the black king, then ask the black engine to move.
    let mut board = Board::empty();
    place(&mut board, "a8", PieceType::King, Player::Black);
    place(&mut board, "b6", PieceType::King, Player::White);
    place(&mut board, "c3", PieceType::Queen, Player::White);
    let mut state = GameState::with_board(board, Player::White);
    let stalemating = state
        .legal_moves_for_piece(pos("c3"))
        .into_iter()
        .find(|m| m.to() == pos("c7"))
        .expect("queen reaches c7");
    state.make_move(stalemating);
    assert!(state.is_game_over());

    let mut ai = ChessAi::new(Player::Black, 2);
    assert!(ai.choose_move(&state).is_none());
}

#[test]
fn test_promotions_ordered_first() {
    let mut board = Board::empty();
    place(&mut board, "e1", PieceType::King, Player::White);
    place(&mut board, "h8", PieceType::King, Player::Black);
    place(&mut board, "a7", PieceType::Pawn, Player::White);
    let state = GameState::with_board(board, Player::White);

    let ordered = order_moves(&state, state.all_legal_moves_for(Player::White));
    assert!(ordered[0].promoted().is_some());
}

#[test]
fn test_valuable_captures_ordered_before_cheap_ones() {
    // A rook that can take either a queen or a knight.
    let mut board = Board::empty();
    place(&mut board, "h1", PieceType::King, Player::White);
    place(&mut board, "h8", PieceType::King, Player::Black);
    place(&mut board, "a1", PieceType::Rook, Player::White);
    place(&mut board, "a5", PieceType::Queen, Player::Black);
    place(&mut board, "d1", PieceType::Knight, Player::Black);
    let state = GameState::with_board(board, Player::White);

    let ordered = order_moves(&state, state.all_legal_moves_for(Player::White));
    assert_eq!(ordered[0].from(), pos("a1"));
    assert_eq!(ordered[0].to(), pos("a5"));
}
