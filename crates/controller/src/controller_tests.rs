use super::*;

/// Deterministic stand-in engine: always plays the first legal move.
struct FirstMoveEngine;

impl Engine for FirstMoveEngine {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        state
            .all_legal_moves_for(state.current_player())
            .into_iter()
            .next()
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

fn controller() -> GameController {
    GameController::with_engine(Player::White, Box::new(FirstMoveEngine))
}

fn pos(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn human_move(c: &GameController, from: &str, to: &str) -> Move {
    c.legal_moves_for_piece(pos(from))
        .into_iter()
        .find(|m| m.to() == pos(to))
        .unwrap_or_else(|| panic!("{from}{to} should be legal"))
}

#[test]
fn test_accepts_legal_human_move_on_turn() {
    let mut c = controller();
    assert!(c.is_human_turn());

    let mv = human_move(&c, "e2", "e4");
    assert!(c.try_make_move(mv));
    assert_eq!(c.state().current_player(), Player::Black);
    assert!(!c.is_human_turn());
}

#[test]
fn test_rejects_illegal_and_off_turn_moves() {
    let mut c = controller();

    // Not a legal move at all.
    let bogus = Move::Normal {
        from: pos("e2"),
        to: pos("e5"),
    };
    assert!(!c.try_make_move(bogus));
    assert_eq!(c.state().current_player(), Player::White);

    // Black's move offered while it is the human's (White's) turn.
    let black_move = Move::DoublePawnPush {
        from: pos("e7"),
        to: pos("e5"),
    };
    assert!(!c.try_make_move(black_move));

    // After a White move it is the engine's turn; human input is rejected.
    let mv = human_move(&c, "d2", "d4");
    assert!(c.try_make_move(mv));
    let another = Move::Normal {
        from: pos("g1"),
        to: pos("f3"),
    };
    assert!(!c.try_make_move(another));
}

#[test]
fn test_ai_moves_only_on_its_turn() {
    let mut c = controller();
    assert!(c.make_ai_move().is_none(), "human to move");

    let mv = human_move(&c, "e2", "e4");
    assert!(c.try_make_move(mv));

    let reply = c.make_ai_move().expect("engine should reply");
    assert_eq!(c.state().current_player(), Player::White);
    assert!(c.is_human_turn());

    // The applied move really is on the board.
    assert!(c.state().board().is_empty(reply.from()));
}

#[test]
fn test_legal_moves_for_piece_gated_by_turn() {
    let mut c = controller();
    assert_eq!(c.legal_moves_for_piece(pos("e2")).len(), 2);
    assert!(c.legal_moves_for_piece(pos("e7")).is_empty());

    let mv = human_move(&c, "e2", "e4");
    assert!(c.try_make_move(mv));
    assert!(
        c.legal_moves_for_piece(pos("d2")).is_empty(),
        "engine's turn: no human move hints"
    );
}

#[test]
fn test_restart_resets_to_initial_position() {
    let mut c = controller();
    let mv = human_move(&c, "e2", "e4");
    assert!(c.try_make_move(mv));
    c.make_ai_move();

    c.restart();
    assert_eq!(c.state().current_player(), Player::White);
    assert!(!c.state().is_game_over());
    assert_eq!(c.state().all_legal_moves_for(Player::White).len(), 20);
}

#[test]
fn test_players_and_sides() {
    let c = GameController::with_engine(Player::Black, Box::new(FirstMoveEngine));
    assert_eq!(c.human_player(), Player::Black);
    assert_eq!(c.ai_player(), Player::White);
    assert!(!c.is_human_turn());
}
