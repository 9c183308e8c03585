//! Negamax search with alpha-beta pruning, heuristic move ordering, a
//! per-search transposition cache, and wall-clock degradation: once the
//! deadline passes, every node returns its static evaluation instead of
//! searching deeper.

use std::collections::HashMap;

use chess_core::time_control::Deadline;
use chess_core::{GameState, Move};

use crate::eval::{evaluate, piece_value, CENTER};

const INF: i32 = i32::MAX / 2;

/// Per-search counters, reset before every root call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes entered, root children included.
    pub nodes: u64,
    /// Static evaluations computed.
    pub evals: u64,
}

/// Picks the best move for the side to move, or `None` when the game is
/// over or no legal move exists.
///
/// A single legal move is returned without searching. Otherwise each root
/// move is searched to `depth - 1` with a full-width window and the highest
/// score wins; if the deadline expires before any root move finishes, the
/// first generated move is the fallback.
pub fn pick_best_move(
    state: &GameState,
    depth: u8,
    deadline: &Deadline,
    stats: &mut SearchStats,
) -> Option<Move> {
    if state.is_game_over() {
        return None;
    }
    let moves = state.all_legal_moves_for(state.current_player());
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        return Some(moves[0]);
    }

    let fallback = moves[0];
    let ordered = order_moves(state, moves);
    let mut searcher = Searcher {
        deadline,
        cache: HashMap::new(),
        stats,
    };

    let mut best: Option<(Move, i32)> = None;
    for mv in ordered {
        if deadline.expired() {
            break;
        }
        let next = apply(state, mv);
        let score = -searcher.negamax(&next, depth.saturating_sub(1), -INF, INF);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((mv, score));
        }
    }

    Some(best.map(|(mv, _)| mv).unwrap_or(fallback))
}

/// Orders moves best-first: captures by victim value scaled over attacker
/// value, a bonus for giving check, a dominating bonus for promotion, and a
/// nudge toward the central squares.
pub fn order_moves(state: &GameState, mut moves: Vec<Move>) -> Vec<Move> {
    let board = state.board();
    moves.sort_by_cached_key(|&mv| {
        let mut score = 0;

        if let Some(attacker) = board.piece_at(mv.from()) {
            if let Some(target) = board.piece_at(mv.to()) {
                score += piece_value(target.kind) * 10 - piece_value(attacker.kind);
            }

            let mut after = board.clone();
            mv.execute(&mut after);
            if after.is_in_check(attacker.color.opponent()) {
                score += 300;
            }
        }

        if mv.promoted().is_some() {
            score += 8000;
        }
        if CENTER.contains(&mv.to()) {
            score += 50;
        }

        std::cmp::Reverse(score)
    });
    moves
}

fn apply(state: &GameState, mv: Move) -> GameState {
    let mut next = state.clone();
    next.make_move(mv);
    next
}

struct Searcher<'a> {
    deadline: &'a Deadline,
    /// Position signature -> score, valid for this search only.
    cache: HashMap<u64, i32>,
    stats: &'a mut SearchStats,
}

impl Searcher<'_> {
    fn negamax(&mut self, state: &GameState, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        let key = state.signature();
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }
        if self.deadline.expired() {
            return self.eval(state);
        }
        if depth == 0 || state.is_game_over() {
            let score = self.eval(state);
            self.cache.insert(key, score);
            return score;
        }

        let moves = order_moves(state, state.all_legal_moves_for(state.current_player()));
        let mut best = -INF;
        for mv in moves {
            let next = apply(state, mv);
            let score = -self.negamax(&next, depth - 1, -beta, -alpha);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }

        self.cache.insert(key, best);
        best
    }

    fn eval(&mut self, state: &GameState) -> i32 {
        self.stats.evals += 1;
        evaluate(state, state.current_player())
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
