use crate::board::Board;
use crate::movegen::legal_moves;
use crate::types::Player;

/// Legal-move-tree node count from `board` with `player` to move, for
/// validating the move generator against known values. Each half-move
/// clears the mover's stale en-passant target exactly as game play does.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in legal_moves(board, player) {
        let mut next = board.clone();
        next.set_pawn_skip(player, None);
        mv.execute(&mut next);
        nodes += perft(&next, player.opponent(), depth - 1);
    }
    nodes
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
