use std::fmt;

use crate::movegen::can_capture_king;
use crate::moves::Move;
use crate::types::*;

/// 8x8 mailbox board plus one optional en-passant target square per side.
///
/// The en-passant target ("pawn skip") is the square a pawn jumped over on
/// its double push. It is cleared at the start of that side's next half-move,
/// so it stays visible for exactly the opponent's reply.
///
/// Cloning yields a fully independent board; legality checks rely on that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    pawn_skips: [Option<Position>; 2],
}

fn side_idx(player: Player) -> Option<usize> {
    match player {
        Player::White => Some(0),
        Player::Black => Some(1),
        Player::None => None,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An empty board with no en-passant targets.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            pawn_skips: [None; 2],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.place_back_rank(0, Player::Black);
        board.place_pawns(1, Player::Black);
        board.place_back_rank(7, Player::White);
        board.place_pawns(6, Player::White);
        board
    }

    fn place_back_rank(&mut self, row: i8, player: Player) {
        let order = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (col, &kind) in order.iter().enumerate() {
            self.set(Position::new(row, col as i8), Some(Piece::new(kind, player)));
        }
    }

    fn place_pawns(&mut self, row: i8, player: Player) {
        for col in 0..8 {
            self.set(
                Position::new(row, col),
                Some(Piece::new(PieceType::Pawn, player)),
            );
        }
    }

    pub fn is_inside(pos: Position) -> bool {
        (0..8).contains(&pos.row) && (0..8).contains(&pos.col)
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row as usize][pos.col as usize] = piece;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    pub fn pawn_skip(&self, player: Player) -> Option<Position> {
        side_idx(player).and_then(|i| self.pawn_skips[i])
    }

    pub fn set_pawn_skip(&mut self, player: Player, pos: Option<Position>) {
        if let Some(i) = side_idx(player) {
            self.pawn_skips[i] = pos;
        }
    }

    /// All occupied squares.
    pub fn piece_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                let pos = Position::new(row, col);
                self.piece_at(pos).map(|_| pos)
            })
        })
    }

    /// Occupied squares belonging to `player`.
    pub fn piece_positions_for(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.piece_positions()
            .filter(move |&pos| self.piece_at(pos).map(|p| p.color) == Some(player))
    }

    /// A player is in check iff some opposing piece's raw attack pattern
    /// covers the square of that player's king. No legality filtering here,
    /// pure attack geometry. False when the king is absent.
    pub fn is_in_check(&self, player: Player) -> bool {
        self.piece_positions_for(player.opponent())
            .any(|pos| can_capture_king(self, pos))
    }

    pub fn find_piece(&self, player: Player, kind: PieceType) -> Option<Position> {
        self.piece_positions_for(player)
            .find(|&pos| self.piece_at(pos).map(|p| p.kind) == Some(kind))
    }

    pub fn count_pieces(&self) -> Counting {
        let mut counting = Counting::default();
        for pos in self.piece_positions() {
            if let Some(piece) = self.piece_at(pos) {
                counting.increment(piece.color, piece.kind);
            }
        }
        counting
    }

    /// Insufficient-material draw classification. Any one rule suffices:
    /// bare kings; king + single bishop vs bare king; king + single knight
    /// vs bare king; king + bishop each with both bishops on same-colored
    /// squares.
    pub fn insufficient_material(&self) -> bool {
        let count = self.count_pieces();
        Self::is_king_v_king(&count)
            || Self::is_king_bishop_v_king(&count)
            || Self::is_king_knight_v_king(&count)
            || self.is_king_bishop_v_king_bishop(&count)
    }

    fn is_king_v_king(count: &Counting) -> bool {
        count.total() == 2
    }

    fn is_king_bishop_v_king(count: &Counting) -> bool {
        count.total() == 3
            && (count.white(PieceType::Bishop) == 1 || count.black(PieceType::Bishop) == 1)
    }

    fn is_king_knight_v_king(count: &Counting) -> bool {
        count.total() == 3
            && (count.white(PieceType::Knight) == 1 || count.black(PieceType::Knight) == 1)
    }

    fn is_king_bishop_v_king_bishop(&self, count: &Counting) -> bool {
        if count.total() != 4 {
            return false;
        }
        if count.white(PieceType::Bishop) != 1 || count.black(PieceType::Bishop) != 1 {
            return false;
        }
        let white_bishop = self.find_piece(Player::White, PieceType::Bishop);
        let black_bishop = self.find_piece(Player::Black, PieceType::Bishop);
        match (white_bishop, black_bishop) {
            (Some(w), Some(b)) => w.square_color() == b.square_color(),
            _ => false,
        }
    }

    fn has_unmoved_king_and_rook(&self, king_pos: Position, rook_pos: Position) -> bool {
        let (king, rook) = match (self.piece_at(king_pos), self.piece_at(rook_pos)) {
            (Some(k), Some(r)) => (k, r),
            _ => return false,
        };
        king.kind == PieceType::King
            && rook.kind == PieceType::Rook
            && !king.has_moved
            && !rook.has_moved
    }

    /// King-side castling right: king and rook on their home squares, both
    /// never moved. Path emptiness and attack safety are the castle move's
    /// `is_legal` responsibility, not this query's.
    pub fn castle_right_king_side(&self, player: Player) -> bool {
        match player {
            Player::White => {
                self.has_unmoved_king_and_rook(Position::new(7, 4), Position::new(7, 7))
            }
            Player::Black => {
                self.has_unmoved_king_and_rook(Position::new(0, 4), Position::new(0, 7))
            }
            Player::None => false,
        }
    }

    pub fn castle_right_queen_side(&self, player: Player) -> bool {
        match player {
            Player::White => {
                self.has_unmoved_king_and_rook(Position::new(7, 4), Position::new(7, 0))
            }
            Player::Black => {
                self.has_unmoved_king_and_rook(Position::new(0, 4), Position::new(0, 0))
            }
            Player::None => false,
        }
    }

    /// Whether `player` has a legal en-passant capture against the
    /// opponent's pawn-skip target right now.
    pub fn can_capture_en_passant(&self, player: Player) -> bool {
        let target = match self.pawn_skip(player.opponent()) {
            Some(t) => t,
            None => return false,
        };

        let candidates = match player {
            Player::White => [
                target + Direction::SOUTH_WEST,
                target + Direction::SOUTH_EAST,
            ],
            Player::Black => [
                target + Direction::NORTH_WEST,
                target + Direction::NORTH_EAST,
            ],
            Player::None => return false,
        };

        candidates
            .into_iter()
            .filter(|&pos| Board::is_inside(pos))
            .any(|pos| {
                let piece = self.piece_at(pos);
                piece.map(|p| (p.color, p.kind)) == Some((player, PieceType::Pawn))
                    && Move::EnPassant {
                        from: pos,
                        to: target,
                    }
                    .is_legal(self)
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let ch = match self.piece_at(Position::new(row, col)) {
                    None => '.',
                    Some(piece) => {
                        let c = match piece.kind {
                            PieceType::Pawn => 'p',
                            PieceType::Knight => 'n',
                            PieceType::Bishop => 'b',
                            PieceType::Rook => 'r',
                            PieceType::Queen => 'q',
                            PieceType::King => 'k',
                        };
                        if piece.color == Player::White {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    }
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Per-color per-type piece totals; a throwaway snapshot used only to
/// classify insufficient-material draws.
#[derive(Clone, Debug, Default)]
pub struct Counting {
    counts: [[u32; 6]; 2],
    total: u32,
}

impl Counting {
    pub fn increment(&mut self, color: Player, kind: PieceType) {
        if let Some(i) = side_idx(color) {
            self.counts[i][kind.idx()] += 1;
            self.total += 1;
        }
    }

    pub fn white(&self, kind: PieceType) -> u32 {
        self.counts[0][kind.idx()]
    }

    pub fn black(&self, kind: PieceType) -> u32 {
        self.counts[1][kind.idx()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
