use std::fmt;
use std::ops::{Add, Mul};

/// A side of the game. `None` stands for "no winner" in drawn results and
/// never appears on a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
    None,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
            Player::None => Player::None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn idx(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }
}

/// A piece on the board. `has_moved` is monotonic: once a move sets it,
/// nothing resets it, even if the piece later returns to its origin square.
/// Castling rights depend on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Player,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: Player) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// A board square. Row 0 is Black's back rank, row 7 is White's, matching
/// the rendering orientation. Values outside [0,8) can exist transiently as
/// the result of `Position + Direction`; `Board::is_inside` filters them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        let col = (b[0] - b'a') as i8;
        let row = 7 - (b[1] - b'1') as i8;
        Some(Position::new(row, col))
    }

    /// Color of the square, 0 for light and 1 for dark. Used by the
    /// same-colored-bishops draw rule.
    pub fn square_color(self) -> i8 {
        (self.row + self.col).rem_euclid(2)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        Position::new(self.row + dir.row_delta, self.col + dir.col_delta)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (7 - self.row) as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// A step vector over the board, composable by addition and integer scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    pub row_delta: i8,
    pub col_delta: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(-1, 0);
    pub const SOUTH: Direction = Direction::new(1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);

    pub const fn new(row_delta: i8, col_delta: i8) -> Self {
        Self {
            row_delta,
            col_delta,
        }
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        Direction::new(
            self.row_delta + other.row_delta,
            self.col_delta + other.col_delta,
        )
    }
}

impl Mul<i8> for Direction {
    type Output = Direction;

    fn mul(self, scalar: i8) -> Direction {
        Direction::new(self.row_delta * scalar, self.col_delta * scalar)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
