use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceSide {
    White,
    Black,
}

impl PieceSide {
    pub fn other(self) -> PieceSide {
        match self {
            PieceSide::White => PieceSide::Black,
            PieceSide::Black => PieceSide::White,
        }
    }

    /// Row step toward the opponent's back rank. White starts on rows 6/7.
    pub fn forward(self) -> i8 {
        match self {
            PieceSide::White => -1,
            PieceSide::Black => 1,
        }
    }

    /// Row the side's pawns start on.
    pub fn pawn_row(self) -> u8 {
        match self {
            PieceSide::White => 6,
            PieceSide::Black => 1,
        }
    }

    /// Row holding the side's rooks, knights, bishops, queen and king at start.
    pub fn back_row(self) -> u8 {
        match self {
            PieceSide::White => 7,
            PieceSide::Black => 0,
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
    /// Lowercase letter used in layouts (`p n b r q k`).
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub side: PieceSide,
}

impl Piece {
    pub const fn new(kind: PieceType, side: PieceSide) -> Self {
        Self { kind, side }
    }

    /// Decode a layout character: uppercase is White, lowercase is Black.
    pub fn from_char(ch: char) -> Result<Piece, BoardError> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return Err(BoardError::InvalidPiece(ch)),
        };
        let side = if ch.is_ascii_uppercase() {
            PieceSide::White
        } else {
            PieceSide::Black
        };
        Ok(Piece { kind, side })
    }

    pub fn to_char(self) -> char {
        match self.side {
            PieceSide::White => self.kind.letter().to_ascii_uppercase(),
            PieceSide::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board coordinate. Row 0 is the far (black) rank, column 0 is file `a`.
///
/// Values outside the board cannot be constructed, so every `Square` a caller
/// holds is safe to index with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Square, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(BoardError::InvalidSquare { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Step by `(dr, dc)`; `None` when the result falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            Some(Square {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// File letter shown under the board (`a`..`h`).
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit shown beside the board (`8` on row 0 down to `1` on row 7).
    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(BoardError::InvalidSquareName(s.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(BoardError::InvalidSquareName(s.to_string()));
        }
        Square::new(b'8' - r, f - b'a')
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
