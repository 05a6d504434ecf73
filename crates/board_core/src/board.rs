use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// Layout of the standard starting position, row 0 first.
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// One committed relocation: what moved where, and what it displaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
    pub origin: Square,
    pub dest: Square,
    pub moved: Piece,
    pub displaced: Option<Piece>,
}

/// Dense 8x8 occupancy grid. Exactly one entry per square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl BoardState {
    pub fn empty() -> Self {
        BoardState {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn startpos() -> Self {
        let mut b = BoardState::empty();

        let back = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for side in [PieceSide::White, PieceSide::Black] {
            for (col, &kind) in back.iter().enumerate() {
                b.squares[side.back_row() as usize][col] = Some(Piece::new(kind, side));
                b.squares[side.pawn_row() as usize][col] =
                    Some(Piece::new(PieceType::Pawn, side));
            }
        }
        b
    }

    /// Parse a FEN piece-placement field. The first `/`-separated segment is
    /// row 0; digits skip that many empty squares.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::InvalidLayout(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = BoardState::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(BoardError::InvalidLayout(format!(
                            "zero skip in row {row}"
                        )));
                    }
                    col += d as usize;
                } else {
                    if col >= BOARD_SIZE as usize {
                        return Err(BoardError::InvalidLayout(format!(
                            "too many squares in row {row}"
                        )));
                    }
                    board.squares[row][col] = Some(Piece::from_char(ch)?);
                    col += 1;
                }
                if col > BOARD_SIZE as usize {
                    return Err(BoardError::InvalidLayout(format!(
                        "too many squares in row {row}"
                    )));
                }
            }
            if col != BOARD_SIZE as usize {
                return Err(BoardError::InvalidLayout(format!(
                    "row {row} covers {col} squares"
                )));
            }
        }
        Ok(board)
    }

    /// Inverse of [`BoardState::from_layout`].
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Occupied squares with their pieces, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Move whatever stands on `origin` to `dest`, discarding the previous
    /// occupant of `dest`. Returns `None` (and changes nothing) when `origin`
    /// is empty or equals `dest`.
    pub fn relocate(&mut self, origin: Square, dest: Square) -> Option<Relocation> {
        if origin == dest {
            return None;
        }
        let moved = self.piece_at(origin)?;
        let displaced = self.piece_at(dest);
        self.set_piece(origin, None);
        self.set_piece(dest, Some(moved));
        Some(Relocation {
            origin,
            dest,
            moved,
            displaced,
        })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                let ch = cell.map(Piece::to_char).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
