use std::collections::BTreeSet;

use crate::{board::BoardState, error::BoardError, types::*};

/// Destination squares previewed for a selected piece, in board order.
pub type CandidateSet = BTreeSet<Square>;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Squares the piece on `origin` may be dropped on under the simplified
/// rules: pawns and knights only. Every other piece type, and an empty
/// origin, yields an empty set.
///
/// Nothing here looks at whose turn it is or whether a king is left in
/// check.
pub fn candidates(board: &BoardState, origin: Square) -> CandidateSet {
    let mut out = CandidateSet::new();
    let Some(pc) = board.piece_at(origin) else {
        return out;
    };
    match pc.kind {
        PieceType::Pawn => gen_pawn(board, origin, pc.side, &mut out),
        PieceType::Knight => gen_knight(board, origin, pc.side, &mut out),
        PieceType::Bishop | PieceType::Rook | PieceType::Queen | PieceType::King => {}
    }
    out
}

/// Same as [`candidates`], taking raw coordinates that may be off the board.
pub fn candidates_at(board: &BoardState, row: u8, col: u8) -> Result<CandidateSet, BoardError> {
    let origin = Square::new(row, col)?;
    Ok(candidates(board, origin))
}

fn gen_pawn(board: &BoardState, from: Square, side: PieceSide, out: &mut CandidateSet) {
    let dir = side.forward();

    // forward 1, then forward 2 from the start row
    if let Some(to) = from.offset(dir, 0)
        && board.is_empty_at(to)
    {
        out.insert(to);

        if from.row() == side.pawn_row()
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.is_empty_at(to2)
        {
            out.insert(to2);
        }
    }

    // captures only; an empty diagonal is never a candidate
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(tpc) = board.piece_at(to)
            && tpc.side != side
        {
            out.insert(to);
        }
    }
}

fn gen_knight(board: &BoardState, from: Square, side: PieceSide, out: &mut CandidateSet) {
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => {
                    out.insert(to);
                }
                Some(pc) if pc.side != side => {
                    out.insert(to);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
