//! Randomized checks of the candidate rules
//!
//! Boards are scattered with random pieces from a fixed seed so failures
//! reproduce. Every occupied square is checked against the invariants.

use board_core::{
    BoardController, BoardState, KNIGHT_OFFSETS, Piece, PieceSide, PieceType, Square, Transition,
    candidates,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BOARDS: usize = 200;

fn random_board(rng: &mut StdRng) -> BoardState {
    let kinds = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];
    let mut board = BoardState::empty();
    for sq in Square::all() {
        if rng.gen_bool(0.35) {
            let kind = kinds[rng.gen_range(0..kinds.len())];
            let side = if rng.gen_bool(0.5) {
                PieceSide::White
            } else {
                PieceSide::Black
            };
            board.set_piece(sq, Some(Piece::new(kind, side)));
        }
    }
    board
}

fn boards() -> impl Iterator<Item = BoardState> {
    let mut rng = StdRng::seed_from_u64(0x5eed_b0a2d);
    (0..BOARDS).map(move |_| random_board(&mut rng))
}

#[test]
fn test_knight_candidates_are_offsets_without_own_pieces() {
    for board in boards() {
        for (origin, pc) in board.occupied() {
            if pc.kind != PieceType::Knight {
                continue;
            }
            let cands = candidates(&board, origin);
            for to in &cands {
                let dr = to.row() as i8 - origin.row() as i8;
                let dc = to.col() as i8 - origin.col() as i8;
                assert!(
                    KNIGHT_OFFSETS.contains(&(dr, dc)),
                    "{origin} -> {to} is not a knight hop\n{board}"
                );
                if let Some(target) = board.piece_at(*to) {
                    assert_ne!(target.side, pc.side, "{origin} -> {to} lands on own piece");
                }
            }
            // Nothing reachable was left out.
            let reachable = KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| origin.offset(dr, dc))
                .filter(|&s| board.piece_at(s).is_none_or(|t| t.side != pc.side))
                .count();
            assert_eq!(cands.len(), reachable, "{origin}\n{board}");
        }
    }
}

#[test]
fn test_pawn_double_step_only_from_start_row() {
    for board in boards() {
        for (origin, pc) in board.occupied() {
            if pc.kind != PieceType::Pawn || origin.row() == pc.side.pawn_row() {
                continue;
            }
            let two_ahead = origin.offset(2 * pc.side.forward(), 0);
            let cands = candidates(&board, origin);
            if let Some(sq) = two_ahead {
                assert!(!cands.contains(&sq), "{origin} double-stepped off its start row");
            }
        }
    }
}

#[test]
fn test_pawn_diagonals_need_an_opponent() {
    for board in boards() {
        for (origin, pc) in board.occupied() {
            if pc.kind != PieceType::Pawn {
                continue;
            }
            let cands = candidates(&board, origin);
            for dc in [-1, 1] {
                let Some(diag) = origin.offset(pc.side.forward(), dc) else {
                    continue;
                };
                match board.piece_at(diag) {
                    Some(t) if t.side != pc.side => assert!(cands.contains(&diag)),
                    _ => assert!(!cands.contains(&diag), "{origin} -> {diag}\n{board}"),
                }
            }
            // Pawns only ever move toward the opponent.
            for to in &cands {
                let dr = to.row() as i8 - origin.row() as i8;
                assert_eq!(dr.signum(), pc.side.forward());
            }
        }
    }
}

#[test]
fn test_other_pieces_never_have_candidates() {
    for board in boards() {
        for (origin, pc) in board.occupied() {
            if matches!(pc.kind, PieceType::Pawn | PieceType::Knight) {
                continue;
            }
            assert!(candidates(&board, origin).is_empty());
        }
    }
}

#[test]
fn test_commit_relocates_exactly_two_squares() {
    let mut rng = StdRng::seed_from_u64(7);
    for board in boards().take(50) {
        let mut ctl = BoardController::with_board(board.clone(), Default::default());
        let Some((a, pc)) = board.occupied().next() else {
            continue;
        };
        let b = loop {
            let s = Square::new(rng.gen_range(0..8), rng.gen_range(0..8)).unwrap();
            if s != a {
                break s;
            }
        };

        ctl.pick(a, &mut ());
        let t = ctl.target(b, &mut ());
        assert!(matches!(t, Transition::Committed(_)));
        assert_eq!(ctl.board().piece_at(b), Some(pc));
        assert!(ctl.board().is_empty_at(a));

        let changed = Square::all()
            .filter(|&s| ctl.board().piece_at(s) != board.piece_at(s))
            .count();
        assert!(changed <= 2);
    }
}
