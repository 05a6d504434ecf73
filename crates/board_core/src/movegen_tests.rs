use super::*;

fn at(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn set(squares: &[(u8, u8)]) -> CandidateSet {
    squares.iter().map(|&(r, c)| at(r, c)).collect()
}

#[test]
fn test_startpos_white_pawn() {
    let b = BoardState::startpos();
    assert_eq!(candidates(&b, at(6, 0)), set(&[(5, 0), (4, 0)]));
}

#[test]
fn test_startpos_black_pawn() {
    let b = BoardState::startpos();
    assert_eq!(candidates(&b, at(1, 4)), set(&[(2, 4), (3, 4)]));
}

#[test]
fn test_startpos_knights() {
    let b = BoardState::startpos();
    assert_eq!(candidates(&b, at(7, 1)), set(&[(5, 0), (5, 2)]));
    assert_eq!(candidates(&b, at(0, 6)), set(&[(2, 5), (2, 7)]));
}

#[test]
fn test_unmodelled_pieces_have_no_candidates() {
    let b = BoardState::startpos();
    for col in 0..8 {
        if col == 1 || col == 6 {
            continue;
        }
        assert!(candidates(&b, at(7, col)).is_empty());
        assert!(candidates(&b, at(0, col)).is_empty());
    }
    // A lone queen in the middle still has nothing.
    let b = BoardState::from_layout("8/8/8/3Q4/8/8/8/8").unwrap();
    assert!(candidates(&b, at(3, 3)).is_empty());
}

#[test]
fn test_empty_origin() {
    let b = BoardState::startpos();
    assert!(candidates(&b, at(4, 4)).is_empty());
}

#[test]
fn test_candidates_at_rejects_off_board() {
    let b = BoardState::startpos();
    assert_eq!(
        candidates_at(&b, 8, 0),
        Err(BoardError::InvalidSquare { row: 8, col: 0 })
    );
    assert_eq!(candidates_at(&b, 6, 0).unwrap(), set(&[(5, 0), (4, 0)]));
}

#[test]
fn test_pawn_blocked_one_ahead_has_no_double_step() {
    // White pawn on e2 with a black knight on e3.
    let b = BoardState::from_layout("8/8/8/8/8/4n3/4P3/8").unwrap();
    assert!(candidates(&b, at(6, 4)).is_empty());
}

#[test]
fn test_pawn_blocked_two_ahead() {
    // Black pawn on d7 with a white pawn on d5.
    let b = BoardState::from_layout("8/3p4/8/3P4/8/8/8/8").unwrap();
    assert_eq!(candidates(&b, at(1, 3)), set(&[(2, 3)]));
}

#[test]
fn test_pawn_off_start_row_single_step() {
    let b = BoardState::from_layout("8/8/8/8/4P3/8/8/8").unwrap();
    assert_eq!(candidates(&b, at(4, 4)), set(&[(3, 4)]));
}

#[test]
fn test_pawn_captures_only_opponents() {
    // White pawn on d4, black pawn c5, white knight e5.
    let b = BoardState::from_layout("8/8/8/2p1N3/3P4/8/8/8").unwrap();
    assert_eq!(candidates(&b, at(4, 3)), set(&[(3, 3), (3, 2)]));
}

#[test]
fn test_pawn_on_edge_file_and_last_row() {
    // Black pawn on h2 captures on g1; white pawn on a8 has nowhere to go.
    let b = BoardState::from_layout("P7/8/8/8/8/8/7p/6R1").unwrap();
    assert_eq!(candidates(&b, at(6, 7)), set(&[(7, 7), (7, 6)]));
    assert!(candidates(&b, at(0, 0)).is_empty());
}

#[test]
fn test_knight_center_and_corner() {
    let b = BoardState::from_layout("8/8/8/3N4/8/8/8/8").unwrap();
    assert_eq!(candidates(&b, at(3, 3)).len(), 8);

    let b = BoardState::from_layout("8/8/8/8/8/8/8/N7").unwrap();
    assert_eq!(candidates(&b, at(7, 0)), set(&[(5, 1), (6, 2)]));
}

#[test]
fn test_knight_captures_and_self_block() {
    // White knight d5; black pawn on c7, white pawn on e7.
    let b = BoardState::from_layout("8/2p1P3/8/3N4/8/8/8/8").unwrap();
    let c = candidates(&b, at(3, 3));
    assert!(c.contains(&at(1, 2)));
    assert!(!c.contains(&at(1, 4)));
    assert_eq!(c.len(), 7);
}
