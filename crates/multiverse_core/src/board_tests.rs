use super::*;

fn knight() -> Piece {
    Piece::white(PieceKind::Knight)
}

#[test]
fn test_piece_at_out_of_bounds() {
    let board = BoardState::empty(5, 4);
    assert_eq!(board.piece_at(4, 3), Ok(None));
    assert!(matches!(
        board.piece_at(5, 0),
        Err(MultiverseError::OutOfBounds { x: 5, y: 0, .. })
    ));
    assert!(matches!(
        board.piece_at(0, -1),
        Err(MultiverseError::OutOfBounds { .. })
    ));
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let board = BoardState::empty(3, 3).with_placed(0, 0, knight()).unwrap();
    let next = board.with_move((0, 0), (1, 2), knight()).unwrap();

    assert_eq!(board.piece_at(0, 0).unwrap(), Some(knight()));
    assert_eq!(board.piece_at(1, 2).unwrap(), None);
    assert_eq!(next.piece_at(0, 0).unwrap(), None);
    assert_eq!(next.piece_at(1, 2).unwrap(), Some(knight()));
}

#[test]
fn test_pieces_iterates_row_major() {
    let board = BoardState::empty(2, 2)
        .with_placed(1, 1, Piece::black(PieceKind::King))
        .unwrap()
        .with_placed(0, 1, knight())
        .unwrap();
    let found: Vec<_> = board.pieces().collect();
    assert_eq!(
        found,
        vec![(0, 1, knight()), (1, 1, Piece::black(PieceKind::King))]
    );
}

#[test]
fn test_from_squares_checks_count() {
    assert!(BoardState::from_squares(2, 2, vec![None; 4]).is_ok());
    assert_eq!(
        BoardState::from_squares(2, 2, vec![None; 3]),
        Err(MultiverseError::SquareCount {
            expected: 4,
            got: 3
        })
    );
}
