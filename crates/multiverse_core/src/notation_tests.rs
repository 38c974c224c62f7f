use super::*;

#[test]
fn test_parse_small_board() {
    let board = parse_board("kqbnr/ppppp/5/PPPPP/KQBNR", 5, 5).unwrap();
    assert_eq!(board.piece_at(0, 0).unwrap(), Some(Piece::white(PieceKind::King)));
    assert_eq!(board.piece_at(4, 4).unwrap(), Some(Piece::black(PieceKind::Rook)));
    assert_eq!(board.piece_at(2, 2).unwrap(), None);
    assert_eq!(board.pieces().count(), 20);
}

#[test]
fn test_parse_several_boards() {
    let boards = parse_boards("nbkrb/ppppp/5/5/PPPPP ppppp/5/5/PPPPP/NBKRB", 5, 5).unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].piece_at(2, 0).unwrap(), Some(Piece::white(PieceKind::King)));
}

#[test]
fn test_unicorns_and_dragons() {
    let board = parse_board("2ddk/5/5/5/KUU2", 5, 5).unwrap();
    assert_eq!(board.piece_at(2, 4).unwrap(), Some(Piece::black(PieceKind::Dragon)));
    assert_eq!(board.piece_at(1, 0).unwrap(), Some(Piece::white(PieceKind::Unicorn)));
}

#[test]
fn test_multi_digit_blank_runs() {
    let board = parse_board("10/k8K", 10, 2).unwrap();
    assert_eq!(board.piece_at(9, 0).unwrap(), Some(Piece::white(PieceKind::King)));
    assert_eq!(board_to_string(&board), "10/k8K");
}

#[test]
fn test_position_errors() {
    assert!(matches!(
        parse_board("5/5/5/5", 5, 5),
        Err(SetupError::RankCount { expected: 5, got: 4 })
    ));
    assert!(matches!(
        parse_board("4/4/4/4/4", 5, 5),
        Err(SetupError::RankWidth { rank: 5, got: 4, .. })
    ));
    assert!(matches!(
        parse_board("kx3/5/5/5/5", 5, 5),
        Err(SetupError::UnexpectedChar('x'))
    ));
    assert!(matches!(
        parse_board("99999999999999999999/5/5/5/5", 5, 5),
        Err(SetupError::RankWidth { .. })
    ));
}

#[test]
fn test_board_to_string_round_trips_standard() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    let board = parse_board(fen, 8, 8).unwrap();
    assert_eq!(board_to_string(&board), fen);
}

#[test]
fn test_parse_full_move() {
    let req: MoveRequest = "N(0T1)b1>(0T1)c3".parse().unwrap();
    assert_eq!(req.piece, Piece::white(PieceKind::Knight));
    assert_eq!(req.from, OriginSpec::new(0, 1, Origin::Full(1, 0)));
    assert_eq!(req.to, Coord::new(0, 1, 2, 2));
}

#[test]
fn test_parse_partial_origins() {
    let req: MoveRequest = "P(0T1)>(0T1)e4".parse().unwrap();
    assert_eq!(req.from.square, Origin::Unknown);

    let req: MoveRequest = "n(-1T3)g>(-1T3)f6".parse().unwrap();
    assert_eq!(req.piece, Piece::black(PieceKind::Knight));
    assert_eq!(req.from, OriginSpec::new(-1, 3, Origin::PartialX(6)));

    let req: MoveRequest = "R(0T2)1>(0T2)d1".parse().unwrap();
    assert_eq!(req.from.square, Origin::PartialY(0));
}

#[test]
fn test_move_display_matches_input() {
    for text in ["N(0T1)b1>(0T1)c3", "P(0T1)>(0T1)e4", "q(-2T7)h>(1T5)a8"] {
        let req: MoveRequest = text.parse().unwrap();
        assert_eq!(req.to_string(), text);
    }
}

#[test]
fn test_bad_move_text() {
    for text in [
        "N(0T1)b1(0T1)c3",
        "X(0T1)b1>(0T1)c3",
        "N0T1b1>(0T1)c3",
        "N(0T1)b1>(0T1)c",
        "N(0x1)b1>(0T1)c3",
        "N(0T1)b0>(0T1)c3",
    ] {
        assert!(
            matches!(text.parse::<MoveRequest>(), Err(SetupError::MoveText { .. })),
            "{text} should not parse"
        );
    }
}
