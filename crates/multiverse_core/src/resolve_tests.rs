use super::*;
use crate::multiverse::Multiverse;
use crate::notation::parse_board;

const W: Color = Color::White;

fn game(fen: &str) -> Multiverse {
    let board = parse_board(fen, 5, 5).unwrap();
    Multiverse::new(5, 5, [(0, board)]).unwrap()
}

fn resolve(mv: &Multiverse, piece: Piece, from: OriginSpec, to: Coord) -> Result<Coord> {
    let board = mv.board_at(from.timeline, from.turn, W).unwrap();
    resolve_origin(mv, board, piece, from, to, W)
}

fn knight() -> Piece {
    Piece::white(PieceKind::Knight)
}

#[test]
fn test_unknown_origin_finds_only_legal_piece() {
    let mv = game("n1kn1/5/5/5/1NK1N");
    let from = OriginSpec::new(0, 1, Origin::Unknown);
    assert_eq!(
        resolve(&mv, knight(), from, Coord::new(0, 1, 2, 2)),
        Ok(Coord::new(0, 1, 1, 0))
    );
}

#[test]
fn test_two_candidates_is_ambiguous() {
    let mv = game("2k2/5/5/5/N3N");
    let to = Coord::new(0, 1, 2, 1);
    assert_eq!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::Unknown), to),
        Err(MultiverseError::AmbiguousOrigin {
            to,
            candidates: vec![(0, 0), (4, 0)]
        })
    );
    // a file is enough to pick one
    assert_eq!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::PartialX(4)), to),
        Ok(Coord::new(0, 1, 4, 0))
    );
    // a rank is not
    assert!(matches!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::PartialY(0)), to),
        Err(MultiverseError::AmbiguousOrigin { .. })
    ));
}

#[test]
fn test_no_candidate_reaches_target() {
    let mv = game("2k2/5/5/5/N3N");
    let to = Coord::new(0, 1, 2, 4);
    assert_eq!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::Unknown), to),
        Err(MultiverseError::NoLegalOrigin { to })
    );
}

#[test]
fn test_candidates_must_match_the_piece() {
    // the black knight could reach the square, but White asked for a knight
    let mv = game("2k2/5/5/5/n3R");
    let to = Coord::new(0, 1, 2, 1);
    assert_eq!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::Unknown), to),
        Err(MultiverseError::NoLegalOrigin { to })
    );
}

#[test]
fn test_full_origin_is_validated_not_scanned() {
    let mv = game("2k2/5/5/5/N3N");
    let to = Coord::new(0, 1, 2, 1);

    // two knights could go there, but naming one skips the search
    let from = OriginSpec::new(0, 1, Origin::Full(0, 0));
    assert_eq!(resolve(&mv, knight(), from, to), Ok(Coord::new(0, 1, 0, 0)));

    let empty = OriginSpec::new(0, 1, Origin::Full(1, 0));
    assert_eq!(
        resolve(&mv, knight(), empty, to),
        Err(MultiverseError::NoLegalOrigin { to })
    );

    let bad = Coord::new(0, 1, 2, 2);
    assert_eq!(
        resolve(&mv, knight(), from, bad),
        Err(MultiverseError::IllegalShape {
            from: Coord::new(0, 1, 0, 0),
            to: bad
        })
    );
}

#[test]
fn test_full_origin_reports_obstruction() {
    let mv = game("2k2/5/5/P4/R4");
    let to = Coord::new(0, 1, 0, 4);
    let from = Coord::new(0, 1, 0, 0);
    assert_eq!(
        resolve(&mv, Piece::white(PieceKind::Rook), from.into(), to),
        Err(MultiverseError::PathObstructed { from, to })
    );
}

#[test]
fn test_partial_origin_off_board_is_unsupported() {
    let mv = game("2k2/5/5/5/N3N");
    let to = Coord::new(1, 1, 0, 0);
    assert_eq!(
        resolve(&mv, knight(), OriginSpec::new(0, 1, Origin::PartialX(0)), to),
        Err(MultiverseError::UnsupportedDisambiguation { to })
    );
}
