//! Movement geometry over the four axes `(timeline, turn, x, y)`.
//!
//! Shapes are judged on the sorted absolute displacement `a` (largest
//! first), so a rook slides along any single axis, a bishop along any two
//! equal axes, a unicorn three and a dragon all four. Knights and kings mix
//! the timeline and turn axes exactly like the spatial ones.

use crate::error::{MultiverseError, Result};
use crate::types::*;

/// What a lookup finds at a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Square {
    /// The board or the square does not exist.
    Missing,
    Blank,
    Occupied(Piece),
}

/// Read access to squares across the multiverse, resolved through the
/// half-turn `color` sees for each turn.
pub trait SquareView {
    fn square_as(&self, at: Coord, color: Color) -> Square;
}

/// The pawn move families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PawnStep {
    Single,
    Double,
    /// Forward one turn on the same square of the same timeline.
    TimeStep,
    Capture,
    /// Capture one timeline over and one turn on, same square.
    BranchCapture,
}

/// Shape test for every piece but the pawn (whose legality depends on the
/// destination's occupancy, see [`pawn_step`]). Returns false for pawns.
pub fn shape_allows(kind: PieceKind, d: Displacement) -> bool {
    if d.is_zero() {
        return false;
    }
    let a = d.magnitudes();
    let orthogonal = a[1] == 0;
    let diagonal = a[0] == a[1] && a[2] == 0;
    let trigonal = a[0] == a[1] && a[1] == a[2] && a[3] == 0;
    let quadragonal = a[0] == a[1] && a[1] == a[2] && a[2] == a[3];
    match kind {
        PieceKind::Pawn => false,
        PieceKind::Knight => a == [2, 1, 0, 0],
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => diagonal,
        PieceKind::Unicorn => trigonal,
        PieceKind::Dragon => quadragonal,
        PieceKind::Queen => orthogonal || diagonal || trigonal || quadragonal,
        PieceKind::King => a[0] < 2,
    }
}

/// Pawn family matched by `d` for `color`. `capturing` selects the family
/// by the destination's occupancy; a move must match that family only.
/// Black mirrors every sign.
pub fn pawn_step(color: Color, d: Displacement, capturing: bool) -> Option<PawnStep> {
    let f = color.forward();
    if capturing {
        if d.dl() == 0 && d.dt() == 0 && d.dy() == f && d.dx().abs() == 1 {
            return Some(PawnStep::Capture);
        }
        if d.dl() == f && d.dt() == f && d.dx() == 0 && d.dy() == 0 {
            return Some(PawnStep::BranchCapture);
        }
        return None;
    }
    if d.dl() == 0 && d.dt() == 0 && d.dx() == 0 {
        if d.dy() == f {
            return Some(PawnStep::Single);
        }
        if d.dy() == 2 * f {
            return Some(PawnStep::Double);
        }
    }
    if d.dl() == 0 && d.dt() == f && d.dx() == 0 && d.dy() == 0 {
        return Some(PawnStep::TimeStep);
    }
    None
}

/// True when every square strictly between `from` and `to` exists and is
/// blank. False when the move is not n-gonal (nonzero magnitudes differ).
pub fn path_clear<V: SquareView + ?Sized>(view: &V, from: Coord, to: Coord, color: Color) -> bool {
    let d = to - from;
    let length = d.magnitudes()[0];
    if length == 0 {
        return true;
    }
    if !d.0.iter().all(|v| *v == 0 || v.saturating_abs() == length) {
        return false;
    }
    let step = Displacement(d.0.map(|v| v / length));
    (1..length).all(|k| view.square_as(from + step * k, color) == Square::Blank)
}

/// Full legality check for `piece` travelling `from -> to` as `color`.
pub fn check_move<V: SquareView + ?Sized>(
    view: &V,
    piece: Piece,
    from: Coord,
    to: Coord,
    color: Color,
) -> Result<()> {
    let illegal = MultiverseError::IllegalShape { from, to };
    if from == to {
        return Err(illegal);
    }
    let capturing = match view.square_as(to, color) {
        Square::Missing => {
            return Err(MultiverseError::InvalidTargetBoard {
                timeline: to.timeline,
                half_turn: to.half_turn(color),
            });
        }
        Square::Blank => false,
        Square::Occupied(pc) if pc.color == piece.color => {
            return Err(MultiverseError::OccupiedByOwnPiece { to });
        }
        Square::Occupied(_) => true,
    };

    let d = to - from;
    if piece.kind == PieceKind::Pawn {
        return match pawn_step(piece.color, d, capturing) {
            None => Err(illegal),
            Some(PawnStep::Double) => {
                let between = Coord {
                    y: to.y - piece.color.forward(),
                    ..to
                };
                if view.square_as(between, color) == Square::Blank {
                    Ok(())
                } else {
                    Err(MultiverseError::PathObstructed { from, to })
                }
            }
            Some(_) => Ok(()),
        };
    }

    if !shape_allows(piece.kind, d) {
        return Err(illegal);
    }
    if piece.kind.is_slider() && !path_clear(view, from, to, color) {
        return Err(MultiverseError::PathObstructed { from, to });
    }
    Ok(())
}

pub fn can_move<V: SquareView + ?Sized>(
    view: &V,
    piece: Piece,
    from: Coord,
    to: Coord,
    color: Color,
) -> bool {
    check_move(view, piece, from, to, color).is_ok()
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
