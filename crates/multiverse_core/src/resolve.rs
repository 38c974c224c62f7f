//! Filling in the origin square of a partially written move.

use tracing::trace;

use crate::board::BoardState;
use crate::error::{MultiverseError, Result};
use crate::geometry::{SquareView, can_move, check_move};
use crate::types::*;

/// Find the single square on `board` from which `piece` can reach `to`.
///
/// `board` is the origin board (`from.timeline` at `from.turn` as seen by
/// `color`). A fully specified origin is validated directly: it must hold
/// `piece` and the move must be geometrically legal. A partial origin is
/// only supported when the move stays on its board.
pub fn resolve_origin<V: SquareView + ?Sized>(
    view: &V,
    board: &BoardState,
    piece: Piece,
    from: OriginSpec,
    to: Coord,
    color: Color,
) -> Result<Coord> {
    if let Some(origin) = from.resolved() {
        if board.piece_at(origin.x, origin.y)? != Some(piece) {
            return Err(MultiverseError::NoLegalOrigin { to });
        }
        check_move(view, piece, origin, to, color)?;
        return Ok(origin);
    }

    if from.timeline != to.timeline || from.turn != to.turn {
        return Err(MultiverseError::UnsupportedDisambiguation { to });
    }

    let want_x = from.square.x();
    let want_y = from.square.y();
    let candidates: Vec<Coord> = board
        .pieces()
        .filter(|&(_, _, pc)| pc == piece)
        .filter(|&(x, _, _)| want_x.is_none_or(|wx| wx == x))
        .filter(|&(_, y, _)| want_y.is_none_or(|wy| wy == y))
        .map(|(x, y, _)| Coord::new(from.timeline, from.turn, x, y))
        .filter(|&origin| can_move(view, piece, origin, to, color))
        .collect();

    trace!(to = %to, count = candidates.len(), "origin candidates");

    match candidates.as_slice() {
        [] => Err(MultiverseError::NoLegalOrigin { to }),
        [only] => Ok(*only),
        many => Err(MultiverseError::AmbiguousOrigin {
            to,
            candidates: many.iter().map(|c| (c.x, c.y)).collect(),
        }),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
