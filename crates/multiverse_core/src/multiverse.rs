//! The multiverse: every timeline of a game plus the move history.
//!
//! A move is applied in three steps. The origin is resolved (filling in a
//! partial file/rank), the kind of travel is decided from where the
//! destination board sits in its timeline, and finally the new board states
//! are pushed. All checks happen before the first push, so a failed move
//! leaves every timeline exactly as it was.

use std::collections::BTreeMap;

use tracing::debug;

use crate::board::BoardState;
use crate::error::{MultiverseError, Result};
use crate::geometry::{Square, SquareView};
use crate::resolve::resolve_origin;
use crate::timeline::Timeline;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Multiverse {
    width: usize,
    height: usize,
    timelines: BTreeMap<i32, Timeline>,
    history: Vec<MoveRecord>,
}

impl Multiverse {
    /// Build a multiverse with one timeline per initial `(index, board)`.
    /// Every initial timeline starts at turn 1 with White to move.
    pub fn new<I>(width: usize, height: usize, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, BoardState)>,
    {
        let mut timelines = BTreeMap::new();
        for (index, board) in initial {
            if board.width() != width || board.height() != height {
                return Err(MultiverseError::BoardSizeMismatch {
                    width,
                    height,
                    got_width: board.width(),
                    got_height: board.height(),
                });
            }
            if timelines.insert(index, Timeline::initial(index, board)).is_some() {
                return Err(MultiverseError::DuplicateTimeline(index));
            }
        }
        if timelines.is_empty() {
            return Err(MultiverseError::NoInitialBoards);
        }
        Ok(Multiverse {
            width,
            height,
            timelines,
            history: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_timeline(&self, index: i32) -> Option<&Timeline> {
        self.timelines.get(&index)
    }

    /// Timelines in ascending index order.
    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> {
        self.timelines.values()
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    /// Every move record, in the order it was written.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn board_at(&self, timeline: i32, turn: i32, color: Color) -> Option<&BoardState> {
        self.get_timeline(timeline)?.state_at(turn, color)
    }

    pub fn piece_at(
        &self,
        timeline: i32,
        turn: i32,
        x: i32,
        y: i32,
        as_color: Color,
    ) -> Result<Option<Piece>> {
        self.board_at(timeline, turn, as_color)
            .ok_or(MultiverseError::InvalidSourceBoard {
                timeline,
                half_turn: Coord::new(timeline, turn, x, y).half_turn(as_color),
            })?
            .piece_at(x, y)
    }

    /// Whether `turn`/`color` is the latest board of `timeline`. False for
    /// unknown timelines.
    pub fn is_present(&self, timeline: i32, turn: i32, color: Color) -> bool {
        self.get_timeline(timeline)
            .is_some_and(|tl| tl.is_present(turn, color))
    }

    pub fn last_turn_played(&self, timeline: i32) -> Option<i32> {
        self.get_timeline(timeline).map(Timeline::last_turn_played)
    }

    pub fn lowest_timeline(&self) -> i32 {
        // never empty: construction requires an initial board
        self.timelines.keys().next().copied().unwrap_or_default()
    }

    pub fn highest_timeline(&self) -> i32 {
        self.timelines.keys().next_back().copied().unwrap_or_default()
    }

    /// Lowest index among timelines where `color` moves next (any timeline
    /// when `None`).
    pub fn lowest_active_timeline(&self, color: Option<Color>) -> Option<i32> {
        self.active_indices(color).next()
    }

    pub fn highest_active_timeline(&self, color: Option<Color>) -> Option<i32> {
        self.active_indices(color).next_back()
    }

    fn active_indices(&self, color: Option<Color>) -> impl DoubleEndedIterator<Item = i32> + '_ {
        self.timelines
            .values()
            .filter(move |tl| color.is_none_or(|c| tl.active_color() == c))
            .map(Timeline::index)
    }

    /// Index for a timeline branched by `color`: beyond every existing
    /// index on that color's side. Fails once that side reaches the end of
    /// the `i32` range.
    pub fn next_branch_index(&self, color: Color) -> Result<i32> {
        let next = match color {
            Color::White => self.highest_timeline().checked_add(1).map(|i| i.max(1)),
            Color::Black => self.lowest_timeline().checked_sub(1).map(|i| i.min(-1)),
        };
        next.ok_or(MultiverseError::TimelineIndexExhausted { color })
    }

    /// Apply a parsed move request; the mover is the piece's color.
    pub fn apply(&mut self, request: &MoveRequest) -> Result<MoveOutcome> {
        self.resolve_and_play(request.piece, request.from, request.to, request.piece.color)
    }

    /// Resolve the origin of `piece` and play it to `to` as `color`.
    pub fn resolve_and_play(
        &mut self,
        piece: Piece,
        from: OriginSpec,
        to: Coord,
        color: Color,
    ) -> Result<MoveOutcome> {
        if piece.color != color {
            return Err(MultiverseError::ColorMismatch { color });
        }
        let source = self.board_at(from.timeline, from.turn, color).ok_or(
            MultiverseError::InvalidSourceBoard {
                timeline: from.timeline,
                half_turn: from.turn.saturating_mul(2).saturating_add(color.ply_offset()),
            },
        )?;
        let target = self
            .board_at(to.timeline, to.turn, color)
            .ok_or(MultiverseError::InvalidTargetBoard {
                timeline: to.timeline,
                half_turn: to.half_turn(color),
            })?;
        let captured = target.piece_at(to.x, to.y)?;
        let from = resolve_origin(self, source, piece, from, to, color)?;

        let record = |kind| MoveRecord {
            kind,
            piece,
            from,
            to,
            color,
            captured,
        };

        if from.timeline == to.timeline && from.turn == to.turn {
            let next = source.with_move((from.x, from.y), (to.x, to.y), piece)?;
            self.push_board(from.timeline, next, record(MoveKind::Move))?;
            debug!(from = %from, to = %to, "move");
            return Ok(outcome(from, to, captured, Travel::Move, None));
        }

        let departed = source.with_cleared(from.x, from.y)?;
        let arrived = target.with_placed(to.x, to.y, piece)?;

        if self.is_present(to.timeline, to.turn, color) {
            self.push_board(from.timeline, departed, record(MoveKind::JumpOut))?;
            self.push_board(to.timeline, arrived, record(MoveKind::JumpIn))?;
            debug!(from = %from, to = %to, "jump");
            return Ok(outcome(from, to, captured, Travel::Jump, None));
        }

        let index = self.next_branch_index(color)?;
        if self.timelines.contains_key(&index) {
            return Err(MultiverseError::DuplicateTimeline(index));
        }
        // the target board exists, so its half-turn is exact
        let begins_at = to.half_turn(color).checked_add(1).ok_or(
            MultiverseError::InvalidTargetBoard {
                timeline: to.timeline,
                half_turn: to.half_turn(color),
            },
        )?;
        self.push_board(from.timeline, departed, record(MoveKind::JumpOut))?;
        let mut branch = Timeline::branched(index, begins_at, color.other(), arrived);
        branch.append_move(record(MoveKind::JumpIn));
        self.timelines.insert(index, branch);
        self.history.push(record(MoveKind::JumpIn));
        debug!(from = %from, to = %to, index, begins_at, "branch spawned timeline");
        Ok(outcome(from, to, captured, Travel::Branch, Some(index)))
    }

    /// Castling across timelines is not supported. Always fails and never
    /// touches the game.
    pub fn castle(
        &self,
        _piece: Piece,
        _from: Coord,
        _long: bool,
        _color: Color,
    ) -> Result<MoveOutcome> {
        Err(MultiverseError::NotImplemented("castling"))
    }

    fn push_board(&mut self, index: i32, board: BoardState, record: MoveRecord) -> Result<()> {
        let timeline = self
            .timelines
            .get_mut(&index)
            .ok_or(MultiverseError::InvalidSourceBoard {
                timeline: index,
                half_turn: record.from.half_turn(record.color),
            })?;
        timeline.push(board);
        timeline.append_move(record);
        self.history.push(record);
        Ok(())
    }
}

fn outcome(
    from: Coord,
    to: Coord,
    captured: Option<Piece>,
    travel: Travel,
    created_timeline: Option<i32>,
) -> MoveOutcome {
    MoveOutcome {
        from,
        to,
        captured,
        travel,
        created_timeline,
    }
}

impl SquareView for Multiverse {
    fn square_as(&self, at: Coord, color: Color) -> Square {
        match self.board_at(at.timeline, at.turn, color).map(|b| b.piece_at(at.x, at.y)) {
            Some(Ok(Some(pc))) => Square::Occupied(pc),
            Some(Ok(None)) => Square::Blank,
            _ => Square::Missing,
        }
    }
}

#[cfg(test)]
#[path = "multiverse_tests.rs"]
mod multiverse_tests;
