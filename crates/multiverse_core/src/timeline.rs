//! A single branch of the multiverse: an append-only run of board states.

use crate::board::BoardState;
use crate::types::*;

/// Half-turn at which the initial timelines start (turn 1, White).
pub const INITIAL_BEGINS_AT: i32 = 2;

#[derive(Clone, Debug)]
pub struct Timeline {
    index: i32,
    begins_at: i32,
    active_color: Color,
    synthetic: bool,
    states: Vec<BoardState>,
    moves: Vec<MoveRecord>,
}

impl Timeline {
    /// A timeline seeded from the initial setup.
    pub fn initial(index: i32, board: BoardState) -> Self {
        Timeline {
            index,
            begins_at: INITIAL_BEGINS_AT,
            active_color: Color::White,
            synthetic: false,
            states: vec![board],
            moves: Vec::new(),
        }
    }

    /// A timeline spawned by a branching move. `begins_at` is the half-turn
    /// of its first state; `active_color` moves next on it.
    pub fn branched(index: i32, begins_at: i32, active_color: Color, board: BoardState) -> Self {
        Timeline {
            index,
            begins_at,
            active_color,
            synthetic: true,
            states: vec![board],
            moves: Vec::new(),
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }
    pub fn begins_at(&self) -> i32 {
        self.begins_at
    }
    pub fn active_color(&self) -> Color {
        self.active_color
    }
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
    pub fn ply_count(&self) -> usize {
        self.states.len()
    }
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// The latest board, i.e. the timeline's present.
    pub fn present(&self) -> &BoardState {
        // a timeline is never created without a state
        &self.states[self.states.len() - 1]
    }

    /// Stored ply for `turn` as seen by `color`, if any.
    pub fn ply_of(&self, turn: i32, color: Color) -> Option<usize> {
        let half_turn = turn.checked_mul(2)?.checked_add(color.ply_offset())?;
        let ply = usize::try_from(half_turn.checked_sub(self.begins_at)?).ok()?;
        (ply < self.states.len()).then_some(ply)
    }

    pub fn state_at(&self, turn: i32, color: Color) -> Option<&BoardState> {
        self.ply_of(turn, color).map(|ply| &self.states[ply])
    }

    /// True when `turn`/`color` addresses the last stored ply.
    pub fn is_present(&self, turn: i32, color: Color) -> bool {
        self.ply_of(turn, color) == Some(self.states.len() - 1)
    }

    pub fn push(&mut self, board: BoardState) {
        self.states.push(board);
        self.active_color = self.active_color.other();
    }

    pub fn append_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_turn_played(&self) -> i32 {
        let half_turns = self.states.len() as i64 + i64::from(self.begins_at) - 1;
        (half_turns / 2) as i32
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
