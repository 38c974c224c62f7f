//! Error types for the rules engine and for game setup.
//!
//! `MultiverseError` covers everything a move request or a board query can
//! fail with. Every failure is returned to the caller; the engine never
//! retries and never guesses. `SetupError` covers the collaborators that
//! turn text (position strings, preset catalogs) into a multiverse.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Color, Coord};

pub type Result<T> = std::result::Result<T, MultiverseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiverseError {
    #[error("square ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("no source board at timeline {timeline}, half-turn {half_turn}")]
    InvalidSourceBoard { timeline: i32, half_turn: i32 },

    #[error("no target board at timeline {timeline}, half-turn {half_turn}")]
    InvalidTargetBoard { timeline: i32, half_turn: i32 },

    #[error("no piece can legally move to {to}")]
    NoLegalOrigin { to: Coord },

    #[error("ambiguous move to {to}: candidates at {candidates:?}")]
    AmbiguousOrigin {
        to: Coord,
        candidates: Vec<(i32, i32)>,
    },

    #[error("cannot disambiguate a move that leaves its board (to {to})")]
    UnsupportedDisambiguation { to: Coord },

    #[error("illegal move shape from {from} to {to}")]
    IllegalShape { from: Coord, to: Coord },

    #[error("path from {from} to {to} is obstructed")]
    PathObstructed { from: Coord, to: Coord },

    #[error("destination {to} holds a piece of the moving side")]
    OccupiedByOwnPiece { to: Coord },

    #[error("{color} cannot move a piece of the other color")]
    ColorMismatch { color: Color },

    #[error("no timeline index left for {color} to branch into")]
    TimelineIndexExhausted { color: Color },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("a multiverse needs at least one initial board")]
    NoInitialBoards,

    #[error("timeline {0} is defined twice")]
    DuplicateTimeline(i32),

    #[error("board is {got_width}x{got_height}, expected {width}x{height}")]
    BoardSizeMismatch {
        width: usize,
        height: usize,
        got_width: usize,
        got_height: usize,
    },

    #[error("board needs {expected} squares, got {got}")]
    SquareCount { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("position has {got} ranks, expected {expected}")]
    RankCount { expected: usize, got: usize },

    #[error("rank {rank} spans {got} files, expected {expected}")]
    RankWidth {
        rank: usize,
        expected: usize,
        got: usize,
    },

    #[error("unexpected character in position: {0:?}")]
    UnexpectedChar(char),

    #[error("position lists {boards} boards for {timelines} timelines")]
    TimelineCount { boards: usize, timelines: usize },

    #[error("malformed move text {text:?}: {reason}")]
    MoveText { text: String, reason: &'static str },

    #[error("preset not found: {0}")]
    PresetNotFound(String),

    #[error("preset defined twice: {0}")]
    DuplicatePreset(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preset catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error(transparent)]
    Engine(#[from] MultiverseError),
}

impl SetupError {
    pub(crate) fn move_text(text: &str, reason: &'static str) -> Self {
        Self::MoveText {
            text: text.to_string(),
            reason,
        }
    }
}
