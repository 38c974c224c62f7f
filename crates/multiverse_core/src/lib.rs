//! Rules engine for multiverse chess.
//!
//! A game is a set of timelines, each an append-only run of board states.
//! Pieces move along four axes: timeline, turn, file and rank. A move that
//! leaves its board either jumps into another timeline's present or, when
//! it lands on a past board, branches off a brand-new timeline.

pub mod board;
pub mod error;
pub mod geometry;
pub mod multiverse;
pub mod notation;
pub mod presets;
pub mod render;
pub mod resolve;
pub mod timeline;
pub mod types;

pub use board::BoardState;
pub use error::{MultiverseError, Result, SetupError};
pub use geometry::{PawnStep, Square, SquareView, can_move, check_move, path_clear, shape_allows};
pub use multiverse::Multiverse;
pub use presets::{Preset, PresetCatalog};
pub use resolve::resolve_origin;
pub use timeline::Timeline;
pub use types::*;
