use crate::error::{MultiverseError, Result};
use crate::types::*;

/// One ply of one timeline. Never modified once built: moves produce new
/// states through the crate-private copy-and-edit helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    width: usize,
    height: usize,
    squares: Vec<Option<Piece>>, // row-major, y = 0 is White's back rank
}

impl BoardState {
    pub fn empty(width: usize, height: usize) -> Self {
        BoardState {
            width,
            height,
            squares: vec![None; width * height],
        }
    }

    /// Build a state from row-major squares. The square count must match
    /// the board size.
    pub fn from_squares(width: usize, height: usize, squares: Vec<Option<Piece>>) -> Result<Self> {
        if squares.len() != width * height {
            return Err(MultiverseError::SquareCount {
                expected: width * height,
                got: squares.len(),
            });
        }
        Ok(BoardState {
            width,
            height,
            squares,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub(crate) fn check_bounds(&self, x: i32, y: i32) -> Result<usize> {
        self.index(x, y).ok_or(MultiverseError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<Piece>> {
        let i = self.check_bounds(x, y)?;
        Ok(self.squares[i])
    }

    /// Occupied squares as `(x, y, piece)`, row by row from rank 0.
    pub fn pieces(&self) -> impl Iterator<Item = (i32, i32, Piece)> + '_ {
        let w = self.width;
        self.squares.iter().enumerate().filter_map(move |(i, sq)| {
            sq.map(|pc| ((i % w) as i32, (i / w) as i32, pc))
        })
    }

    pub fn squares(&self) -> &[Option<Piece>] {
        &self.squares
    }

    fn with_square(&self, x: i32, y: i32, value: Option<Piece>) -> Result<BoardState> {
        let i = self.check_bounds(x, y)?;
        let mut next = self.clone();
        next.squares[i] = value;
        Ok(next)
    }

    pub(crate) fn with_cleared(&self, x: i32, y: i32) -> Result<BoardState> {
        self.with_square(x, y, None)
    }

    pub(crate) fn with_placed(&self, x: i32, y: i32, piece: Piece) -> Result<BoardState> {
        self.with_square(x, y, Some(piece))
    }

    /// Successor with `from` emptied and `piece` standing on `to`.
    pub(crate) fn with_move(&self, from: (i32, i32), to: (i32, i32), piece: Piece) -> Result<BoardState> {
        let from = self.check_bounds(from.0, from.1)?;
        let to = self.check_bounds(to.0, to.1)?;
        let mut next = self.clone();
        next.squares[from] = None;
        next.squares[to] = Some(piece);
        Ok(next)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
