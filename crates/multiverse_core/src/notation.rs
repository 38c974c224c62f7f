//! Text forms for positions and moves.
//!
//! Positions use FEN-style piece placement: ranks separated by `/`, top
//! rank first, digit runs for blank squares, and one board per
//! whitespace-separated field when a game starts on several timelines.
//!
//! Moves are written `<piece>(<L>T<T>)[file][rank]>(<L>T<T>)<file><rank>`,
//! e.g. `N(0T1)b1>(0T1)c3`. The origin's file and rank may be dropped
//! and left to the resolver: `P(0T1)>(0T1)e4`, `n(0T1)g>(0T1)f6`.

use std::fmt;
use std::str::FromStr;

use crate::board::BoardState;
use crate::error::SetupError;
use crate::types::*;

/// Parse one or more boards of `width x height`.
pub fn parse_boards(text: &str, width: usize, height: usize) -> Result<Vec<BoardState>, SetupError> {
    text.split_whitespace()
        .map(|field| parse_board(field, width, height))
        .collect()
}

pub fn parse_board(field: &str, width: usize, height: usize) -> Result<BoardState, SetupError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != height {
        return Err(SetupError::RankCount {
            expected: height,
            got: ranks.len(),
        });
    }

    let mut squares = vec![None; width * height];
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let y = height - 1 - rank_idx; // listed top rank first
        let mut row: Vec<Option<Piece>> = Vec::with_capacity(width);
        let mut blanks = 0usize;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                blanks = blanks.saturating_mul(10).saturating_add(d as usize);
                if row.len().saturating_add(blanks) > width {
                    return Err(SetupError::RankWidth {
                        rank: y + 1,
                        expected: width,
                        got: row.len().saturating_add(blanks),
                    });
                }
                continue;
            }
            row.extend(std::iter::repeat_n(None, blanks));
            blanks = 0;
            let pc = Piece::from_char(ch).ok_or(SetupError::UnexpectedChar(ch))?;
            row.push(Some(pc));
        }
        row.extend(std::iter::repeat_n(None, blanks));

        if row.len() != width {
            return Err(SetupError::RankWidth {
                rank: y + 1,
                expected: width,
                got: row.len(),
            });
        }
        squares[y * width..(y + 1) * width].copy_from_slice(&row);
    }
    Ok(BoardState::from_squares(width, height, squares)?)
}

/// Inverse of [`parse_board`].
pub fn board_to_string(board: &BoardState) -> String {
    let width = board.width();
    let mut ranks = Vec::with_capacity(board.height());
    for row in board.squares().chunks(width.max(1)).rev() {
        let mut s = String::new();
        let mut blanks = 0;
        for sq in row {
            match sq {
                None => blanks += 1,
                Some(pc) => {
                    if blanks > 0 {
                        s.push_str(&blanks.to_string());
                        blanks = 0;
                    }
                    s.push(pc.to_char());
                }
            }
        }
        if blanks > 0 {
            s.push_str(&blanks.to_string());
        }
        ranks.push(s);
    }
    ranks.join("/")
}

fn file_char(x: i32) -> Option<char> {
    u8::try_from(x)
        .ok()
        .filter(|x| *x < 26)
        .map(|x| (b'a' + x) as char)
}

/// `(L T T)` prefix: returns timeline, turn and the remaining text.
fn parse_board_ref<'a>(s: &'a str, text: &str) -> Result<(i32, i32, &'a str), SetupError> {
    let inner = s
        .strip_prefix('(')
        .ok_or_else(|| SetupError::move_text(text, "expected '(' before the board"))?;
    let (board, rest) = inner
        .split_once(')')
        .ok_or_else(|| SetupError::move_text(text, "unclosed board reference"))?;
    let (timeline, turn) = board
        .split_once('T')
        .ok_or_else(|| SetupError::move_text(text, "board reference needs a 'T'"))?;
    let timeline = timeline
        .parse()
        .map_err(|_| SetupError::move_text(text, "bad timeline number"))?;
    let turn = turn
        .parse()
        .map_err(|_| SetupError::move_text(text, "bad turn number"))?;
    Ok((timeline, turn, rest))
}

/// Optional file letter followed by an optional 1-based rank.
fn parse_square(s: &str, text: &str) -> Result<Origin, SetupError> {
    let mut rest = s;
    let mut x = None;
    if let Some(c) = rest.chars().next().filter(char::is_ascii_lowercase) {
        x = Some((c as u8 - b'a') as i32);
        rest = &rest[1..];
    }
    let y = if rest.is_empty() {
        None
    } else {
        let rank: i32 = rest
            .parse()
            .map_err(|_| SetupError::move_text(text, "bad rank"))?;
        if rank < 1 {
            return Err(SetupError::move_text(text, "ranks start at 1"));
        }
        Some(rank - 1)
    };
    Ok(match (x, y) {
        (Some(x), Some(y)) => Origin::Full(x, y),
        (Some(x), None) => Origin::PartialX(x),
        (None, Some(y)) => Origin::PartialY(y),
        (None, None) => Origin::Unknown,
    })
}

impl FromStr for MoveRequest {
    type Err = SetupError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (left, right) = text
            .split_once('>')
            .ok_or_else(|| SetupError::move_text(text, "missing '>'"))?;

        let mut chars = left.chars();
        let piece = chars
            .next()
            .and_then(Piece::from_char)
            .ok_or_else(|| SetupError::move_text(text, "unknown piece letter"))?;

        let (timeline, turn, rest) = parse_board_ref(chars.as_str(), text)?;
        let from = OriginSpec::new(timeline, turn, parse_square(rest, text)?);

        let (timeline, turn, rest) = parse_board_ref(right, text)?;
        let Origin::Full(x, y) = parse_square(rest, text)? else {
            return Err(SetupError::move_text(text, "destination needs file and rank"));
        };

        Ok(MoveRequest {
            piece,
            from,
            to: Coord::new(timeline, turn, x, y),
        })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}T{})", self.piece.to_char(), self.from.timeline, self.from.turn)?;
        if let Some(c) = self.from.square.x().and_then(file_char) {
            write!(f, "{c}")?;
        }
        if let Some(y) = self.from.square.y() {
            write!(f, "{}", y + 1)?;
        }
        write!(f, ">{}", self.to)
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
