use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Half-turn offset of this color within a turn.
    pub fn ply_offset(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Sign of "forward" for this color (pawn direction, branch indices).
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Unicorn,
    Dragon,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Unicorn,
        PieceKind::Dragon,
    ];

    /// Sliding pieces need an unobstructed path to their destination.
    pub fn is_slider(self) -> bool {
        matches!(
            self,
            PieceKind::Rook
                | PieceKind::Bishop
                | PieceKind::Unicorn
                | PieceKind::Dragon
                | PieceKind::Queen
        )
    }

    /// Upper-case letter used by position and move notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Unicorn => 'U',
            PieceKind::Dragon => 'D',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn white(kind: PieceKind) -> Self {
        Self::new(Color::White, kind)
    }

    pub fn black(kind: PieceKind) -> Self {
        Self::new(Color::Black, kind)
    }

    /// Notation letter: upper case for White, lower case for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            'U' => PieceKind::Unicorn,
            'D' => PieceKind::Dragon,
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// A square in the multiverse: timeline, turn, file, rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub timeline: i32,
    pub turn: i32,
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(timeline: i32, turn: i32, x: i32, y: i32) -> Self {
        Self {
            timeline,
            turn,
            x,
            y,
        }
    }

    /// Half-turn number of the board this square lives on, seen by `color`.
    /// Saturates at the ends of the `i32` range.
    pub fn half_turn(self, color: Color) -> i32 {
        self.turn.saturating_mul(2).saturating_add(color.ply_offset())
    }

    pub fn axes(self) -> [i32; 4] {
        [self.timeline, self.turn, self.x, self.y]
    }

    pub fn from_axes(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl Sub for Coord {
    type Output = Displacement;

    fn sub(self, rhs: Coord) -> Displacement {
        let (a, b) = (self.axes(), rhs.axes());
        Displacement(std::array::from_fn(|i| a[i].saturating_sub(b[i])))
    }
}

impl Add<Displacement> for Coord {
    type Output = Coord;

    fn add(self, rhs: Displacement) -> Coord {
        let (a, d) = (self.axes(), rhs.0);
        Coord::from_axes(std::array::from_fn(|i| a[i].saturating_add(d[i])))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}T{}){}", self.timeline, self.turn, square_name(self.x, self.y))
    }
}

/// Signed four-axis displacement `(timeline, turn, x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Displacement(pub [i32; 4]);

impl Displacement {
    pub const fn new(dl: i32, dt: i32, dx: i32, dy: i32) -> Self {
        Self([dl, dt, dx, dy])
    }

    pub fn dl(self) -> i32 {
        self.0[0]
    }
    pub fn dt(self) -> i32 {
        self.0[1]
    }
    pub fn dx(self) -> i32 {
        self.0[2]
    }
    pub fn dy(self) -> i32 {
        self.0[3]
    }

    pub fn is_zero(self) -> bool {
        self.0 == [0; 4]
    }

    /// Absolute axis magnitudes, largest first.
    pub fn magnitudes(self) -> [i32; 4] {
        let mut a = self.0.map(i32::saturating_abs);
        a.sort_unstable_by(|x, y| y.cmp(x));
        a
    }
}

impl std::ops::Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Displacement {
        Displacement(self.0.map(i32::saturating_neg))
    }
}

impl Mul<i32> for Displacement {
    type Output = Displacement;

    fn mul(self, rhs: i32) -> Displacement {
        Displacement(self.0.map(|v| v.saturating_mul(rhs)))
    }
}

/// Source square of a move request. Timeline and turn are always known;
/// the file and rank may be left for the resolver to fill in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Full(i32, i32),
    PartialX(i32),
    PartialY(i32),
    Unknown,
}

impl Origin {
    pub fn x(self) -> Option<i32> {
        match self {
            Origin::Full(x, _) | Origin::PartialX(x) => Some(x),
            _ => None,
        }
    }

    pub fn y(self) -> Option<i32> {
        match self {
            Origin::Full(_, y) | Origin::PartialY(y) => Some(y),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OriginSpec {
    pub timeline: i32,
    pub turn: i32,
    pub square: Origin,
}

impl OriginSpec {
    pub const fn new(timeline: i32, turn: i32, square: Origin) -> Self {
        Self {
            timeline,
            turn,
            square,
        }
    }

    /// Full coordinate when both file and rank are given.
    pub fn resolved(self) -> Option<Coord> {
        match self.square {
            Origin::Full(x, y) => Some(Coord::new(self.timeline, self.turn, x, y)),
            _ => None,
        }
    }
}

impl From<Coord> for OriginSpec {
    fn from(c: Coord) -> Self {
        OriginSpec::new(c.timeline, c.turn, Origin::Full(c.x, c.y))
    }
}

/// A move as a player writes it: the piece, where it comes from (possibly
/// partially), and where it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub piece: Piece,
    pub from: OriginSpec,
    pub to: Coord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Move,
    JumpOut,
    JumpIn,
    CastleShort,
    CastleLong,
}

/// One entry of a timeline's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: MoveKind,
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    pub color: Color,
    pub captured: Option<Piece>,
}

/// How an applied move affected the multiverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Travel {
    /// Origin and destination on the same board.
    Move,
    /// Into the present board of another timeline.
    Jump,
    /// Into a past board; a new timeline was spawned.
    Branch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
    pub travel: Travel,
    pub created_timeline: Option<i32>,
}

// Helpers
pub fn square_name(x: i32, y: i32) -> String {
    match u8::try_from(x) {
        Ok(x) if x < 26 => format!("{}{}", (b'a' + x) as char, y + 1),
        _ => format!("{x}:{}", y + 1),
    }
}
