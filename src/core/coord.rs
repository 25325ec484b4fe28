//! Board coordinates and push directions.
//!
//! ## Orientation
//!
//! Row 0 is the top edge and column 0 the left edge. The four push
//! directions use the one-letter codes common in Kuba notation:
//!
//! | Direction  | Code | Step (row, col) |
//! |------------|------|-----------------|
//! | `Left`     | `L`  | (0, -1)         |
//! | `Right`    | `R`  | (0, +1)         |
//! | `Forward`  | `F`  | (-1, 0)         |
//! | `Backward` | `B`  | (+1, 0)         |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// Side length of the square Kuba board.
pub const BOARD_SIZE: usize = 7;

/// A board position.
///
/// Coordinates are unsigned, so only the upper bound needs checking.
/// Use [`Coord::is_on_board`] before indexing a [`Board`](super::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies within `[0, 6] x [0, 6]`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The coordinate `distance` steps away in `direction`.
    ///
    /// Returns `None` if this coordinate or that position is off the board.
    #[must_use]
    pub fn offset(self, direction: Direction, distance: usize) -> Option<Coord> {
        if !self.is_on_board() {
            return None;
        }
        let (dr, dc) = direction.step();
        let distance = isize::try_from(distance).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(distance)?)?;
        Some(Coord::new(row, col)).filter(|c| c.is_on_board())
    }

    /// The neighbouring coordinate in `direction`, if on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        self.offset(direction, 1)
    }

    /// Iterate over every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a line of marbles is pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward column 0.
    Left,
    /// Toward column 6.
    Right,
    /// Toward row 0.
    Forward,
    /// Toward row 6.
    Backward,
}

impl Direction {
    /// All four directions, in `L R F B` order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// The direction that undoes a push in this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Unit `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    /// One-letter notation code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            'F' => Ok(Direction::Forward),
            'B' => Ok(Direction::Backward),
            _ => Err(ParseDirectionError(code.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Direction::try_from(code),
            _ => match s.trim().to_ascii_lowercase().as_str() {
                "left" => Ok(Direction::Left),
                "right" => Ok(Direction::Right),
                "forward" => Ok(Direction::Forward),
                "backward" => Ok(Direction::Backward),
                _ => Err(ParseDirectionError(s.to_string())),
            },
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
