//! Push requests and the record of committed pushes.
//!
//! A [`Push`] is the only move primitive: an origin marble plus a direction.
//! The same type names the single forbidden move tracked by the repetition
//! rule, since that move is itself a push.

use serde::{Deserialize, Serialize};

use super::board::Cell;
use super::coord::{Coord, Direction};
use super::player::PlayerId;

/// A push of the line starting at `origin` one step in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Push {
    pub origin: Coord,
    pub direction: Direction,
}

impl Push {
    /// Create a push.
    #[must_use]
    pub fn new(origin: impl Into<Coord>, direction: Direction) -> Self {
        Self {
            origin: origin.into(),
            direction,
        }
    }
}

impl std::fmt::Display for Push {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.direction)
    }
}

/// A committed push with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who pushed.
    pub player: PlayerId,

    /// The push made.
    pub push: Push,

    /// Marble pushed off the board, if any.
    pub captured: Option<Cell>,

    /// Ply number, starting at 1.
    pub ply: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_new_from_tuple() {
        let push = Push::new((6, 5), Direction::Forward);
        assert_eq!(push.origin, Coord::new(6, 5));
        assert_eq!(push.direction, Direction::Forward);
        assert_eq!(push.to_string(), "(6, 5) F");
    }

    #[test]
    fn test_push_equality() {
        let a = Push::new((3, 0), Direction::Right);
        assert_eq!(a, Push::new(Coord::new(3, 0), Direction::Right));
        assert_ne!(a, Push::new((3, 0), Direction::Left));
        assert_ne!(a, Push::new((3, 1), Direction::Right));
    }
}
