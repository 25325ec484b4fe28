//! The single-ply repetition rule.
//!
//! After a non-capturing push, the next mover may not make the push that
//! exactly undoes it. The guard only ever remembers the latest committed
//! push: each commit replaces the forbidden move (or clears it when the push
//! captured a marble), so a restriction never outlives one ply.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Direction, Push};

/// The push barred by the repetition rule.
pub type ForbiddenMove = Push;

/// Holds at most one forbidden move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepetitionGuard {
    forbidden: Option<ForbiddenMove>,
}

impl RepetitionGuard {
    /// Create a guard with nothing forbidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently forbidden move.
    #[must_use]
    pub fn forbidden(&self) -> Option<ForbiddenMove> {
        self.forbidden
    }

    /// Check if `(origin, direction)` is the forbidden move.
    #[must_use]
    pub fn forbids(&self, origin: Coord, direction: Direction) -> bool {
        self.forbidden == Some(Push::new(origin, direction))
    }

    /// Replace the forbidden move after a committed push.
    ///
    /// `inverse` is the committed push's undo move, `None` if it captured.
    pub fn record(&mut self, inverse: Option<ForbiddenMove>) {
        self.forbidden = inverse;
    }

    /// Forget the forbidden move.
    pub fn clear(&mut self) {
        self.forbidden = None;
    }
}
