//! Push simulation.
//!
//! A push moves the contiguous line of marbles starting at the origin one
//! step in the push direction. The line extends to the first empty cell; if
//! there is none before the edge, the marble at the edge falls off.
//!
//! Simulation is pure: it reads a board snapshot and returns a new board.
//! [`check`] runs every legality rule without building the resulting board,
//! which is all the mobility scan needs.
//!
//! ## Rules, in check order
//!
//! 1. The origin holds a marble of the acting color.
//! 2. The cell behind the origin is empty or off the board.
//! 3. The push does not force the acting color's own marble off the edge.
//! 4. The push is not the forbidden move.

use crate::core::{Board, Cell, Color, Coord, Direction, Push};
use crate::error::PushRejection;

/// A validated push, ready to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushPlan {
    /// The push being made.
    pub push: Push,

    /// Marbles in the moving line, counting the origin.
    pub line_len: usize,

    /// The empty cell the line moves into, or `None` if the line reaches the
    /// edge and its last marble falls off.
    pub gap: Option<Coord>,

    /// Marble pushed off the board.
    pub captured: Option<Cell>,
}

impl PushPlan {
    /// The push that would exactly undo this one.
    ///
    /// After the push the line ends on the former gap; pushing that marble
    /// back the opposite way restores the previous board. A capturing push
    /// changes the marble count and cannot be undone.
    #[must_use]
    pub fn inverse(&self) -> Option<Push> {
        self.gap
            .map(|gap| Push::new(gap, self.push.direction.opposite()))
    }

    /// Produce the board after this push.
    ///
    /// Every marble in the line takes the place of the next cell ahead; the
    /// origin is left empty.
    #[must_use]
    pub fn apply(&self, board: &Board) -> Board {
        let Push { origin, direction } = self.push;
        let mut next = *board;

        // Far end of the cells that receive a marble.
        let last = match self.gap {
            Some(_) => self.line_len,
            None => self.line_len - 1,
        };
        for distance in (1..=last).rev() {
            if let (Some(to), Some(from)) = (
                origin.offset(direction, distance),
                origin.offset(direction, distance - 1),
            ) {
                next.set(to, board.cell(from));
            }
        }
        next.set(origin, Cell::Empty);
        next
    }
}

/// Result of a legal push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushOutcome {
    /// Board after the push.
    pub board: Board,

    /// Marble pushed off the board, if any.
    pub captured: Option<Cell>,

    /// Push that would undo this one; becomes the next forbidden move.
    pub inverse: Option<Push>,
}

/// Validate a push without building the resulting board.
///
/// `forbidden` is the move barred by the repetition rule, if any.
pub fn check(
    board: &Board,
    push: Push,
    color: Color,
    forbidden: Option<Push>,
) -> Result<PushPlan, PushRejection> {
    let Push { origin, direction } = push;

    if board.get(origin) != Some(color.cell()) {
        return Err(PushRejection::NotOwnMarble);
    }

    if let Some(behind) = origin.step(direction.opposite()) {
        if !board.cell(behind).is_empty() {
            return Err(PushRejection::NoSpaceBehind);
        }
    }

    // Walk the line until an empty cell or the edge.
    let mut line_len = 0;
    let mut gap = None;
    while let Some(at) = origin.offset(direction, line_len) {
        if board.cell(at).is_empty() {
            gap = Some(at);
            break;
        }
        line_len += 1;
    }

    let captured = match gap {
        Some(_) => None,
        None => {
            let edge = origin
                .offset(direction, line_len - 1)
                .map(|at| board.cell(at))
                .unwrap_or_default();
            if edge == color.cell() {
                return Err(PushRejection::SelfElimination);
            }
            Some(edge)
        }
    };

    if forbidden == Some(push) {
        return Err(PushRejection::RepetitionForbidden);
    }

    Ok(PushPlan {
        push,
        line_len,
        gap,
        captured,
    })
}

/// Simulate a push on a board snapshot.
pub fn simulate(
    board: &Board,
    push: Push,
    color: Color,
    forbidden: Option<Push>,
) -> Result<PushOutcome, PushRejection> {
    let plan = check(board, push, color, forbidden)?;
    Ok(PushOutcome {
        board: plan.apply(board),
        captured: plan.captured,
        inverse: plan.inverse(),
    })
}

/// Simulate a push given as origin and direction.
pub fn simulate_at(
    board: &Board,
    origin: Coord,
    direction: Direction,
    color: Color,
    forbidden: Option<Push>,
) -> Result<PushOutcome, PushRejection> {
    simulate(board, Push::new(origin, direction), color, forbidden)
}
