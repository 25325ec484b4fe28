//! Kuba move rules.
//!
//! - `push`: simulate a single push and decide its legality
//! - `repetition`: the forbidden-move guard
//! - `mobility`: whether a color has any legal push
//!
//! Everything here is a pure function of a board snapshot (plus the current
//! forbidden move). The match controller in [`crate::games::kuba`] owns the state
//! and commits results.

pub mod mobility;
pub mod push;
pub mod repetition;

pub use mobility::{has_legal_move, legal_pushes, LegalPushes};
pub use push::{check, simulate, simulate_at, PushOutcome, PushPlan};
pub use repetition::{ForbiddenMove, RepetitionGuard};
