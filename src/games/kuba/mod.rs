//! Two-player Kuba.
//!
//! Players alternate pushing lines of marbles on a 7x7 board. A player wins
//! by pushing off 7 red marbles or all 8 of the opponent's marbles, and
//! loses on a turn where no legal push remains.
//!
//! The first mover is whoever submits the first move by a registered name,
//! unless [`KubaGame::start`] fixes it beforehand.

mod game;

pub use game::{KubaGame, MoveOutcome, Phase};
