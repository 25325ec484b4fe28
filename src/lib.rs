//! # kuba-rules
//!
//! Rules engine for Kuba, a two-player marble-pushing game on a 7x7 board.
//!
//! ## Design Principles
//!
//! 1. **Pure simulation**: a push is computed from an immutable board
//!    snapshot and returns a new board. Nothing is committed until the match
//!    controller accepts the result.
//!
//! 2. **One push routine**: the four directions share a single algorithm
//!    parameterized by the direction's row/column step.
//!
//! 3. **Explicit failures**: every rejected request names its reason via
//!    [`MoveError`]; [`KubaGame::make_move`] keeps a plain `bool` contract.
//!
//! ## Modules
//!
//! - `core`: coordinates, board, players, pushes, configuration
//! - `rules`: push simulation, repetition guard, mobility scan
//! - `games`: the Kuba match controller
//! - `error`: error types

pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Color, Coord, Direction, MarbleCount, MatchConfig, MoveRecord, Player, PlayerId,
    Players, Push, BOARD_SIZE,
};

pub use crate::error::{
    BoardParseError, ConfigError, MoveError, ParseDirectionError, PushRejection, SetupError,
};

pub use crate::rules::{ForbiddenMove, LegalPushes, PushOutcome, RepetitionGuard};

pub use crate::games::kuba::{KubaGame, MoveOutcome, Phase};
