//! Core engine types: coordinates, board, players, pushes, configuration.
//!
//! These are plain data. Game rules live in [`crate::rules`] and the match
//! state machine in [`crate::games::kuba`].

pub mod action;
pub mod board;
pub mod config;
pub mod coord;
pub mod player;

pub use action::{MoveRecord, Push};
pub use board::{Board, Cell, MarbleCount};
pub use config::{MatchConfig, OPPONENT_TO_WIN, RED_TO_WIN};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use player::{Color, Player, PlayerId, Players};
