//! Match configuration.
//!
//! The defaults are the standard Kuba rules: the usual starting layout, a win
//! at 7 captured red marbles or 8 captured opponent marbles. Embedders and
//! tests override individual settings with the `with_*` builders.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use crate::error::ConfigError;

/// Captured red marbles needed to win under standard rules.
pub const RED_TO_WIN: u32 = 7;

/// Captured opponent marbles needed to win under standard rules.
pub const OPPONENT_TO_WIN: u32 = 8;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Red marbles a player must capture to win.
    pub red_to_win: u32,

    /// Opponent marbles a player must capture to win.
    pub opponent_to_win: u32,

    /// Layout the match starts from.
    pub starting_board: Board,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            red_to_win: RED_TO_WIN,
            opponent_to_win: OPPONENT_TO_WIN,
            starting_board: Board::standard(),
        }
    }
}

impl MatchConfig {
    /// Set the red capture threshold.
    #[must_use]
    pub fn with_red_to_win(mut self, count: u32) -> Self {
        self.red_to_win = count;
        self
    }

    /// Set the opponent capture threshold.
    #[must_use]
    pub fn with_opponent_to_win(mut self, count: u32) -> Self {
        self.opponent_to_win = count;
        self
    }

    /// Start from a custom layout instead of the standard one.
    #[must_use]
    pub fn with_starting_board(mut self, board: Board) -> Self {
        self.starting_board = board;
        self
    }

    /// Check the configuration can describe a playable match.
    ///
    /// Thresholds beyond what the board can supply are allowed; such a match
    /// still ends when a player runs out of moves, including a player left
    /// with no marbles at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.red_to_win == 0 {
            return Err(ConfigError::ZeroThreshold("red_to_win"));
        }
        if self.opponent_to_win == 0 {
            return Err(ConfigError::ZeroThreshold("opponent_to_win"));
        }
        if self.starting_board.count(Cell::White) == 0 {
            return Err(ConfigError::MissingColor("white"));
        }
        if self.starting_board.count(Cell::Black) == 0 {
            return Err(ConfigError::MissingColor("black"));
        }
        Ok(())
    }
}
