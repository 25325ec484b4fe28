//! Error types.
//!
//! Every failure in the engine is an expected, recoverable outcome. Move
//! requests fail with [`MoveError`], which names the reason; callers that only
//! need success/failure use [`KubaGame::make_move`](crate::KubaGame::make_move).

/// Why a push was rejected by the simulator.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PushRejection {
    #[error("origin does not hold a marble of the acting color")]
    NotOwnMarble,

    #[error("the cell behind the origin is occupied")]
    NoSpaceBehind,

    #[error("push would force the mover's own marble off the board")]
    SelfElimination,

    #[error("push would undo the opponent's previous push")]
    RepetitionForbidden,
}

/// Why a move request failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is not {0}'s turn")]
    WrongTurn(String),

    #[error("the game is already over")]
    GameOver,

    #[error("no player named {0}")]
    UnknownActor(String),

    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("origin does not hold a marble of the acting color")]
    NotOwnMarble,

    #[error("the cell behind the origin is occupied")]
    NoSpaceBehind,

    #[error("push would force the mover's own marble off the board")]
    SelfElimination,

    #[error("push would undo the opponent's previous push")]
    RepetitionForbidden,

    #[error("{0} has no legal moves and loses")]
    NoLegalMoves(String),
}

impl From<PushRejection> for MoveError {
    fn from(rejection: PushRejection) -> Self {
        match rejection {
            PushRejection::NotOwnMarble => MoveError::NotOwnMarble,
            PushRejection::NoSpaceBehind => MoveError::NoSpaceBehind,
            PushRejection::SelfElimination => MoveError::SelfElimination,
            PushRejection::RepetitionForbidden => MoveError::RepetitionForbidden,
        }
    }
}

/// Errors constructing or starting a match.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players are named {0}")]
    DuplicateName(String),

    #[error("both players chose the same color")]
    DuplicateColor,

    #[error("no player named {0}")]
    UnknownPlayer(String),

    #[error("the first mover is already fixed")]
    AlreadyStarted,

    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors validating a [`MatchConfig`](crate::core::MatchConfig).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    ZeroThreshold(&'static str),

    #[error("starting board has no {0} marbles")]
    MissingColor(&'static str),
}

/// Errors parsing a board diagram.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 7 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// Error parsing a push direction code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected L, R, F or B)")]
pub struct ParseDirectionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rejection_converts() {
        assert_eq!(
            MoveError::from(PushRejection::SelfElimination),
            MoveError::SelfElimination
        );
        assert_eq!(
            MoveError::from(PushRejection::RepetitionForbidden),
            MoveError::RepetitionForbidden
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { row: 7, col: 2 };
        assert_eq!(err.to_string(), "coordinate (7, 2) is off the board");

        let err = MoveError::NoLegalMoves("Bob".to_string());
        assert_eq!(err.to_string(), "Bob has no legal moves and loses");
    }

    #[test]
    fn test_setup_error_from_config() {
        let err: SetupError = ConfigError::ZeroThreshold("red_to_win").into();
        assert_eq!(
            err.to_string(),
            "invalid match configuration: red_to_win must be at least 1"
        );
    }

    #[test]
    fn test_parse_direction_error_display() {
        let err = ParseDirectionError("Q".to_string());
        assert_eq!(
            err.to_string(),
            "unknown direction \"Q\" (expected L, R, F or B)"
        );
    }
}
