//! Kuba match controller.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::core::{
    Board, Cell, Color, Coord, Direction, MarbleCount, MatchConfig, MoveRecord, Player, PlayerId,
    Players, Push,
};
use crate::error::{MoveError, SetupError};
use crate::rules::{mobility, push, ForbiddenMove, LegalPushes, RepetitionGuard};

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No first mover fixed yet.
    NotStarted,
    /// Players alternate pushes.
    InProgress,
    /// A winner is decided; every request fails.
    Finished,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Marble pushed off the board by the move.
    pub captured: Option<Cell>,

    /// Winner, if the move ended the match.
    pub winner: Option<PlayerId>,
}

/// A two-player Kuba match.
///
/// Owns the board, both players and the repetition guard. All mutation goes
/// through [`KubaGame::try_move`] (or its boolean wrapper
/// [`KubaGame::make_move`]); a rejected request leaves the match untouched,
/// apart from the two cases the rules define: the first valid actor fixes the
/// turn order, and a player with no legal push loses.
///
/// ## Example
///
/// ```
/// use kuba_rules::{Cell, Color, Direction, KubaGame};
///
/// let mut game = KubaGame::new(("PlayerA", Color::White), ("PlayerB", Color::Black)).unwrap();
/// assert_eq!(game.marble_count().as_tuple(), (8, 8, 13));
///
/// assert!(game.make_move("PlayerA", (6, 5), Direction::Forward));
/// assert_eq!(game.current_turn(), Some("PlayerB"));
/// assert_eq!(game.winner(), None);
///
/// assert!(!game.make_move("PlayerA", (6, 5), Direction::Left));
/// assert_eq!(game.marble((5, 5)), Some(Cell::White));
/// assert_eq!(game.current_turn(), Some("PlayerB"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubaGame {
    config: MatchConfig,
    board: Board,
    players: Players,
    turn: Option<PlayerId>,
    winner: Option<PlayerId>,
    guard: RepetitionGuard,
    marbles: MarbleCount,
    history: Vector<MoveRecord>,
}

impl KubaGame {
    /// Create a match under standard rules.
    ///
    /// Each player is a `(name, color)` pair. Names must differ and the
    /// colors must be one white, one black.
    pub fn new<A, B>(first: (A, Color), second: (B, Color)) -> Result<Self, SetupError>
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self::with_config(first, second, MatchConfig::default())
    }

    /// Create a match with a custom configuration.
    pub fn with_config<A, B>(
        first: (A, Color),
        second: (B, Color),
        config: MatchConfig,
    ) -> Result<Self, SetupError>
    where
        A: Into<String>,
        B: Into<String>,
    {
        config.validate()?;
        let players = Players::new(
            Player::new(first.0, first.1),
            Player::new(second.0, second.1),
        )?;
        let board = config.starting_board;

        Ok(Self {
            marbles: board.marble_count(),
            board,
            players,
            turn: None,
            winner: None,
            guard: RepetitionGuard::new(),
            history: Vector::new(),
            config,
        })
    }

    /// Fix the first mover explicitly.
    ///
    /// Without this call the first player to submit a move by a registered
    /// name becomes the first mover.
    pub fn start(&mut self, first_mover: &str) -> Result<(), SetupError> {
        if self.turn.is_some() || self.winner.is_some() {
            return Err(SetupError::AlreadyStarted);
        }
        let id = self
            .players
            .find(first_mover)
            .ok_or_else(|| SetupError::UnknownPlayer(first_mover.to_string()))?;
        self.turn = Some(id);
        info!(first_mover, "match started");
        Ok(())
    }

    // === Queries ===

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get both players.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.turn, self.winner) {
            (_, Some(_)) => Phase::Finished,
            (Some(_), None) => Phase::InProgress,
            (None, None) => Phase::NotStarted,
        }
    }

    /// Seat of the player whose turn it is, `None` before the first move.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.turn
    }

    /// Name of the player whose turn it is, `None` before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.turn.map(|id| self.players[id].name())
    }

    /// Seat of the winner, if decided.
    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Name of the winner, if decided.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|id| self.players[id].name())
    }

    /// Marbles remaining on the board.
    #[must_use]
    pub fn marble_count(&self) -> MarbleCount {
        self.marbles
    }

    /// Contents of a cell, `None` if the coordinate is off the board.
    #[must_use]
    pub fn marble(&self, coord: impl Into<Coord>) -> Option<Cell> {
        self.board.get(coord.into())
    }

    /// Red marbles captured by the named player.
    #[must_use]
    pub fn captured(&self, name: &str) -> Option<u32> {
        self.players.by_name(name).map(Player::red_captured)
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.by_name(name)
    }

    /// The push the next mover may not make.
    #[must_use]
    pub fn forbidden_move(&self) -> Option<ForbiddenMove> {
        self.guard.forbidden()
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Legal pushes for the named player on the current board.
    ///
    /// Ignores whose turn it is; the current forbidden move is honoured.
    #[must_use]
    pub fn legal_pushes(&self, name: &str) -> Option<LegalPushes> {
        self.players
            .by_name(name)
            .map(|p| mobility::legal_pushes(&self.board, p.color(), self.guard.forbidden()))
    }

    // === Commands ===

    /// Submit a move, reporting why it failed.
    pub fn try_move(
        &mut self,
        actor: &str,
        origin: impl Into<Coord>,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        let push = Push::new(origin, direction);
        self.submit(actor, push)
            .inspect_err(|err| trace!(actor, %push, %err, "move rejected"))
    }

    /// Submit a move; `true` if it was applied.
    pub fn make_move(&mut self, actor: &str, origin: impl Into<Coord>, direction: Direction) -> bool {
        self.try_move(actor, origin, direction).is_ok()
    }

    #[instrument(skip(self))]
    fn submit(&mut self, actor: &str, push: Push) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if let Some(turn) = self.turn {
            if self.players[turn].name() != actor {
                return Err(MoveError::WrongTurn(actor.to_string()));
            }
        }
        let mover = self
            .players
            .find(actor)
            .ok_or_else(|| MoveError::UnknownActor(actor.to_string()))?;
        if self.turn.is_none() {
            debug!(first_mover = actor, "turn order fixed by first request");
            self.turn = Some(mover);
        }

        let Push { origin, .. } = push;
        if !origin.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: origin.row,
                col: origin.col,
            });
        }
        let color = self.players[mover].color();
        // A player with no marbles left falls through to the mobility loss.
        let stranded = self.board.count(color.cell()) == 0;
        if !stranded && self.board.cell(origin) != color.cell() {
            return Err(MoveError::NotOwnMarble);
        }

        let forbidden = self.guard.forbidden();
        if !mobility::has_legal_move(&self.board, color, forbidden) {
            let opponent = mover.other();
            self.winner = Some(opponent);
            info!(winner = self.players[opponent].name(), "no legal moves left");
            return Err(MoveError::NoLegalMoves(actor.to_string()));
        }

        let outcome = push::simulate(&self.board, push, color, forbidden)?;

        self.board = outcome.board;
        if let Some(marble) = outcome.captured {
            self.players[mover].add_capture(marble);
            self.marbles.remove(marble);
            debug!(?marble, "marble captured");
        }
        self.guard.record(outcome.inverse);
        self.history.push_back(MoveRecord {
            player: mover,
            push,
            captured: outcome.captured,
            ply: self.history.len() as u32 + 1,
        });

        let player = &self.players[mover];
        if player.red_captured() >= self.config.red_to_win
            || player.opponent_captured() >= self.config.opponent_to_win
        {
            self.winner = Some(mover);
            info!(
                winner = actor,
                red = player.red_captured(),
                opponent = player.opponent_captured(),
                "capture threshold reached"
            );
        }
        self.turn = Some(mover.other());

        Ok(MoveOutcome {
            captured: outcome.captured,
            winner: self.winner,
        })
    }
}
