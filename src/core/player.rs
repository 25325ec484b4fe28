//! Players and their capture inventories.
//!
//! ## PlayerId
//!
//! Seat index of a player: `PlayerId(0)` is the first player passed at match
//! construction, `PlayerId(1)` the second.
//!
//! ## Players
//!
//! The pair of [`Player`] records owned by a match, indexable by `PlayerId`
//! and searchable by name. There are no back-references: the match owns both
//! records by value.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Cell;
use crate::error::SetupError;

/// A player marble color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The board cell holding a marble of this color.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.cell()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "W"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// Seat index of a player in a two-player match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Both seats, in construction order.
    pub const BOTH: [PlayerId; 2] = [PlayerId(0), PlayerId(1)];

    /// Create a new player ID. Only 0 and 1 are valid seats.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant: identity, color and capture inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    red_captured: u32,
    opponent_captured: u32,
}

impl Player {
    /// Create a player with an empty inventory.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            red_captured: 0,
            opponent_captured: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Red marbles this player has pushed off the board.
    #[must_use]
    pub fn red_captured(&self) -> u32 {
        self.red_captured
    }

    /// Opponent-colored marbles this player has pushed off the board.
    #[must_use]
    pub fn opponent_captured(&self) -> u32 {
        self.opponent_captured
    }

    /// Total marbles of any color this player has captured.
    #[must_use]
    pub fn total_captured(&self) -> u32 {
        self.red_captured + self.opponent_captured
    }

    /// Add a marble pushed off the board to the inventory.
    ///
    /// Empty cells and the player's own color are ignored; the push rules
    /// never hand either to a capturer.
    pub fn add_capture(&mut self, marble: Cell) {
        match marble {
            Cell::Red => self.red_captured += 1,
            m if m == self.color.other().cell() => self.opponent_captured += 1,
            _ => {}
        }
    }
}

/// The two players of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; 2],
}

impl Players {
    /// Register two players.
    ///
    /// Names must be distinct and the colors must be one white, one black.
    pub fn new(first: Player, second: Player) -> Result<Self, SetupError> {
        if first.name == second.name {
            return Err(SetupError::DuplicateName(first.name));
        }
        if first.color == second.color {
            return Err(SetupError::DuplicateColor);
        }
        Ok(Self {
            seats: [first, second],
        })
    }

    /// Look up a player's seat by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        PlayerId::BOTH
            .into_iter()
            .find(|&id| self[id].name == name)
    }

    /// Look up a player record by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.find(name).map(|id| &self[id])
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::BOTH.into_iter().zip(self.seats.iter())
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Players {
        Players::new(Player::new("Ann", Color::White), Player::new("Ben", Color::Black)).unwrap()
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(p0.other(), p1);
        assert_eq!(p1.other(), p0);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_color_basics() {
        assert_eq!(Color::White.other(), Color::Black);
        assert_eq!(Color::Black.cell(), Cell::Black);
        assert_eq!(Cell::from(Color::White), Cell::White);
    }

    #[test]
    fn test_find_by_name() {
        let players = players();
        assert_eq!(players.find("Ann"), Some(PlayerId::new(0)));
        assert_eq!(players.find("Ben"), Some(PlayerId::new(1)));
        assert_eq!(players.find("Cat"), None);
        assert_eq!(players.by_name("Ben").map(Player::color), Some(Color::Black));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Players::new(Player::new("Ann", Color::White), Player::new("Ann", Color::Black));
        assert_eq!(err, Err(SetupError::DuplicateName("Ann".to_string())));
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let err = Players::new(Player::new("Ann", Color::Black), Player::new("Ben", Color::Black));
        assert_eq!(err, Err(SetupError::DuplicateColor));
    }

    #[test]
    fn test_add_capture() {
        let mut ann = Player::new("Ann", Color::White);
        ann.add_capture(Cell::Red);
        ann.add_capture(Cell::Red);
        ann.add_capture(Cell::Black);
        ann.add_capture(Cell::White);
        ann.add_capture(Cell::Empty);

        assert_eq!(ann.red_captured(), 2);
        assert_eq!(ann.opponent_captured(), 1);
        assert_eq!(ann.total_captured(), 3);
    }

    #[test]
    fn test_index_mut() {
        let mut players = players();
        players[PlayerId::new(1)].add_capture(Cell::White);
        assert_eq!(players[PlayerId::new(1)].opponent_captured(), 1);
        assert_eq!(players[PlayerId::new(0)].opponent_captured(), 0);
    }

    #[test]
    fn test_iter() {
        let players = players();
        let names: Vec<_> = players.iter().map(|(id, p)| (id.index(), p.name())).collect();
        assert_eq!(names, vec![(0, "Ann"), (1, "Ben")]);
    }
}
