//! The 7x7 Kuba board.
//!
//! `Board` is plain positional data: reads and writes never validate game
//! rules. Legality lives in [`crate::rules`].
//!
//! ## Text diagrams
//!
//! Boards parse from and render to a seven-line diagram, one row per line,
//! top row first. `W` white, `B` black, `R` red, `.` (or `X`) empty.
//! Whitespace between symbols is ignored.
//!
//! ```
//! use kuba_rules::core::{Board, Cell, Coord};
//!
//! let board = Board::standard();
//! assert_eq!(board.cell(Coord::new(0, 0)), Cell::White);
//! assert_eq!(board.cell(Coord::new(3, 3)), Cell::Red);
//! assert_eq!(board.marble_count().as_tuple(), (8, 8, 13));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coord::{Coord, BOARD_SIZE};
use crate::error::BoardParseError;

/// Contents of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Neutral marble.
    Red,
    White,
    Black,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Diagram symbol for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    /// Parse a diagram symbol. Both `.` and `X` denote an empty cell.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol.to_ascii_uppercase() {
            '.' | 'X' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            _ => None,
        }
    }
}

/// Marbles remaining on the board, by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCount {
    pub white: u32,
    pub black: u32,
    pub red: u32,
}

impl MarbleCount {
    /// Counts as a `(white, black, red)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u32, u32, u32) {
        (self.white, self.black, self.red)
    }

    /// Total marbles of all colors.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.white + self.black + self.red
    }

    /// Count for a single cell value. Empty cells always count zero.
    #[must_use]
    pub const fn get(self, cell: Cell) -> u32 {
        match cell {
            Cell::Empty => 0,
            Cell::Red => self.red,
            Cell::White => self.white,
            Cell::Black => self.black,
        }
    }

    /// Record that one marble of `cell`'s color left the board.
    pub fn remove(&mut self, cell: Cell) {
        let slot = match cell {
            Cell::Empty => return,
            Cell::Red => &mut self.red,
            Cell::White => &mut self.white,
            Cell::Black => &mut self.black,
        };
        *slot = slot.saturating_sub(1);
    }
}

const STANDARD_LAYOUT: [&str; BOARD_SIZE] = [
    "WW...BB",
    "WW.R.BB",
    "..RRR..",
    ".RRRRR.",
    "..RRR..",
    "BB.R.WW",
    "BB...WW",
];

/// A 7x7 grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting layout: 13 red, 8 white, 8 black.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (row, line) in STANDARD_LAYOUT.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol).unwrap_or_default();
            }
        }
        board
    }

    /// Parse a board from a seven-line diagram.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol)
                    .ok_or(BoardParseError::UnknownSymbol { row, col, symbol })?;
            }
        }
        Ok(board)
    }

    /// Get the cell at a coordinate.
    ///
    /// The coordinate must be on the board; callers validate it first.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Get the cell at a coordinate, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord.is_on_board().then(|| self.cell(coord))
    }

    /// Overwrite the cell at a coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Copy of this board with one cell replaced.
    #[must_use]
    pub fn with_cell(mut self, coord: Coord, cell: Cell) -> Self {
        self.set(coord, cell);
        self
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> u32 {
        self.cells.iter().flatten().filter(|&&c| c == cell).count() as u32
    }

    /// Marble counts by color.
    #[must_use]
    pub fn marble_count(&self) -> MarbleCount {
        MarbleCount {
            white: self.count(Cell::White),
            black: self.count(Cell::Black),
            red: self.count(Cell::Red),
        }
    }

    /// Coordinates of every cell holding `cell`, in row-major order.
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.cell(c) == cell)
    }

    /// Rows of the grid, top first.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_diagram(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_counts() {
        let board = Board::standard();
        let counts = board.marble_count();
        assert_eq!(counts.as_tuple(), (8, 8, 13));
        assert_eq!(counts.total(), 29);
        assert_eq!(board.count(Cell::Empty), 20);
    }

    #[test]
    fn test_standard_layout_is_symmetric() {
        let board = Board::standard();
        for c in Coord::all() {
            let mirrored = Coord::new(6 - c.row, 6 - c.col);
            // Invariant under 180 degree rotation.
            assert_eq!(board.cell(c), board.cell(mirrored), "asymmetry at {}", c);
        }
    }

    #[test]
    fn test_set_and_with_cell() {
        let mut board = Board::empty();
        board.set(Coord::new(2, 4), Cell::Black);
        assert_eq!(board.cell(Coord::new(2, 4)), Cell::Black);

        let other = board.with_cell(Coord::new(2, 4), Cell::Empty);
        assert_eq!(other.cell(Coord::new(2, 4)), Cell::Empty);
        assert_eq!(board.cell(Coord::new(2, 4)), Cell::Black);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::standard();
        assert_eq!(board.get(Coord::new(0, 0)), Some(Cell::White));
        assert_eq!(board.get(Coord::new(7, 0)), None);
    }

    #[test]
    fn test_diagram_round_trip() {
        let board = Board::standard();
        let text = board.to_string();
        assert!(text.starts_with("W W . . . B B\n"));
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_diagram_accepts_x_for_empty() {
        let board = Board::from_diagram(
            "
            WWXXXBB
            WWXRXBB
            XXRRRXX
            XRRRRRX
            XXRRRXX
            BBXRXWW
            BBXXXWW
            ",
        )
        .unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            Board::from_diagram("W......"),
            Err(BoardParseError::RowCount(1))
        );

        let short = ".......\n.......\n......\n.......\n.......\n.......\n.......";
        assert_eq!(
            Board::from_diagram(short),
            Err(BoardParseError::RowLength { row: 2, len: 6 })
        );

        let bad = ".......\n.......\n.......\n...Q...\n.......\n.......\n.......";
        assert_eq!(
            Board::from_diagram(bad),
            Err(BoardParseError::UnknownSymbol {
                row: 3,
                col: 3,
                symbol: 'Q'
            })
        );
    }

    #[test]
    fn test_positions() {
        let board = Board::standard();
        let whites: Vec<_> = board.positions(Cell::White).collect();
        assert_eq!(whites.len(), 8);
        assert_eq!(whites[0], Coord::new(0, 0));
        assert_eq!(whites[7], Coord::new(6, 6));
    }

    #[test]
    fn test_marble_count_remove() {
        let mut counts = Board::standard().marble_count();
        counts.remove(Cell::Red);
        counts.remove(Cell::Black);
        counts.remove(Cell::Empty);
        assert_eq!(counts.as_tuple(), (8, 7, 12));
        assert_eq!(counts.get(Cell::Black), 7);
        assert_eq!(counts.get(Cell::Empty), 0);
    }
}
