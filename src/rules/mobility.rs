//! Mobility: whether a color has any legal push.
//!
//! A player with no legal push on their own turn loses. The scan honours the
//! current forbidden move, so a player whose only push is barred by the
//! repetition rule has no move. Both functions are read-only.

use smallvec::SmallVec;

use super::push;
use crate::core::{Board, Color, Direction, Push};

/// Legal pushes for one color.
///
/// A color starts with 8 marbles and each has 4 directions, so the standard
/// game never spills to the heap.
pub type LegalPushes = SmallVec<[Push; 32]>;

/// Every candidate push for `color`: each of its marbles in each direction.
fn candidates(board: &Board, color: Color) -> impl Iterator<Item = Push> + '_ {
    board
        .positions(color.cell())
        .flat_map(|origin| Direction::ALL.into_iter().map(move |d| Push::new(origin, d)))
}

/// Check if `color` has at least one legal push.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color, forbidden: Option<Push>) -> bool {
    candidates(board, color).any(|p| push::check(board, p, color, forbidden).is_ok())
}

/// Enumerate all legal pushes for `color`, marbles in row-major order.
#[must_use]
pub fn legal_pushes(board: &Board, color: Color, forbidden: Option<Push>) -> LegalPushes {
    candidates(board, color)
        .filter(|&p| push::check(board, p, color, forbidden).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_standard_board_is_mobile() {
        let board = Board::standard();
        assert!(has_legal_move(&board, Color::White, None));
        assert!(has_legal_move(&board, Color::Black, None));
    }

    #[test]
    fn test_standard_board_opening_moves() {
        let board = Board::standard();
        let pushes = legal_pushes(&board, Color::White, None);
        assert!(pushes.contains(&Push::new((6, 5), Direction::Forward)));
        assert!(pushes.contains(&Push::new((0, 1), Direction::Backward)));
        assert!(pushes.contains(&Push::new((0, 0), Direction::Right)));
        assert!(!pushes.contains(&Push::new((0, 1), Direction::Right)));
        for p in &pushes {
            assert!(push::check(&board, *p, Color::White, None).is_ok());
        }
    }

    #[test]
    fn test_boxed_in_marble_has_no_moves() {
        let board: Board = "
            . . . . . . .
            . . . . . . .
            . . . R . . .
            . . R W R . .
            . . . R . . .
            . . . . . . .
            . . . . . . B
        "
        .parse()
        .unwrap();
        assert!(!has_legal_move(&board, Color::White, None));
        assert!(legal_pushes(&board, Color::White, None).is_empty());
        assert!(has_legal_move(&board, Color::Black, None));
    }

    #[test]
    fn test_only_move_forbidden_means_no_moves() {
        let board: Board = "
            . . . . . . .
            . . . . . . .
            R . . . . . .
            W . . . . . .
            R . . . . . .
            . . . . . . .
            . . . . . . .
        "
        .parse()
        .unwrap();
        let only = Push::new((3, 0), Direction::Right);
        assert_eq!(legal_pushes(&board, Color::White, None).as_slice(), &[only]);
        assert!(has_legal_move(&board, Color::White, None));
        assert!(!has_legal_move(&board, Color::White, Some(only)));
    }

    #[test]
    fn test_scan_does_not_touch_board() {
        let board = Board::standard();
        let copy = board;
        let forbidden = Some(Push::new(Coord::new(4, 5), Direction::Backward));
        let _ = legal_pushes(&board, Color::Black, forbidden);
        assert_eq!(board, copy);
    }
}
