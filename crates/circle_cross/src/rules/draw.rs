//! Draw detection.

use super::win::check_winner;
use crate::board::Board;

/// A draw is a full board on which nobody completed a line.
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{self, Circle as O, Cross as X};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.place_mark(4, Mark::Circle).unwrap();
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // O O X / X X O / O X O
        let board = Board::from_cells([O, O, X, X, X, O, O, X, O]);
        assert!(check_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert!(!check_draw(&board));
    }
}
