//! Game rules for circle-and-cross.
//!
//! Pure functions of the board: none of them look at whose turn it is.
//! Rules are kept apart from board storage so the turn controller, the
//! invariants and the search can all share them.

pub mod draw;
pub mod score;
pub mod win;

pub use draw::check_draw;
pub use score::{score, LOSS_SCORE, WIN_SCORE};
pub use win::{check_winner, find_completing_cell, winning_line, WINNING_LINES};

use crate::board::Board;
use crate::types::GameStatus;

/// Classifies a board as won, drawn or still in progress.
///
/// Exactly one class applies to any board.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_on_full_board_is_not_draw() {
        // O O O / X X O / X O X  -- full, but circle owns the top row
        use Mark::{Circle as O, Cross as X};
        let board = Board::from_cells([O, O, O, X, X, O, X, O, X]);
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::Circle));
        assert!(!check_draw(&board));
    }
}
