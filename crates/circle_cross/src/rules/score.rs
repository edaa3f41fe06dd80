//! Static scoring of a board from one mark's point of view.

use super::win::check_winner;
use crate::board::Board;
use crate::types::Mark;

/// Score of a board the perspective mark has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a board the opponent has won.
pub const LOSS_SCORE: i32 = -10;

/// Returns [`WIN_SCORE`], [`LOSS_SCORE`] or 0 for `perspective`.
pub fn score(board: &Board, perspective: Mark) -> i32 {
    match check_winner(board) {
        Some(winner) if winner == perspective => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_both_perspectives() {
        let mut board = Board::new();
        for i in [0, 4, 8] {
            board.place_mark(i, Mark::Cross).unwrap();
        }
        assert_eq!(score(&board, Mark::Cross), WIN_SCORE);
        assert_eq!(score(&board, Mark::Circle), LOSS_SCORE);
    }

    #[test]
    fn test_score_no_winner() {
        assert_eq!(score(&Board::new(), Mark::Circle), 0);
    }
}
