//! Win detection.

use crate::board::Board;
use crate::types::Mark;

/// The eight lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line in [`WINNING_LINES`] order.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let mark = board.get(a);
        matches!(mark, Some(m) if m.is_player()) && mark == board.get(b) && mark == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

/// Finds the empty cell that would complete a line for `mark`.
///
/// Lines are scanned in [`WINNING_LINES`] order; the first line holding two
/// `mark`s and one empty cell wins.
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == Some(mark)).count();
        let empty = line.iter().copied().find(|&i| board.is_empty(i));
        match (owned, empty) {
            (2, Some(cell)) => Some(cell),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(circles: &[usize], crosses: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in circles {
            board.place_mark(i, Mark::Circle).unwrap();
        }
        for &i in crosses {
            board.place_mark(i, Mark::Cross).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[0, 1, 2], &[4, 5]);
        assert_eq!(check_winner(&board), Some(Mark::Circle));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[0, 1], &[2, 4, 6]);
        assert_eq!(check_winner(&board), Some(Mark::Cross));
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_completing_cell_finds_gap() {
        let board = board_with(&[0, 2], &[4]);
        assert_eq!(find_completing_cell(&board, Mark::Circle), Some(1));
        assert_eq!(find_completing_cell(&board, Mark::Cross), None);
    }

    #[test]
    fn test_completing_cell_ignores_blocked_line() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(find_completing_cell(&board, Mark::Circle), None);
    }

    #[test]
    fn test_completing_cell_uses_line_order() {
        // Circle threatens both column [1,4,7] (gap 7) and row [3,4,5] (gap 5);
        // rows come first.
        let board = board_with(&[1, 3, 4], &[0, 8]);
        assert_eq!(find_completing_cell(&board, Mark::Circle), Some(5));
    }
}
