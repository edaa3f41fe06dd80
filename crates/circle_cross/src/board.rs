//! The 3x3 grid and its placement rules.

use crate::error::InvalidMove;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Corner cells in ascending order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge (non-corner, non-center) cells in ascending order.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells.
    ///
    /// No legality checks are made; used by tests and by callers restoring a
    /// snapshot they produced themselves.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the mark at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Returns true if the cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::OutOfRange`] if `index` is not in 0-8
    /// - [`InvalidMove::Occupied`] if the cell already holds a mark
    /// - [`InvalidMove::EmptyMark`] if `mark` is [`Mark::Empty`]
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        if !mark.is_player() {
            return Err(InvalidMove::EmptyMark);
        }
        match self.cells.get_mut(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(cell) if cell.is_player() => Err(InvalidMove::Occupied(index)),
            Some(cell) => {
                *cell = mark;
                Ok(())
            }
        }
    }

    /// Trial placement for search; the caller has already checked the cell
    /// is empty and reverts with [`Board::clear`].
    pub(crate) fn play(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_empty(index), "trial placement on occupied cell {index}");
        self.cells[index] = mark;
    }

    /// Reverts a trial placement made during search.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    /// Returns true iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_player())
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_player())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Mark::Empty => result.push_str(&(index + 1).to_string()),
                    mark => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        assert!(board.place_mark(4, Mark::Circle).is_ok());
        assert_eq!(board.get(4), Some(Mark::Circle));
        assert_eq!(board.count(Mark::Circle), 1);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place_mark(9, Mark::Circle), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied() {
        let mut board = Board::new();
        board.place_mark(0, Mark::Circle).unwrap();
        assert_eq!(board.place_mark(0, Mark::Cross), Err(InvalidMove::Occupied(0)));
        assert_eq!(board.get(0), Some(Mark::Circle));
    }

    #[test]
    fn test_place_empty_mark_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place_mark(0, Mark::Empty), Err(InvalidMove::EmptyMark));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for index in 0..CELL_COUNT {
            let mark = if index % 2 == 0 { Mark::Circle } else { Mark::Cross };
            board.place_mark(index, mark).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = Board::new();
        board.place_mark(4, Mark::Circle).unwrap();
        board.place_mark(0, Mark::Cross).unwrap();
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_clear_reverts_trial() {
        let mut board = Board::new();
        board.place_mark(3, Mark::Cross).unwrap();
        board.clear(3);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_mark(0, Mark::Circle).unwrap();
        board.place_mark(4, Mark::Cross).unwrap();
        assert_eq!(board.display(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
