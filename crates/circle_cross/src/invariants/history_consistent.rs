//! History consistency invariant: replaying the history rebuilds the board.

use super::Invariant;
use crate::board::Board;
use crate::turn::TurnController;
use crate::types::Mark;

/// Invariant: the move history reproduces the board exactly.
///
/// Every move in history lands on a then-empty cell with the alternating
/// mark, and no cell is filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<TurnController> for HistoryConsistentInvariant {
    fn holds(game: &TurnController) -> bool {
        let mut rebuilt = Board::new();
        let mut mark = Mark::Circle;

        for &index in game.history() {
            if rebuilt.place_mark(index, mark).is_err() {
                return false;
            }
            mark = mark.opponent();
        }

        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Move history reproduces the board"
    }
}
