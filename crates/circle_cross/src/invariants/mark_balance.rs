//! Mark balance invariant: circle is never behind and never two ahead.

use super::Invariant;
use crate::turn::TurnController;
use crate::types::Mark;

/// Invariant: circles minus crosses is 0 or 1, and the turn agrees.
///
/// Circle always moves first, so after an even number of moves the counts
/// are equal and circle is to move; after an odd number circle leads by one.
pub struct MarkBalanceInvariant;

impl Invariant<TurnController> for MarkBalanceInvariant {
    fn holds(game: &TurnController) -> bool {
        let circles = game.board().count(Mark::Circle);
        let crosses = game.board().count(Mark::Cross);

        match circles.checked_sub(crosses) {
            Some(0) => game.status().is_terminal() || game.turn() == Mark::Circle,
            Some(1) => game.status().is_terminal() || game.turn() == Mark::Cross,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting with circle (circle count - cross count in {0, 1})"
    }
}
