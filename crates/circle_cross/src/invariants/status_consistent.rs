//! Status consistency invariant: the stored status matches the rules.

use super::Invariant;
use crate::rules;
use crate::turn::TurnController;

/// Invariant: the controller's status equals what the rules derive from the board.
pub struct StatusConsistentInvariant;

impl Invariant<TurnController> for StatusConsistentInvariant {
    fn holds(game: &TurnController) -> bool {
        rules::evaluate(game.board()) == game.status()
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
