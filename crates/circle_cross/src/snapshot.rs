//! Read-only view of a session handed to presentation.

use crate::board::Board;
use crate::rules;
use crate::turn::TurnController;
use crate::types::{Difficulty, GameStatus, Mark, Mode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Cell contents.
    board: Board,
    /// Mark to move, or the last mover once the game is over.
    turn: Mark,
    /// Game status.
    status: GameStatus,
    /// Who plays cross.
    mode: Mode,
    /// Computer strength.
    difficulty: Difficulty,
    /// The completed line, for highlighting a win.
    winning_line: Option<[usize; 3]>,
}

impl StateSnapshot {
    pub(crate) fn capture(game: &TurnController, mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            board: *game.board(),
            turn: game.turn(),
            status: game.status(),
            mode,
            difficulty,
            winning_line: rules::winning_line(game.board()),
        }
    }

    /// Renders the board and a status line as plain text.
    pub fn render(&self) -> String {
        let footer = match self.status {
            GameStatus::InProgress => format!("{} to move", self.turn),
            status => status.to_string(),
        };
        format!("{}\n{}", self.board.display(), footer)
    }
}
