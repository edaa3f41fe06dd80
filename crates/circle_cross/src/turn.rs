//! Turn state machine.

use crate::board::Board;
use crate::error::InvalidMove;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, TurnInvariants};
use crate::rules;
use crate::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Game continues; the payload is the mark now to move.
    TurnChanged(Mark),
    /// The move completed a line.
    Won(Mark),
    /// The move filled the board without completing a line.
    Draw,
}

impl Transition {
    /// Returns true if the transition ended the game.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Transition::TurnChanged(_))
    }
}

/// Drives whose turn it is and when the game ends.
///
/// Starts `InProgress` with circle to move. `Won` and `Draw` are terminal:
/// every later move is rejected until the controller is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<usize>,
}

impl TurnController {
    /// Creates a new game with circle to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Circle,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// Once the game is over this stays on the mark that made the last move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places the current mark at `index` and advances the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the index is out of range
    /// or the cell is occupied. The state is unchanged in every error case.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<Transition, InvalidMove> {
        if self.status.is_terminal() {
            warn!(index, status = %self.status, "Move after game over");
            return Err(InvalidMove::GameOver);
        }

        let mark = self.turn;
        self.board.place_mark(index, mark).map_err(|e| {
            warn!(index, error = %e, "Invalid move");
            e
        })?;
        self.history.push(index);

        let transition = match rules::evaluate(&self.board) {
            GameStatus::Won(winner) => {
                self.status = GameStatus::Won(winner);
                Transition::Won(winner)
            }
            GameStatus::Draw => {
                self.status = GameStatus::Draw;
                Transition::Draw
            }
            GameStatus::InProgress => {
                self.turn = mark.opponent();
                Transition::TurnChanged(self.turn)
            }
        };

        debug!(index, %mark, ?transition, "Move applied");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(transition)
    }

    /// Replays moves from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMove`] encountered.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for &index in moves {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violations) = TurnInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Turn invariants violated: {violations:?}");
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
