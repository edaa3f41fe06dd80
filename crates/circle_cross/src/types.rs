//! Core domain types for circle-and-cross.

use serde::{Deserialize, Serialize};

/// Contents of a single cell, doubling as the symbol a player places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mark {
    /// Unplayed cell.
    #[default]
    Empty,
    /// Circle (moves first).
    Circle,
    /// Cross (moves second).
    Cross,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `Circle` and `Cross`.
    pub fn is_player(self) -> bool {
        !matches!(self, Mark::Empty)
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Circle => 'O',
            Mark::Cross => 'X',
        }
    }
}

/// Who controls the second seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    HumanVsHuman,
    /// A human plays Circle against the computer.
    #[default]
    HumanVsComputer,
}

impl Mode {
    /// The other mode; used by front ends that offer a toggle.
    pub fn toggled(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Mostly sensible moves with deliberate mistakes.
    #[default]
    Normal,
    /// Exhaustive minimax search; never loses.
    Hard,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
