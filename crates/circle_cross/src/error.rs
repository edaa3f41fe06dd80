//! Error types for the game engine.

/// A move the engine refused to apply. No state changes when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The computer is about to move; human input waits until it has.
    #[display("Not your turn: the computer is still to move")]
    NotYourTurn,

    /// Only `Circle` or `Cross` can be placed.
    #[display("Cannot place an empty mark")]
    EmptyMark,
}

impl std::error::Error for InvalidMove {}

/// A policy was asked to move on a board with no empty cell.
///
/// This is a contract violation: the turn controller never asks for a move
/// once the board is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}
