//! Uniformly random opponent for Easy difficulty.

use super::MovePolicy;
use crate::board::Board;
use crate::error::NoLegalMove;
use crate::types::Mark;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: SmallRng,
}

impl RandomPolicy {
    /// Creates a random policy drawing from `rng`.
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Creates a reproducible random policy.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

/// Uniform choice among the empty cells of `board`.
pub(super) fn random_empty_cell<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, NoLegalMove> {
    board.empty_cells().choose(rng).copied().ok_or(NoLegalMove)
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoLegalMove> {
        let index = random_empty_cell(board, &mut self.rng)?;
        debug!(%mark, index, "Random move");
        Ok(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}
