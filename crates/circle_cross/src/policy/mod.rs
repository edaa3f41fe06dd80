//! Computer opponents.
//!
//! - [`RandomPolicy`]: any empty cell, uniformly (Easy)
//! - [`HeuristicPolicy`]: win, block, center, corner, edge, with deliberate slips (Normal)
//! - [`MinimaxPolicy`]: exhaustive game-tree search (Hard)

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicPolicy;
pub use minimax::MinimaxPolicy;
pub use random::RandomPolicy;

use crate::board::Board;
use crate::config::PolicyConfig;
use crate::error::NoLegalMove;
use crate::types::{Difficulty, Mark};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, instrument};

/// Strategy that picks a cell for the computer.
pub trait MovePolicy: Send {
    /// Chooses an empty cell for `mark` to play.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board is full. Callers never ask on a
    /// finished game, so this signals a broken contract.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoLegalMove>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Builds an RNG from an optional seed; without one, seeds from the thread RNG.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Builds the policy that plays at `difficulty`.
#[instrument(skip(rng))]
pub fn policy_for(
    difficulty: Difficulty,
    config: &PolicyConfig,
    rng: SmallRng,
) -> Box<dyn MovePolicy> {
    let policy: Box<dyn MovePolicy> = match difficulty {
        Difficulty::Easy => Box::new(RandomPolicy::new(rng)),
        Difficulty::Normal => Box::new(HeuristicPolicy::new(
            rng,
            *config.strategic_probability(),
            *config.center_probability(),
        )),
        Difficulty::Hard => Box::new(match config.minimax_depth_limit() {
            Some(limit) => MinimaxPolicy::with_depth_limit(*limit),
            None => MinimaxPolicy::new(),
        }),
    };
    debug!(policy = policy.name(), "Policy selected");
    policy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_follow_difficulty() {
        let config = PolicyConfig::default();
        let names: Vec<String> = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
            .into_iter()
            .map(|d| policy_for(d, &config, seeded_rng(Some(1))).name().to_string())
            .collect();
        assert_eq!(names, vec!["random", "heuristic", "minimax"]);
    }

    #[test]
    fn test_every_policy_rejects_full_board() {
        use Mark::{Circle as O, Cross as X};
        let full = Board::from_cells([O, O, X, X, X, O, O, X, O]);
        let config = PolicyConfig::default();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mut policy = policy_for(difficulty, &config, seeded_rng(Some(7)));
            assert_eq!(policy.choose_move(&full, Mark::Cross), Err(NoLegalMove));
        }
    }
}
