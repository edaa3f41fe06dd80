//! Rule-based opponent for Normal difficulty.

use super::MovePolicy;
use super::random::random_empty_cell;
use crate::board::{Board, CENTER, CORNERS, EDGES};
use crate::error::NoLegalMove;
use crate::rules::find_completing_cell;
use crate::types::Mark;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// Rule-of-thumb opponent that sometimes ignores its own rules.
///
/// With `strategic_probability` it tries, in order: win now, block the
/// opponent, take the center (itself only with `center_probability`), take a
/// corner, take an edge. Otherwise, or if no rule applies, it plays randomly.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy {
    rng: SmallRng,
    strategic_probability: f64,
    center_probability: f64,
}

impl HeuristicPolicy {
    /// Probability of playing by the rules rather than at random.
    pub const DEFAULT_STRATEGIC_PROBABILITY: f64 = 0.7;

    /// Probability of grabbing a free center once win/block do not apply.
    pub const DEFAULT_CENTER_PROBABILITY: f64 = 0.5;

    /// Creates a heuristic policy.
    ///
    /// Probabilities are clamped into [0, 1]; a NaN or infinite probability
    /// falls back to its default.
    pub fn new(rng: SmallRng, strategic_probability: f64, center_probability: f64) -> Self {
        Self {
            rng,
            strategic_probability: sanitize(
                strategic_probability,
                Self::DEFAULT_STRATEGIC_PROBABILITY,
            ),
            center_probability: sanitize(center_probability, Self::DEFAULT_CENTER_PROBABILITY),
        }
    }

    /// Creates a heuristic policy with the default probabilities.
    pub fn with_defaults(rng: SmallRng) -> Self {
        Self::new(
            rng,
            Self::DEFAULT_STRATEGIC_PROBABILITY,
            Self::DEFAULT_CENTER_PROBABILITY,
        )
    }

    fn strategic_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        if let Some(index) = find_completing_cell(board, mark) {
            debug!(%mark, index, "Taking the win");
            return Some(index);
        }
        if let Some(index) = find_completing_cell(board, mark.opponent()) {
            debug!(%mark, index, "Blocking");
            return Some(index);
        }
        if board.is_empty(CENTER) && self.rng.random_bool(self.center_probability) {
            return Some(CENTER);
        }

        let corners: Vec<usize> = CORNERS.into_iter().filter(|&i| board.is_empty(i)).collect();
        if let Some(&index) = corners.choose(&mut self.rng) {
            return Some(index);
        }
        let edges: Vec<usize> = EDGES.into_iter().filter(|&i| board.is_empty(i)).collect();
        edges.choose(&mut self.rng).copied()
    }
}

fn sanitize(probability: f64, default: f64) -> f64 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        warn!(probability, default, "Non-finite probability replaced by default");
        default
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoLegalMove> {
        if board.is_full() {
            return Err(NoLegalMove);
        }

        if self.rng.random_bool(self.strategic_probability) {
            if let Some(index) = self.strategic_move(board, mark) {
                return Ok(index);
            }
        }

        let index = random_empty_cell(board, &mut self.rng)?;
        debug!(%mark, index, "Heuristic fell back to a random move");
        Ok(index)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
