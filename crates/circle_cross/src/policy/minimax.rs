//! Exhaustive game-tree search for Hard difficulty.

use super::MovePolicy;
use crate::board::{Board, CELL_COUNT};
use crate::error::NoLegalMove;
use crate::rules::{LOSS_SCORE, WIN_SCORE, score};
use crate::types::Mark;
use tracing::{debug, instrument};

/// Perfect play by exhaustive minimax search.
///
/// Leaves are scored from the mover's perspective: `10 - depth` for a win,
/// `-10 + depth` for a loss, `0` for a draw, so quicker wins and slower
/// losses are preferred. Ties go to the lowest cell index.
#[derive(Debug, Clone, Default)]
pub struct MinimaxPolicy {
    depth_limit: Option<usize>,
    nodes: u64,
}

impl MinimaxPolicy {
    /// Creates an unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a search that scores any node at `limit` plies below the
    /// candidate move as a draw.
    pub fn with_depth_limit(limit: usize) -> Self {
        Self {
            depth_limit: Some(limit),
            nodes: 0,
        }
    }

    /// Returns the configured depth limit.
    pub fn depth_limit(&self) -> Option<usize> {
        self.depth_limit
    }

    /// Returns the number of positions visited by the last search.
    pub fn last_node_count(&self) -> u64 {
        self.nodes
    }

    /// Scores every empty cell for `mark`, in ascending cell order.
    #[instrument(skip(self, board), fields(board = %board.display()))]
    pub fn evaluate_moves(&mut self, board: &Board, mark: Mark) -> Vec<(usize, i32)> {
        self.nodes = 0;
        let mut scratch = *board;
        let mut scores = Vec::with_capacity(CELL_COUNT);

        for index in 0..CELL_COUNT {
            if !scratch.is_empty(index) {
                continue;
            }
            scratch.play(index, mark);
            let value = self.minimax(&mut scratch, 0, false, mark);
            scratch.clear(index);
            scores.push((index, value));
        }

        debug!(%mark, nodes = self.nodes, ?scores, "Minimax search complete");
        scores
    }

    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool, me: Mark) -> i32 {
        self.nodes += 1;

        if self.depth_limit.is_some_and(|limit| depth >= limit) {
            return 0;
        }

        let value = score(board, me);
        if value == WIN_SCORE {
            return value - depth as i32;
        }
        if value == LOSS_SCORE {
            return value + depth as i32;
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..CELL_COUNT {
            if !board.is_empty(index) {
                continue;
            }
            board.play(index, mover);
            let value = self.minimax(board, depth + 1, !maximizing, me);
            board.clear(index);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, NoLegalMove> {
        let mut best: Option<(usize, i32)> = None;
        for (index, value) in self.evaluate_moves(board, mark) {
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| index).ok_or(NoLegalMove)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
