//! Headless policy-versus-policy matches.

use circle_cross::{
    Difficulty, GameStatus, Mark, MovePolicy, PolicyConfig, TurnController, policy_for, seeded_rng,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games circle won.
    pub circle_wins: u32,
    /// Games cross won.
    pub cross_wins: u32,
    /// Games drawn.
    pub draws: u32,
    /// Difficulty playing circle.
    pub circle: Difficulty,
    /// Difficulty playing cross.
    pub cross: Difficulty,
}

/// Plays `games` games of `circle` against `cross`.
#[instrument(skip(policy_config))]
pub fn simulate(
    circle: Difficulty,
    cross: Difficulty,
    games: u32,
    seed: Option<u64>,
    policy_config: &PolicyConfig,
) -> anyhow::Result<SimulationReport> {
    let mut rng = seeded_rng(seed);
    let mut circle_policy = policy_for(circle, policy_config, SmallRng::from_rng(&mut rng));
    let mut cross_policy = policy_for(cross, policy_config, SmallRng::from_rng(&mut rng));

    let mut report = SimulationReport {
        circle,
        cross,
        ..SimulationReport::default()
    };

    for game_number in 0..games {
        let mut game = TurnController::new();
        while !game.status().is_terminal() {
            let policy = match game.turn() {
                Mark::Circle => &mut circle_policy,
                _ => &mut cross_policy,
            };
            let index = policy.choose_move(game.board(), game.turn())?;
            game.apply_move(index)?;
        }

        match game.status() {
            GameStatus::Won(Mark::Circle) => report.circle_wins += 1,
            GameStatus::Won(_) => report.cross_wins += 1,
            _ => report.draws += 1,
        }
        report.games += 1;
        debug!(game_number, status = %game.status(), moves = ?game.history(), "Game finished");
    }

    info!(
        circle_wins = report.circle_wins,
        cross_wins = report.cross_wins,
        draws = report.draws,
        "Simulation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_sum_to_games() {
        let report =
            simulate(Difficulty::Easy, Difficulty::Normal, 30, Some(9), &PolicyConfig::default()).unwrap();
        assert_eq!(report.games, 30);
        assert_eq!(report.circle_wins + report.cross_wins + report.draws, 30);
    }

    #[test]
    fn test_hard_never_loses_as_cross() {
        let report =
            simulate(Difficulty::Easy, Difficulty::Hard, 10, Some(3), &PolicyConfig::default()).unwrap();
        assert_eq!(report.circle_wins, 0);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = PolicyConfig::default();
        let a = simulate(Difficulty::Normal, Difficulty::Easy, 20, Some(42), &config).unwrap();
        let b = simulate(Difficulty::Normal, Difficulty::Easy, 20, Some(42), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_json_shape() {
        let report = SimulationReport {
            games: 1,
            draws: 1,
            circle: Difficulty::Hard,
            cross: Difficulty::Hard,
            ..SimulationReport::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["circle"], "hard");
        assert_eq!(json["draws"], 1);
        assert_eq!(json["cross_wins"], 0);
    }
}
