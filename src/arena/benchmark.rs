//! Many games between the same two agents.

use tracing::{info, instrument};

use super::config::MatchConfig;
use super::record::GameRecord;
use super::runner::MatchRunner;
use crate::agents::Agent;
use crate::core::{GameConfig, GameRng};
use crate::error::ConfigError;
use crate::stats::AggregateStats;

/// Sequential benchmark runner.
///
/// Every game starts from a fresh board, and its fallback substitutions draw
/// from a per-game fork of the configured seed. Runs are reproducible when
/// the agents are seeded too.
#[derive(Clone, Debug)]
pub struct Benchmark {
    game: GameConfig,
    config: MatchConfig,
}

impl Benchmark {
    pub fn new(game: GameConfig, config: MatchConfig) -> Result<Self, ConfigError> {
        game.validate()?;
        config.validate()?;
        Ok(Self { game, config })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `games` games and return their records in order.
    pub fn play(
        &self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
        games: usize,
    ) -> Result<Vec<GameRecord>, ConfigError> {
        let mut seeds = GameRng::new(self.config.seed);
        let template = MatchRunner::new(self.game, self.config)?;

        let mut records = Vec::with_capacity(games);
        for _ in 0..games {
            let mut runner = template.clone().with_rng(seeds.fork());
            records.push(runner.play_game(agent_a, agent_b));
        }
        Ok(records)
    }

    /// Play `games` games, folding each into fresh statistics.
    #[instrument(skip_all, fields(agent_a = agent_a.name(), agent_b = agent_b.name(), games = games))]
    pub fn run(
        &self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
        games: usize,
    ) -> Result<AggregateStats, ConfigError> {
        let mut stats = AggregateStats::new(self.config.timeout_threshold());
        stats.extend(&self.play(agent_a, agent_b, games)?);

        let key = format!("{} vs {}", agent_a.name(), agent_b.name());
        if let Some(matchup) = stats.matchup(&key) {
            info!(
                wins = matchup.wins,
                losses = matchup.losses,
                draws = matchup.draws,
                "benchmark finished"
            );
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;

    fn benchmark() -> Benchmark {
        Benchmark::new(GameConfig::default(), MatchConfig::default().with_seed(5)).unwrap()
    }

    #[test]
    fn test_run_counts_every_game() {
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2).with_name("Other");

        let stats = benchmark().run(&mut a, &mut b, 3).unwrap();

        assert_eq!(stats.total_games(), 3);
        let m = stats.matchup("RandomAgent vs Other").unwrap();
        assert_eq!(m.wins + m.losses + m.draws, 3);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let play = || {
            let mut a = RandomAgent::new(1);
            let mut b = RandomAgent::new(2);
            benchmark().play(&mut a, &mut b, 2).unwrap()
        };
        assert_eq!(
            play().iter().map(|g| g.outcome).collect::<Vec<_>>(),
            play().iter().map(|g| g.outcome).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(Benchmark::new(GameConfig::default(), MatchConfig::new().with_max_turns(0)).is_err());
    }
}
