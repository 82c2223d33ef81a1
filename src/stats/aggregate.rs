//! Running statistics over finished games.
//!
//! `AggregateStats` is a fold over `GameRecord`s. Every counter only grows,
//! and folding the same record twice counts it twice.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::arena::{GameRecord, MoveClass};
use crate::core::Player;

/// Width of a game-length histogram band, in moves.
pub const LENGTH_BAND: usize = 4;

/// Stage of a game, by move index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves 0 to 7.
    Opening,
    /// Moves 8 to 15.
    Midgame,
    /// Move 16 onwards.
    Endgame,
}

impl GamePhase {
    pub const ALL: [GamePhase; 3] = [GamePhase::Opening, GamePhase::Midgame, GamePhase::Endgame];

    #[must_use]
    pub fn of_move(index: usize) -> Self {
        match index {
            0..=7 => GamePhase::Opening,
            8..=15 => GamePhase::Midgame,
            _ => GamePhase::Endgame,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GamePhase::Opening => "Opening",
            GamePhase::Midgame => "Midgame",
            GamePhase::Endgame => "Endgame",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Results for one ordered pair of agents, from the first agent's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupStats {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

/// Move classifications within one game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub valid: u64,
    pub random_fallback: u64,
    pub invalid: u64,
    pub error: u64,
    /// Moves slower than the timeout threshold, whatever their class.
    pub timeouts: u64,
}

impl PhaseStats {
    fn count(&mut self, class: MoveClass) {
        match class {
            MoveClass::Valid => self.valid += 1,
            MoveClass::RandomFallback => self.random_fallback += 1,
            MoveClass::Invalid => self.invalid += 1,
            MoveClass::Error => self.error += 1,
        }
    }

    /// Sum over all classifications.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.valid + self.random_fallback + self.invalid + self.error
    }
}

/// Per-agent fallback accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentUsage {
    pub games: u64,
    pub fallbacks_used: u64,
    /// Sum of the fallback budgets of every game played.
    pub fallbacks_granted: u64,
}

impl AgentUsage {
    #[must_use]
    pub fn fallbacks_remaining(&self) -> u64 {
        self.fallbacks_granted.saturating_sub(self.fallbacks_used)
    }
}

/// String-keyed counters kept in first-seen order.
#[derive(Clone, Debug, Default)]
pub(crate) struct Tally<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V: Default> Tally<V> {
    fn entry(&mut self, key: &str) -> &mut V {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Statistics folded from a sequence of games.
#[derive(Clone, Debug)]
pub struct AggregateStats {
    timeout_threshold: Duration,
    total_games: u64,
    matchups: Tally<MatchupStats>,
    phases: [PhaseStats; 3],
    /// Band start -> games.
    game_lengths: BTreeMap<usize, u64>,
    agents: Tally<AgentUsage>,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self::new(Duration::from_millis(900))
    }
}

impl AggregateStats {
    /// Empty statistics; moves slower than `timeout_threshold` count as
    /// timeouts.
    pub fn new(timeout_threshold: Duration) -> Self {
        Self {
            timeout_threshold,
            total_games: 0,
            matchups: Tally::default(),
            phases: [PhaseStats::default(); 3],
            game_lengths: BTreeMap::new(),
            agents: Tally::default(),
        }
    }

    /// Fold one finished game in.
    pub fn record(&mut self, game: &GameRecord) {
        self.total_games += 1;

        let matchup = self.matchups.entry(&matchup_key(game));
        match game.winner() {
            Some(Player::A) => matchup.wins += 1,
            Some(Player::B) => matchup.losses += 1,
            None => matchup.draws += 1,
        }

        for (i, mv) in game.moves.iter().enumerate() {
            let phase = &mut self.phases[GamePhase::of_move(i).index()];
            phase.count(mv.class);
            if mv.elapsed > self.timeout_threshold {
                phase.timeouts += 1;
            }
        }

        let band = game.total_moves() / LENGTH_BAND * LENGTH_BAND;
        *self.game_lengths.entry(band).or_default() += 1;

        for player in Player::ALL {
            let usage = self.agents.entry(game.agent_name(player));
            usage.games += 1;
            usage.fallbacks_used += game.fallbacks_used(player) as u64;
            usage.fallbacks_granted += u64::from(game.fallback_budget);
        }
    }

    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    #[must_use]
    pub fn timeout_threshold(&self) -> Duration {
        self.timeout_threshold
    }

    /// Results for `"<agent_a> vs <agent_b>"`.
    #[must_use]
    pub fn matchup(&self, key: &str) -> Option<&MatchupStats> {
        self.matchups.get(key)
    }

    /// Matchups in first-seen order.
    pub fn matchups(&self) -> impl Iterator<Item = (&str, &MatchupStats)> {
        self.matchups.iter()
    }

    #[must_use]
    pub fn phase(&self, phase: GamePhase) -> &PhaseStats {
        &self.phases[phase.index()]
    }

    /// Agents in first-seen order.
    pub fn agents(&self) -> impl Iterator<Item = (&str, &AgentUsage)> {
        self.agents.iter()
    }

    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&AgentUsage> {
        self.agents.get(name)
    }

    /// Histogram bands as (band start, games), ascending.
    pub fn game_lengths(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.game_lengths.iter().map(|(&band, &games)| (band, games))
    }
}

/// Pure form of `AggregateStats::record`.
#[must_use]
pub fn fold(mut stats: AggregateStats, game: &GameRecord) -> AggregateStats {
    stats.record(game);
    stats
}

/// Matchup key for a game: `"<agent_a> vs <agent_b>"`.
#[must_use]
pub fn matchup_key(game: &GameRecord) -> String {
    format!("{} vs {}", game.agent_a, game.agent_b)
}

impl<'a> Extend<&'a GameRecord> for AggregateStats {
    fn extend<I: IntoIterator<Item = &'a GameRecord>>(&mut self, games: I) {
        for game in games {
            self.record(game);
        }
    }
}
