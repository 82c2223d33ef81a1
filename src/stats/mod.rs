//! Benchmark statistics.
//!
//! - `aggregate`: the `AggregateStats` fold over game records
//! - `export`: the JSON document consumed by the results dashboard

pub mod aggregate;
pub mod export;

pub use aggregate::{
    fold, matchup_key, AgentUsage, AggregateStats, GamePhase, MatchupStats, PhaseStats,
    LENGTH_BAND,
};
pub use export::{
    BenchmarkExport, GameLengthEntry, MatchupEntry, MoveStatsEntry, RandomMovesEntry,
};
