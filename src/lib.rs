//! # push-battle
//!
//! A two-player placement-and-push game on a toroidal grid, with agents,
//! a match orchestrator and benchmark statistics.
//!
//! ## Rules in Brief
//!
//! Players alternate turns. Each turn one piece is placed on an empty cell
//! (placement phase) or one of the mover's pieces is relocated to an empty
//! cell (movement phase, once the player has placed all its pieces). The
//! piece that lands pushes each orthogonal neighbor one cell further away,
//! wrapping around the board edges, unless the cell behind that neighbor is
//! occupied. Three in a row, horizontally, vertically or diagonally, wins.
//!
//! ## Architecture
//!
//! - **Copy State**: the board is a fixed-size array, so cloning a game for
//!   look-ahead is a memcpy.
//!
//! - **Fail-Closed Validation**: the engine never mutates on an illegal move.
//!   The match runner decides what happens next (retry, random fallback or
//!   forfeit).
//!
//! - **Deterministic Seeding**: every agent and benchmark takes a seed and
//!   forks child streams from it, so runs are reproducible.
//!
//! ## Modules
//!
//! - `core`: Players, board, moves, configuration, RNG
//! - `rules`: Line detection, push resolution, the game engine
//! - `nn`: State encoding and action indexing for learned policies
//! - `agents`: Random, heuristic and policy agents
//! - `arena`: Match runner, records and multi-game benchmarks
//! - `stats`: Aggregated statistics and JSON export
//! - `config`: TOML configuration for all of the above

pub mod agents;
pub mod arena;
pub mod config;
pub mod core;
pub mod error;
pub mod nn;
pub mod rules;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameConfig, GameRng, GameState, Move, MoveRequest, Phase, Player,
    PlayerMap,
};

pub use crate::rules::{PushBattle, Push, Pushes, Window};

pub use crate::error::{AgentError, ConfigError, MoveError};

pub use crate::nn::{ActionSpace, BoardEncoder, EncodedState, PolicyNetwork, StateEncoder};

pub use crate::agents::{
    Agent, HeuristicAgent, HeuristicConfig, HeuristicWeights, PolicyAgent, RandomAgent,
};

pub use crate::arena::{
    Benchmark, GameRecord, MatchConfig, MatchOutcome, MatchRunner, MoveClass, MoveRecord,
};

pub use crate::stats::{AggregateStats, BenchmarkExport};

pub use crate::config::ArenaConfig;
