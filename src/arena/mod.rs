//! Running games between agents.
//!
//! ## Overview
//!
//! - **MatchRunner**: plays one game, applying the retry, fallback and
//!   forfeit ladder to every turn
//! - **Records**: `MoveRecord` per turn, `GameRecord` per game
//! - **Benchmark**: many games in sequence, folded into `AggregateStats`
//!
//! ## Usage
//!
//! ```
//! use push_battle::agents::{HeuristicAgent, HeuristicConfig, RandomAgent};
//! use push_battle::arena::{Benchmark, MatchConfig};
//! use push_battle::core::GameConfig;
//!
//! let benchmark = Benchmark::new(GameConfig::default(), MatchConfig::default()).unwrap();
//! let mut random = RandomAgent::new(1);
//! let mut heuristic = HeuristicAgent::new(HeuristicConfig::default(), 2);
//!
//! let stats = benchmark.run(&mut heuristic, &mut random, 2).unwrap();
//! assert_eq!(stats.total_games(), 2);
//! ```

pub mod benchmark;
pub mod config;
pub mod record;
pub mod runner;

pub use benchmark::Benchmark;
pub use config::MatchConfig;
pub use record::{GameRecord, MatchOutcome, MoveClass, MoveOutcome, MoveRecord};
pub use runner::MatchRunner;
