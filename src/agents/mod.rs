//! Move-selecting agents.
//!
//! - `Agent`: the contract the arena drives
//! - `RandomAgent`: uniform over legal moves
//! - `HeuristicAgent`: time-bounded one-ply search with a weighted score
//! - `PolicyAgent`: plays the best legal move of a `PolicyNetwork`

pub mod agent;
pub mod heuristic;
pub mod policy;
pub mod random;

pub use agent::Agent;
pub use heuristic::{HeuristicAgent, HeuristicConfig, HeuristicWeights};
pub use policy::PolicyAgent;
pub use random::RandomAgent;
