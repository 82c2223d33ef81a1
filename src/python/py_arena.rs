//! Benchmark bindings for Python.

use pyo3::prelude::*;

use crate::agents::{Agent, HeuristicAgent, HeuristicConfig, RandomAgent};
use crate::arena::{Benchmark, MatchConfig};
use crate::core::GameConfig;

use super::py_game::value_error;

fn builtin_agent(kind: &str, seed: u64) -> PyResult<Box<dyn Agent>> {
    match kind {
        "random" => Ok(Box::new(RandomAgent::new(seed))),
        "heuristic" => Ok(Box::new(
            HeuristicAgent::try_new(HeuristicConfig::default(), seed).map_err(value_error)?,
        )),
        other => Err(value_error(format!(
            "unknown agent '{other}', expected 'random' or 'heuristic'"
        ))),
    }
}

/// Run a benchmark between two built-in agents and return the export JSON.
#[pyfunction]
#[pyo3(signature = (agent_a, agent_b, games, seed = 0))]
pub fn run_benchmark(
    agent_a: &str,
    agent_b: &str,
    games: usize,
    seed: u64,
) -> PyResult<String> {
    let mut a = builtin_agent(agent_a, seed.wrapping_add(1))?;
    let mut b = builtin_agent(agent_b, seed.wrapping_add(2))?;
    let benchmark = Benchmark::new(GameConfig::default(), MatchConfig::default().with_seed(seed))
        .map_err(value_error)?;

    let stats = benchmark
        .run(a.as_mut(), b.as_mut(), games)
        .map_err(value_error)?;
    stats.to_json().map_err(value_error)
}
