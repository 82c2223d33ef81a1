//! Uniform random agent.

use std::time::Instant;

use super::agent::Agent;
use crate::core::{GameRng, MoveRequest};
use crate::error::AgentError;
use crate::rules::PushBattle;

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            name: "RandomAgent".to_string(),
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(
        &mut self,
        game: &PushBattle,
        _deadline: Instant,
    ) -> Result<MoveRequest, AgentError> {
        let moves = game.legal_moves();
        self.rng
            .choose(&moves)
            .map(|&mv| mv.into())
            .ok_or(AgentError::NoLegalMoves)
    }
}
