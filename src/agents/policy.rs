//! Inference-only agent driven by a policy network.

use std::time::Instant;

use super::agent::Agent;
use crate::core::{GameRng, Move, MoveRequest};
use crate::error::AgentError;
use crate::nn::{ActionSpace, BoardEncoder, PolicyNetwork, StateEncoder};
use crate::rules::PushBattle;

/// Plays the legal move the network scores highest.
///
/// The board is encoded from the mover's perspective. With probability
/// `epsilon` a uniformly random legal move is played instead.
pub struct PolicyAgent<P: PolicyNetwork> {
    name: String,
    network: P,
    epsilon: f64,
    rng: GameRng,
}

impl<P: PolicyNetwork> PolicyAgent<P> {
    pub fn new(network: P, seed: u64) -> Self {
        Self {
            name: "PolicyAgent".to_string(),
            network,
            epsilon: 0.0,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Exploration rate, clamped to [0, 1].
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.clamp(0.0, 1.0);
        self
    }

    pub fn network(&self) -> &P {
        &self.network
    }

    fn greedy_move(&mut self, game: &PushBattle, legal: &[Move]) -> Result<Move, AgentError> {
        let encoder = BoardEncoder::for_game(game);
        let space = ActionSpace::for_game(game);
        let scores = self
            .network
            .predict(&encoder.encode(game, game.current_player()));
        if scores.len() != space.size() {
            return Err(AgentError::PolicyShape {
                expected: space.size(),
                actual: scores.len(),
            });
        }

        let mut best_score = f32::NEG_INFINITY;
        let mut best_moves = Vec::new();
        for mv in legal {
            let score = scores[space.move_to_index(mv)];
            let score = if score.is_nan() { f32::NEG_INFINITY } else { score };
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(*mv);
            } else if score == best_score {
                best_moves.push(*mv);
            }
        }

        self.rng
            .choose(&best_moves)
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }
}

impl<P: PolicyNetwork> Agent for PolicyAgent<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(
        &mut self,
        game: &PushBattle,
        _deadline: Instant,
    ) -> Result<MoveRequest, AgentError> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        if self.epsilon > 0.0 && self.rng.gen_bool(self.epsilon) {
            return self
                .rng
                .choose(&legal)
                .map(|&mv| mv.into())
                .ok_or(AgentError::NoLegalMoves);
        }
        self.greedy_move(game, &legal).map(MoveRequest::from)
    }
}
