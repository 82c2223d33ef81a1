//! The agent contract.

use std::time::Instant;

use crate::core::MoveRequest;
use crate::error::AgentError;
use crate::rules::PushBattle;

/// Anything that can choose a move for the player to move.
///
/// Agents see the live game read-only; to look ahead they clone it. They
/// return a raw `MoveRequest`, so a buggy agent can hand back a malformed
/// shape and the arena decides what happens next.
///
/// `deadline` is advisory. Agents that search should stop by then, but
/// nothing preempts them.
pub trait Agent {
    /// Identity used in matchup keys and statistics.
    fn name(&self) -> &str;

    fn select_move(
        &mut self,
        game: &PushBattle,
        deadline: Instant,
    ) -> Result<MoveRequest, AgentError>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(
        &mut self,
        game: &PushBattle,
        deadline: Instant,
    ) -> Result<MoveRequest, AgentError> {
        (**self).select_move(game, deadline)
    }
}
