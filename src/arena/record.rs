//! Per-move and per-game records produced by the arena.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player};

/// How a turn was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveClass {
    /// The agent's own move was played (first attempt or retry).
    Valid,
    /// A random legal move was substituted.
    RandomFallback,
    /// The agent's move was rejected and the turn was forfeited.
    Invalid,
    /// The agent failed to produce a move and the turn was forfeited.
    Error,
}

impl MoveClass {
    pub const ALL: [MoveClass; 4] = [
        MoveClass::Valid,
        MoveClass::RandomFallback,
        MoveClass::Invalid,
        MoveClass::Error,
    ];
}

/// What happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Played(Move),
    /// Nothing was played; the reason of the final failure.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,

    /// Turn index, starting at 0.
    pub turn: u32,

    pub outcome: MoveOutcome,

    /// Wall-clock time spent resolving the turn.
    pub elapsed: Duration,

    pub class: MoveClass,

    /// Agent calls made this turn (1 or 2).
    pub attempts: u8,
}

impl MoveRecord {
    #[must_use]
    pub fn played(&self) -> Option<&Move> {
        match &self.outcome {
            MoveOutcome::Played(mv) => Some(mv),
            MoveOutcome::Failed(_) => None,
        }
    }
}

/// Terminal state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Won(Player),
    Draw,
    /// `loser` exhausted the retry ladder.
    Forfeited { loser: Player },
}

/// Complete record of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Name of the agent playing `Player::A`.
    pub agent_a: String,

    /// Name of the agent playing `Player::B`.
    pub agent_b: String,

    pub outcome: MatchOutcome,

    pub moves: Vec<MoveRecord>,

    /// Fallback budget each player started with.
    pub fallback_budget: u32,
}

impl GameRecord {
    /// The winning side. A forfeit hands the win to the opponent.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            MatchOutcome::Won(player) => Some(player),
            MatchOutcome::Forfeited { loser } => Some(loser.opponent()),
            MatchOutcome::Draw => None,
        }
    }

    #[must_use]
    pub fn forfeited(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Forfeited { .. })
    }

    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    /// Name of the agent playing `player`.
    #[must_use]
    pub fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.agent_a,
            Player::B => &self.agent_b,
        }
    }

    /// Turns resolved with the given classification.
    #[must_use]
    pub fn class_count(&self, class: MoveClass) -> usize {
        self.moves.iter().filter(|m| m.class == class).count()
    }

    /// Random substitutions used by `player`.
    #[must_use]
    pub fn fallbacks_used(&self, player: Player) -> usize {
        self.moves
            .iter()
            .filter(|m| m.player == player && m.class == MoveClass::RandomFallback)
            .count()
    }
}
