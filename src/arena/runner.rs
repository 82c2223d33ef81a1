//! Match orchestration.
//!
//! Each turn climbs a fixed ladder until a move is played or the player
//! forfeits:
//!
//! 1. Ask the agent for a move. A legal move is played.
//! 2. A malformed move (wrong number of coordinates) forfeits at once.
//! 3. An illegal move or an agent error earns one retry.
//! 4. If the retry also fails, a random legal move is substituted while the
//!    player's fallback budget lasts.
//! 5. Otherwise the player forfeits.
//!
//! Agent failures never escape a game; they end up as `MoveClass` tags and,
//! at worst, a `MatchOutcome::Forfeited`.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use super::config::MatchConfig;
use super::record::{GameRecord, MatchOutcome, MoveClass, MoveOutcome, MoveRecord};
use crate::agents::Agent;
use crate::core::{GameConfig, GameRng, Move, Player, PlayerMap};
use crate::error::{AgentError, ConfigError, MoveError};
use crate::rules::PushBattle;

/// Why one agent call did not yield a playable move.
#[derive(Debug)]
enum Fault {
    Rejected(MoveError),
    Agent(AgentError),
}

impl Fault {
    fn class(&self) -> MoveClass {
        match self {
            Fault::Rejected(_) => MoveClass::Invalid,
            Fault::Agent(_) => MoveClass::Error,
        }
    }

    fn is_malformed(&self) -> bool {
        matches!(self, Fault::Rejected(e) if e.is_malformed())
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fault::Rejected(e) => write!(f, "{e}"),
            Fault::Agent(e) => write!(f, "{e}"),
        }
    }
}

/// How a turn ended.
enum Resolution {
    Play {
        mv: Move,
        class: MoveClass,
        attempts: u8,
    },
    Forfeit {
        reason: String,
        class: MoveClass,
        attempts: u8,
    },
}

/// Runs games between two agents.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    initial: PushBattle,
    config: MatchConfig,
    rng: GameRng,
}

impl MatchRunner {
    pub fn new(game: GameConfig, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            initial: PushBattle::new(game)?,
            config,
            rng: GameRng::new(config.seed).for_context("fallback"),
        })
    }

    /// Replace the fallback random stream.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn game_config(&self) -> &GameConfig {
        self.initial.config()
    }

    /// Play one game. `agent_a` moves first.
    #[instrument(skip_all, fields(agent_a = agent_a.name(), agent_b = agent_b.name()))]
    pub fn play_game(&mut self, agent_a: &mut dyn Agent, agent_b: &mut dyn Agent) -> GameRecord {
        let mut game = self.initial.clone();
        let mut budgets = PlayerMap::with_value(self.config.fallback_budget);
        let mut moves = Vec::new();
        let mut outcome = MatchOutcome::Draw;

        while game.turn_count() < self.config.max_turns {
            let player = game.current_player();
            let turn = game.turn_count();
            let agent: &mut dyn Agent = match player {
                Player::A => &mut *agent_a,
                Player::B => &mut *agent_b,
            };

            let start = Instant::now();
            let resolution = self.resolve_turn(agent, &game, &mut budgets[player]);

            let (mv, class, attempts) = match resolution {
                Resolution::Play {
                    mv,
                    class,
                    attempts,
                } => (mv, class, attempts),
                Resolution::Forfeit {
                    reason,
                    class,
                    attempts,
                } => {
                    warn!(%player, turn, %reason, "player forfeits");
                    moves.push(MoveRecord {
                        player,
                        turn,
                        outcome: MoveOutcome::Failed(reason),
                        elapsed: start.elapsed(),
                        class,
                        attempts,
                    });
                    outcome = MatchOutcome::Forfeited { loser: player };
                    break;
                }
            };

            if let Err(e) = game.apply_move(&mv) {
                warn!(%player, turn, error = %e, "validated move failed to apply");
                moves.push(MoveRecord {
                    player,
                    turn,
                    outcome: MoveOutcome::Failed(e.to_string()),
                    elapsed: start.elapsed(),
                    class: MoveClass::Invalid,
                    attempts,
                });
                outcome = MatchOutcome::Forfeited { loser: player };
                break;
            }
            debug!(%player, turn, mv = %mv, ?class, "move applied");
            moves.push(MoveRecord {
                player,
                turn,
                outcome: MoveOutcome::Played(mv),
                elapsed: start.elapsed(),
                class,
                attempts,
            });

            if let Some(winner) = game.check_winner() {
                outcome = MatchOutcome::Won(winner);
                break;
            }
            game.end_turn();
        }

        let record = GameRecord {
            agent_a: agent_a.name().to_string(),
            agent_b: agent_b.name().to_string(),
            outcome,
            moves,
            fallback_budget: self.config.fallback_budget,
        };
        info!(
            winner = ?record.winner(),
            moves = record.total_moves(),
            forfeited = record.forfeited(),
            "game finished"
        );
        record
    }

    /// One agent call, validated against the current position.
    fn attempt(&self, agent: &mut dyn Agent, game: &PushBattle) -> Result<Move, Fault> {
        let deadline = Instant::now() + self.config.move_time_limit();
        let request = agent.select_move(game, deadline).map_err(Fault::Agent)?;
        game.validate(&request).map_err(Fault::Rejected)
    }

    fn resolve_turn(
        &mut self,
        agent: &mut dyn Agent,
        game: &PushBattle,
        budget: &mut u32,
    ) -> Resolution {
        let player = game.current_player();

        let first = match self.attempt(agent, game) {
            Ok(mv) => {
                return Resolution::Play {
                    mv,
                    class: MoveClass::Valid,
                    attempts: 1,
                }
            }
            Err(fault) => fault,
        };
        if first.is_malformed() {
            return Resolution::Forfeit {
                reason: first.to_string(),
                class: MoveClass::Invalid,
                attempts: 1,
            };
        }
        warn!(%player, fault = %first, "agent move rejected, retrying");

        let second = match self.attempt(agent, game) {
            Ok(mv) => {
                return Resolution::Play {
                    mv,
                    class: MoveClass::Valid,
                    attempts: 2,
                }
            }
            Err(fault) => fault,
        };
        if second.is_malformed() || *budget == 0 {
            return Resolution::Forfeit {
                reason: second.to_string(),
                class: second.class(),
                attempts: 2,
            };
        }

        let legal = game.legal_moves();
        match self.rng.choose(&legal) {
            Some(&mv) if game.check_move(&mv).is_ok() => {
                *budget -= 1;
                warn!(
                    %player,
                    fault = %second,
                    remaining = *budget,
                    "substituting random move"
                );
                Resolution::Play {
                    mv,
                    class: MoveClass::RandomFallback,
                    attempts: 2,
                }
            }
            _ => Resolution::Forfeit {
                reason: format!("{second}; no random substitute available"),
                class: second.class(),
                attempts: 2,
            },
        }
    }
}
