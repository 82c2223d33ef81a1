//! Single-ply heuristic search.
//!
//! Every legal move is tried on a copy of the game (push resolution
//! included) and the resulting position is scored:
//!
//! - a line for the mover: +∞, played at once
//! - a line for the opponent: −∞
//! - alignment: `alignment × (own near-wins − opponent near-wins)`
//! - blocking: `+blocking` if the opponent has fewer near-wins than before
//! - push threat: `+push_threat` per opponent piece left vulnerable
//!
//! Four positional terms follow, each scored as own minus opponent and
//! weighted 0.0 by default:
//!
//! - center control: pieces on the central 4×4 block
//! - protection: pieces that cannot be pushed and touch a friendly piece
//! - mobility: legal move count
//! - pushing power: opponent pieces next to one of ours that could be shoved
//!   away, +2 more when the shove breaks one of their near-wins
//!
//! A near-win is a length-3 window with two of a player's pieces and one
//! empty cell. Ties at the best score are broken uniformly at random.
//!
//! The clock is checked after each candidate. Once the earlier of the
//! caller's deadline and the agent's own time budget has passed, the best
//! move found so far is returned.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::agent::Agent;
use crate::core::{Board, Cell, GameRng, Move, MoveRequest, Phase, Player};
use crate::error::{AgentError, ConfigError};
use crate::rules::{is_vulnerable, lines, PushBattle, PUSH_DIRECTIONS};

/// Edge of the central block scored by center control.
const CENTER_SPAN: usize = 4;

/// Extra pushing power when a shove breaks a near-win.
const BREAK_BONUS: f64 = 2.0;

/// Score weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Per near-win window difference.
    pub alignment: f64,

    /// Bonus when the move reduces the opponent's near-wins.
    pub blocking: f64,

    /// Per vulnerable opponent piece.
    pub push_threat: f64,

    /// Per piece of center lead.
    pub center_control: f64,

    /// Per protected piece of lead.
    pub protection: f64,

    /// Per legal move of lead.
    pub mobility: f64,

    /// Per point of pushing-power lead.
    pub pushing_power: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            alignment: 100.0,
            blocking: 800.0,
            push_threat: 500.0,
            center_control: 0.0,
            protection: 0.0,
            mobility: 0.0,
            pushing_power: 0.0,
        }
    }
}

/// Heuristic agent configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Search budget per move, in milliseconds.
    pub time_budget_ms: u64,

    pub weights: HeuristicWeights,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 800,
            weights: HeuristicWeights::default(),
        }
    }
}

impl HeuristicConfig {
    #[must_use]
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_budget_ms == 0 {
            return Err(ConfigError::Validation(
                "heuristic.time_budget_ms must be > 0".into(),
            ));
        }
        let w = &self.weights;
        for (key, value) in [
            ("alignment", w.alignment),
            ("blocking", w.blocking),
            ("push_threat", w.push_threat),
            ("center_control", w.center_control),
            ("protection", w.protection),
            ("mobility", w.mobility),
            ("pushing_power", w.pushing_power),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "heuristic.weights.{key} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Time-bounded one-ply search agent.
#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    name: String,
    config: HeuristicConfig,
    rng: GameRng,
}

impl HeuristicAgent {
    /// Build an agent without checking `config`.
    ///
    /// The weights must be finite: a NaN weight makes every score NaN and
    /// the agent degrades to random play. Use [`HeuristicAgent::try_new`]
    /// for configuration that comes from outside the program.
    pub fn new(config: HeuristicConfig, seed: u64) -> Self {
        Self {
            name: "HeuristicAgent".to_string(),
            config,
            rng: GameRng::new(seed),
        }
    }

    /// Build an agent from a validated `config`.
    pub fn try_new(config: HeuristicConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Score `mv` for the player to move in `game`.
    ///
    /// `game` is not modified; the move is played on a copy.
    pub fn evaluate(&self, game: &PushBattle, mv: &Move) -> Result<f64, AgentError> {
        let me = game.current_player();
        let opponent = me.opponent();

        let mut after = game.clone();
        after
            .apply_move(mv)
            .map_err(|e| AgentError::Evaluation(format!("candidate {mv}: {e}")))?;

        match after.check_winner() {
            Some(winner) if winner == me => return Ok(f64::INFINITY),
            Some(_) => return Ok(f64::NEG_INFINITY),
            None => {}
        }

        let w = &self.config.weights;
        let own_near = after.near_win_count(me) as f64;
        let opp_near_after = after.near_win_count(opponent);
        let mut score = w.alignment * (own_near - opp_near_after as f64);

        if opp_near_after < game.near_win_count(opponent) {
            score += w.blocking;
        }

        let board = after.board();
        let vulnerable = board
            .pieces(opponent)
            .filter(|&(r, c)| is_vulnerable(board, r, c))
            .count();
        score += w.push_threat * vulnerable as f64;

        if w.center_control != 0.0 {
            score += w.center_control * lead(me, |p| center_control(board, p) as f64);
        }
        if w.protection != 0.0 {
            score += w.protection * lead(me, |p| protected_pieces(board, p) as f64);
        }
        if w.mobility != 0.0 {
            score += w.mobility * lead(me, |p| move_count(&after, p) as f64);
        }
        if w.pushing_power != 0.0 {
            score += w.pushing_power * lead(me, |p| pushing_power(board, p));
        }

        Ok(score)
    }

    /// Best legal move, or `NoLegalMoves`.
    pub fn best_move(&mut self, game: &PushBattle, deadline: Instant) -> Result<Move, AgentError> {
        let candidates = game.legal_moves();
        if candidates.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        let cutoff = deadline.min(Instant::now() + self.config.time_budget());
        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves: Vec<Move> = Vec::new();
        let mut evaluated = 0;

        for mv in &candidates {
            let score = self.evaluate(game, mv)?;
            evaluated += 1;

            if score == f64::INFINITY {
                trace!(evaluated, %mv, "winning move found");
                return Ok(*mv);
            }
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(*mv);
            } else if score == best_score {
                best_moves.push(*mv);
            }

            if Instant::now() >= cutoff {
                trace!(
                    evaluated,
                    total = candidates.len(),
                    "search cut off at deadline"
                );
                break;
            }
        }

        trace!(
            evaluated,
            tied = best_moves.len(),
            best_score,
            "heuristic search finished"
        );
        self.rng
            .choose(&best_moves)
            .or_else(|| self.rng.choose(&candidates))
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }
}

/// `term(me) - term(opponent)`.
fn lead(me: Player, term: impl Fn(Player) -> f64) -> f64 {
    term(me) - term(me.opponent())
}

/// Pieces of `player` on the central block.
fn center_control(board: &Board, player: Player) -> usize {
    let start = board.size().saturating_sub(CENTER_SPAN) / 2;
    let center = start..start + CENTER_SPAN;
    board
        .pieces(player)
        .filter(|(r, c)| center.contains(r) && center.contains(c))
        .count()
}

/// Pieces of `player` that cannot be pushed and have a friendly orthogonal
/// neighbour.
fn protected_pieces(board: &Board, player: Player) -> usize {
    board
        .pieces(player)
        .filter(|&(r, c)| {
            !is_vulnerable(board, r, c)
                && PUSH_DIRECTIONS.iter().any(|&(dr, dc)| {
                    let (nr, nc) = board.torus(r as i64 + dr, c as i64 + dc);
                    board.get(nr, nc).is_owned_by(player)
                })
        })
        .count()
}

/// Legal moves `player` would have if it were their turn.
fn move_count(game: &PushBattle, player: Player) -> usize {
    let board = game.board();
    let empty = board.count(Cell::Empty);
    match game.phase_for(player) {
        Phase::Placement => empty,
        Phase::Movement => board.pieces(player).count() * empty,
    }
}

/// One point per opponent piece next to one of `player`'s that has an empty
/// cell behind it, plus `BREAK_BONUS` when sliding it there would lower the
/// opponent's near-win count.
fn pushing_power(board: &Board, player: Player) -> f64 {
    let opponent = player.opponent();
    let near_wins = lines::near_win_count(board, opponent);
    let mut power = 0.0;

    for (r, c) in board.pieces(player) {
        for (dr, dc) in PUSH_DIRECTIONS {
            let target = board.torus(r as i64 + dr, c as i64 + dc);
            if !board.get(target.0, target.1).is_owned_by(opponent) {
                continue;
            }
            let landing = board.torus(target.0 as i64 + dr, target.1 as i64 + dc);
            if !board.get(landing.0, landing.1).is_empty() {
                continue;
            }

            power += 1.0;
            let mut shoved = *board;
            shoved.set(target.0, target.1, Cell::Empty);
            shoved.set(landing.0, landing.1, Cell::Piece(opponent));
            if lines::near_win_count(&shoved, opponent) < near_wins {
                power += BREAK_BONUS;
            }
        }
    }
    power
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(
        &mut self,
        game: &PushBattle,
        deadline: Instant,
    ) -> Result<MoveRequest, AgentError> {
        self.best_move(game, deadline).map(MoveRequest::from)
    }
}
