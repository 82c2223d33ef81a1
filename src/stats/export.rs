//! Dashboard-facing export of aggregate statistics.
//!
//! Field names are fixed by the consumer:
//!
//! ```json
//! {
//!   "totalGames": 10,
//!   "matchupStats": [{ "name": "A vs B", "wins": 6, "losses": 3, "draws": 1 }],
//!   "moveStats": [{ "name": "Opening", "validMoves": 80, "timeouts": 0, "invalid": 0 }],
//!   "randomMovesUsed": [{ "name": "A", "used": 2, "remaining": 48 }],
//!   "gameLength": [{ "length": "12-15", "games": 4 }]
//! }
//! ```
//!
//! Every list is present even when empty, and `moveStats` always has the
//! three phases.

use serde::{Deserialize, Serialize};

use super::aggregate::{AggregateStats, GamePhase, LENGTH_BAND};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkExport {
    pub total_games: u64,
    pub matchup_stats: Vec<MatchupEntry>,
    pub move_stats: Vec<MoveStatsEntry>,
    pub random_moves_used: Vec<RandomMovesEntry>,
    pub game_length: Vec<GameLengthEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub name: String,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveStatsEntry {
    pub name: String,
    pub valid_moves: u64,
    pub timeouts: u64,
    /// Rejected moves and agent errors together.
    pub invalid: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMovesEntry {
    pub name: String,
    pub used: u64,
    pub remaining: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLengthEntry {
    /// Band label, e.g. `"8-11"`.
    pub length: String,
    pub games: u64,
}

impl BenchmarkExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl AggregateStats {
    #[must_use]
    pub fn export(&self) -> BenchmarkExport {
        BenchmarkExport {
            total_games: self.total_games(),
            matchup_stats: self
                .matchups()
                .map(|(name, m)| MatchupEntry {
                    name: name.to_string(),
                    wins: m.wins,
                    losses: m.losses,
                    draws: m.draws,
                })
                .collect(),
            move_stats: GamePhase::ALL
                .iter()
                .map(|&phase| {
                    let p = self.phase(phase);
                    MoveStatsEntry {
                        name: phase.name().to_string(),
                        valid_moves: p.valid,
                        timeouts: p.timeouts,
                        invalid: p.invalid + p.error,
                    }
                })
                .collect(),
            random_moves_used: self
                .agents()
                .map(|(name, usage)| RandomMovesEntry {
                    name: name.to_string(),
                    used: usage.fallbacks_used,
                    remaining: usage.fallbacks_remaining(),
                })
                .collect(),
            game_length: self
                .game_lengths()
                .map(|(band, games)| GameLengthEntry {
                    length: format!("{}-{}", band, band + LENGTH_BAND - 1),
                    games,
                })
                .collect(),
        }
    }

    /// `export()` rendered as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.export().to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_export_has_every_key() {
        let json = AggregateStats::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalGames"], 0);
        assert_eq!(value["matchupStats"], serde_json::json!([]));
        assert_eq!(value["randomMovesUsed"], serde_json::json!([]));
        assert_eq!(value["gameLength"], serde_json::json!([]));

        let phases: Vec<_> = value["moveStats"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(phases, vec!["Opening", "Midgame", "Endgame"]);
        assert_eq!(value["moveStats"][0]["validMoves"], 0);
    }

    #[test]
    fn test_export_roundtrip() {
        let export = AggregateStats::default().export();
        let back = BenchmarkExport::from_json(&export.to_json().unwrap()).unwrap();
        assert_eq!(export, back);
    }
}
