//! Error types.
//!
//! - `MoveError`: a proposed move failed shape or rules validation
//! - `AgentError`: an agent could not produce a move at all
//! - `ConfigError`: configuration could not be loaded or is inconsistent

use std::path::PathBuf;

use crate::core::Phase;

/// Why a proposed move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Wrong number of coordinates for the current phase.
    #[error("malformed move: {arity} coordinates given, {expected} expected")]
    Malformed { arity: usize, expected: usize },

    /// Move kind does not match the phase of the player to move.
    #[error("move not allowed during the {phase} phase")]
    WrongPhase { phase: Phase },

    /// Coordinate outside the board (no wraparound for move targets).
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    /// Destination cell already holds a piece.
    #[error("cell ({row}, {col}) is occupied")]
    Occupied { row: usize, col: usize },

    /// Relocation source is not one of the mover's pieces.
    #[error("cell ({row}, {col}) does not hold a piece of the player to move")]
    NotOwnPiece { row: usize, col: usize },
}

impl MoveError {
    /// Shape errors forfeit immediately; every other variant is retryable.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, MoveError::Malformed { .. })
    }
}

/// Why an agent failed to produce a move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("move evaluation failed: {0}")]
    Evaluation(String),

    #[error("policy output has {actual} entries, expected {expected}")]
    PolicyShape { expected: usize, actual: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
