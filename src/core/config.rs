//! Game configuration.
//!
//! The rules are fixed; only the board size and the number of pieces each
//! player places before the movement phase are configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest supported board edge. Boards are stored inline, so this bounds
/// the size of every `Board` value.
pub const MAX_BOARD_SIZE: usize = 16;

/// Smallest supported board edge. Below five cells the two push landings
/// along one axis coincide on the torus.
pub const MIN_BOARD_SIZE: usize = 5;

/// Number of same-colour pieces in a row that wins the game.
pub const LINE_LENGTH: usize = 3;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length (N).
    pub board_size: usize,

    /// Pieces each player places before moving (MAX_PIECES).
    pub pieces_per_player: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            pieces_per_player: 8,
        }
    }
}

impl GameConfig {
    /// Create the standard 8x8, eight-piece configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the number of pieces per player.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Number of cells on the board (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be >= {MIN_BOARD_SIZE}"
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if self.pieces_per_player == 0 {
            return Err(ConfigError::Validation(
                "game.pieces_per_player must be > 0".into(),
            ));
        }
        if 2 * self.pieces_per_player as usize >= self.cell_count() {
            return Err(ConfigError::Validation(
                "game.pieces_per_player leaves no empty cell for movement".into(),
            ));
        }
        Ok(())
    }
}
