//! Game state snapshot.
//!
//! `GameState` is everything that changes during a game: the grid, whose
//! turn it is, how many pieces each side has placed, and the completed
//! turn count. It is `Copy`, so a snapshot taken for speculative
//! evaluation can never alias the live game.

use super::board::Board;
use super::player::{Player, PlayerMap};

/// Mutable game data, owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Player to move.
    pub current_player: Player,

    /// Pieces each player has placed so far.
    pub pieces_placed: PlayerMap<u8>,

    /// Completed turns (starts at 0).
    pub turn_count: u32,
}

impl GameState {
    /// Fresh game: empty board, player A to move.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            current_player: Player::A,
            pieces_placed: PlayerMap::with_value(0),
            turn_count: 0,
        }
    }
}
