//! Core game types: players, board, moves, state, RNG, configuration.
//!
//! Everything here is plain data. The rules that act on it live in
//! `crate::rules`.

pub mod board;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Cell};
pub use config::{GameConfig, LINE_LENGTH, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use moves::{Move, MoveRequest, Phase};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
