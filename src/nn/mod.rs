//! Neural network contract for the learned-policy agent.
//!
//! The network itself is trained elsewhere. This module defines what it
//! consumes and produces:
//!
//! - **Encoding**: `BoardEncoder` turns a game into `[3, N, N]` planes
//! - **Actions**: `ActionSpace` maps moves to and from flat indices in `0..N⁴`
//! - **Network**: `PolicyNetwork` scores every index; `UniformPolicy` is a
//!   flat baseline
//!
//! ```
//! use push_battle::core::Player;
//! use push_battle::nn::{ActionSpace, BoardEncoder, PolicyNetwork, StateEncoder, UniformPolicy};
//! use push_battle::rules::PushBattle;
//!
//! let game = PushBattle::standard();
//! let encoder = BoardEncoder::for_game(&game);
//! let scores = UniformPolicy::new(encoder.action_space_size())
//!     .predict(&encoder.encode(&game, Player::A));
//!
//! assert_eq!(scores.len(), ActionSpace::for_game(&game).size());
//! ```

pub mod action_space;
pub mod encoder;
pub mod traits;

pub use action_space::ActionSpace;
pub use encoder::{BoardEncoder, StateEncoder, PLANES};
pub use traits::{EncodedState, PolicyNetwork, UniformPolicy};
