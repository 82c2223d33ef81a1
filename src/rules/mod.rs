//! Game rules: the `PushBattle` engine and the mechanics it is built from.
//!
//! - `engine`: validity predicates, move application, win detection,
//!   legal move generation
//! - `push`: torus push resolution after every landing
//! - `lines`: length-3 window scanning shared by win detection and the
//!   heuristic agent

pub mod engine;
pub mod lines;
pub mod push;

pub use engine::PushBattle;
pub use lines::Window;
pub use push::{is_vulnerable, resolve_pushes, Push, Pushes, PUSH_DIRECTIONS};
