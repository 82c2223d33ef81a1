//! Python bindings for the learned-policy trainer.
//!
//! # Quick Start
//!
//! ```python
//! import push_battle as pb
//!
//! game = pb.PushBattle()
//! space = pb.ActionSpace(game.board_size)
//!
//! planes = game.encode()             # numpy float32 [3, 8, 8]
//! mask = space.legal_mask(game)      # numpy bool [4096]
//! game.apply(space.index_to_move(27, game.is_placement))
//! if game.winner() is None:
//!     game.end_turn()
//!
//! print(pb.run_benchmark("heuristic", "random", games=10, seed=1))
//! ```

use pyo3::prelude::*;

mod py_arena;
mod py_game;
mod py_nn;

pub use py_arena::*;
pub use py_game::*;
pub use py_nn::*;

#[pymodule]
fn push_battle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPushBattle>()?;
    m.add_class::<PyActionSpace>()?;
    m.add_function(wrap_pyfunction!(run_benchmark, m)?)?;
    Ok(())
}
