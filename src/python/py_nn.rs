//! Action-space bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{Move, Phase};
use crate::nn::ActionSpace;

use super::py_game::{move_to_py, value_error, PyPushBattle};

/// Flat action indexing shared with the policy trainer.
#[pyclass(name = "ActionSpace")]
#[derive(Clone)]
pub struct PyActionSpace(pub ActionSpace);

#[pymethods]
impl PyActionSpace {
    #[new]
    #[pyo3(signature = (board_size = 8))]
    fn new(board_size: usize) -> Self {
        Self(ActionSpace::new(board_size))
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    /// Index of a `(row, col)` or `(r0, c0, r1, c1)` move.
    fn move_to_index(&self, coords: Vec<usize>) -> PyResult<usize> {
        let n = self.0.board_size();
        if coords.iter().any(|&c| c >= n) {
            return Err(value_error(format!("coordinates must be < {n}")));
        }
        let mv = match coords[..] {
            [row, col] => Move::Placement { row, col },
            [from_row, from_col, to_row, to_col] => Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            },
            _ => {
                return Err(value_error(format!(
                    "a move has 2 or 4 coordinates, got {}",
                    coords.len()
                )))
            }
        };
        Ok(self.0.move_to_index(&mv))
    }

    /// Decode an index; `placement` selects the phase.
    fn index_to_move(&self, py: Python<'_>, index: usize, placement: bool) -> Option<PyObject> {
        let phase = if placement {
            Phase::Placement
        } else {
            Phase::Movement
        };
        self.0
            .index_to_move(index, phase)
            .map(|mv| move_to_py(py, &mv))
    }

    /// Boolean mask over all indices, true for legal moves.
    fn legal_mask<'py>(&self, py: Python<'py>, game: &PyPushBattle) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_vec_bound(py, self.0.legal_mask(&game.0))
    }

    fn __repr__(&self) -> String {
        format!("ActionSpace(board_size={})", self.0.board_size())
    }
}
