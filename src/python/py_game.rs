//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{GameConfig, Move, MoveRequest, Phase, Player};
use crate::nn::{BoardEncoder, StateEncoder};
use crate::rules::PushBattle;

pub(crate) fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

pub(crate) fn player_from_index(index: usize) -> PyResult<Player> {
    match index {
        0 => Ok(Player::A),
        1 => Ok(Player::B),
        _ => Err(value_error(format!("player index must be 0 or 1, got {index}"))),
    }
}

pub(crate) fn move_to_py(py: Python<'_>, mv: &Move) -> PyObject {
    match *mv {
        Move::Placement { row, col } => (row, col).into_py(py),
        Move::Relocation {
            from_row,
            from_col,
            to_row,
            to_col,
        } => (from_row, from_col, to_row, to_col).into_py(py),
    }
}

/// Python wrapper for a Push Battle game.
///
/// Players are indices: 0 moves first, 1 second. Moves are tuples of
/// coordinates: `(row, col)` while placing, `(r0, c0, r1, c1)` while moving.
#[pyclass(name = "PushBattle")]
#[derive(Clone)]
pub struct PyPushBattle(pub PushBattle);

#[pymethods]
impl PyPushBattle {
    #[new]
    #[pyo3(signature = (board_size = 8, pieces_per_player = 8))]
    fn new(board_size: usize, pieces_per_player: u8) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_board_size(board_size)
            .with_pieces_per_player(pieces_per_player);
        PushBattle::new(config).map(Self).map_err(value_error)
    }

    fn legal_moves(&self, py: Python<'_>) -> Vec<PyObject> {
        self.0
            .legal_moves()
            .iter()
            .map(|mv| move_to_py(py, mv))
            .collect()
    }

    fn is_valid_placement(&self, row: i64, col: i64) -> bool {
        self.0.is_valid_placement(row, col)
    }

    fn is_valid_relocation(&self, r0: i64, c0: i64, r1: i64, c1: i64) -> bool {
        self.0.is_valid_relocation(r0, c0, r1, c1)
    }

    /// Validate and apply a move for the player to move.
    ///
    /// Does not pass the turn; call `end_turn` after checking `winner`.
    /// Raises ValueError for malformed or illegal moves.
    fn apply(&mut self, coords: Vec<i64>) -> PyResult<()> {
        let mv = self
            .0
            .validate(&MoveRequest::from_coords(&coords))
            .map_err(value_error)?;
        self.0.apply_move(&mv).map_err(value_error)?;
        Ok(())
    }

    fn end_turn(&mut self) {
        self.0.end_turn();
    }

    /// Index of the player owning a line, or None.
    fn winner(&self) -> Option<usize> {
        self.0.check_winner().map(Player::index)
    }

    #[getter]
    fn current_player(&self) -> usize {
        self.0.current_player().index()
    }

    /// "placement" or "movement".
    #[getter]
    fn phase(&self) -> String {
        self.0.phase().to_string()
    }

    #[getter]
    fn is_placement(&self) -> bool {
        self.0.phase() == Phase::Placement
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.0.turn_count()
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.0.board_size()
    }

    fn pieces_placed(&self, player: usize) -> PyResult<u8> {
        Ok(self.0.pieces_placed(player_from_index(player)?))
    }

    /// Board as a flat list: 0 empty, 1 player 0, 2 player 1.
    fn board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let cells: Vec<u8> = self
            .0
            .board()
            .cells()
            .map(|(_, _, cell)| cell.owner().map_or(0, |p| p.index() as u8 + 1))
            .collect();
        PyArray1::from_vec_bound(py, cells)
    }

    /// `[3, N, N]` planes from `perspective` (default: the player to move).
    #[pyo3(signature = (perspective = None))]
    fn encode<'py>(
        &self,
        py: Python<'py>,
        perspective: Option<usize>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let player = match perspective {
            Some(index) => player_from_index(index)?,
            None => self.0.current_player(),
        };
        let encoded = BoardEncoder::for_game(&self.0).encode(&self.0, player);
        let n = self.0.board_size();
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape([3, n, n])
            .map_err(value_error)
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "PushBattle(turn={}, current={}, phase={})",
            self.0.turn_count(),
            self.0.current_player().index(),
            self.0.phase()
        )
    }
}
