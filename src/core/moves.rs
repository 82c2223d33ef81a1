//! Move representation.
//!
//! Two layers:
//! - `MoveRequest`: the raw coordinate tuple an agent proposes. It may have
//!   any length and any (even negative) values, so bad agent output is
//!   representable instead of unconstructible.
//! - `Move`: a well-formed, in-bounds move for a given phase. Only the
//!   engine's validity predicates decide whether it is legal.
//!
//! ```
//! use push_battle::core::{Move, MoveRequest, Phase};
//!
//! let request = MoveRequest::from_coords(&[3, 4]);
//! let mv = request.to_move(Phase::Placement, 8).unwrap();
//! assert_eq!(mv, Move::Placement { row: 3, col: 4 });
//!
//! // Three coordinates fit neither phase.
//! let bad = MoveRequest::from_coords(&[1, 2, 3]);
//! assert!(bad.to_move(Phase::Placement, 8).unwrap_err().is_malformed());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MoveError;

/// Game phase for the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The player still has pieces to place.
    Placement,
    /// All of the player's pieces are on the board.
    Movement,
}

impl Phase {
    /// Coordinates a move needs in this phase.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Phase::Placement => 2,
            Phase::Movement => 4,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Movement => write!(f, "movement"),
        }
    }
}

/// A well-formed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Drop a new piece on an empty cell.
    Placement { row: usize, col: usize },
    /// Move one of the mover's pieces to any empty cell.
    Relocation {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },
}

impl Move {
    /// The phase in which this kind of move is allowed.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Move::Placement { .. } => Phase::Placement,
            Move::Relocation { .. } => Phase::Movement,
        }
    }

    /// Cell the moving piece lands on; push resolution is centred here.
    #[must_use]
    pub const fn destination(&self) -> (usize, usize) {
        match *self {
            Move::Placement { row, col } => (row, col),
            Move::Relocation { to_row, to_col, .. } => (to_row, to_col),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Move::Placement { row, col } => write!(f, "({row}, {col})"),
            Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            } => write!(f, "({from_row}, {from_col}) -> ({to_row}, {to_col})"),
        }
    }
}

/// A raw move proposal as produced by an agent.
///
/// SmallVec keeps the common 2- and 4-coordinate cases off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub coords: SmallVec<[i64; 4]>,
}

impl MoveRequest {
    /// Create a request from arbitrary coordinates.
    #[must_use]
    pub fn from_coords(coords: &[i64]) -> Self {
        Self {
            coords: SmallVec::from_slice(coords),
        }
    }

    /// Number of coordinates supplied.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.coords.len()
    }

    /// Check the shape against `phase` and the bounds against the board.
    ///
    /// Any arity other than the phase's is `Malformed`. Coordinates outside
    /// `0..board_size` are `OutOfBounds`; move targets never wrap.
    pub fn to_move(&self, phase: Phase, board_size: usize) -> Result<Move, MoveError> {
        if self.arity() != phase.arity() {
            return Err(MoveError::Malformed {
                arity: self.arity(),
                expected: phase.arity(),
            });
        }

        let n = board_size as i64;
        for pair in self.coords.chunks(2) {
            let (row, col) = (pair[0], pair[1]);
            if !(0..n).contains(&row) || !(0..n).contains(&col) {
                return Err(MoveError::OutOfBounds { row, col });
            }
        }

        let c: SmallVec<[usize; 4]> = self.coords.iter().map(|&v| v as usize).collect();
        Ok(match phase {
            Phase::Placement => Move::Placement {
                row: c[0],
                col: c[1],
            },
            Phase::Movement => Move::Relocation {
                from_row: c[0],
                from_col: c[1],
                to_row: c[2],
                to_col: c[3],
            },
        })
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Placement { row, col } => Self::from_coords(&[row as i64, col as i64]),
            Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            } => Self::from_coords(&[
                from_row as i64,
                from_col as i64,
                to_row as i64,
                to_col as i64,
            ]),
        }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.coords.as_slice())
    }
}
