//! Flat action indexing.
//!
//! One output space of size N⁴ covers both phases:
//! - placement (r, c) maps to `r*N + c`
//! - relocation (r0, c0, r1, c1) maps to `r0*N³ + c0*N² + r1*N + c1`
//!
//! Placement indices overlap relocation indices, so decoding needs the
//! phase.
//!
//! ```
//! use push_battle::core::{Move, Phase};
//! use push_battle::nn::ActionSpace;
//!
//! let space = ActionSpace::new(8);
//! let mv = Move::Relocation { from_row: 1, from_col: 2, to_row: 3, to_col: 4 };
//! let index = space.move_to_index(&mv);
//! assert_eq!(index, 1 * 512 + 2 * 64 + 3 * 8 + 4);
//! assert_eq!(space.index_to_move(index, Phase::Movement), Some(mv));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Move, Phase};
use crate::rules::PushBattle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    board_size: usize,
}

impl ActionSpace {
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    pub fn for_game(game: &PushBattle) -> Self {
        Self::new(game.board_size())
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Total number of indices (N⁴).
    #[must_use]
    pub fn size(&self) -> usize {
        self.board_size.pow(4)
    }

    /// Indices that can hold a placement (N²).
    #[must_use]
    pub fn placement_size(&self) -> usize {
        self.board_size.pow(2)
    }

    #[must_use]
    pub fn move_to_index(&self, mv: &Move) -> usize {
        let n = self.board_size;
        match *mv {
            Move::Placement { row, col } => row * n + col,
            Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            } => ((from_row * n + from_col) * n + to_row) * n + to_col,
        }
    }

    /// Decode an index for the given phase.
    ///
    /// `None` when the index is outside the space, or outside the placement
    /// range during the placement phase.
    #[must_use]
    pub fn index_to_move(&self, index: usize, phase: Phase) -> Option<Move> {
        let n = self.board_size;
        match phase {
            Phase::Placement if index < self.placement_size() => Some(Move::Placement {
                row: index / n,
                col: index % n,
            }),
            Phase::Movement if index < self.size() => Some(Move::Relocation {
                from_row: index / n.pow(3),
                from_col: (index / n.pow(2)) % n,
                to_row: (index / n) % n,
                to_col: index % n,
            }),
            _ => None,
        }
    }

    /// `true` at the index of every legal move for the player to move.
    ///
    /// `game` must be played on a board of this space's size.
    #[must_use]
    pub fn legal_mask(&self, game: &PushBattle) -> Vec<bool> {
        debug_assert_eq!(
            self.board_size,
            game.board_size(),
            "action space and game disagree on board size"
        );
        let mut mask = vec![false; self.size()];
        for mv in game.legal_moves() {
            mask[self.move_to_index(&mv)] = true;
        }
        mask
    }
}
