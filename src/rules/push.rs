//! Push resolution.
//!
//! After a piece lands on (r, c), each orthogonal neighbour is examined on
//! the torus. An occupied neighbour slides one further step away from the
//! landing cell when that cell is empty. All four directions read the board
//! as it was before any push of this event, and a pushed piece never pushes
//! anything itself.
//!
//! On boards of edge >= 5 the four neighbours and the four landing cells are
//! eight distinct cells, so the directions cannot interfere and their order
//! is irrelevant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell};

/// The four orthogonal push directions as (row, col) deltas.
pub const PUSH_DIRECTIONS: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// One displaced piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Push {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// Pushes caused by a single move (at most one per direction).
pub type Pushes = SmallVec<[Push; 4]>;

/// Resolve pushes around a piece that just landed on (row, col).
pub fn resolve_pushes(board: &mut Board, row: usize, col: usize) -> Pushes {
    resolve_pushes_in_order(board, row, col, PUSH_DIRECTIONS)
}

/// Resolve pushes, visiting the directions in the given order.
///
/// Every permutation of `PUSH_DIRECTIONS` yields the same board.
pub fn resolve_pushes_in_order(
    board: &mut Board,
    row: usize,
    col: usize,
    directions: [(i64, i64); 4],
) -> Pushes {
    let snapshot = *board;
    let mut pushes = Pushes::new();

    for (dr, dc) in directions {
        let neighbour = snapshot.torus(row as i64 + dr, col as i64 + dc);
        let occupant = snapshot.get(neighbour.0, neighbour.1);
        if occupant.is_empty() {
            continue;
        }

        let landing = snapshot.torus(neighbour.0 as i64 + dr, neighbour.1 as i64 + dc);
        if !snapshot.get(landing.0, landing.1).is_empty() {
            continue;
        }

        board.set(neighbour.0, neighbour.1, Cell::Empty);
        board.set(landing.0, landing.1, occupant);
        pushes.push(Push {
            from: neighbour,
            to: landing,
        });
    }

    pushes
}

/// Whether the piece on (row, col) could be pushed along some axis with
/// nothing in the way: the cells on both sides of it are empty.
#[must_use]
pub fn is_vulnerable(board: &Board, row: usize, col: usize) -> bool {
    PUSH_DIRECTIONS.iter().any(|&(dr, dc)| {
        let behind = board.torus(row as i64 - dr, col as i64 - dc);
        let ahead = board.torus(row as i64 + dr, col as i64 + dc);
        board.get(behind.0, behind.1).is_empty() && board.get(ahead.0, ahead.1).is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_push_into_empty_cell() {
        let mut board = Board::new(8);
        board.set(3, 4, Player::A.into());
        board.set(3, 5, Player::B.into());

        let pushes = resolve_pushes(&mut board, 3, 4);

        assert_eq!(pushes.len(), 1);
        assert_eq!(
            pushes[0],
            Push {
                from: (3, 5),
                to: (3, 6)
            }
        );
        assert_eq!(board.get(3, 5), Cell::Empty);
        assert_eq!(board.get(3, 6), Cell::Piece(Player::B));
    }

    #[test]
    fn test_blocked_push_leaves_piece() {
        let mut board = Board::new(8);
        board.set(3, 4, Player::A.into());
        board.set(3, 5, Player::B.into());
        board.set(3, 6, Player::B.into());

        let pushes = resolve_pushes(&mut board, 3, 4);

        assert!(pushes.is_empty());
        assert_eq!(board.get(3, 5), Cell::Piece(Player::B));
        assert_eq!(board.get(3, 6), Cell::Piece(Player::B));
    }

    #[test]
    fn test_push_wraps_across_edge() {
        let mut board = Board::new(8);
        board.set(0, 7, Player::A.into());
        board.set(0, 0, Player::B.into());

        resolve_pushes(&mut board, 0, 7);

        assert_eq!(board.get(0, 0), Cell::Empty);
        assert_eq!(board.get(0, 1), Cell::Piece(Player::B));
    }

    #[test]
    fn test_own_pieces_are_pushed_too() {
        let mut board = Board::new(6);
        board.set(2, 2, Player::A.into());
        board.set(1, 2, Player::A.into());

        resolve_pushes(&mut board, 2, 2);

        assert_eq!(board.get(0, 2), Cell::Piece(Player::A));
        assert_eq!(board.get(1, 2), Cell::Empty);
    }

    #[test]
    fn test_pushes_do_not_chain() {
        // B at (3,5) is pushed to (3,6); it must not then push A at (3,7).
        let mut board = Board::new(8);
        board.set(3, 4, Player::A.into());
        board.set(3, 5, Player::B.into());
        board.set(3, 7, Player::A.into());

        resolve_pushes(&mut board, 3, 4);

        assert_eq!(board.get(3, 6), Cell::Piece(Player::B));
        assert_eq!(board.get(3, 7), Cell::Piece(Player::A));
    }

    #[test]
    fn test_all_four_directions() {
        let mut board = Board::new(8);
        board.set(4, 4, Player::A.into());
        for (r, c) in [(4, 5), (4, 3), (5, 4), (3, 4)] {
            board.set(r, c, Player::B.into());
        }

        let pushes = resolve_pushes(&mut board, 4, 4);

        assert_eq!(pushes.len(), 4);
        for (r, c) in [(4, 6), (4, 2), (6, 4), (2, 4)] {
            assert_eq!(board.get(r, c), Cell::Piece(Player::B));
        }
    }

    #[test]
    fn test_vulnerability() {
        let mut board = Board::new(8);
        board.set(3, 3, Player::B.into());
        assert!(is_vulnerable(&board, 3, 3));

        // Block one side of each axis.
        board.set(3, 2, Player::A.into());
        board.set(2, 3, Player::A.into());
        assert!(!is_vulnerable(&board, 3, 3));
    }
}
