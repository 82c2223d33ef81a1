//! Board encoding for neural network input.

use crate::core::{Cell, Player};
use crate::nn::traits::EncodedState;
use crate::rules::PushBattle;

/// Number of planes in a board encoding.
pub const PLANES: usize = 3;

/// Encodes a game into tensors for neural network input.
pub trait StateEncoder {
    /// Encode the game from `perspective`'s point of view.
    fn encode(&self, game: &PushBattle, perspective: Player) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Length of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// Three binary planes over the board:
/// 0. the perspective player's pieces
/// 1. the opponent's pieces
/// 2. empty cells
///
/// Encoding from the perspective of the player to move makes one network
/// serve both sides.
#[derive(Clone, Copy, Debug)]
pub struct BoardEncoder {
    board_size: usize,
}

impl BoardEncoder {
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Encoder matching a game's board size.
    pub fn for_game(game: &PushBattle) -> Self {
        Self::new(game.board_size())
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, game: &PushBattle, perspective: Player) -> EncodedState {
        let n = self.board_size;
        let mut state = EncodedState::zeros(self.output_shape());

        for (row, col, cell) in game.board().cells() {
            let plane = match cell {
                Cell::Empty => 2,
                Cell::Piece(owner) if owner == perspective => 0,
                Cell::Piece(_) => 1,
            };
            state.tensor[(plane * n + row) * n + col] = 1.0;
        }
        state
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PLANES, self.board_size, self.board_size]
    }

    fn action_space_size(&self) -> usize {
        self.board_size.pow(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_encoding() {
        let game = PushBattle::standard();
        let encoded = BoardEncoder::for_game(&game).encode(&game, Player::A);

        assert_eq!(encoded.shape, vec![3, 8, 8]);
        assert!(encoded.plane(0).unwrap().iter().all(|&v| v == 0.0));
        assert!(encoded.plane(1).unwrap().iter().all(|&v| v == 0.0));
        assert!(encoded.plane(2).unwrap().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_perspective_swaps_planes() {
        let mut game = PushBattle::standard();
        game.apply_placement(2, 5).unwrap();
        let encoder = BoardEncoder::for_game(&game);

        let as_a = encoder.encode(&game, Player::A);
        let as_b = encoder.encode(&game, Player::B);

        assert_eq!(as_a.at(0, 2, 5), Some(1.0));
        assert_eq!(as_a.at(1, 2, 5), Some(0.0));
        assert_eq!(as_b.at(1, 2, 5), Some(1.0));
        assert_eq!(as_a.at(2, 2, 5), Some(0.0));
    }

    #[test]
    fn test_each_cell_is_one_hot() {
        let mut game = PushBattle::standard();
        game.apply_placement(0, 0).unwrap();
        game.end_turn();
        game.apply_placement(7, 7).unwrap();

        let encoded = BoardEncoder::for_game(&game).encode(&game, Player::B);
        for row in 0..8 {
            for col in 0..8 {
                let total: f32 = (0..PLANES).filter_map(|p| encoded.at(p, row, col)).sum();
                assert_eq!(total, 1.0);
            }
        }
    }

    #[test]
    fn test_action_space_size() {
        assert_eq!(BoardEncoder::new(8).action_space_size(), 4096);
    }
}
