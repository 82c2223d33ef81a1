//! Policy network contract.
//!
//! The learned-policy agent is trained outside this crate. These types are
//! the boundary it plugs into: the engine hands over an `EncodedState`, the
//! network answers with one score per flat action index.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[channels, rows, cols]` for board encodings.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Wrap a tensor. Its length must match the shape.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Zero-filled tensor of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Value at (channel, row, col) of a three-dimensional encoding.
    #[must_use]
    pub fn at(&self, channel: usize, row: usize, col: usize) -> Option<f32> {
        let &[_, rows, cols] = self.shape.as_slice() else {
            return None;
        };
        if row >= rows || col >= cols {
            return None;
        }
        self.tensor
            .get((channel * rows + row) * cols + col)
            .copied()
    }

    /// One channel as a flat row-major slice.
    #[must_use]
    pub fn plane(&self, channel: usize) -> Option<&[f32]> {
        let &[_, rows, cols] = self.shape.as_slice() else {
            return None;
        };
        let start = channel * rows * cols;
        self.tensor.get(start..start + rows * cols)
    }
}

/// A policy network scores every action for an encoded state.
///
/// The output length must equal the action space size (N⁴ for an N x N
/// board). Scores need not be normalised; illegal actions are masked by the
/// caller.
pub trait PolicyNetwork {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;

    /// Batch prediction for multiple states.
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<Vec<f32>> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Flat policy (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy {
    action_space_size: usize,
}

impl UniformPolicy {
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        if self.action_space_size == 0 {
            return vec![];
        }
        vec![1.0 / self.action_space_size as f32; self.action_space_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_indexing() {
        let tensor: Vec<f32> = (0..18).map(|v| v as f32).collect();
        let state = EncodedState::new(tensor, vec![2, 3, 3]);

        assert_eq!(state.len(), 18);
        assert_eq!(state.at(0, 0, 0), Some(0.0));
        assert_eq!(state.at(1, 2, 1), Some(16.0));
        assert_eq!(state.at(2, 0, 0), None);
        assert_eq!(state.at(0, 3, 0), None);
        assert_eq!(state.plane(1), Some(&state.tensor[9..18]));
    }

    #[test]
    fn test_flat_shape_has_no_planes() {
        let state = EncodedState::zeros(vec![4]);
        assert_eq!(state.at(0, 0, 0), None);
        assert_eq!(state.plane(0), None);
    }

    #[test]
    fn test_uniform_policy() {
        let policy = UniformPolicy::new(4);
        let probs = policy.predict(&EncodedState::zeros(vec![1, 2, 2]));

        assert_eq!(probs.len(), 4);
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_uniform_policy_empty_space() {
        let policy = UniformPolicy::default();
        assert!(policy.predict(&EncodedState::zeros(vec![1])).is_empty());
    }

    #[test]
    fn test_predict_batch() {
        let policy = UniformPolicy::new(3);
        let states = vec![EncodedState::zeros(vec![1]), EncodedState::zeros(vec![1])];

        let batch = policy.predict_batch(&states);
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|probs| probs.len() == 3));
    }

    #[test]
    fn test_serialization() {
        let state = EncodedState::new(vec![1.0, 0.0, 1.0], vec![3]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
