//! Tensor types shared between game states and learning code.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

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

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Encodes a state from one player's point of view.
///
/// Implementations hide whatever the viewer may not see and keep the
/// output shape fixed for the encoder's lifetime.
pub trait StateEncoder<S> {
    fn encode(&self, state: &S, perspective: PlayerId) -> EncodedState;

    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy head this encoding feeds.
    fn action_space_size(&self) -> usize;

    fn player_count(&self) -> usize;
}
