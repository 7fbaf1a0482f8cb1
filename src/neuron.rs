//! Neuron with coin-flip weights
//!
//! Every weight is drawn once from a fair Boolean source and is either 1.0
//! or 0.0. Weights never change after construction.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NeuronError {
    #[error("shape mismatch: neuron expects {expected} inputs, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

/// Logistic function
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Draw one weight from a fair coin
pub fn coin_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random_bool(0.5) {
        1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<f64>,
}

impl Neuron {
    /// Create a neuron with `input_size` weights from the thread RNG
    pub fn new(input_size: usize) -> Self {
        Self::with_rng(input_size, &mut rand::rng())
    }

    /// Create a neuron drawing weights from the given RNG
    pub fn with_rng<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Self {
        let weights: Vec<f64> = (0..input_size).map(|_| coin_weight(rng)).collect();
        debug!("Neuron weights: {:?}", weights);
        Self { weights }
    }

    /// Create a neuron with fixed weights
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// sigmoid(weights · x)
    pub fn activate(&self, x: &[f64]) -> Result<f64, NeuronError> {
        if x.len() != self.weights.len() {
            return Err(NeuronError::ShapeMismatch {
                expected: self.weights.len(),
                got: x.len(),
            });
        }
        let z: f64 = self.weights.iter().zip(x).map(|(w, v)| w * v).sum();
        Ok(sigmoid(z))
    }
}
