use anyhow::{bail, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Activation functions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

// ---------------------------------------------------------------------------
// DenseLayer – one fully-connected layer
// ---------------------------------------------------------------------------

/// `out[i] = activation(Σ_j weights[i][j] * in[j] + biases[i])`
///
/// `weights` holds one row per output unit.
#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    pub fn output_dim(&self) -> usize {
        self.weights.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, &bias)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
                self.activation.apply(sum + bias)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Network – the serialized regression model
// ---------------------------------------------------------------------------

/// A feed-forward regression network. Architecture and weights come entirely
/// from the artifact file; nothing here is trained or tuned at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    pub layers: Vec<DenseLayer>,
}

impl Network {
    /// Check that the layer dimensions chain from `input_dim` to
    /// `output_dim` and every weight matrix is rectangular.
    pub fn validate(&self, input_dim: usize, output_dim: usize) -> Result<()> {
        if self.layers.is_empty() {
            bail!("network has no layers");
        }
        let mut dim = input_dim;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.weights.is_empty() {
                bail!("layer {i} has no units");
            }
            for (unit, row) in layer.weights.iter().enumerate() {
                if row.len() != dim {
                    bail!(
                        "layer {i}, unit {unit}: expected {dim} weights, found {}",
                        row.len()
                    );
                }
            }
            if layer.biases.len() != layer.weights.len() {
                bail!(
                    "layer {i}: {} units but {} biases",
                    layer.weights.len(),
                    layer.biases.len()
                );
            }
            dim = layer.output_dim();
        }
        if dim != output_dim {
            bail!("network produces {dim} outputs, expected {output_dim}");
        }
        Ok(())
    }

    /// Evaluate the network on one input vector.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        current
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
