#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Forward pass of a single dense (fully-connected) layer.
//!
//! Contract: every function validates dimensions before doing any arithmetic
//! and returns `DenseError::DimensionMismatch` instead of truncating or padding.
//! Identical arguments always produce an identical output `Vec`.

mod layer_def;
mod linear;

pub use layer_def::{LayerDef, LayerFileError};
pub use linear::Linear;

use tracing::debug;

/// Which dimension of a layer disagreed with the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// Number of weight vectors differs from the number of biases
    #[error("{weights} weight vectors but {biases} biases")]
    NeuronCount {
        /// weight vector count
        weights: usize,
        /// bias count
        biases: usize,
    },
    /// A weight vector's length differs from the input length
    #[error("weight vector {neuron} has {found} entries, input has {expected}")]
    RowLength {
        /// index of the offending neuron
        neuron: usize,
        /// input length
        expected: usize,
        /// weight vector length
        found: usize,
    },
    /// Input given to a built layer has the wrong length
    #[error("layer takes {expected} inputs, got {found}")]
    InputLength {
        /// layer input dimension
        expected: usize,
        /// provided input length
        found: usize,
    },
    /// Flat parameter buffer cannot be split into the requested shape
    #[error("parameter buffer has {found} values, expected {weights} or {with_bias}")]
    BufferLength {
        /// weights-only length (`out_dim * in_dim`)
        weights: usize,
        /// weights followed by bias (`out_dim * in_dim + out_dim`)
        with_bias: usize,
        /// provided buffer length
        found: usize,
    },
    /// `out_dim * in_dim + out_dim` does not fit in `usize`
    #[error("layer of {out_dim} x {in_dim} is too large to address")]
    ShapeOverflow {
        /// requested input dimension
        in_dim: usize,
        /// requested output dimension
        out_dim: usize,
    },
}

/// Error type for layer evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DenseError {
    /// Weights, biases and inputs do not agree in size
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(Mismatch),
}

impl From<Mismatch> for DenseError {
    fn from(m: Mismatch) -> Self {
        DenseError::DimensionMismatch(m)
    }
}

/// Log a rejected shape and wrap it.
pub(crate) fn reject(m: Mismatch) -> DenseError {
    debug!(mismatch = %m, "rejected layer dimensions");
    m.into()
}

/// Check that `weights`/`biases` describe a layer over `input_len` inputs.
pub fn check_dimensions<W: AsRef<[f64]>>(
    input_len: usize,
    weights: &[W],
    biases: &[f64],
) -> Result<(), DenseError> {
    if weights.len() != biases.len() {
        return Err(reject(Mismatch::NeuronCount {
            weights: weights.len(),
            biases: biases.len(),
        }));
    }
    for (neuron, row) in weights.iter().enumerate() {
        let found = row.as_ref().len();
        if found != input_len {
            return Err(reject(Mismatch::RowLength {
                neuron,
                expected: input_len,
                found,
            }));
        }
    }
    Ok(())
}

/// Weighted sum of `inputs` plus `bias`. Lengths are assumed equal.
pub(crate) fn dot_plus_bias(inputs: &[f64], weights: &[f64], bias: f64) -> f64 {
    inputs
        .iter()
        .zip(weights)
        .map(|(x, w)| x * w)
        .sum::<f64>()
        + bias
}

/// Evaluate a dense layer.
///
/// Inputs:
/// - `inputs`: the N input values
/// - `weights`: M weight vectors, one per neuron, each of length N
/// - `biases`: M bias values
///
/// Returns a Vec<f64> of length M where `out[i] = inputs · weights[i] + biases[i]`.
pub fn evaluate<W: AsRef<[f64]>>(
    inputs: &[f64],
    weights: &[W],
    biases: &[f64],
) -> Result<Vec<f64>, DenseError> {
    check_dimensions(inputs.len(), weights, biases)?;
    debug!(neurons = biases.len(), inputs = inputs.len(), "evaluating dense layer");
    Ok(weights
        .iter()
        .zip(biases)
        .map(|(row, &b)| dot_plus_bias(inputs, row.as_ref(), b))
        .collect())
}

/// Output of a single neuron: `inputs · weights + bias`.
pub fn neuron(inputs: &[f64], weights: &[f64], bias: f64) -> Result<f64, DenseError> {
    if weights.len() != inputs.len() {
        return Err(reject(Mismatch::RowLength {
            neuron: 0,
            expected: inputs.len(),
            found: weights.len(),
        }));
    }
    Ok(dot_plus_bias(inputs, weights, bias))
}
