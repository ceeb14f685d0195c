#![forbid(unsafe_code)]

use rayon::prelude::*;

use crate::{check_dimensions, dot_plus_bias, reject, DenseError, Mismatch};

/// Dense layer with validated shape: out = W * in + b
#[derive(Clone, Debug, PartialEq)]
pub struct Linear {
    in_dim: usize,
    out_dim: usize,
    /// row-major, out_dim x in_dim
    weights: Vec<f64>,
    bias: Vec<f64>,
}

impl Linear {
    /// Build a layer from per-neuron weight rows and biases.
    ///
    /// `in_dim` is needed because an empty `rows` says nothing about the input width.
    pub fn from_rows<W: AsRef<[f64]>>(
        in_dim: usize,
        rows: &[W],
        bias: &[f64],
    ) -> Result<Self, DenseError> {
        check_dimensions(in_dim, rows, bias)?;
        let mut weights = Vec::with_capacity(rows.len() * in_dim);
        for row in rows {
            weights.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            in_dim,
            out_dim: bias.len(),
            weights,
            bias: bias.to_vec(),
        })
    }

    /// Build a layer from a flat row-major buffer: weights, optionally followed by the bias.
    /// A weights-only buffer gets a zero bias. Any other length is an error.
    pub fn from_raw(in_dim: usize, out_dim: usize, raw: &[f64]) -> Result<Self, DenseError> {
        let sizes = out_dim
            .checked_mul(in_dim)
            .and_then(|w| w.checked_add(out_dim).map(|wb| (w, wb)));
        let Some((expected, with_bias)) = sizes else {
            return Err(reject(Mismatch::ShapeOverflow { in_dim, out_dim }));
        };
        let (weights, bias) = if raw.len() == expected {
            (raw.to_vec(), vec![0.0; out_dim])
        } else if raw.len() == with_bias {
            let (w, b) = raw.split_at(expected);
            (w.to_vec(), b.to_vec())
        } else {
            return Err(reject(Mismatch::BufferLength {
                weights: expected,
                with_bias,
                found: raw.len(),
            }));
        };
        Ok(Self {
            in_dim,
            out_dim,
            weights,
            bias,
        })
    }

    /// input dimension
    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    /// output dimension (number of neurons)
    pub fn out_dim(&self) -> usize {
        self.out_dim
    }

    /// Bias vector
    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    /// Weight rows, one per neuron.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let width = self.in_dim;
        (0..self.out_dim).map(move |o| {
            self.weights
                .get(o * width..(o + 1) * width)
                .unwrap_or_default()
        })
    }

    fn check_input(&self, input: &[f64]) -> Result<(), DenseError> {
        if input.len() != self.in_dim {
            return Err(reject(Mismatch::InputLength {
                expected: self.in_dim,
                found: input.len(),
            }));
        }
        Ok(())
    }

    /// Forward pass for a single input vector
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, DenseError> {
        self.check_input(input)?;
        Ok(self
            .rows()
            .zip(&self.bias)
            .map(|(row, &b)| dot_plus_bias(input, row, b))
            .collect())
    }

    /// Same as [`Linear::forward`], with neurons spread over the rayon pool.
    pub fn forward_par(&self, input: &[f64]) -> Result<Vec<f64>, DenseError> {
        self.check_input(input)?;
        if self.in_dim == 0 {
            return Ok(self.bias.clone());
        }
        Ok(self
            .weights
            .par_chunks_exact(self.in_dim)
            .zip(self.bias.par_iter())
            .map(|(row, &b)| dot_plus_bias(input, row, b))
            .collect())
    }
}
