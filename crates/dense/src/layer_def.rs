#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{evaluate, DenseError, Linear};

/// Errors raised while reading a layer description
#[derive(Debug, thiserror::Error)]
pub enum LayerFileError {
    /// The file could not be read
    #[error("cannot read layer file {path}: {source}")]
    Io {
        /// file that failed
        path: PathBuf,
        /// underlying io error
        source: std::io::Error,
    },
    /// The text is not a valid layer description
    #[error("malformed layer description: {0}")]
    Json(#[from] serde_json::Error),
    /// The description parsed but its sizes disagree
    #[error(transparent)]
    Dimension(#[from] DenseError),
}

/// A complete forward-pass problem: input vector plus layer parameters.
///
/// JSON form: `{"inputs": [..], "weights": [[..], ..], "biases": [..]}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LayerDef {
    /// input vector
    pub inputs: Vec<f64>,
    /// one weight vector per neuron
    pub weights: Vec<Vec<f64>>,
    /// one bias per neuron
    pub biases: Vec<f64>,
}

impl LayerDef {
    /// Parse a layer description from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, LayerFileError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a layer description file.
    pub fn load(path: &Path) -> Result<Self, LayerFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayerFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let def = Self::from_json_str(&text)?;
        debug!(path = %path.display(), neurons = def.biases.len(), "loaded layer description");
        Ok(def)
    }

    /// Pretty JSON form of this description.
    pub fn to_json(&self) -> Result<String, LayerFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the forward pass described here.
    pub fn evaluate(&self) -> Result<Vec<f64>, DenseError> {
        evaluate(&self.inputs, &self.weights, &self.biases)
    }

    /// Split into a validated layer and its input.
    pub fn into_linear(self) -> Result<(Linear, Vec<f64>), DenseError> {
        let layer = Linear::from_rows(self.inputs.len(), &self.weights, &self.biases)?;
        Ok((layer, self.inputs))
    }
}
