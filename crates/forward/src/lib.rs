#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
#![deny(missing_docs, unused_must_use)]

//! Runner around the `dense` evaluator.
//!
//! `logging.rs` sets up the tracing subscriber on stderr, `sample.rs` holds the
//! built-in example layers, and `bin/forward.rs` evaluates the sample or a JSON
//! layer file and prints the outputs.

pub mod logging;
pub mod sample;

use std::io::Write;
use std::path::PathBuf;

use dense::{DenseError, LayerDef, LayerFileError};
use tracing::info;

pub use logging::init_logging;

/// Errors surfaced by the runner
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Bad command line
    #[error("usage: forward [LAYER_JSON]")]
    Usage,
    /// Layer file could not be loaded
    #[error(transparent)]
    Layer(#[from] LayerFileError),
    /// Layer dimensions disagree
    #[error(transparent)]
    Dense(#[from] DenseError),
    /// Writing to the output sink failed
    #[error("cannot write outputs: {0}")]
    Output(#[from] std::io::Error),
}

/// What to evaluate
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunConfig {
    /// JSON layer description; `None` runs [`sample::sample_layer`]
    pub layer_path: Option<PathBuf>,
}

impl RunConfig {
    /// Build from command-line arguments (program name already skipped).
    pub fn from_args<I>(args: I) -> Result<Self, RunError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let layer_path = args.next().map(PathBuf::from);
        if args.next().is_some() {
            return Err(RunError::Usage);
        }
        Ok(Self { layer_path })
    }

    /// The layer this config points at.
    pub fn layer(&self) -> Result<LayerDef, RunError> {
        match &self.layer_path {
            Some(path) => Ok(LayerDef::load(path)?),
            None => Ok(sample::sample_layer()),
        }
    }
}

/// Write the output sequence as a single `[o0, o1, ...]` line.
pub fn write_outputs<W: Write>(sink: &mut W, outputs: &[f64]) -> std::io::Result<()> {
    writeln!(sink, "{:?}", outputs)
}

/// Evaluate the configured layer and print its outputs to `sink`.
pub fn run<W: Write>(cfg: &RunConfig, sink: &mut W) -> Result<Vec<f64>, RunError> {
    let layer = cfg.layer()?;
    let origin = match &cfg.layer_path {
        Some(path) => path.display().to_string(),
        None => "sample".to_string(),
    };
    info!(
        neurons = layer.biases.len(),
        inputs = layer.inputs.len(),
        layer = %origin,
        "forward pass"
    );
    let (linear, inputs) = layer.into_linear()?;
    let outputs = linear.forward(&inputs)?;
    write_outputs(sink, &outputs)?;
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_means_sample() {
        assert_eq!(RunConfig::from_args(args(&[])).unwrap(), RunConfig::default());
    }

    #[test]
    fn one_arg_is_the_layer_path() {
        let cfg = RunConfig::from_args(args(&["layer.json"])).unwrap();
        assert_eq!(cfg.layer_path, Some(PathBuf::from("layer.json")));
    }

    #[test]
    fn two_args_is_usage_error() {
        assert!(matches!(
            RunConfig::from_args(args(&["a.json", "b.json"])),
            Err(RunError::Usage)
        ));
    }

    #[test]
    fn outputs_are_one_line() {
        let mut buf = Vec::new();
        write_outputs(&mut buf, &[1.5, -2.0]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1.5, -2.0]\n");
    }
}
