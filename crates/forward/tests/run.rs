use std::path::PathBuf;

use dense::{DenseError, LayerFileError};
use forward::sample::{sample_layer, single_neuron_layer};
use forward::{run, RunConfig, RunError};

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < 1e-6, "{g} != {w}");
    }
}

fn temp_layer(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("forward-{}-{}.json", std::process::id(), name));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn sample_layer_outputs() {
    assert_close(&sample_layer().evaluate().unwrap(), &[4.8, 1.21, 2.385]);
    assert_close(&single_neuron_layer().evaluate().unwrap(), &[4.8]);
}

#[test]
fn run_prints_what_it_returns() {
    let mut sink = Vec::new();
    let outputs = run(&RunConfig::default(), &mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();
    assert_eq!(text.lines().count(), 1);
    let printed: Vec<f64> = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(printed, outputs);
    assert_close(&printed, &[4.8, 1.21, 2.385]);
}

#[test]
fn run_goes_through_the_built_layer() {
    let outputs = run(&RunConfig::default(), &mut Vec::<u8>::new()).unwrap();
    let (linear, inputs) = sample_layer().into_linear().unwrap();
    assert_eq!(linear.out_dim(), 3);
    assert_eq!(outputs, linear.forward(&inputs).unwrap());
    assert_eq!(outputs, sample_layer().evaluate().unwrap());
}

#[test]
fn run_from_json_file() {
    let path = temp_layer("single", &sample_json(&single_neuron_layer()));
    let cfg = RunConfig {
        layer_path: Some(path.clone()),
    };
    let mut sink = Vec::new();
    let outputs = run(&cfg, &mut sink).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_close(&outputs, &[4.8]);
}

#[test]
fn mismatched_file_writes_nothing() {
    let path = temp_layer(
        "bad",
        r#"{"inputs": [1.0, 2.0], "weights": [[1.0]], "biases": [0.0]}"#,
    );
    let cfg = RunConfig {
        layer_path: Some(path.clone()),
    };
    let mut sink = Vec::new();
    let result = run(&cfg, &mut sink);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(
        result,
        Err(RunError::Dense(DenseError::DimensionMismatch(_)))
    ));
    assert!(sink.is_empty());
}

#[test]
fn missing_file_is_a_layer_error() {
    let cfg = RunConfig {
        layer_path: Some(PathBuf::from("/nonexistent/forward-layer.json")),
    };
    let result = run(&cfg, &mut Vec::<u8>::new());
    assert!(matches!(
        result,
        Err(RunError::Layer(LayerFileError::Io { .. }))
    ));
}

fn sample_json(layer: &dense::LayerDef) -> String {
    layer.to_json().unwrap()
}
