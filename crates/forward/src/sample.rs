//! Built-in example layers: four inputs feeding three neurons, and the
//! one-neuron version of the same layer.

use dense::LayerDef;

const INPUTS: [f64; 4] = [1.0, 2.0, 3.0, 2.5];

/// 4 inputs, 3 neurons. Evaluates to `[4.8, 1.21, 2.385]`.
pub fn sample_layer() -> LayerDef {
    LayerDef {
        inputs: INPUTS.to_vec(),
        weights: vec![
            vec![0.2, 0.8, -0.5, 1.0],
            vec![0.5, -0.91, 0.26, -0.5],
            vec![-0.26, -0.27, 0.17, 0.87],
        ],
        biases: vec![2.0, 3.0, 0.5],
    }
}

/// 4 inputs, 1 neuron (the first neuron of [`sample_layer`]). Evaluates to `[4.8]`.
pub fn single_neuron_layer() -> LayerDef {
    LayerDef {
        inputs: INPUTS.to_vec(),
        weights: vec![vec![0.2, 0.8, -0.5, 1.0]],
        biases: vec![2.0],
    }
}
