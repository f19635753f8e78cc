use super::{GraphModel, Node};
use crate::a_funcs::{ActivFunc, Activation};

use log::trace;

use std::error::Error;
use std::fmt::Display;

/// Error returned when a compute is requested for a layer that has no
/// predecessor to read from: the input layer, or an index past the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputeError;

impl ComputeError {
    pub fn new() -> Self {
        Self
    }
}

impl Error for ComputeError {}

impl Display for ComputeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Layer has no predecessor to compute from")
    }
}

/// Computes one layer's values from the previous layer's current values.
///
/// For each target node the incoming connections contribute
/// `source_value * weight`, the node's bias is added, and the result lands
/// as `pre`/`post` on hidden nodes or `value` on output nodes. Outputs get
/// no activation. Exactly one layer per call; whether the predecessor has
/// itself been computed is deliberately not checked, so stepping out of
/// order reads whatever the predecessor currently holds.
pub fn compute_layer(
    model: &mut GraphModel,
    layer_index: usize,
    activation: Activation,
) -> Result<(), ComputeError> {
    if layer_index == 0 || layer_index >= model.layers.len() {
        return Err(ComputeError::new());
    }

    let sources: Vec<f32> = model.layers[layer_index - 1]
        .nodes
        .iter()
        .map(Node::source_value)
        .collect();

    for (j, node) in model.layers[layer_index].nodes.iter_mut().enumerate() {
        let mut sum = 0.;
        for conn in model
            .connections
            .iter()
            .filter(|c| c.to_layer == layer_index && c.to_index == j)
        {
            sum += sources[conn.from_index] * conn.weight;
        }
        match node {
            Node::Hidden { pre, post, bias } => {
                sum += *bias;
                *pre = sum;
                *post = activation.evaluate(sum);
            }
            Node::Output { value, bias } => {
                sum += *bias;
                *value = sum;
            }
            // input nodes only ever appear in layer 0
            Node::Input { .. } => {}
        }
    }

    trace!("computed layer {}", layer_index);
    Ok(())
}
