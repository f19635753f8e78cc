use super::{Connection, GraphModel, Layer, LayerKind, Node};
use crate::config::NetworkConfig;
use crate::initializer::Initializer;

use log::debug;

impl GraphModel {
    /// Rebuilds the whole network from the configuration: one input layer,
    /// one or two hidden layers, one output layer, densely connected
    /// between each adjacent pair. Biases and weights are drawn from `init`
    /// once here and never redrawn.
    pub fn build<I: Initializer>(&mut self, config: &NetworkConfig, mut init: I) {
        self.reset();

        let mut input = Layer::new("Input layer", LayerKind::Input);
        for _ in 0..config.input_count {
            input.nodes.push(Node::Input { raw: "0".into() });
        }
        self.layers.push(input);

        for (i, &size) in config.hidden_sizes().iter().enumerate() {
            let mut hidden = Layer::new(format!("Hidden layer {}", i + 1), LayerKind::Hidden);
            for _ in 0..size {
                hidden.nodes.push(Node::Hidden {
                    pre: 0.,
                    post: 0.,
                    bias: init.sample(),
                });
            }
            self.layers.push(hidden);
        }

        let mut output = Layer::new("Output layer", LayerKind::Output);
        for _ in 0..config.output_count {
            output.nodes.push(Node::Output {
                value: 0.,
                bias: init.sample(),
            });
        }
        self.layers.push(output);

        for l in 0..self.layers.len() - 1 {
            for i in 0..self.layers[l].nodes.len() {
                for j in 0..self.layers[l + 1].nodes.len() {
                    self.connections.push(Connection {
                        from_layer: l,
                        from_index: i,
                        to_layer: l + 1,
                        to_index: j,
                        weight: init.sample(),
                    });
                }
            }
        }

        debug!(
            "built network: {} layers, {} connections",
            self.layers.len(),
            self.connections.len()
        );
    }
}
