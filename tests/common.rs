use nn_diagram::config::NetworkConfig;
use nn_diagram::graph::{GraphModel, Node};
use nn_diagram::initializer::Fixed;
use nn_diagram::layout::GridLayout;
use nn_diagram::scene::Scene;
use nn_diagram::session::Session;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn config_231(activation: &str) -> NetworkConfig {
    NetworkConfig {
        input_count: 2,
        hidden_layer_count: 1,
        hidden_layer1_nodes: 3,
        hidden_layer2_nodes: 0,
        output_count: 1,
        activation: activation.into(),
    }
}

/// Draws for a 2-3-1 build in the order construction requests them:
/// hidden biases, output bias, input->hidden weights, hidden->output
/// weights.
pub fn draws_231() -> Vec<f32> {
    vec![
        0.5, -0.5, 0.25, // hidden biases
        1., // output bias
        0.1, 0.2, 0.3, // weights from input 0
        0.4, 0.5, 0.6, // weights from input 1
        1., 2., 3., // weights into the output
    ]
}

pub fn build_231(session: &mut Session, activation: &str) -> Scene {
    init_logging();
    session.build(
        &config_231(activation),
        Fixed::new(draws_231()),
        &GridLayout::default(),
    )
}

/// Weight of the connection from (from_layer, i) into (from_layer + 1, j).
#[allow(dead_code)]
pub fn weight(model: &GraphModel, from_layer: usize, i: usize, j: usize) -> f32 {
    model
        .connections()
        .iter()
        .find(|c| c.from_layer == from_layer && c.from_index == i && c.to_index == j)
        .expect("connection exists")
        .weight
}

/// (pre, post, bias) of a hidden node.
#[allow(dead_code)]
pub fn hidden(model: &GraphModel, layer: usize, index: usize) -> (f32, f32, f32) {
    match model.layers()[layer].nodes[index] {
        Node::Hidden { pre, post, bias } => (pre, post, bias),
        ref other => panic!("expected a hidden node, found {:?}", other),
    }
}

#[allow(dead_code)]
pub fn output(model: &GraphModel, index: usize) -> (f32, f32) {
    match model.layers().last().unwrap().nodes[index] {
        Node::Output { value, bias } => (value, bias),
        ref other => panic!("expected an output node, found {:?}", other),
    }
}
