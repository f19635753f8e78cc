pub mod construction;
pub mod feed_forward;

pub use feed_forward::{compute_layer, ComputeError};

/// Position a layer occupies in the fixed Input -> Hidden -> Output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Numeric state of a single unit. The shape differs by layer kind:
/// input nodes hold the raw text the user typed, hidden nodes hold the
/// weighted sum and its activated value, output nodes hold the sum alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Input { raw: String },
    Hidden { pre: f32, post: f32, bias: f32 },
    Output { value: f32, bias: f32 },
}

impl Node {
    /// The value this node feeds into the next layer. Input text that does
    /// not parse contributes 0.
    pub fn source_value(&self) -> f32 {
        match self {
            Node::Input { raw } => crate::config::parse_value(raw),
            Node::Hidden { post, .. } => *post,
            Node::Output { value, .. } => *value,
        }
    }

    /// Bias drawn at build time; input nodes have none.
    pub fn bias(&self) -> Option<f32> {
        match self {
            Node::Input { .. } => None,
            Node::Hidden { bias, .. } | Node::Output { bias, .. } => Some(*bias),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub nodes: Vec<Node>,
}

impl Layer {
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Layer {
            name: name.into(),
            kind,
            nodes: Vec::new(),
        }
    }

    /// Hidden and output layers can be computed and have selectable nodes.
    pub fn is_selectable(&self) -> bool {
        self.kind != LayerKind::Input
    }
}

/// Directed edge between adjacent layers. Endpoints and weight are fixed
/// at build time; compute operations never mutate a connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from_layer: usize,
    pub from_index: usize,
    pub to_layer: usize,
    pub to_index: usize,
    pub weight: f32,
}

/// Source of truth for the network's topology and numeric state.
/// Rebuilding discards everything; indices are only meaningful until the
/// next build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphModel {
    layers: Vec<Layer>,
    connections: Vec<Connection>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Overwrites the raw text of one input node. Out-of-range indices are
    /// ignored, as is a model without an input layer.
    pub fn set_input(&mut self, index: usize, raw: impl Into<String>) {
        if let Some(Node::Input { raw: text }) = self
            .layers
            .first_mut()
            .and_then(|layer| layer.nodes.get_mut(index))
        {
            *text = raw.into();
        }
    }

    /// Clears all layers and connections. Runs implicitly at the start of
    /// every build.
    pub fn reset(&mut self) {
        self.layers.clear();
        self.connections.clear();
    }
}
