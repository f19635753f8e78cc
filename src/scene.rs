use crate::graph::{GraphModel, Layer, LayerKind, Node};
use crate::layout::{LayoutBridge, NodeHandle, Point};
use crate::selection::{ConnectionVisibility, SelectionOverlay};

use log::trace;

/// What the renderer should put inside one node's visual slot.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeView {
    Input { raw: String },
    Hidden { pre: String, post: String },
    Output { value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerView {
    pub name: String,
    pub kind: LayerKind,
    pub nodes: Vec<NodeView>,
    /// Hidden/output layers get a compute button and a node selector.
    pub selectable: bool,
}

/// A connection line with both endpoints already resolved through the
/// layout bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineView {
    pub from: NodeHandle,
    pub to: NodeHandle,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Weight,
    Bias,
}

/// A floating text annotation. Weight labels sit on their line's midpoint
/// and follow its slope; bias labels sit left of their node, unrotated.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    pub kind: LabelKind,
    pub text: String,
    pub at: Point,
    pub angle_deg: f32,
}

/// Complete draw list for the diagram, rebuilt from scratch on every
/// refresh. Prior labels are never patched, only replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub layers: Vec<LayerView>,
    pub lines: Vec<LineView>,
    pub labels: Vec<LabelView>,
}

/// Produces the current scene: every visible connection with freshly
/// queried endpoints, weight labels for selected destinations and a bias
/// label per selected node.
pub fn refresh(
    model: &GraphModel,
    overlay: &SelectionOverlay,
    layout: &impl LayoutBridge,
) -> Scene {
    let layers = model.layers().iter().map(layer_view).collect();

    let mut lines = Vec::new();
    let mut labels = Vec::new();
    for conn in model.connections() {
        let visibility = overlay.connection_visibility(conn);
        if visibility == ConnectionVisibility::Hidden {
            continue;
        }
        let from = NodeHandle {
            layer: conn.from_layer,
            index: conn.from_index,
        };
        let to = NodeHandle {
            layer: conn.to_layer,
            index: conn.to_index,
        };
        let start = layout.anchor_right(from);
        let end = layout.anchor_left(to);
        if let ConnectionVisibility::Labeled(weight) = visibility {
            labels.push(weight_label(weight, start, end));
        }
        lines.push(LineView {
            from,
            to,
            start,
            end,
        });
    }

    for layer in 0..model.layers().len() {
        if let Some((index, bias)) = overlay.bias_label(model, layer) {
            let anchor = layout.anchor_left(NodeHandle { layer, index });
            labels.push(LabelView {
                kind: LabelKind::Bias,
                text: format!("{:.2}", bias),
                at: Point {
                    x: anchor.x - 5.,
                    y: anchor.y,
                },
                angle_deg: 0.,
            });
        }
    }

    trace!(
        "scene refreshed: {} lines, {} labels",
        lines.len(),
        labels.len()
    );
    Scene {
        layers,
        lines,
        labels,
    }
}

fn layer_view(layer: &Layer) -> LayerView {
    let nodes = layer
        .nodes
        .iter()
        .map(|node| match node {
            Node::Input { raw } => NodeView::Input { raw: raw.clone() },
            Node::Hidden { pre, post, .. } => NodeView::Hidden {
                pre: format!("{:.2}", pre),
                post: format!("{:.2}", post),
            },
            Node::Output { value, .. } => NodeView::Output {
                value: format!("{:.2}", value),
            },
        })
        .collect();
    LayerView {
        name: layer.name.clone(),
        kind: layer.kind,
        nodes,
        selectable: layer.is_selectable(),
    }
}

fn weight_label(weight: f32, start: Point, end: Point) -> LabelView {
    let at = Point {
        x: (start.x + end.x) / 2.,
        y: (start.y + end.y) / 2. - 4.,
    };
    let angle_deg = (end.y - start.y).atan2(end.x - start.x).to_degrees();
    LabelView {
        kind: LabelKind::Weight,
        text: format!("{:.2}", weight),
        at,
        angle_deg,
    }
}
