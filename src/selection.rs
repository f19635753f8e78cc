use crate::graph::{Connection, GraphModel};

/// What the renderer should do with one connection, given the current
/// selection of its destination layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionVisibility {
    /// Destination layer has a selection and this connection misses it:
    /// the line itself disappears.
    Hidden,
    /// No selection in the destination layer: plain line, no label.
    Shown,
    /// Connection ends on the selected node: line plus weight label.
    Labeled(f32),
}

/// Tracks, per layer, which single node (if any) is selected for
/// inspection. Only reads the model; never writes to it.
#[derive(Debug, Clone, Default)]
pub struct SelectionOverlay {
    selected: Vec<Option<usize>>,
}

impl SelectionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every selection and resizes to the new layer count.
    /// Runs on every rebuild.
    pub fn reset(&mut self, layer_count: usize) {
        self.selected = vec![None; layer_count];
    }

    /// Records the chosen node for one layer, or clears it with `None`.
    /// Selections in other layers are unaffected.
    pub fn select(&mut self, layer: usize, node: Option<usize>) {
        if let Some(slot) = self.selected.get_mut(layer) {
            *slot = node;
        }
    }

    pub fn selected(&self, layer: usize) -> Option<usize> {
        self.selected.get(layer).copied().flatten()
    }

    pub fn connection_visibility(&self, conn: &Connection) -> ConnectionVisibility {
        match self.selected(conn.to_layer) {
            None => ConnectionVisibility::Shown,
            Some(node) if node == conn.to_index => ConnectionVisibility::Labeled(conn.weight),
            Some(_) => ConnectionVisibility::Hidden,
        }
    }

    /// Bias annotation for a layer: the selected node's index and bias,
    /// present only while that layer has a selection.
    pub fn bias_label(&self, model: &GraphModel, layer: usize) -> Option<(usize, f32)> {
        let node = self.selected(layer)?;
        let bias = model.layers().get(layer)?.nodes.get(node)?.bias()?;
        Some((node, bias))
    }
}
