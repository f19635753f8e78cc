use crate::a_funcs::Activation;
use crate::config::NetworkConfig;
use crate::graph::{feed_forward, ComputeError, GraphModel};
use crate::initializer::Initializer;
use crate::layout::LayoutBridge;
use crate::scene::{self, Scene};
use crate::selection::SelectionOverlay;

use log::debug;

/// Ties the graph model, the selection overlay and the chosen activation
/// together and keeps the drawn scene in step with every mutation: each
/// operation mutates first, then hands back a fresh scene built through
/// the caller's layout bridge.
#[derive(Debug, Default)]
pub struct Session {
    model: GraphModel,
    overlay: SelectionOverlay,
    activation: Activation,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the network from the configuration. All previous layers,
    /// connections and selections are discarded; handles handed out before
    /// this call are meaningless afterwards.
    pub fn build<I: Initializer>(
        &mut self,
        config: &NetworkConfig,
        init: I,
        layout: &impl LayoutBridge,
    ) -> Scene {
        debug!("rebuilding network from {:?}", config);
        self.activation = config.activation();
        self.model.build(config, init);
        self.overlay.reset(self.model.layers().len());
        scene::refresh(&self.model, &self.overlay, layout)
    }

    /// Computes one hidden or output layer, then redraws. Positions may
    /// have shifted from the updated text, so every endpoint is re-queried.
    pub fn compute_layer(
        &mut self,
        layer: usize,
        layout: &impl LayoutBridge,
    ) -> Result<Scene, ComputeError> {
        feed_forward::compute_layer(&mut self.model, layer, self.activation)?;
        Ok(scene::refresh(&self.model, &self.overlay, layout))
    }

    /// Changes (or clears) one layer's selected node, then redraws.
    pub fn select(
        &mut self,
        layer: usize,
        node: Option<usize>,
        layout: &impl LayoutBridge,
    ) -> Scene {
        self.overlay.select(layer, node);
        scene::refresh(&self.model, &self.overlay, layout)
    }

    /// Overwrites the raw text of one input node. Typing alone moves no
    /// geometry, so no scene is produced until the next compute or redraw.
    pub fn set_input(&mut self, index: usize, raw: impl Into<String>) {
        self.model.set_input(index, raw);
    }

    pub fn redraw(&self, layout: &impl LayoutBridge) -> Scene {
        scene::refresh(&self.model, &self.overlay, layout)
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}
