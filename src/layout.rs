/// A point relative to the diagram container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Index-based handle to a node's visual element. Valid only until the
/// next rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub layer: usize,
    pub index: usize,
}

/// Consumed interface: the renderer answers where a node currently sits
/// on screen. Coordinates may change between calls (window resize, text
/// reflow), so callers re-query on every redraw instead of caching.
pub trait LayoutBridge {
    /// Right-center anchor of the node, where outgoing lines start.
    fn anchor_right(&self, node: NodeHandle) -> Point;
    /// Left-center anchor of the node, where incoming lines end.
    fn anchor_left(&self, node: NodeHandle) -> Point;
}

impl<T: LayoutBridge + ?Sized> LayoutBridge for &T {
    fn anchor_right(&self, node: NodeHandle) -> Point {
        (**self).anchor_right(node)
    }

    fn anchor_left(&self, node: NodeHandle) -> Point {
        (**self).anchor_left(node)
    }
}

/// Fixed-pitch layout: layers advance left to right, nodes top to bottom.
/// Stands in for a real renderer in tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub x_pitch: f32,
    pub y_pitch: f32,
    pub node_width: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            x_pitch: 160.,
            y_pitch: 60.,
            node_width: 80.,
        }
    }
}

impl LayoutBridge for GridLayout {
    fn anchor_right(&self, node: NodeHandle) -> Point {
        let left = self.anchor_left(node);
        Point {
            x: left.x + self.node_width,
            y: left.y,
        }
    }

    fn anchor_left(&self, node: NodeHandle) -> Point {
        Point {
            x: node.layer as f32 * self.x_pitch,
            y: node.index as f32 * self.y_pitch + self.y_pitch / 2.,
        }
    }
}
