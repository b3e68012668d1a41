// engine.rs - engine facade: scene graph plus the scene-manager surface

use log::debug;
use pulse_nodes::Node;

use crate::graph::SceneGraph;

/// The running engine as the inspector sees it: the node graph, the scene
/// activation surface, and the master clock. The real renderer and event
/// loop live elsewhere; callers borrow this per event, so no handle to it is
/// ever stored across frames.
pub struct Engine {
    graph: SceneGraph,
    master_time: f64,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            master_time: 0.0,
        }
    }

    #[inline]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    #[inline]
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    #[inline]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.graph.node(name)
    }

    /// Scenes in registration order, optionally only the active ones.
    pub fn get_scenes(&self, active_only: bool) -> Vec<&Node> {
        self.graph
            .scenes()
            .filter(|scene| !active_only || scene.active)
            .collect()
    }

    /// Start simulating/rendering a scene. Unknown or non-scene names are
    /// ignored, matching the scene manager's behavior.
    pub fn activate_scene(&mut self, name: &str) {
        if let Some(node) = self.graph.node_mut(name) {
            if node.kind.is_scene() {
                debug!("engine: activate scene '{name}'");
                node.active = true;
            }
        }
    }

    /// Stop simulating/rendering a scene. Unknown or non-scene names are
    /// ignored.
    pub fn deactivate_scene(&mut self, name: &str) {
        if let Some(node) = self.graph.node_mut(name) {
            if node.kind.is_scene() {
                debug!("engine: deactivate scene '{name}'");
                node.active = false;
            }
        }
    }

    /// Advance the master clock by an elapsed frame time in milliseconds.
    #[inline]
    pub fn tick(&mut self, elapsed_ms: f64) {
        self.master_time += elapsed_ms;
    }

    /// Total elapsed engine time in milliseconds.
    #[inline]
    pub fn master_time(&self) -> f64 {
        self.master_time
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
