// graph.rs - flat name-keyed store for the scene graph

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use pulse_nodes::Node;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("a node named '{0}' is already registered")]
    DuplicateName(Arc<str>),

    #[error("parent '{0}' is not registered")]
    UnknownParent(Arc<str>),

    #[error("'{child}' cannot be parented under '{parent}'")]
    KindMismatch { parent: Arc<str>, child: Arc<str> },

    #[error("'{0}' is not a scene")]
    NotAScene(Arc<str>),
}

/// Flat storage for scene-graph nodes, keyed by their unique name.
/// Hierarchy lives on the nodes themselves (parent back-reference plus the
/// ordered child-name lists on each container kind); the graph keeps them
/// consistent. Scene registration order is preserved separately so the scene
/// manager can enumerate scenes deterministically.
pub struct SceneGraph {
    nodes: AHashMap<Arc<str>, Node>,
    scene_order: Vec<Arc<str>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: AHashMap::new(),
            scene_order: Vec::new(),
        }
    }

    /// Register a root scene. The node must be of scene kind and its name
    /// unused.
    pub fn add_scene(&mut self, node: Node) -> Result<(), SceneError> {
        if !node.kind.is_scene() {
            return Err(SceneError::NotAScene(node.name.clone()));
        }
        if self.nodes.contains_key(&node.name) {
            return Err(SceneError::DuplicateName(node.name.clone()));
        }
        debug!("scene graph: add scene '{}'", node.name);
        self.scene_order.push(node.name.clone());
        self.nodes.insert(node.name.clone(), node);
        Ok(())
    }

    /// Register a child under an existing parent (scene -> layer,
    /// layer -> visual leaf). Wires the parent back-reference and appends to
    /// the parent's ordered children.
    pub fn add_child(&mut self, parent: &str, mut node: Node) -> Result<(), SceneError> {
        if self.nodes.contains_key(&node.name) {
            return Err(SceneError::DuplicateName(node.name.clone()));
        }
        let parent_node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| SceneError::UnknownParent(Arc::<str>::from(parent)))?;
        if !parent_node.kind.accepts(&node.kind) {
            return Err(SceneError::KindMismatch {
                parent: parent_node.name.clone(),
                child: node.name.clone(),
            });
        }
        debug!("scene graph: add '{}' under '{}'", node.name, parent);
        node.parent = Some(parent_node.name.clone());
        parent_node.kind.push_child(node.name.clone());
        self.nodes.insert(node.name.clone(), node);
        Ok(())
    }

    /// Remove a node and all of its descendants. Detaches the node from its
    /// parent's ordered children. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let node = self.nodes.remove(name)?;
        if let Some(parent) = node.parent.as_deref() {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.kind.remove_child(name);
            }
        }
        if node.kind.is_scene() {
            self.scene_order.retain(|n| n.as_ref() != name);
        }
        for child in node.children() {
            self.remove_subtree(child);
        }
        debug!("scene graph: removed '{name}'");
        Some(node)
    }

    fn remove_subtree(&mut self, name: &str) {
        if let Some(node) = self.nodes.remove(name) {
            for child in node.children() {
                self.remove_subtree(child);
            }
        }
    }

    #[inline]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    #[inline]
    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Scenes in registration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Node> {
        self.scene_order.iter().filter_map(|name| self.nodes.get(name))
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_graph() -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.add_scene(Node::scene("main")).unwrap();
        graph.add_child("main", Node::layer("world")).unwrap();
        graph.add_child("world", Node::visual("player")).unwrap();
        graph.add_child("world", Node::visual("enemy")).unwrap();
        graph
    }

    // -------------------- Wiring --------------------

    #[test]
    fn child_wiring_preserves_order() {
        let graph = demo_graph();
        let world = graph.node("world").unwrap();
        let names: Vec<&str> = world.children().iter().map(|n| n.as_ref()).collect();
        assert_eq!(names, vec!["player", "enemy"]);
        assert_eq!(
            graph.node("player").unwrap().parent.as_deref(),
            Some("world")
        );
    }

    #[test]
    fn scene_order_is_registration_order() {
        let mut graph = SceneGraph::new();
        graph.add_scene(Node::scene("b")).unwrap();
        graph.add_scene(Node::scene("a")).unwrap();
        let names: Vec<&str> = graph.scenes().map(|s| s.name.as_ref()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    // -------------------- Errors --------------------

    #[test]
    fn duplicate_names_rejected() {
        let mut graph = demo_graph();
        assert_eq!(
            graph.add_child("world", Node::visual("player")),
            Err(SceneError::DuplicateName(Arc::from("player")))
        );
    }

    #[test]
    fn unknown_parent_rejected() {
        let mut graph = SceneGraph::new();
        assert_eq!(
            graph.add_child("nowhere", Node::visual("x")),
            Err(SceneError::UnknownParent(Arc::from("nowhere")))
        );
    }

    #[test]
    fn kind_mismatch_rejected() {
        let mut graph = demo_graph();
        assert!(matches!(
            graph.add_child("main", Node::visual("stray")),
            Err(SceneError::KindMismatch { .. })
        ));
        assert!(matches!(
            graph.add_child("player", Node::layer("nested")),
            Err(SceneError::KindMismatch { .. })
        ));
    }

    #[test]
    fn non_scene_root_rejected() {
        let mut graph = SceneGraph::new();
        assert_eq!(
            graph.add_scene(Node::layer("floating")),
            Err(SceneError::NotAScene(Arc::from("floating")))
        );
    }

    // -------------------- Removal --------------------

    #[test]
    fn remove_cascades_to_descendants() {
        let mut graph = demo_graph();
        graph.remove("main");
        assert!(graph.is_empty());
        assert_eq!(graph.scenes().count(), 0);
    }

    #[test]
    fn remove_detaches_from_parent_order() {
        let mut graph = demo_graph();
        graph.remove("player");
        let world = graph.node("world").unwrap();
        let names: Vec<&str> = world.children().iter().map(|n| n.as_ref()).collect();
        assert_eq!(names, vec!["enemy"]);
        assert!(!graph.contains("player"));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut graph = demo_graph();
        assert!(graph.remove("ghost").is_none());
        assert_eq!(graph.len(), 4);
    }
}
