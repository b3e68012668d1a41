// mirror.rs - one-to-one mirror of the live node hierarchy

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use pulse_nodes::{Node, NodeKind};
use pulse_scene::SceneGraph;

use crate::view::{DisplayState, InspectorView};
use crate::visibility::style_visibility;

/// View-side bookkeeping for one live node.
#[derive(Debug, Clone)]
pub struct MirrorEntry {
    /// The mirrored parent entry, when one existed at registration time.
    pub parent: Option<Arc<str>>,
    /// Mirrored children, in the node's child order at registration time.
    pub children: Vec<Arc<str>>,
    /// Container entries (scenes, layers) nest children under them.
    pub container: bool,
    pub display: DisplayState,
    pub highlighted: bool,
}

/// Keeps exactly one entry per registered live node, preserving hierarchy
/// and sibling order. Registration must arrive top-down: a layer or leaf
/// whose parent is not mirrored yet is dropped rather than treated as an
/// error, since the engine is trusted to notify in order.
pub struct TreeMirror {
    entries: AHashMap<Arc<str>, MirrorEntry>,
}

impl TreeMirror {
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Register a node (and, for containers, its current children,
    /// recursively and in order). Re-registering a mirrored name only
    /// refreshes its visibility styling; the first registration wins.
    pub fn add_node(&mut self, graph: &SceneGraph, name: &str, view: &mut impl InspectorView) {
        let Some(node) = graph.node(name) else {
            debug!("inspector mirror: '{name}' is not in the graph, skipping");
            return;
        };
        if !self.entries.contains_key(name) {
            match &node.kind {
                NodeKind::Scene { layers } => {
                    self.insert_entry(node, true, view);
                    for layer in layers {
                        self.add_node(graph, layer, view);
                    }
                }
                NodeKind::Layer { objects } => {
                    if self.parent_mirrored(node) {
                        self.insert_entry(node, true, view);
                        for object in objects {
                            self.add_node(graph, object, view);
                        }
                    } else {
                        debug!("inspector mirror: parent of layer '{name}' not mirrored, dropped");
                    }
                }
                NodeKind::VisualLeaf => {
                    if self.parent_mirrored(node) {
                        self.insert_entry(node, false, view);
                    } else {
                        debug!("inspector mirror: parent of '{name}' not mirrored, dropped");
                    }
                }
            }
        }
        style_visibility(self, view, node);
    }

    /// Drop a node's entry and, structurally, every entry nested inside it.
    /// Unknown names are a no-op.
    pub fn remove_node(&mut self, name: &str, view: &mut impl InspectorView) {
        let Some(entry) = self.entries.remove(name) else {
            return;
        };
        if let Some(parent) = entry.parent.as_deref() {
            if let Some(parent_entry) = self.entries.get_mut(parent) {
                parent_entry.children.retain(|c| c.as_ref() != name);
            }
        }
        for child in &entry.children {
            self.drop_subtree(child);
        }
        // The view removes the nested subtree in one go, like a DOM detach.
        view.remove_entry(name);
        debug!("inspector mirror: removed '{name}'");
    }

    fn drop_subtree(&mut self, name: &str) {
        if let Some(entry) = self.entries.remove(name) {
            for child in &entry.children {
                self.drop_subtree(child);
            }
        }
    }

    /// Update an entry's display state and forward it to the view.
    /// Returns false when the node has no entry (a legitimate transient
    /// state, absorbed silently).
    pub fn set_display(
        &mut self,
        name: &str,
        state: DisplayState,
        view: &mut impl InspectorView,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        entry.display = state;
        view.set_display(name, state);
        true
    }

    /// Update an entry's highlight and forward it to the view. Returns false
    /// when the node has no entry.
    pub fn set_highlight(
        &mut self,
        name: &str,
        highlighted: bool,
        view: &mut impl InspectorView,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        entry.highlighted = highlighted;
        view.set_highlight(name, highlighted);
        true
    }

    fn insert_entry(&mut self, node: &Node, container: bool, view: &mut impl InspectorView) {
        let parent = node
            .parent
            .clone()
            .filter(|p| self.entries.contains_key(p.as_ref()));
        if let Some(parent_entry) = parent.as_deref().and_then(|p| self.entries.get_mut(p)) {
            parent_entry.children.push(node.name.clone());
        }
        view.create_entry(&node.name, parent.as_deref(), container);
        self.entries.insert(
            node.name.clone(),
            MirrorEntry {
                parent,
                children: Vec::new(),
                container,
                display: DisplayState::Normal,
                highlighted: false,
            },
        );
    }

    fn parent_mirrored(&self, node: &Node) -> bool {
        node.parent
            .as_deref()
            .is_some_and(|p| self.entries.contains_key(p))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[inline]
    pub fn entry(&self, name: &str) -> Option<&MirrorEntry> {
        self.entries.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TreeMirror {
    fn default() -> Self {
        Self::new()
    }
}
