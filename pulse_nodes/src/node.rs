// node.rs

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::structs2d::{Size, Vector2};
use crate::value::PropertyValue;

/// Closed set of node kinds in the scene graph. Each container kind carries
/// its ordered children by name; the graph stores the nodes themselves flat.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum NodeKind {
    Scene { layers: Vec<Arc<str>> },
    Layer { objects: Vec<Arc<str>> },
    VisualLeaf,
}

impl NodeKind {
    #[inline]
    pub const fn is_scene(&self) -> bool {
        matches!(self, NodeKind::Scene { .. })
    }

    #[inline]
    pub const fn is_layer(&self) -> bool {
        matches!(self, NodeKind::Layer { .. })
    }

    #[inline]
    pub const fn is_visual(&self) -> bool {
        matches!(self, NodeKind::Layer { .. } | NodeKind::VisualLeaf)
    }

    /// Ordered child names (empty for leaves).
    pub fn children(&self) -> &[Arc<str>] {
        match self {
            NodeKind::Scene { layers } => layers,
            NodeKind::Layer { objects } => objects,
            NodeKind::VisualLeaf => &[],
        }
    }

    /// Whether a child of the given kind may be parented under this kind.
    /// Scenes hold layers, layers hold visual leaves.
    pub fn accepts(&self, child: &NodeKind) -> bool {
        match self {
            NodeKind::Scene { .. } => child.is_layer(),
            NodeKind::Layer { .. } => matches!(child, NodeKind::VisualLeaf),
            NodeKind::VisualLeaf => false,
        }
    }

    /// Append a child name, preserving registration order.
    pub fn push_child(&mut self, name: Arc<str>) {
        match self {
            NodeKind::Scene { layers } => layers.push(name),
            NodeKind::Layer { objects } => objects.push(name),
            NodeKind::VisualLeaf => {}
        }
    }

    /// Detach a child name, keeping the remaining order intact.
    pub fn remove_child(&mut self, name: &str) {
        match self {
            NodeKind::Scene { layers } => layers.retain(|n| n.as_ref() != name),
            NodeKind::Layer { objects } => objects.retain(|n| n.as_ref() != name),
            NodeKind::VisualLeaf => {}
        }
    }
}

/// A scene-graph node. Identity is the unique name; the parent link is a
/// lookup relation into the owning graph, not ownership.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub name: Arc<str>,
    pub kind: NodeKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Arc<str>>,

    pub visible: bool,
    /// Whether the engine is simulating/rendering this node. Only consulted
    /// for scenes; scenes start inactive until the scene manager activates
    /// them.
    pub active: bool,
    /// Renderer hint: draw the outline and anchor marker for this node.
    pub debugging: bool,

    /// Open set of named own properties, insertion ordered.
    pub properties: IndexMap<Arc<str>, PropertyValue>,
}

impl Node {
    fn base(name: Arc<str>, kind: NodeKind) -> Self {
        let mut properties = IndexMap::new();
        properties.insert(
            Arc::<str>::from("name"),
            PropertyValue::String(name.clone()),
        );
        Self {
            name,
            kind,
            parent: None,
            visible: true,
            active: false,
            debugging: false,
            properties,
        }
    }

    pub fn scene(name: impl AsRef<str>) -> Self {
        Self::base(
            Arc::<str>::from(name.as_ref()),
            NodeKind::Scene { layers: Vec::new() },
        )
    }

    pub fn layer(name: impl AsRef<str>) -> Self {
        Self::base(
            Arc::<str>::from(name.as_ref()),
            NodeKind::Layer {
                objects: Vec::new(),
            },
        )
    }

    /// A visual leaf with the engine-default own properties a Visual carries:
    /// position and anchor (anchor centered), size, z-index.
    pub fn visual(name: impl AsRef<str>) -> Self {
        let mut node = Self::base(Arc::<str>::from(name.as_ref()), NodeKind::VisualLeaf);
        node.set_property("position", Vector2::zero());
        node.set_property("anchor", Vector2::new(0.5, 0.5));
        node.set_property("size", Size::zero());
        node.set_property("zindex", 0);
        node
    }

    /// Ordered child names (empty for leaves).
    #[inline]
    pub fn children(&self) -> &[Arc<str>] {
        self.kind.children()
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, NodeKind::VisualLeaf)
    }

    /// Look up a directly declared property.
    #[inline]
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    #[inline]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn set_property(&mut self, key: impl AsRef<str>, value: impl Into<PropertyValue>) {
        self.properties
            .insert(Arc::<str>::from(key.as_ref()), value.into());
    }
}
