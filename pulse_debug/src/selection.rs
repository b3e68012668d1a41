// selection.rs - at most one selected node, plus its property display

use std::sync::Arc;

use pulse_scene::SceneGraph;

use crate::mirror::TreeMirror;
use crate::value_string::value_string;
use crate::view::InspectorView;

/// The fixed set of properties the inspector shows for the selected node.
/// Constant for the panel's lifetime; not derived from the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayedProperty {
    Name,
    Size,
    Position,
    Anchor,
    ZIndex,
}

impl DisplayedProperty {
    pub const ALL: [DisplayedProperty; 5] = [
        DisplayedProperty::Name,
        DisplayedProperty::Size,
        DisplayedProperty::Position,
        DisplayedProperty::Anchor,
        DisplayedProperty::ZIndex,
    ];

    /// Lower-cased lookup key into a node's own properties.
    pub const fn key(self) -> &'static str {
        match self {
            DisplayedProperty::Name => "name",
            DisplayedProperty::Size => "size",
            DisplayedProperty::Position => "position",
            DisplayedProperty::Anchor => "anchor",
            DisplayedProperty::ZIndex => "zindex",
        }
    }

    /// Human-readable label for the panel.
    pub const fn label(self) -> &'static str {
        match self {
            DisplayedProperty::Name => "Name",
            DisplayedProperty::Size => "Size",
            DisplayedProperty::Position => "Position",
            DisplayedProperty::Anchor => "Anchor",
            DisplayedProperty::ZIndex => "ZIndex",
        }
    }
}

/// Marker rendered for a displayed property the node does not declare.
pub const NOT_AVAILABLE: &str = "N/A";

/// Tracks the selection explicitly, independent of mirror presence:
/// selecting a not-yet-mirrored node is valid, it just has no entry to
/// highlight. At most one entry carries the highlight at any time.
pub struct SelectionController {
    selected: Option<Arc<str>>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self { selected: None }
    }

    #[inline]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a node: move the highlight, then (re)render the fixed property
    /// block. Re-selecting the current node is valid and re-renders, which
    /// is how flag toggles refresh the panel.
    pub fn select_node(
        &mut self,
        graph: &SceneGraph,
        mirror: &mut TreeMirror,
        view: &mut impl InspectorView,
        name: &str,
    ) {
        if let Some(previous) = self.selected.take() {
            mirror.set_highlight(&previous, false, view);
        }

        let node = graph.node(name);
        self.selected = Some(match node {
            Some(node) => node.name.clone(),
            None => Arc::<str>::from(name),
        });
        mirror.set_highlight(name, true, view);

        for prop in DisplayedProperty::ALL {
            let text = node
                .and_then(|n| n.property(prop.key()))
                .map(|value| value_string(value))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            view.set_property(prop, &text);
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
