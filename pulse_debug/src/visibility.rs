// visibility.rs - derive an entry's display state from the node's flags

use pulse_nodes::Node;

use crate::mirror::TreeMirror;
use crate::view::{DisplayState, InspectorView};

/// Restyle a node's mirror entry from its current flags: an entry renders
/// dim when the node is hidden, or when it is a scene that is not active.
/// Pure in the flags, so it must be re-run after every flag mutation.
/// Nodes without an entry are left alone.
pub fn style_visibility(mirror: &mut TreeMirror, view: &mut impl InspectorView, node: &Node) {
    let dim = !node.visible || (node.kind.is_scene() && !node.active);
    let state = if dim {
        DisplayState::Dim
    } else {
        DisplayState::Normal
    };
    mirror.set_display(&node.name, state, view);
}
