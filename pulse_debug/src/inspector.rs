// inspector.rs - the inspector tab: mirror + selection + toggle actions

use log::debug;
use pulse_scene::Engine;

use crate::mirror::TreeMirror;
use crate::selection::SelectionController;
use crate::tab::PanelTab;
use crate::view::InspectorView;
use crate::visibility::style_visibility;

/// The debug panel's inspector tab. Owns the tree mirror, the selection
/// state, and the injected view sink; the engine itself is borrowed per
/// call by the hosting panel's event dispatch, which also guarantees the
/// operations never overlap.
pub struct InspectorTab<V: InspectorView> {
    mirror: TreeMirror,
    selection: SelectionController,
    view: V,
}

impl<V: InspectorView> InspectorTab<V> {
    pub fn new(view: V) -> Self {
        Self {
            mirror: TreeMirror::new(),
            selection: SelectionController::new(),
            view,
        }
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[inline]
    pub fn mirror(&self) -> &TreeMirror {
        &self.mirror
    }

    #[inline]
    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Bind to a running engine: restyle every currently active scene, since
    /// scenes are registered inactive and may have been activated before the
    /// panel attached.
    pub fn set_engine(&mut self, engine: &Engine) {
        for scene in engine.get_scenes(true) {
            style_visibility(&mut self.mirror, &mut self.view, scene);
        }
    }

    /// Tree-membership notification: mirror a newly added node (and its
    /// current children, for containers).
    pub fn add_node(&mut self, engine: &Engine, name: &str) {
        self.mirror.add_node(engine.graph(), name, &mut self.view);
    }

    /// Tree-membership notification: drop a removed node's entry and every
    /// entry nested inside it.
    pub fn remove_node(&mut self, name: &str) {
        self.mirror.remove_node(name, &mut self.view);
    }

    /// Select a node to inspect.
    pub fn select_node(&mut self, engine: &Engine, name: &str) {
        self.selection
            .select_node(engine.graph(), &mut self.mirror, &mut self.view, name);
    }

    /// Show/hide the node: scenes toggle through the engine's scene
    /// activation, visual nodes flip their visible flag. Restyles the entry
    /// and re-selects the node so the panel reflects the new flags.
    pub fn toggle_node(&mut self, engine: &mut Engine, name: &str) {
        match engine
            .graph()
            .node(name)
            .map(|n| (n.kind.is_scene(), n.kind.is_visual(), n.active))
        {
            Some((true, _, true)) => engine.deactivate_scene(name),
            Some((true, _, false)) => engine.activate_scene(name),
            Some((false, true, _)) => {
                if let Some(node) = engine.graph_mut().node_mut(name) {
                    node.visible = !node.visible;
                    debug!("inspector: '{}' visible = {}", name, node.visible);
                }
            }
            Some((false, false, _)) | None => {}
        }

        if let Some(node) = engine.graph().node(name) {
            style_visibility(&mut self.mirror, &mut self.view, node);
        }
        // Forces a redraw of the selection styling and property block.
        self.select_node(engine, name);
    }

    /// Toggle the debug overlay flag (outline and anchor marker). The
    /// renderer interprets it; nothing is drawn here, and no other flag is
    /// touched. Meaningful for visual nodes only.
    pub fn toggle_debug(&mut self, engine: &mut Engine, name: &str) {
        if let Some(node) = engine.graph_mut().node_mut(name) {
            node.debugging = !node.debugging;
            debug!("inspector: '{}' debugging = {}", name, node.debugging);
        }
    }
}

impl<V: InspectorView> PanelTab for InspectorTab<V> {
    fn show(&mut self) {
        self.view.set_panel_visible(true);
    }

    fn hide(&mut self) {
        self.view.set_panel_visible(false);
    }

    // update() stays the default no-op: the inspector is driven entirely by
    // discrete membership/selection/toggle events, not by the frame tick.

    fn resize(&mut self, new_size: f32) {
        self.view.resize(new_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::DisplayedProperty;
    use crate::view::{DisplayState, NullView, TextView};
    use pulse_nodes::Node;

    fn demo_engine() -> Engine {
        let mut engine = Engine::new();
        let graph = engine.graph_mut();
        graph.add_scene(Node::scene("Cybertron")).unwrap();
        graph.add_child("Cybertron", Node::layer("world")).unwrap();
        graph.add_child("world", Node::visual("dragBox")).unwrap();
        graph.add_child("world", Node::visual("dropArea")).unwrap();
        engine
    }

    fn display_of(tab: &InspectorTab<impl InspectorView>, name: &str) -> DisplayState {
        tab.mirror().entry(name).unwrap().display
    }

    // -------------------- Binding --------------------

    #[test]
    fn set_engine_styles_active_scenes() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(NullView);
        tab.add_node(&engine, "Cybertron");
        // Mirrored while inactive, so the scene entry starts dim.
        assert_eq!(display_of(&tab, "Cybertron"), DisplayState::Dim);

        engine.activate_scene("Cybertron");
        tab.set_engine(&engine);
        assert_eq!(display_of(&tab, "Cybertron"), DisplayState::Normal);
    }

    // -------------------- Toggles --------------------

    #[test]
    fn toggle_node_is_its_own_inverse_for_visuals() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(NullView);
        tab.add_node(&engine, "Cybertron");

        assert!(engine.node("dragBox").unwrap().visible);
        tab.toggle_node(&mut engine, "dragBox");
        assert!(!engine.node("dragBox").unwrap().visible);
        assert_eq!(display_of(&tab, "dragBox"), DisplayState::Dim);
        tab.toggle_node(&mut engine, "dragBox");
        assert!(engine.node("dragBox").unwrap().visible);
        assert_eq!(display_of(&tab, "dragBox"), DisplayState::Normal);
    }

    #[test]
    fn toggle_node_is_its_own_inverse_for_scenes() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(NullView);
        tab.add_node(&engine, "Cybertron");

        tab.toggle_node(&mut engine, "Cybertron");
        assert!(engine.node("Cybertron").unwrap().active);
        assert_eq!(display_of(&tab, "Cybertron"), DisplayState::Normal);
        tab.toggle_node(&mut engine, "Cybertron");
        assert!(!engine.node("Cybertron").unwrap().active);
        assert_eq!(display_of(&tab, "Cybertron"), DisplayState::Dim);
    }

    #[test]
    fn toggle_node_refreshes_selection() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(TextView::new());
        tab.add_node(&engine, "Cybertron");
        tab.select_node(&engine, "dragBox");
        tab.toggle_node(&mut engine, "dragBox");

        assert_eq!(tab.selected(), Some("dragBox"));
        assert!(tab.mirror().entry("dragBox").unwrap().highlighted);
        assert_eq!(
            tab.view().property_text(DisplayedProperty::Name),
            Some("dragBox")
        );
    }

    #[test]
    fn toggle_debug_flips_only_the_debug_flag() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(NullView);
        tab.add_node(&engine, "Cybertron");

        tab.toggle_debug(&mut engine, "dragBox");
        let node = engine.node("dragBox").unwrap();
        assert!(node.debugging);
        assert!(node.visible);
        assert!(!node.active);

        tab.toggle_debug(&mut engine, "dragBox");
        assert!(!engine.node("dragBox").unwrap().debugging);
    }

    #[test]
    fn toggle_unknown_node_is_absorbed() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(NullView);
        tab.add_node(&engine, "Cybertron");
        tab.toggle_node(&mut engine, "ghost");
        tab.toggle_debug(&mut engine, "ghost");
        // Selection still moved to the unknown name, per the selection rules.
        assert_eq!(tab.selected(), Some("ghost"));
    }

    // -------------------- Membership --------------------

    #[test]
    fn membership_notifications_flow_through() {
        let mut engine = demo_engine();
        let mut tab = InspectorTab::new(TextView::new());
        tab.add_node(&engine, "Cybertron");
        assert!(tab.view().contains("dropArea"));

        engine.graph_mut().remove("world");
        tab.remove_node("world");
        assert!(!tab.mirror().contains("world"));
        assert!(!tab.mirror().contains("dragBox"));
        assert!(!tab.view().contains("dropArea"));
        assert!(tab.mirror().contains("Cybertron"));
    }

    // -------------------- Panel lifecycle --------------------

    #[test]
    fn panel_lifecycle_forwards_to_view() {
        let mut tab = InspectorTab::new(TextView::new());
        tab.show();
        assert!(tab.view().is_panel_visible());
        tab.resize(130.0);
        assert_eq!(tab.view().panel_size(), 130.0);
        tab.update(16.0); // inert extension point
        tab.hide();
        assert!(!tab.view().is_panel_visible());
    }
}
