// view.rs - injected presentation sink for the inspector

use ahash::AHashMap;

use crate::selection::DisplayedProperty;

/// Display state of a mirror entry in the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Normal,
    /// Rendered muted: the node is hidden, or an inactive scene.
    Dim,
}

/// Everything the inspector needs from its hosting panel's presentation
/// layer, addressed by node identity. The inspector owns the bookkeeping
/// (which entries exist, what is selected); implementations only have to
/// show it.
pub trait InspectorView {
    /// A new entry appeared. `parent` is the already-created entry it nests
    /// under, or `None` for a root (scene) entry. `container` entries can
    /// receive children.
    fn create_entry(&mut self, name: &str, parent: Option<&str>, container: bool);

    /// An entry went away, together with everything nested inside it.
    fn remove_entry(&mut self, name: &str);

    fn set_display(&mut self, name: &str, state: DisplayState);

    fn set_highlight(&mut self, name: &str, highlighted: bool);

    /// Render the display string for one slot of the fixed property block.
    fn set_property(&mut self, prop: DisplayedProperty, text: &str);

    fn set_panel_visible(&mut self, visible: bool);

    fn resize(&mut self, new_size: f32);
}

/// Discards everything. Handy when only the inspector's own state matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl InspectorView for NullView {
    fn create_entry(&mut self, _name: &str, _parent: Option<&str>, _container: bool) {}
    fn remove_entry(&mut self, _name: &str) {}
    fn set_display(&mut self, _name: &str, _state: DisplayState) {}
    fn set_highlight(&mut self, _name: &str, _highlighted: bool) {}
    fn set_property(&mut self, _prop: DisplayedProperty, _text: &str) {}
    fn set_panel_visible(&mut self, _visible: bool) {}
    fn resize(&mut self, _new_size: f32) {}
}

struct TextEntry {
    parent: Option<String>,
    children: Vec<String>,
    display: DisplayState,
    highlighted: bool,
}

/// Headless view that renders the node list as an indented text tree plus
/// the property block. Used by the dev runner and by tests that want to
/// look at what actually reached the presentation side.
pub struct TextView {
    entries: AHashMap<String, TextEntry>,
    roots: Vec<String>,
    properties: Vec<(DisplayedProperty, String)>,
    panel_visible: bool,
    panel_size: f32,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            roots: Vec::new(),
            properties: Vec::new(),
            panel_visible: false,
            panel_size: 0.0,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The last text rendered for a property slot, if any.
    pub fn property_text(&self, prop: DisplayedProperty) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, text)| text.as_str())
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn panel_size(&self) -> f32 {
        self.panel_size
    }

    /// Render the whole tab: node tree, then the property block.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.render_entry(root, 0, &mut out);
        }
        for prop in DisplayedProperty::ALL {
            if let Some(text) = self.property_text(prop) {
                out.push_str(prop.label());
                out.push_str(": ");
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }

    fn render_entry(&self, name: &str, depth: usize, out: &mut String) {
        let Some(entry) = self.entries.get(name) else {
            return;
        };
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(if entry.highlighted { "> " } else { "- " });
        out.push_str(name);
        if entry.display == DisplayState::Dim {
            out.push_str(" (dim)");
        }
        out.push('\n');
        for child in &entry.children {
            self.render_entry(child, depth + 1, out);
        }
    }

    fn drop_subtree(&mut self, name: &str) {
        if let Some(entry) = self.entries.remove(name) {
            for child in entry.children {
                self.drop_subtree(&child);
            }
        }
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectorView for TextView {
    fn create_entry(&mut self, name: &str, parent: Option<&str>, _container: bool) {
        let parent = parent.filter(|p| self.entries.contains_key(*p));
        match parent {
            Some(p) => {
                if let Some(parent_entry) = self.entries.get_mut(p) {
                    parent_entry.children.push(name.to_string());
                }
            }
            None => self.roots.push(name.to_string()),
        }
        self.entries.insert(
            name.to_string(),
            TextEntry {
                parent: parent.map(str::to_string),
                children: Vec::new(),
                display: DisplayState::Normal,
                highlighted: false,
            },
        );
    }

    fn remove_entry(&mut self, name: &str) {
        let Some(entry) = self.entries.remove(name) else {
            return;
        };
        match entry.parent.as_deref() {
            Some(p) => {
                if let Some(parent_entry) = self.entries.get_mut(p) {
                    parent_entry.children.retain(|c| c != name);
                }
            }
            None => self.roots.retain(|r| r != name),
        }
        for child in entry.children {
            self.drop_subtree(&child);
        }
    }

    fn set_display(&mut self, name: &str, state: DisplayState) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.display = state;
        }
    }

    fn set_highlight(&mut self, name: &str, highlighted: bool) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.highlighted = highlighted;
        }
    }

    fn set_property(&mut self, prop: DisplayedProperty, text: &str) {
        match self.properties.iter_mut().find(|(p, _)| *p == prop) {
            Some((_, slot)) => *slot = text.to_string(),
            None => self.properties.push((prop, text.to_string())),
        }
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    fn resize(&mut self, new_size: f32) {
        self.panel_size = new_size;
    }
}
