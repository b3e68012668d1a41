// pulse_debug - the debug panel's inspector tab, headless.
//
// Mirrors the engine's live node hierarchy (scenes -> layers -> visual
// leaves), tracks a single selected node, renders a fixed property set for
// it, and toggles visibility/activation/debug-overlay flags. Presentation
// goes through an injected `InspectorView` sink, so everything here runs
// without a GUI.

pub mod inspector;
pub mod mirror;
pub mod selection;
pub mod tab;
pub mod value_string;
pub mod view;
pub mod visibility;

pub use inspector::InspectorTab;
pub use mirror::{MirrorEntry, TreeMirror};
pub use selection::{DisplayedProperty, SelectionController};
pub use tab::PanelTab;
pub use value_string::value_string;
pub use view::{DisplayState, InspectorView, NullView, TextView};
pub use visibility::style_visibility;
