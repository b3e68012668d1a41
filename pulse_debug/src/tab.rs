// tab.rs - lifecycle surface a panel tab exposes to the hosting debug panel

/// Hooks the hosting debug panel drives on every tab. All of them default to
/// no-ops so a tab only overrides what it cares about.
pub trait PanelTab {
    /// The tab became the visible tab.
    fn show(&mut self) {}

    /// The tab was hidden.
    fn hide(&mut self) {}

    /// Per-frame tick with the elapsed time since the last call, in
    /// milliseconds.
    fn update(&mut self, _elapsed_ms: f64) {}

    /// The panel viewport changed to a new content size.
    fn resize(&mut self, _new_size: f32) {}
}
