// pulse_scene - engine-side scene graph store and scene manager surface.

pub mod engine;
pub mod graph;

pub use engine::Engine;
pub use graph::{SceneError, SceneGraph};
