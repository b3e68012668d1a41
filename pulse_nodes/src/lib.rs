// pulse_nodes - node data model for the Pulse scene graph and its inspector.

pub mod node;
pub mod structs2d;
pub mod value;

pub use node::{Node, NodeKind};
pub use structs2d::{Size, Vector2};
pub use value::PropertyValue;
