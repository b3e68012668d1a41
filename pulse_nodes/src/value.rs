// value.rs - dynamic property values attached to nodes

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::structs2d::{Size, Vector2};

/// A dynamically typed value for the open per-node property set.
///
/// Composite variants (`Vector2`, `Size`, `Array`, `Object`) enumerate their
/// fields in declaration/insertion order; the inspector relies on that when
/// flattening them to display strings. Values are owned trees, so they can
/// never be self-referential.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),

    // --- Composites ---
    Vector2(Vector2),
    Size(Size),
    Array(Vec<PropertyValue>),
    Object(IndexMap<Arc<str>, PropertyValue>),
}

impl PropertyValue {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// True for the variants whose fields are enumerated recursively when
    /// building a display string.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            PropertyValue::Vector2(_)
                | PropertyValue::Size(_)
                | PropertyValue::Array(_)
                | PropertyValue::Object(_)
        )
    }

    #[inline]
    pub fn string<S: AsRef<str>>(s: S) -> Self {
        PropertyValue::String(Arc::<str>::from(s.as_ref()))
    }

    #[inline]
    pub fn object() -> Self {
        PropertyValue::Object(IndexMap::new())
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            PropertyValue::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vector2> {
        match *self {
            PropertyValue::Vector2(v) => Some(v),
            _ => None,
        }
    }

    /// Map a JSON value into a property value. JSON objects keep their
    /// declared key order (`serde_json` is built with `preserve_order`).
    pub fn from_json(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PropertyValue::Null,
            JsonValue::Bool(b) => PropertyValue::Bool(b),
            JsonValue::Number(n) => PropertyValue::Number(n.as_f64().unwrap_or(0.0)),
            JsonValue::String(s) => PropertyValue::String(Arc::<str>::from(s)),
            JsonValue::Array(items) => {
                PropertyValue::Array(items.into_iter().map(PropertyValue::from_json).collect())
            }
            JsonValue::Object(map) => PropertyValue::Object(
                map.into_iter()
                    .map(|(k, v)| (Arc::<str>::from(k), PropertyValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::String(v) => write!(f, "{:?}", v.as_ref()),
            PropertyValue::Vector2(v) => write!(f, "{v:?}"),
            PropertyValue::Size(v) => write!(f, "{v:?}"),
            PropertyValue::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            PropertyValue::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key.as_ref(), value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// -------------------- From impls --------------------

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}
impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}
impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Number(v as f64)
    }
}
impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Number(v as f64)
    }
}
impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(Arc::<str>::from(v))
    }
}
impl From<Vector2> for PropertyValue {
    fn from(v: Vector2) -> Self {
        PropertyValue::Vector2(v)
    }
}
impl From<Size> for PropertyValue {
    fn from(v: Size) -> Self {
        PropertyValue::Size(v)
    }
}
