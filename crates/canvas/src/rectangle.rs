use geometry::{Edges, Frame};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a committed rectangle.
///
/// Generated once at commit time and never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangleId(uuid::Uuid);

impl RectangleId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create a RectangleId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }
}

impl Default for RectangleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RectangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RectangleId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for RectangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A committed rectangle on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: RectangleId,
    #[serde(flatten)]
    pub edges: Edges,
}

impl Rectangle {
    pub fn new(edges: Edges) -> Self {
        Self {
            id: RectangleId::new(),
            edges,
        }
    }

    pub fn frame(&self) -> Frame {
        self.edges.to_frame()
    }
}
