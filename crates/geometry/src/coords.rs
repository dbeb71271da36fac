//! Points on the drawing surface.
//!
//! Surface space is the unbounded plane rectangles are drawn on. Its origin is
//! the top-left corner of the surface element, x grows to the right and y grows
//! downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position in surface space, as delivered by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoint(pub Vec2);

impl SurfacePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Component-wise minimum of two points (the top-left of their box).
    ///
    /// A NaN component loses to the other point's component whichever side
    /// it is on, so the result does not depend on argument order.
    pub fn min(self, other: SurfacePoint) -> SurfacePoint {
        SurfacePoint::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum of two points (the bottom-right of their box).
    pub fn max(self, other: SurfacePoint) -> SurfacePoint {
        SurfacePoint::new(self.x().max(other.x()), self.y().max(other.y()))
    }
}

impl From<Vec2> for SurfacePoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<SurfacePoint> for Vec2 {
    fn from(p: SurfacePoint) -> Self {
        p.0
    }
}
