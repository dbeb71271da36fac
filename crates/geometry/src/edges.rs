//! Canonical rectangle edges.

use crate::{Frame, SurfacePoint};
use serde::{Deserialize, Serialize};

/// Integer edges of an axis-aligned rectangle.
///
/// Always normalized: `top <= bottom` and `left <= right`, whatever order and
/// direction the two source corners came in. Zero-area edges are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    /// Builds edges from two arbitrary corners, rounding each edge to the
    /// nearest integer.
    pub fn normalize(p1: SurfacePoint, p2: SurfacePoint) -> Self {
        let min = p1.min(p2);
        let max = p1.max(p2);
        let edges = Self {
            top: round_half_up(min.y()),
            right: round_half_up(max.x()),
            bottom: round_half_up(max.y()),
            left: round_half_up(min.x()),
        };
        log::trace!("normalize({:?}, {:?}) -> {:?}", p1, p2, edges);
        edges
    }

    /// Saturates for edges pinned at the `i32` bounds by infinite input.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle has no area (a click without a drag, or a
    /// drag along one axis).
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Top-left and bottom-right corners.
    pub fn corners(&self) -> (SurfacePoint, SurfacePoint) {
        (
            SurfacePoint::new(self.left as f32, self.top as f32),
            SurfacePoint::new(self.right as f32, self.bottom as f32),
        )
    }

    /// Renderable frame for a committed rectangle.
    pub fn to_frame(&self) -> Frame {
        Frame {
            top: self.top as f32,
            left: self.left as f32,
            width: self.width() as f32,
            height: self.height() as f32,
        }
    }
}

/// Shorthand for [`Edges::normalize`].
pub fn normalize(p1: SurfacePoint, p2: SurfacePoint) -> Edges {
    Edges::normalize(p1, p2)
}

/// Rounds to the nearest integer with halves going toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Out-of-range values saturate at the `i32` bounds and NaN becomes 0.
pub fn round_half_up(value: f32) -> i32 {
    (f64::from(value) + 0.5).floor() as i32
}
