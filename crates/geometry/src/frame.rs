use crate::SurfacePoint;
use serde::{Deserialize, Serialize};

/// A renderable box in pixels: top-left origin plus non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Unrounded frame spanning two corners.
///
/// Used for the in-progress rectangle so the preview follows the pointer
/// exactly instead of snapping to whole pixels while it moves.
pub fn frame_from(p1: SurfacePoint, p2: SurfacePoint) -> Frame {
    Frame {
        top: p1.y().min(p2.y()),
        left: p1.x().min(p2.x()),
        width: (p1.x() - p2.x()).abs(),
        height: (p1.y() - p2.y()).abs(),
    }
}
