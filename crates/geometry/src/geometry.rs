//! Surface geometry for Quadrant.
//!
//! Converts pairs of arbitrary corner points into canonical rectangle edges
//! (for committed rectangles) and unrounded frames (for the live preview).
//! Everything here is pure and total: any pair of finite or non-finite
//! coordinates produces a value.

mod coords;
mod edges;
mod frame;

pub use coords::SurfacePoint;
pub use edges::{normalize, round_half_up, Edges};
pub use frame::{frame_from, Frame};
