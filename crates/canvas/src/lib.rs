//! The drawing surface.
//!
//! [`Surface`] is the pure state machine: pointer down captures an anchor,
//! pointer move tracks the opposite corner, pointer up commits the normalized
//! rectangle. [`Canvas`] wraps it as a gpui entity and [`CanvasElement`] feeds
//! it window pointer events and paints the result.

mod canvas;
mod draft;
mod element;
mod rectangle;
mod surface;

pub use canvas::{Canvas, CanvasEvent};
pub use draft::Draft;
pub use element::CanvasElement;
pub use rectangle::{Rectangle, RectangleId};
pub use surface::{DraftStart, Surface};
// Re-export geometry types for convenience
pub use geometry::{Edges, Frame, SurfacePoint};
