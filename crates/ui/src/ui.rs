//! UI panels that sit on top of the drawing surface.

mod tool_rail;

pub use tool_rail::ToolRail;
