//! Tool selection for Quadrant.
//!
//! [`ToolStore`] is the single source of truth for which interaction mode is
//! active. It is created once by the app and handed to every component that
//! needs it as an `Entity<ToolStore>`; components read it directly and use
//! gpui's `observe`/`subscribe` to react to changes.

mod store;
mod tool;

pub use store::{ToolStore, ToolStoreEvent};
pub use tool::Tool;
