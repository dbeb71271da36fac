use crate::Tool;
use gpui::{Context, EventEmitter};

/// Events emitted by the tool store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolStoreEvent {
    Changed { previous: Tool, current: Tool },
}

/// Holds the currently selected tool.
///
/// Lives for the whole process as an `Entity<ToolStore>`. Every reader goes
/// through the same entity, so all observers agree on `current` after any
/// [`ToolStore::select_current`] call.
#[derive(Debug, Default)]
pub struct ToolStore {
    current: Tool,
}

impl ToolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tool {
        self.current
    }

    /// Make `tool` the current tool.
    ///
    /// Always overwrites and always notifies, even when `tool` is already
    /// current.
    pub fn select_current(&mut self, tool: Tool, cx: &mut Context<Self>) {
        let previous = self.current;
        self.current = tool;
        log::debug!("tool selected: {} (was {})", tool, previous);
        cx.emit(ToolStoreEvent::Changed {
            previous,
            current: tool,
        });
        cx.notify();
    }
}

impl EventEmitter<ToolStoreEvent> for ToolStore {}
