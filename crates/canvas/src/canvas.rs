use crate::{DraftStart, Rectangle, RectangleId, Surface};
use geometry::{Frame, SurfacePoint};
use gpui::{App, Context, Entity, EventEmitter, FocusHandle, Focusable, Subscription, Window};
use theme::Theme;
use tools::{Tool, ToolStore};

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A pointer down opened a new draft. `superseded` is set when an older
    /// draft was thrown away to make room for it.
    DraftStarted { superseded: bool },
    DraftCancelled,
    RectangleCommitted(RectangleId),
}

/// The drawing surface as a gpui entity.
pub struct Canvas {
    surface: Surface,

    /// Shared tool store. Read for display; does not gate drawing.
    tools: Entity<ToolStore>,

    /// Theme colors.
    theme: Theme,

    /// Focus handle for keyboard events.
    focus_handle: FocusHandle,

    _subscriptions: Vec<Subscription>,
}

impl Canvas {
    pub fn new(tools: Entity<ToolStore>, theme: Theme, cx: &mut Context<Self>) -> Self {
        Self {
            surface: Surface::new(),
            tools,
            theme,
            focus_handle: cx.focus_handle(),
            _subscriptions: Vec::new(),
        }
    }

    /// Cancel the draft whenever `window` stops being the active window.
    ///
    /// Once focus is gone the matching pointer up never reaches the surface.
    pub fn cancel_draft_on_deactivation(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let subscription = cx.observe_window_activation(window, |canvas, window, cx| {
            if !window.is_window_active() {
                canvas.cancel_draft(cx);
            }
        });
        self._subscriptions.push(subscription);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        self.surface.rectangles()
    }

    pub fn is_drawing(&self) -> bool {
        self.surface.is_drawing()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.surface.frames()
    }

    pub fn active_tool(&self, cx: &App) -> Tool {
        self.tools.read(cx).current()
    }

    /// Start a draft at `point`.
    pub fn pointer_down(&mut self, point: SurfacePoint, cx: &mut Context<Self>) {
        let superseded = matches!(
            self.surface.pointer_down(point),
            DraftStart::Superseded { .. }
        );
        cx.emit(CanvasEvent::DraftStarted { superseded });
        cx.notify();
    }

    /// Update the draft's opposite corner.
    pub fn pointer_move(&mut self, point: SurfacePoint, cx: &mut Context<Self>) {
        if self.surface.pointer_move(point) {
            cx.notify();
        }
    }

    /// Commit the draft, if any, with `point` as the opposite corner.
    pub fn pointer_up(&mut self, point: SurfacePoint, cx: &mut Context<Self>) {
        if let Some(id) = self.surface.pointer_up(point) {
            log::debug!(
                "rectangle {} committed while {} tool active",
                id,
                self.active_tool(cx)
            );
            cx.emit(CanvasEvent::RectangleCommitted(id));
            cx.notify();
        }
    }

    /// Drop the draft without committing.
    pub fn cancel_draft(&mut self, cx: &mut Context<Self>) {
        if self.surface.cancel() {
            cx.emit(CanvasEvent::DraftCancelled);
            cx.notify();
        }
    }
}

impl EventEmitter<CanvasEvent> for Canvas {}

impl Focusable for Canvas {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
