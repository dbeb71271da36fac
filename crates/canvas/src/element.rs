use crate::Canvas;
use geometry::{Frame, SurfacePoint};
use gpui::{
    point, px, size, transparent_black, App, BorderStyle, Bounds, ContentMask, DispatchPhase,
    Element, ElementId, Entity, Hitbox, Hsla, IntoElement, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, PaintQuad, Pixels, Style, Window,
};

/// A GPUI element that renders a [`Canvas`] and feeds it pointer events.
///
/// Mouse handlers are registered during paint, so they live for exactly one
/// frame. The move handler is only registered while a draft is active, which
/// ties its lifetime to the `Drawing` state: once a commit or cancel triggers
/// a repaint, the next frame comes up without it.
pub struct CanvasElement {
    canvas: Entity<Canvas>,
}

impl CanvasElement {
    pub fn new(canvas: Entity<Canvas>) -> Self {
        Self { canvas }
    }
}

impl IntoElement for CanvasElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

pub struct CanvasElementState {
    hitbox: Hitbox,
}

impl Element for CanvasElement {
    type RequestLayoutState = ();
    type PrepaintState = CanvasElementState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (gpui::LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        let layout_id = window.request_layout(style, None, cx);
        (layout_id, ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        _cx: &mut App,
    ) -> Self::PrepaintState {
        let hitbox = window.insert_hitbox(bounds, gpui::HitboxBehavior::BlockMouse);
        CanvasElementState { hitbox }
    }

    fn paint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let canvas = self.canvas.read(cx);
        let committed: Vec<Frame> = canvas.surface().committed_frames().collect();
        let preview = canvas.surface().preview_frame();
        let is_drawing = canvas.is_drawing();
        let theme = canvas.theme().clone();

        window.paint_quad(gpui::fill(bounds, theme.canvas_background));

        window.with_content_mask(Some(ContentMask { bounds }), |window| {
            for frame in &committed {
                paint_frame(window, bounds, frame, theme.rectangle_stroke, theme.stroke_width);
            }
            if let Some(frame) = &preview {
                paint_frame(window, bounds, frame, theme.preview_stroke, theme.stroke_width);
            }
        });

        let hitbox = prepaint.hitbox.clone();

        // Pointer down: starts a draft, only over the surface
        window.on_mouse_event({
            let canvas = self.canvas.clone();
            let hitbox = hitbox.clone();
            move |event: &MouseDownEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble
                    && event.button == MouseButton::Left
                    && hitbox.is_hovered(window)
                {
                    let point = surface_point(event.position, bounds);
                    canvas.update(cx, |canvas, cx| canvas.pointer_down(point, cx));
                }
            }
        });

        // Pointer move: tracked anywhere in the window while drawing. Capture
        // phase so nothing painted above the surface can swallow it.
        if is_drawing {
            window.on_mouse_event({
                let canvas = self.canvas.clone();
                move |event: &MouseMoveEvent, phase, _window, cx| {
                    if phase == DispatchPhase::Capture {
                        let point = surface_point(event.position, bounds);
                        canvas.update(cx, |canvas, cx| canvas.pointer_move(point, cx));
                    }
                }
            });
        }

        // Pointer up: commits, only over the surface
        window.on_mouse_event({
            let canvas = self.canvas.clone();
            move |event: &MouseUpEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble
                    && event.button == MouseButton::Left
                    && hitbox.is_hovered(window)
                {
                    let point = surface_point(event.position, bounds);
                    canvas.update(cx, |canvas, cx| canvas.pointer_up(point, cx));
                }
            }
        });
    }
}

/// Window position to surface space (relative to the element origin).
fn surface_point(position: gpui::Point<Pixels>, bounds: Bounds<Pixels>) -> SurfacePoint {
    let local_x: f32 = (position.x - bounds.origin.x).into();
    let local_y: f32 = (position.y - bounds.origin.y).into();
    SurfacePoint::new(local_x, local_y)
}

fn paint_frame(
    window: &mut Window,
    canvas_bounds: Bounds<Pixels>,
    frame: &Frame,
    color: Hsla,
    stroke_width: f32,
) {
    let screen_bounds = Bounds {
        origin: point(
            canvas_bounds.origin.x + px(frame.left),
            canvas_bounds.origin.y + px(frame.top),
        ),
        size: size(px(frame.width), px(frame.height)),
    };

    window.paint_quad(PaintQuad {
        bounds: screen_bounds,
        corner_radii: px(0.).into(),
        background: transparent_black().into(),
        border_widths: px(stroke_width).into(),
        border_color: color.into(),
        border_style: BorderStyle::Solid,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Draft;
    use geometry::Edges;
    use gpui::{
        div, AppContext as _, Context, Modifiers, ParentElement, Render, Styled, Subscription,
        TestAppContext, VisualTestContext,
    };
    use theme::Theme;
    use tools::ToolStore;

    /// Hosts a 200x200 canvas in the top-left of an otherwise empty window.
    struct SurfaceWindow {
        canvas: Entity<Canvas>,
        notifications: usize,
        _subscription: Subscription,
    }

    impl SurfaceWindow {
        fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
            let tools = cx.new(|_| ToolStore::new());
            let canvas = cx.new(|cx| {
                let mut canvas = Canvas::new(tools, Theme::light(), cx);
                canvas.cancel_draft_on_deactivation(window, cx);
                canvas
            });
            let subscription = cx.observe(&canvas, |this, _, cx| {
                this.notifications += 1;
                cx.notify();
            });
            Self {
                canvas,
                notifications: 0,
                _subscription: subscription,
            }
        }
    }

    impl Render for SurfaceWindow {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child(
                div()
                    .w(px(200.0))
                    .h(px(200.0))
                    .child(CanvasElement::new(self.canvas.clone())),
            )
        }
    }

    fn open(cx: &mut TestAppContext) -> (Entity<SurfaceWindow>, &mut VisualTestContext) {
        let (view, cx) = cx.add_window_view(SurfaceWindow::new);
        cx.update(|window, _| window.activate_window());
        redraw(cx);
        (view, cx)
    }

    fn redraw(cx: &mut VisualTestContext) {
        cx.update(|window, _| window.refresh());
        cx.run_until_parked();
    }

    fn canvas_of(view: &Entity<SurfaceWindow>, cx: &mut VisualTestContext) -> Entity<Canvas> {
        view.read_with(cx, |view, _| view.canvas.clone())
    }

    fn down(cx: &mut VisualTestContext, x: f32, y: f32, button: MouseButton) {
        cx.simulate_mouse_down(point(px(x), px(y)), button, Modifiers::none());
        redraw(cx);
    }

    fn drag_to(cx: &mut VisualTestContext, x: f32, y: f32) {
        cx.simulate_mouse_move(point(px(x), px(y)), MouseButton::Left, Modifiers::none());
        redraw(cx);
    }

    fn up(cx: &mut VisualTestContext, x: f32, y: f32, button: MouseButton) {
        cx.simulate_mouse_up(point(px(x), px(y)), button, Modifiers::none());
        redraw(cx);
    }

    fn opposite(canvas: &Entity<Canvas>, cx: &mut VisualTestContext) -> Option<SurfacePoint> {
        canvas.read_with(cx, |canvas, _| match canvas.surface().draft() {
            Draft::Idle => None,
            Draft::Drawing { opposite, .. } => Some(*opposite),
        })
    }

    #[gpui::test]
    fn moves_outside_the_surface_still_update_the_preview(cx: &mut TestAppContext) {
        let (view, cx) = open(cx);
        let canvas = canvas_of(&view, cx);

        down(cx, 10.0, 10.0, MouseButton::Left);
        drag_to(cx, 400.0, 300.0);
        assert_eq!(opposite(&canvas, cx), Some(SurfacePoint::new(400.0, 300.0)));

        drag_to(cx, 50.0, 5.0);
        up(cx, 100.0, 80.0, MouseButton::Left);

        canvas.read_with(cx, |canvas, _| {
            assert!(!canvas.is_drawing());
            assert_eq!(canvas.rectangles().len(), 1);
            assert_eq!(
                canvas.rectangles()[0].edges,
                Edges {
                    top: 10,
                    right: 100,
                    bottom: 80,
                    left: 10
                }
            );
            assert_eq!(canvas.surface().preview_frame(), None);
        });
    }

    #[gpui::test]
    fn moves_after_commit_or_cancel_are_not_tracked(cx: &mut TestAppContext) {
        let (view, cx) = open(cx);
        let canvas = canvas_of(&view, cx);

        down(cx, 10.0, 10.0, MouseButton::Left);
        up(cx, 20.0, 20.0, MouseButton::Left);
        let after_commit = view.read_with(cx, |view, _| view.notifications);

        drag_to(cx, 150.0, 150.0);
        drag_to(cx, 400.0, 300.0);
        assert_eq!(view.read_with(cx, |view, _| view.notifications), after_commit);
        assert_eq!(opposite(&canvas, cx), None);

        down(cx, 30.0, 30.0, MouseButton::Left);
        canvas.update(cx, |canvas, cx| canvas.cancel_draft(cx));
        redraw(cx);
        let after_cancel = view.read_with(cx, |view, _| view.notifications);

        drag_to(cx, 120.0, 120.0);
        assert_eq!(view.read_with(cx, |view, _| view.notifications), after_cancel);

        // A fresh draft starts at its own anchor, untouched by earlier moves.
        down(cx, 60.0, 60.0, MouseButton::Left);
        assert_eq!(opposite(&canvas, cx), Some(SurfacePoint::new(60.0, 60.0)));
        canvas.read_with(cx, |canvas, _| assert_eq!(canvas.rectangles().len(), 1));
    }

    #[gpui::test]
    fn non_left_buttons_are_ignored(cx: &mut TestAppContext) {
        let (view, cx) = open(cx);
        let canvas = canvas_of(&view, cx);

        down(cx, 10.0, 10.0, MouseButton::Right);
        canvas.read_with(cx, |canvas, _| assert!(!canvas.is_drawing()));

        down(cx, 10.0, 10.0, MouseButton::Left);
        up(cx, 50.0, 50.0, MouseButton::Right);
        canvas.read_with(cx, |canvas, _| {
            assert!(canvas.is_drawing());
            assert!(canvas.rectangles().is_empty());
        });
    }

    #[gpui::test]
    fn release_outside_the_surface_keeps_the_draft(cx: &mut TestAppContext) {
        let (view, cx) = open(cx);
        let canvas = canvas_of(&view, cx);

        down(cx, 10.0, 10.0, MouseButton::Left);
        drag_to(cx, 400.0, 300.0);
        up(cx, 400.0, 300.0, MouseButton::Left);
        canvas.read_with(cx, |canvas, _| {
            assert!(canvas.is_drawing());
            assert!(canvas.rectangles().is_empty());
        });

        drag_to(cx, 40.0, 50.0);
        up(cx, 40.0, 50.0, MouseButton::Left);
        canvas.read_with(cx, |canvas, _| {
            assert!(!canvas.is_drawing());
            assert_eq!(
                canvas.rectangles()[0].edges,
                Edges {
                    top: 10,
                    right: 40,
                    bottom: 50,
                    left: 10
                }
            );
        });
    }

    #[gpui::test]
    fn window_deactivation_cancels_the_draft(cx: &mut TestAppContext) {
        let (view, cx) = open(cx);
        let canvas = canvas_of(&view, cx);

        down(cx, 10.0, 10.0, MouseButton::Left);
        drag_to(cx, 80.0, 90.0);
        canvas.read_with(cx, |canvas, _| assert!(canvas.is_drawing()));

        cx.deactivate_window();
        redraw(cx);

        canvas.read_with(cx, |canvas, _| {
            assert!(!canvas.is_drawing());
            assert!(canvas.rectangles().is_empty());
        });
        up(cx, 80.0, 90.0, MouseButton::Left);
        canvas.read_with(cx, |canvas, _| assert!(canvas.rectangles().is_empty()));
    }
}
