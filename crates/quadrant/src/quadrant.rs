//! Quadrant: drag out rectangles on an unbounded surface.

use anyhow::{Context as _, Result};
use canvas::{Canvas, CanvasElement, CanvasEvent};
use clap::Parser;
use gpui::{
    actions, div, point, prelude::*, px, App, Application, Entity, FocusHandle, Focusable,
    KeyBinding, Menu, MenuItem, Subscription, TitlebarOptions, Window, WindowOptions,
};
use log::LevelFilter;
use theme::{Appearance, Theme};
use tools::{Tool, ToolStore, ToolStoreEvent};
use ui::ToolRail;

mod logger;

use logger::QuadrantLogger;

actions!(
    quadrant,
    [Cancel, MoveTool, Quit, RectangleTool, SelectTool]
);

/// Draw rectangles by dragging on an unbounded surface
#[derive(Parser, Debug)]
#[command(name = "quadrant", version)]
struct Args {
    /// Color theme
    #[arg(long, default_value_t = Appearance::Light)]
    theme: Appearance,

    /// Maximum log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Log to stderr only, without creating ~/.quadrant/logs/<run>/log
    #[arg(long)]
    no_log_file: bool,
}

/// Main application component
struct Quadrant {
    tools: Entity<ToolStore>,
    canvas: Entity<Canvas>,
    tool_rail: Entity<ToolRail>,
    focus_handle: FocusHandle,
    theme: Theme,
    _subscriptions: Vec<Subscription>,
}

impl Quadrant {
    pub fn new(theme: Theme, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let tools = cx.new(|_| ToolStore::new());
        let canvas = cx.new(|cx| {
            let mut canvas = Canvas::new(tools.clone(), theme.clone(), cx);
            canvas.cancel_draft_on_deactivation(window, cx);
            canvas
        });
        let tool_rail = cx.new(|cx| ToolRail::new(tools.clone(), theme.clone(), cx));

        let subscriptions = vec![
            cx.subscribe(&canvas, Self::handle_canvas_event),
            cx.subscribe(&tools, Self::handle_tool_event),
            cx.observe(&canvas, |_, _, cx| cx.notify()),
        ];

        Quadrant {
            tools,
            canvas,
            tool_rail,
            focus_handle,
            theme,
            _subscriptions: subscriptions,
        }
    }

    fn handle_canvas_event(
        &mut self,
        canvas: Entity<Canvas>,
        event: &CanvasEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            CanvasEvent::DraftStarted { superseded } => {
                log::debug!("draft started (superseded previous: {})", superseded);
            }
            CanvasEvent::DraftCancelled => {
                log::info!("draft cancelled");
            }
            CanvasEvent::RectangleCommitted(id) => {
                let canvas = canvas.read(cx);
                if let Some(rect) = canvas.rectangles().iter().find(|r| r.id == *id) {
                    log::info!(
                        "rectangle {} committed: {:?} ({} total)",
                        id,
                        rect.edges,
                        canvas.rectangles().len()
                    );
                }
            }
        }
    }

    fn handle_tool_event(
        &mut self,
        _tools: Entity<ToolStore>,
        event: &ToolStoreEvent,
        _cx: &mut Context<Self>,
    ) {
        match event {
            ToolStoreEvent::Changed { previous, current } => {
                log::info!("tool changed: {} -> {}", previous, current);
            }
        }
    }

    fn select_tool(&mut self, tool: Tool, cx: &mut Context<Self>) {
        self.tools
            .update(cx, |tools, cx| tools.select_current(tool, cx));
    }

    fn activate_move_tool(&mut self, _: &MoveTool, _window: &mut Window, cx: &mut Context<Self>) {
        self.select_tool(Tool::Move, cx);
    }

    fn activate_select_tool(
        &mut self,
        _: &SelectTool,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.select_tool(Tool::Select, cx);
    }

    fn activate_rectangle_tool(
        &mut self,
        _: &RectangleTool,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.select_tool(Tool::CreateRectangle, cx);
    }

    fn handle_cancel(&mut self, _: &Cancel, _window: &mut Window, cx: &mut Context<Self>) {
        self.canvas.update(cx, |canvas, cx| canvas.cancel_draft(cx));
    }
}

impl Render for Quadrant {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("Quadrant")
            .key_context("quadrant")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .text_sm()
            .bg(self.theme.canvas_background)
            .text_color(self.theme.ui_text)
            .on_action(cx.listener(Self::activate_move_tool))
            .on_action(cx.listener(Self::activate_select_tool))
            .on_action(cx.listener(Self::activate_rectangle_tool))
            .on_action(cx.listener(Self::handle_cancel))
            // Surface fills the window
            .child(CanvasElement::new(self.canvas.clone()))
            // Tool rail floats over the top-left corner
            .child(
                div()
                    .absolute()
                    .top(px(16.0))
                    .left(px(16.0))
                    .child(self.tool_rail.clone()),
            )
    }
}

impl Focusable for Quadrant {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("m", MoveTool, None),
        KeyBinding::new("v", SelectTool, None),
        KeyBinding::new("r", RectangleTool, None),
        KeyBinding::new("escape", Cancel, None),
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("ctrl-q", Quit, None),
    ]);
}

fn open_main_window(theme: Theme, cx: &mut App) -> Result<()> {
    let window = cx
        .open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Quadrant".into()),
                    appears_transparent: false,
                    traffic_light_position: Some(point(px(8.0), px(8.0))),
                }),
                ..Default::default()
            },
            |window, cx| cx.new(|cx| Quadrant::new(theme, window, cx)),
        )
        .context("Failed to open main window")?;

    window
        .update(cx, |view, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        })
        .context("Failed to focus main window")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    QuadrantLogger::init(args.log_level, !args.no_log_file)?;
    log::info!("Starting Quadrant with {} theme", args.theme);

    let theme = Theme::for_appearance(args.theme);

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);

        cx.set_menus(vec![
            Menu {
                name: "Quadrant".into(),
                items: vec![MenuItem::action("Quit", Quit)],
            },
            Menu {
                name: "Tools".into(),
                items: vec![
                    MenuItem::action("Move (M)", MoveTool),
                    MenuItem::action("Select (V)", SelectTool),
                    MenuItem::action("Create Rectangle (R)", RectangleTool),
                ],
            },
        ]);

        init_keymap(cx);

        if let Err(err) = open_main_window(theme, cx) {
            log::error!("{err:#}");
            cx.quit();
        }
    });

    Ok(())
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
