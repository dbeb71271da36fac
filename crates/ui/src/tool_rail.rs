//! Tool rail for selecting the active tool.
//!
//! A horizontal strip of buttons floating over the top-left of the surface.

use gpui::{
    div, px, Context, Div, ElementId, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window,
};
use strum::IntoEnumIterator;
use theme::Theme;
use tools::{Tool, ToolStore};

/// Tool rail panel showing available tools.
pub struct ToolRail {
    tools: Entity<ToolStore>,
    theme: Theme,
    _subscription: Subscription,
}

impl ToolRail {
    pub fn new(tools: Entity<ToolStore>, theme: Theme, cx: &mut Context<Self>) -> Self {
        let subscription = cx.observe(&tools, |_, _, cx| cx.notify());
        Self {
            tools,
            theme,
            _subscription: subscription,
        }
    }
}

impl Render for ToolRail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let current_tool = self.tools.read(cx).current();

        div()
            .id("tool-rail")
            .occlude()
            .flex()
            .flex_row()
            .border_2()
            .border_color(self.theme.tool_border)
            .children(Tool::iter().enumerate().map(|(ix, tool)| {
                ToolButton::new(tool, current_tool, ix > 0, self.theme.clone(), self.tools.clone())
            }))
    }
}

/// A single tool button.
struct ToolButton {
    id: ElementId,
    tool: Tool,
    is_active: bool,
    divider: bool,
    theme: Theme,
    tools: Entity<ToolStore>,
}

impl ToolButton {
    fn new(
        tool: Tool,
        current_tool: Tool,
        divider: bool,
        theme: Theme,
        tools: Entity<ToolStore>,
    ) -> Self {
        Self {
            id: ElementId::Name(SharedString::from(tool.to_string())),
            tool,
            is_active: current_tool == tool,
            divider,
            theme,
            tools,
        }
    }
}

impl IntoElement for ToolButton {
    type Element = gpui::Stateful<Div>;

    fn into_element(self) -> Self::Element {
        let bg = if self.is_active {
            self.theme.tool_active_background
        } else {
            self.theme.tool_background
        };

        let text_color = if self.is_active {
            self.theme.ui_text
        } else {
            self.theme.ui_text_muted
        };

        let hover_bg = self.theme.hover;
        let tool = self.tool;
        let tools = self.tools;

        let button = div()
            .id(self.id)
            .p(px(8.0))
            .flex()
            .items_center()
            .justify_center()
            .bg(bg)
            .text_color(text_color)
            .cursor_pointer()
            .hover(move |d| d.bg(hover_bg))
            .on_click(move |_, _window, cx| {
                tools.update(cx, |tools, cx| tools.select_current(tool, cx));
            })
            .child(tool.title());

        if self.divider {
            button.border_l_1().border_color(self.theme.tool_border)
        } else {
            button
        }
    }
}
