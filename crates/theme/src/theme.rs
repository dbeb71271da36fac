//! Minimal theming for Quadrant.
//!
//! Provides colors for the drawing surface, rectangle outlines, and the tool
//! rail.

use gpui::Hsla;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which built-in theme to use.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Theme colors for the drawing surface and its chrome.
#[derive(Clone, Debug)]
pub struct Theme {
    pub appearance: Appearance,

    /// Surface background
    pub canvas_background: Hsla,

    /// Outline of committed rectangles
    pub rectangle_stroke: Hsla,

    /// Outline of the rectangle being dragged out
    pub preview_stroke: Hsla,

    /// Outline width in pixels, shared by committed and preview rectangles
    pub stroke_width: f32,

    /// Tool rail button background
    pub tool_background: Hsla,

    /// Tool rail button background for the active tool
    pub tool_active_background: Hsla,

    /// Tool rail border
    pub tool_border: Hsla,

    pub hover: Hsla,

    pub ui_text: Hsla,
    pub ui_text_muted: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            canvas_background: gpui::white(),
            rectangle_stroke: hsla(0.0, 0.84, 0.6, 1.0), // Red
            preview_stroke: hsla(0.0, 0.84, 0.6, 1.0),
            stroke_width: 1.0,
            tool_background: hsla(0.583, 0.4, 0.96, 1.0), // Slate 100
            tool_active_background: hsla(0.592, 0.27, 0.84, 1.0), // Slate 300
            tool_border: hsla(0.592, 0.27, 0.84, 1.0),
            hover: hsla(0.592, 0.27, 0.9, 1.0),
            ui_text: hsla(0.0, 0.0, 0.1, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            canvas_background: hsla(0.0, 0.0, 0.1, 1.0),
            rectangle_stroke: hsla(0.0, 0.84, 0.6, 1.0),
            preview_stroke: hsla(0.0, 0.84, 0.7, 1.0),
            stroke_width: 1.0,
            tool_background: hsla(0.0, 0.0, 0.16, 1.0),
            tool_active_background: hsla(0.0, 0.0, 0.3, 1.0),
            tool_border: hsla(0.0, 0.0, 0.3, 1.0),
            hover: hsla(0.0, 0.0, 0.22, 1.0),
            ui_text: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
        }
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
