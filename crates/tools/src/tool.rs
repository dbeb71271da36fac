use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Interaction mode selected in the tool rail.
///
/// The string form (`"move"`, `"select"`, `"create-rectangle"`) is the stable
/// identifier used by `Display`, `FromStr` and serde.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tool {
    #[default]
    Move,
    Select,
    CreateRectangle,
}

impl Tool {
    /// Human readable label for buttons and menus.
    pub fn title(&self) -> &'static str {
        match self {
            Tool::Move => "Move",
            Tool::Select => "Select",
            Tool::CreateRectangle => "Create Rectangle",
        }
    }
}
