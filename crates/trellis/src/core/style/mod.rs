/// Color values and arithmetic.
mod color;

pub use color::Color;
use serde::{Deserialize, Serialize};

/// The four colors every widget carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Face color for frames, buttons and tab headers.
    pub base: Color,
    /// Text and outline color.
    pub foreground: Color,
    /// Fill color behind content.
    pub background: Color,
    /// Color for selected items.
    pub selection: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Color::from_hex(0x808090),
            foreground: Color::from_hex(0x000000),
            background: Color::from_hex(0xffffff),
            selection: Color::from_hex(0xc3d9ff),
        }
    }
}
