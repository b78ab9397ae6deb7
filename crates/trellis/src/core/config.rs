use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    style::Palette,
};

/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// Configuration for a [`Gui`](crate::Gui).
///
/// Every field is optional in TOML; missing fields take their defaults.
///
/// ```toml
/// frame_size = 1
/// tab_navigation = true
/// double_click_ms = 250
///
/// [palette]
/// base = "#808090"
/// selection = "#c3d9ff"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Palette given to new widgets.
    pub palette: Palette,
    /// Frame size given to new widgets.
    pub frame_size: u32,
    /// Unconsumed Tab and shift-Tab presses move focus.
    pub tab_navigation: bool,
    /// Presses of the same button on the same widget within this window
    /// count as one multi-click.
    pub double_click_ms: u64,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            frame_size: 0,
            tab_navigation: true,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl GuiConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
