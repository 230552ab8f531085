use serde::{Deserialize, Serialize};

/// Screen geometry the window manager places windows on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Screen width in pixels (valid range: 64-16384).
    pub width: u32,
    /// Screen height in pixels (valid range: 64-16384).
    pub height: u32,
    /// Height of the band reserved for the top toolbar (valid range: 0-200).
    pub top_toolbar_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            top_toolbar_height: 27,
        }
    }
}
