use serde::{Deserialize, Serialize};

/// Smallest accepted window limit.
pub const WINDOW_LIMIT_MIN: u32 = 4;
/// Largest accepted window limit.
pub const WINDOW_LIMIT_MAX: u32 = 64;

/// Game-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Closable windows allowed before the oldest is evicted
    /// (valid range: 4-64). Reserved windows are not counted.
    pub window_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            window_limit: WINDOW_LIMIT_MAX,
        }
    }
}
