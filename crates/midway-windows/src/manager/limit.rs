use midway_config::{WINDOW_LIMIT_MAX, WINDOW_LIMIT_MIN};
use tracing::info;

use crate::class::WindowClass;

use super::WindowManager;

impl WindowManager {
    /// Change the window limit, clamped to the accepted range. Lowering it
    /// closes the oldest windows, sparing the options window the player is
    /// editing it from. Returns the applied limit.
    pub fn set_window_limit(&mut self, value: u32) -> u32 {
        let previous = self.settings.window_limit;
        let applied = value.clamp(WINDOW_LIMIT_MIN, WINDOW_LIMIT_MAX);
        self.settings.window_limit = applied;
        if applied < previous {
            let closed = self.close_surplus(applied, Some(WindowClass::Options));
            info!(previous, applied, closed, "window limit lowered");
        } else {
            info!(previous, applied, "window limit set");
        }
        applied
    }

    /// Most live windows allowed before creation evicts.
    pub fn window_capacity(&self) -> u32 {
        self.settings.window_limit + self.settings.reserved_count
    }
}
