use midway_common::{AssertBehaviour, ScreenSize};
use midway_config::MidwayConfig;

/// Pinned windows (main viewport, toolbars) that do not count against
/// the window limit.
pub const WINDOW_LIMIT_RESERVED: u32 = 4;

/// The slice of configuration the window manager consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManagerSettings {
    pub window_limit: u32,
    pub reserved_count: u32,
    pub toolbar_show_research: bool,
    pub enlarged_ui: bool,
    pub top_toolbar_height: i32,
    pub unroutable_intents: AssertBehaviour,
    pub screen: ScreenSize,
}

impl Default for WindowManagerSettings {
    fn default() -> Self {
        Self::from(&MidwayConfig::default())
    }
}

impl From<&MidwayConfig> for WindowManagerSettings {
    fn from(config: &MidwayConfig) -> Self {
        Self {
            window_limit: config.general.window_limit,
            reserved_count: WINDOW_LIMIT_RESERVED,
            toolbar_show_research: config.interface.toolbar_show_research,
            enlarged_ui: config.interface.enlarged_ui,
            top_toolbar_height: clamp_i32(config.display.top_toolbar_height),
            unroutable_intents: config.debug.unroutable_intents,
            screen: ScreenSize::new(
                clamp_i32(config.display.width),
                clamp_i32(config.display.height),
            ),
        }
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
