//! Configuration schema types for Midway.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the game ships with.

mod display;
mod general;
mod interface;
mod system;

pub use display::*;
pub use general::*;
pub use interface::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Midway.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MidwayConfig {
    pub general: GeneralConfig,
    pub interface: InterfaceConfig,
    pub display: DisplayConfig,
    pub debug: DebugConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use midway_common::AssertBehaviour;

    #[test]
    fn defaults_match_shipped_values() {
        let config = MidwayConfig::default();
        assert_eq!(config.general.window_limit, 64);
        assert!(config.interface.toolbar_show_research);
        assert!(!config.interface.enlarged_ui);
        assert_eq!(config.display.width, 1280);
        assert_eq!(config.display.height, 720);
        assert_eq!(config.display.top_toolbar_height, 27);
        assert_eq!(config.debug.unroutable_intents, AssertBehaviour::Auto);
        assert_eq!(config.logging.level, "midway=info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: MidwayConfig = toml::from_str(
            r#"
[general]
window_limit = 12

[debug]
unroutable_intents = "log"
"#,
        )
        .unwrap();
        assert_eq!(config.general.window_limit, 12);
        assert_eq!(config.debug.unroutable_intents, AssertBehaviour::Log);
        assert_eq!(config.display.width, 1280);
        assert!(config.interface.toolbar_show_research);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: MidwayConfig = toml::from_str("").unwrap();
        assert_eq!(config, MidwayConfig::default());
    }
}
