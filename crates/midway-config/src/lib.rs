//! Midway configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use midway_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{MidwayConfig, CONFIG_SCHEMA_VERSION, WINDOW_LIMIT_MAX, WINDOW_LIMIT_MIN};
pub use toml_writer::{save_config, save_config_to_path};

use midway_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default file if none exists.
pub fn load_config() -> Result<MidwayConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<MidwayConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MidwayConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&MidwayConfig::default());
        assert!(json.contains("\"general\""));
        assert!(json.contains("\"interface\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"debug\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"auto\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nwindow_limit = 1\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = MidwayConfig::default();
        let parsed: MidwayConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
