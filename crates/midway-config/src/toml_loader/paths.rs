//! Config path resolution and default file creation.

use midway_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "midway";
const CONFIG_FILE: &str = "config.toml";

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Write the commented default template to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
