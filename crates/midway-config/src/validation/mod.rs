//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::MidwayConfig;
use midway_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MidwayConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_general(&mut errors, config);
    sections::validate_display(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
