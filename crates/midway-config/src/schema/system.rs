//! Debug and logging configuration types.

use midway_common::AssertBehaviour;
use serde::{Deserialize, Serialize};

/// Developer options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// What happens when an open request names something nothing can open.
    pub unroutable_intents: AssertBehaviour,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "midway=info".into(),
        }
    }
}
