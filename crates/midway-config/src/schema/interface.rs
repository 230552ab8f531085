use serde::{Deserialize, Serialize};

/// Toolbar and window chrome preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Route research requests to the research window instead of the
    /// new-ride window.
    pub toolbar_show_research: bool,
    /// Taller title bars. Windows with a title bar grow by the delta.
    pub enlarged_ui: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            toolbar_show_research: true,
            enlarged_ui: false,
        }
    }
}
