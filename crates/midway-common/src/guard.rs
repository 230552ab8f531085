//! Programmer-error assertions that abort in development builds and are
//! logged and ignored in shipped builds.

use serde::{Deserialize, Serialize};

/// What a failed guard does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertBehaviour {
    /// Abort in debug builds, log in release builds.
    #[default]
    Auto,
    Abort,
    Log,
}

impl AssertBehaviour {
    /// Whether a failed guard should panic under this behaviour.
    pub fn aborts(self) -> bool {
        match self {
            AssertBehaviour::Auto => cfg!(debug_assertions),
            AssertBehaviour::Abort => true,
            AssertBehaviour::Log => false,
        }
    }
}

/// Report a guard failure. Always logged; panics when `behaviour` aborts.
pub fn fail(behaviour: AssertBehaviour, message: &str) {
    tracing::error!("assertion failed: {message}");
    if behaviour.aborts() {
        panic!("assertion failed: {message}");
    }
}

/// Report a guard failure if `condition` does not hold.
pub fn check(behaviour: AssertBehaviour, condition: bool, message: &str) -> bool {
    if !condition {
        fail(behaviour, message);
    }
    condition
}
