use std::fmt;

use crate::manager::WindowManager;

/// One-shot completion callback run against the manager.
pub struct WindowCallback<T>(Box<dyn FnOnce(&mut WindowManager, T)>);

impl<T> WindowCallback<T> {
    pub fn new(f: impl FnOnce(&mut WindowManager, T) + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn call(self, manager: &mut WindowManager, value: T) {
        (self.0)(manager, value)
    }
}

impl<T> fmt::Debug for WindowCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowCallback(..)")
    }
}

pub type CloseCallback = WindowCallback<()>;
pub type LoadSaveCallback = WindowCallback<super::LoadSaveResult>;
/// Receives the chosen scenario path.
pub type ScenarioCallback = WindowCallback<String>;
