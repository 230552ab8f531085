//! Window management for Midway.
//!
//! [`WindowManager`] owns every open window in z-order, places new ones,
//! routes input and broadcasts to them, and enforces the window limit.
//! Concrete windows implement [`Window`]; the built-in ones live in
//! [`stock`] and are reached through [`WindowFactories`].

pub mod class;
pub mod effects;
pub mod error;
pub mod factories;
pub mod flags;
pub mod frame;
pub mod host;
pub mod intent;
pub mod manager;
pub mod placement;
pub mod registry;
pub mod scene;
pub mod settings;
pub mod snapshot;
pub mod stock;
pub mod widget;
pub mod window;

pub use class::{WindowClass, WindowDetail, WindowNumber, WindowView};
pub use error::WindowError;
pub use factories::WindowFactories;
pub use flags::{BottomToolbarDirty, CloseFlags, WindowFlags};
pub use frame::WindowFrame;
pub use host::{NullHost, UiHost};
pub use intent::{Broadcast, Intent};
pub use manager::WindowManager;
pub use registry::WindowHandle;
pub use scene::{EditorStep, Scene};
pub use settings::WindowManagerSettings;
pub use snapshot::WindowSnapshot;
pub use window::{Refresh, Window, WindowContext};
