//! Typed requests to the window manager.
//!
//! [`Intent`] asks for a window to be opened or operated on; every
//! variant carries exactly the fields its request needs. [`Broadcast`]
//! announces a game-state change to whichever windows care.

mod broadcast;
mod callback;
mod open;

pub use broadcast::Broadcast;
pub use callback::{CloseCallback, LoadSaveCallback, ScenarioCallback, WindowCallback};
pub use open::{Intent, IntentTier, LoadSaveAction, LoadSaveResult, LoadSaveType};
