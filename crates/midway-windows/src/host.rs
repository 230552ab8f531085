//! Broadcast targets that live outside the window layer.

/// Receives broadcasts that no window handles. Every method is a no-op
/// by default.
pub trait UiHost {
    fn update_vehicle_sounds(&mut self) {}

    fn set_map_tooltip(&mut self, _text: &str) {}

    fn track_design_remove_provisional(&mut self) {}

    fn track_design_restore_provisional(&mut self) {}
}

/// Host that ignores everything.
#[derive(Debug, Default)]
pub struct NullHost;

impl UiHost for NullHost {}
