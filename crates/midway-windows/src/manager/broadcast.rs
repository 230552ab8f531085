//! Fan-out of game-state changes to the windows that show them.

use tracing::debug;

use crate::class::WindowClass;
use crate::flags::BottomToolbarDirty;
use crate::intent::Broadcast;
use crate::registry::WindowHandle;
use crate::stock::BOTTOM_TOOLBAR_NEWS;
use crate::window::Refresh;

use super::WindowManager;

impl WindowManager {
    pub fn broadcast(&mut self, broadcast: Broadcast) {
        debug!(?broadcast, "broadcast");
        match broadcast {
            Broadcast::ResetMap => {
                self.refresh_class(WindowClass::Map, Refresh::Reset);
            }
            Broadcast::RefreshCampaignRideList => {
                self.refresh_class(WindowClass::NewCampaign, Refresh::Contents);
            }
            Broadcast::RefreshNewRides => {
                self.refresh_class(WindowClass::ConstructRide, Refresh::Contents);
            }
            Broadcast::RefreshRideList => {
                self.refresh_class(WindowClass::RideList, Refresh::Contents);
            }
            Broadcast::UpdateMazeConstruction => {
                self.refresh_class(WindowClass::MazeConstruction, Refresh::Contents);
            }
            Broadcast::RideConstructionFocus { ride } => {
                let focused = self
                    .find_by_class(WindowClass::RideConstruction)
                    .filter(|&h| self.frame(h).is_some_and(|f| f.number == u32::from(ride.0)));
                match focused {
                    Some(handle) => {
                        self.refresh(handle, Refresh::CurrentTrack);
                        self.current_construction_ride = Some(ride);
                    }
                    None => {
                        self.close_construction_windows();
                        self.current_construction_ride = Some(ride);
                        self.open_window(WindowClass::RideConstruction);
                    }
                }
            }
            Broadcast::RideConstructionUpdatePieces => {
                self.refresh_class(WindowClass::RideConstruction, Refresh::Pieces);
            }
            Broadcast::RideConstructionUpdateActiveElements => {
                self.refresh_class(WindowClass::RideConstruction, Refresh::ActiveElements);
            }
            Broadcast::InitScenery => {
                self.refresh_class(WindowClass::Scenery, Refresh::SceneryInit);
            }
            Broadcast::SetDefaultSceneryConfig => {
                self.refresh_class(WindowClass::Scenery, Refresh::SceneryDefaults);
            }
            Broadcast::RefreshScenery => {
                self.refresh_class(WindowClass::Scenery, Refresh::Contents);
            }
            Broadcast::InvalidateTickerNews => {
                self.invalidate_widget_by_class(WindowClass::BottomToolbar, BOTTOM_TOOLBAR_NEWS);
            }
            Broadcast::RefreshGuestList => {
                self.refresh_class(WindowClass::GuestList, Refresh::Contents);
            }
            Broadcast::RefreshStaffList => {
                self.refresh_class(WindowClass::StaffList, Refresh::Contents);
            }
            Broadcast::ClearTileInspectorClipboard => {
                self.refresh_class(WindowClass::TileInspector, Refresh::Clipboard);
            }
            Broadcast::InvalidateVehicleWindow { ride, vehicle } => {
                if let Some(handle) = self.find_by_number(WindowClass::Ride, u32::from(ride.0)) {
                    self.refresh(handle, Refresh::Vehicle(vehicle));
                }
            }
            Broadcast::RidePaintResetVehicle { ride } => {
                if let Some(handle) = self.find_by_number(WindowClass::Ride, u32::from(ride.0)) {
                    self.refresh(handle, Refresh::PaintReset);
                }
            }
            Broadcast::UpdateClimate => {
                self.toolbar_dirty |= BottomToolbarDirty::CLIMATE;
                self.invalidate_by_class(WindowClass::GuestList);
            }
            Broadcast::UpdateGuestCount => {
                self.toolbar_dirty |= BottomToolbarDirty::PEEP_COUNT;
                self.invalidate_by_class(WindowClass::GuestList);
                self.invalidate_by_class(WindowClass::ParkInformation);
                self.refresh_class(WindowClass::GuestList, Refresh::Contents);
            }
            Broadcast::UpdateParkRating => {
                self.toolbar_dirty |= BottomToolbarDirty::PARK_RATING;
                self.invalidate_by_class(WindowClass::ParkInformation);
            }
            Broadcast::UpdateDate => {
                self.toolbar_dirty |= BottomToolbarDirty::DATE;
            }
            Broadcast::UpdateCash => {
                self.invalidate_by_class(WindowClass::Finances);
                self.toolbar_dirty |= BottomToolbarDirty::MONEY;
            }
            Broadcast::UpdateBanner { banner } => {
                self.invalidate_by_number(WindowClass::Banner, u32::from(banner.0));
            }
            Broadcast::UpdateResearch => {
                self.invalidate_by_class(WindowClass::Finances);
                self.invalidate_by_class(WindowClass::Research);
            }
            Broadcast::UpdateVehicleSounds => self.host.update_vehicle_sounds(),
            Broadcast::SetMapTooltip { text } => self.host.set_map_tooltip(&text),
            Broadcast::TrackDesignRemoveProvisional => self.host.track_design_remove_provisional(),
            Broadcast::TrackDesignRestoreProvisional => {
                self.host.track_design_restore_provisional()
            }
            Broadcast::SetTileInspectorPage { page } => {
                self.refresh_class(WindowClass::TileInspector, Refresh::Page(page));
            }
            Broadcast::SetTileInspectorButtons => {
                self.refresh_class(WindowClass::TileInspector, Refresh::Buttons);
            }
        }
    }

    /// Refresh the first live window of `class`. Returns false when none
    /// is open.
    pub fn refresh_class(&mut self, class: WindowClass, refresh: Refresh) -> bool {
        match self.find_by_class(class) {
            Some(handle) => {
                self.refresh(handle, refresh);
                true
            }
            None => false,
        }
    }

    /// Deliver a refresh and invalidate the window if it asks for it.
    pub fn refresh(&mut self, handle: WindowHandle, refresh: Refresh) {
        let redraw = self
            .with_frame(handle, |w, frame| w.on_refresh(frame, refresh))
            .unwrap_or(false);
        if redraw {
            self.invalidate(handle);
        }
    }
}
