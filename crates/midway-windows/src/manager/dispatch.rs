//! Opening windows by class, view, detail or intent.

use midway_common::guard;
use tracing::{debug, error};

use crate::class::{WindowClass, WindowDetail, WindowView};
use crate::error::{Result, WindowError};
use crate::intent::Intent;
use crate::registry::WindowHandle;
use crate::stock;

use super::WindowManager;

impl WindowManager {
    /// Open the parameterless window for `class`.
    pub fn try_open_window(&mut self, class: WindowClass) -> Result<WindowHandle> {
        let factory = self
            .factories
            .class(class)
            .ok_or_else(|| WindowError::Unroutable(format!("class {class}")))?;
        factory(self, class).ok_or_else(|| WindowError::Unroutable(format!("class {class} (factory declined)")))
    }

    /// Open the parameterless window for `class`, logging classes that
    /// cannot be opened this way.
    pub fn open_window(&mut self, class: WindowClass) -> Option<WindowHandle> {
        match self.try_open_window(class) {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("open_window: {e}");
                None
            }
        }
    }

    pub fn open_view(&mut self, view: WindowView) -> Option<WindowHandle> {
        match self.factories.view(view) {
            Some(factory) => factory(self),
            None => self.unroutable(WindowError::Unroutable(format!("view {view:?}"))),
        }
    }

    pub fn open_details(&mut self, detail: WindowDetail, id: u32) -> Option<WindowHandle> {
        match self.factories.detail(detail) {
            Some(factory) => factory(self, id),
            None => self.unroutable(WindowError::Unroutable(format!("detail {detail:?}"))),
        }
    }

    /// Route an intent through the class, action and detail tiers.
    pub fn open_intent(&mut self, intent: Intent) -> Option<WindowHandle> {
        debug!(tier = ?intent.tier(), "intent: {}", intent.describe());
        match intent {
            // Class tier.
            Intent::OpenClass { class } => match self.try_open_window(class) {
                Ok(handle) => Some(handle),
                Err(e) => self.unroutable(e),
            },
            Intent::LoadSave {
                action,
                kind,
                default_path,
                callback,
                track_design,
            } => Some(stock::load_save::open(
                self,
                action,
                kind,
                default_path,
                callback,
                track_design,
            )),
            Intent::Error { title, message } => Some(stock::message::open_error(self, title, message)),
            Intent::ObjectLoadError { path, objects } => {
                Some(stock::message::open_object_load_error(self, path, objects))
            }
            Intent::Peep { peep, staff } => Some(stock::open_peep(self, peep, staff)),
            Intent::FirePrompt { peep } => {
                Some(stock::open_numbered(self, WindowClass::FirePrompt, peep.0))
            }
            Intent::InstallTrack { path } => {
                Some(stock::message::open_text(self, WindowClass::InstallTrack, path))
            }
            Intent::ManageTrackDesign { design } => {
                Some(stock::message::open_text(self, WindowClass::ManageTrackDesign, design))
            }
            Intent::TrackDesignPlace { design } => {
                self.close_construction_windows();
                Some(stock::message::open_text(self, WindowClass::TrackDesignPlace, design))
            }
            Intent::TrackDesignList { ride_type, entry } => {
                Some(stock::open_track_design_list(self, ride_type, entry))
            }
            Intent::ScenarioSelect { callback } => {
                Some(stock::load_save::open_scenario_select(self, callback))
            }
            Intent::NetworkStatus { text, callback } => {
                Some(stock::network::open(self, text, false, callback))
            }

            // Action tier.
            Intent::ProgressOpen { text, callback } => Some(stock::progress::open(self, text, callback)),
            Intent::ProgressUpdate {
                current,
                total,
                caption,
            } => stock::progress::update(self, current, total, caption),
            Intent::ProgressClose => {
                self.close_by_class(WindowClass::ProgressWindow);
                None
            }
            Intent::NewRideOfType { ride_type } => stock::list::open_new_ride_of_type(self, ride_type),

            // Detail tier.
            Intent::RideFromVehicle { ride, vehicle } => {
                Some(stock::ride::open_from_vehicle(self, ride, vehicle))
            }
            Intent::RideFromTrack { ride } => Some(stock::ride::open(self, ride)),
            Intent::View { view } => self.open_view(view),
            Intent::Details { detail, id } => self.open_details(detail, id),
        }
    }

    /// A request nothing can serve: aborts in development builds unless
    /// configured otherwise, logged and ignored in shipped builds.
    fn unroutable(&self, err: WindowError) -> Option<WindowHandle> {
        guard::fail(self.settings.unroutable_intents, &err.to_string());
        None
    }
}
