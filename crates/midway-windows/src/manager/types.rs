//! Core types and constructors for WindowManager.

use midway_common::{RideId, ScreenSize};
use midway_config::MidwayConfig;

use crate::effects::Effects;
use crate::error::{Result, WindowError};
use crate::factories::WindowFactories;
use crate::flags::{BottomToolbarDirty, WindowFlags};
use crate::frame::WindowFrame;
use crate::host::{NullHost, UiHost};
use crate::placement::{PlacedWindow, PlacementArea};
use crate::registry::{Entry, WindowHandle, WindowRegistry};
use crate::scene::Scene;
use crate::settings::WindowManagerSettings;
use crate::snapshot::WindowSnapshot;
use crate::window::Window;

/// Owns every window and routes requests to them.
pub struct WindowManager {
    /// Windows in z-order, back-most first.
    pub(crate) registry: WindowRegistry,
    /// Limit, screen and UI options the manager was built with.
    pub(crate) settings: WindowManagerSettings,
    /// Current game scene; relaxes placement and gates `close_top`.
    pub(crate) scene: Scene,
    /// Open functions for classes, views and details.
    pub(crate) factories: WindowFactories,
    /// Dirty regions and sounds waiting for the host.
    pub(crate) effects: Effects,
    /// Bottom toolbar parts to repaint, taken by the toolbar each update.
    pub(crate) toolbar_dirty: BottomToolbarDirty,
    /// Ride the construction window is working on.
    pub(crate) current_construction_ride: Option<RideId>,
    /// Receives broadcasts that reach outside the window layer.
    pub(crate) host: Box<dyn UiHost>,
}

impl WindowManager {
    /// Create a manager with the built-in window factories.
    pub fn new(settings: WindowManagerSettings) -> Self {
        Self::with_factories(settings, WindowFactories::stock())
    }

    pub fn with_factories(settings: WindowManagerSettings, factories: WindowFactories) -> Self {
        Self {
            registry: WindowRegistry::new(),
            settings,
            scene: Scene::default(),
            factories,
            effects: Effects::default(),
            toolbar_dirty: BottomToolbarDirty::empty(),
            current_construction_ride: None,
            host: Box::new(NullHost),
        }
    }

    pub fn from_config(config: &MidwayConfig) -> Self {
        Self::new(WindowManagerSettings::from(config))
    }

    // -- Accessors --

    pub fn settings(&self) -> &WindowManagerSettings {
        &self.settings
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn screen(&self) -> ScreenSize {
        self.settings.screen
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.settings.screen = screen;
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn set_scene(&mut self, scene: Scene) {
        tracing::debug!(?scene, "scene changed");
        self.scene = scene;
    }

    pub fn set_host(&mut self, host: Box<dyn UiHost>) {
        self.host = host;
    }

    pub fn factories(&self) -> &WindowFactories {
        &self.factories
    }

    pub fn set_factories(&mut self, factories: WindowFactories) {
        self.factories = factories;
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut Effects {
        &mut self.effects
    }

    pub fn current_construction_ride(&self) -> Option<RideId> {
        self.current_construction_ride
    }

    pub fn set_current_construction_ride(&mut self, ride: Option<RideId>) {
        self.current_construction_ride = ride;
    }

    /// Take the bottom toolbar's accumulated dirty sections.
    pub fn take_toolbar_dirty(&mut self) -> BottomToolbarDirty {
        std::mem::take(&mut self.toolbar_dirty)
    }

    pub fn window_limit(&self) -> u32 {
        self.settings.window_limit
    }

    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    pub fn frame(&self, handle: WindowHandle) -> Option<&WindowFrame> {
        self.registry.get(handle).map(|e| &e.frame)
    }

    pub fn frame_mut(&mut self, handle: WindowHandle) -> Option<&mut WindowFrame> {
        self.registry.get_mut(handle).map(|e| &mut e.frame)
    }

    /// Whether `handle` names a window that has not been closed.
    pub fn is_live(&self, handle: WindowHandle) -> bool {
        self.registry.get(handle).is_some_and(Entry::is_live)
    }

    /// Frame of a window that still exists in the registry.
    pub fn require(&self, handle: WindowHandle) -> Result<&WindowFrame> {
        self.frame(handle).ok_or(WindowError::HandleExpired(handle))
    }

    /// Borrow a window's behaviour as its concrete type.
    pub fn window_as<T: Window + 'static>(&self, handle: WindowHandle) -> Option<&T> {
        self.registry
            .get(handle)?
            .behaviour()?
            .as_any()
            .downcast_ref::<T>()
    }

    pub fn window_as_mut<T: Window + 'static>(&mut self, handle: WindowHandle) -> Option<&mut T> {
        self.registry
            .get_mut(handle)?
            .behaviour
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Live windows in z-order, back-most first.
    pub fn snapshot(&self) -> Vec<WindowSnapshot> {
        self.registry.iter_live().map(WindowSnapshot::from).collect()
    }

    pub(crate) fn placement_area(&self) -> PlacementArea {
        PlacementArea {
            screen: self.settings.screen,
            toolbar_height: self.settings.top_toolbar_height,
            title_sequence: self.scene.is_title_sequence(),
        }
    }

    pub(crate) fn placed_windows(&self) -> Vec<PlacedWindow> {
        self.registry
            .iter_live()
            .map(|e| PlacedWindow {
                pos: e.frame.pos,
                size: e.frame.size,
                stick_to_back: e.frame.flags.contains(WindowFlags::STICK_TO_BACK),
            })
            .collect()
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowManagerSettings::default())
    }
}
