use midway_common::{EntityId, RideId};

use crate::class::WindowClass;
use crate::frame::WindowFrame;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Refresh, Window, WindowContext};

use super::{is_close_box, stock_frame};

pub const PAGE_MAIN: u32 = 0;
pub const PAGE_VEHICLE: u32 = 1;

/// First tab widget; tabs follow the caption and close box.
const WIDX_FIRST_TAB: WidgetIndex = 3;

/// Ride details, optionally following one of its vehicles.
#[derive(Debug)]
pub struct RideWindow {
    pub ride: RideId,
    pub vehicle: Option<EntityId>,
    /// Vehicle refreshes that matched the followed vehicle.
    pub vehicle_refreshes: u32,
}

impl RideWindow {
    pub fn new(ride: RideId) -> Self {
        Self {
            ride,
            vehicle: None,
            vehicle_refreshes: 0,
        }
    }
}

impl Window for RideWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
            return;
        }
        if widget >= WIDX_FIRST_TAB {
            let page = (widget - WIDX_FIRST_TAB) as u32;
            if let Some(frame) = ctx.frame_mut() {
                frame.page = page;
            }
            ctx.invalidate_self();
        }
    }

    fn on_refresh(&mut self, frame: &mut WindowFrame, refresh: Refresh) -> bool {
        match refresh {
            Refresh::Vehicle(vehicle) if self.vehicle == Some(vehicle) => {
                self.vehicle_refreshes += 1;
                frame.page == PAGE_VEHICLE
            }
            Refresh::PaintReset => true,
            _ => false,
        }
    }
}

/// Raise the window for `ride`, or open it on the main page.
pub fn open(mgr: &mut WindowManager, ride: RideId) -> WindowHandle {
    let number = u32::from(ride.0);
    if let Some(handle) = mgr.bring_to_front_by_number(WindowClass::Ride, number) {
        return handle;
    }
    let frame = stock_frame(mgr, WindowClass::Ride)
        .with_number(number)
        .with_page(PAGE_MAIN);
    mgr.create(frame, Box::new(RideWindow::new(ride)))
}

/// Open the ride window on its vehicle page, following `vehicle`.
pub fn open_from_vehicle(mgr: &mut WindowManager, ride: RideId, vehicle: EntityId) -> WindowHandle {
    let handle = open(mgr, ride);
    if let Some(window) = mgr.window_as_mut::<RideWindow>(handle) {
        window.vehicle = Some(vehicle);
    }
    if let Some(frame) = mgr.frame_mut(handle) {
        frame.page = PAGE_VEHICLE;
    }
    mgr.invalidate(handle);
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WindowManagerSettings;

    #[test]
    fn one_window_per_ride() {
        let mut mgr = WindowManager::new(WindowManagerSettings::default());
        let a = open(&mut mgr, RideId(3));
        let b = open(&mut mgr, RideId(4));
        assert_ne!(a, b);
        assert_eq!(open(&mut mgr, RideId(3)), a);
        assert_eq!(mgr.frame(a).map(|f| f.number), Some(3));
    }

    #[test]
    fn vehicle_refresh_only_matches_followed_vehicle() {
        let mut mgr = WindowManager::new(WindowManagerSettings::default());
        let handle = open_from_vehicle(&mut mgr, RideId(1), EntityId(77));
        assert_eq!(mgr.frame(handle).map(|f| f.page), Some(PAGE_VEHICLE));

        mgr.refresh(handle, Refresh::Vehicle(EntityId(5)));
        mgr.refresh(handle, Refresh::Vehicle(EntityId(77)));
        let window = mgr.window_as::<RideWindow>(handle).unwrap();
        assert_eq!(window.vehicle_refreshes, 1);
    }

    #[test]
    fn tab_click_switches_page() {
        let mut mgr = WindowManager::new(WindowManagerSettings::default());
        let handle = open(&mut mgr, RideId(2));
        mgr.mouse_up(handle, WIDX_FIRST_TAB + 4);
        assert_eq!(mgr.frame(handle).map(|f| f.page), Some(4));
    }
}
