//! Windows that show a scrolling list of rides, guests or staff.

use midway_common::ScreenCoords;

use crate::class::{WindowClass, WindowNumber};
use crate::frame::WindowFrame;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Refresh, Window, WindowContext};

use super::{focus_or_create, is_close_box, stock_frame};

/// Parameterless list windows.
pub const LIST_CLASSES: &[WindowClass] = &[
    WindowClass::GuestList,
    WindowClass::StaffList,
    WindowClass::RideList,
    WindowClass::ConstructRide,
];

pub const ROW_HEIGHT: i32 = 10;

/// Research tab of the construct ride window.
pub const CONSTRUCT_RIDE_PAGE_RESEARCH: u32 = 7;

#[derive(Debug, Default)]
pub struct ListWindow {
    /// Contents refreshes received.
    pub refreshes: u32,
    pub selected: Option<usize>,
    pub hovered: Option<usize>,
    /// Ride type brought into view by a new-ride request.
    pub highlighted_ride_type: Option<u8>,
}

fn row_at(pos: ScreenCoords) -> Option<usize> {
    (pos.y >= 0).then(|| (pos.y / ROW_HEIGHT) as usize)
}

impl Window for ListWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn on_scroll_mouse_down(&mut self, ctx: &mut WindowContext<'_>, _scroll: usize, pos: ScreenCoords) {
        self.selected = row_at(pos);
        ctx.invalidate_self();
    }

    fn on_scroll_mouse_drag(&mut self, ctx: &mut WindowContext<'_>, scroll: usize, pos: ScreenCoords) {
        self.on_scroll_mouse_down(ctx, scroll, pos);
    }

    fn on_scroll_mouse_over(&mut self, ctx: &mut WindowContext<'_>, _scroll: usize, pos: ScreenCoords) {
        let row = row_at(pos);
        if row != self.hovered {
            self.hovered = row;
            ctx.invalidate_self();
        }
    }

    fn on_refresh(&mut self, _frame: &mut WindowFrame, refresh: Refresh) -> bool {
        if refresh == Refresh::Contents {
            self.refreshes += 1;
            self.selected = None;
            true
        } else {
            false
        }
    }
}

fn create_list(mgr: &mut WindowManager, class: WindowClass, number: WindowNumber) -> WindowHandle {
    let frame = stock_frame(mgr, class).with_number(number);
    mgr.create(frame, Box::new(ListWindow::default()))
}

pub fn open(mgr: &mut WindowManager, class: WindowClass) -> WindowHandle {
    focus_or_create(mgr, class, |mgr| create_list(mgr, class, 0))
}

/// The construct ride window on its research tab.
pub fn open_research_tab(mgr: &mut WindowManager) -> WindowHandle {
    let handle = open(mgr, WindowClass::ConstructRide);
    if let Some(frame) = mgr.frame_mut(handle) {
        frame.page = CONSTRUCT_RIDE_PAGE_RESEARCH;
    }
    mgr.invalidate(handle);
    handle
}

/// Open the construct ride window scrolled to `ride_type`. Rides cannot be
/// built from the title screen.
pub fn open_new_ride_of_type(mgr: &mut WindowManager, ride_type: u8) -> Option<WindowHandle> {
    if mgr.scene().is_title_sequence() {
        return None;
    }
    let handle = open(mgr, WindowClass::ConstructRide);
    if let Some(list) = mgr.window_as_mut::<ListWindow>(handle) {
        list.highlighted_ride_type = Some(ride_type);
    }
    mgr.invalidate(handle);
    Some(handle)
}

/// Marketing campaign window for one campaign type. A window showing a
/// different campaign is replaced.
pub fn open_campaign(mgr: &mut WindowManager, campaign: u32) -> WindowHandle {
    if let Some(handle) = mgr.bring_to_front_by_number(WindowClass::NewCampaign, campaign) {
        return handle;
    }
    mgr.close_by_class(WindowClass::NewCampaign);
    create_list(mgr, WindowClass::NewCampaign, campaign)
}
