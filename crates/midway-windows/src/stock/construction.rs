//! Track and maze construction windows.

use midway_common::RideId;
use tracing::debug;

use crate::class::WindowClass;
use crate::frame::WindowFrame;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Refresh, Window, WindowContext};

use super::{focus_or_create, is_close_box, stock_frame};

/// Construction state for the ride being built. The window number is the
/// ride id.
#[derive(Debug)]
pub struct RideConstructionWindow {
    pub ride: RideId,
    pub track_refreshes: u32,
    pub piece_refreshes: u32,
    pub element_refreshes: u32,
    pub maze_refreshes: u32,
}

impl RideConstructionWindow {
    pub fn new(ride: RideId) -> Self {
        Self {
            ride,
            track_refreshes: 0,
            piece_refreshes: 0,
            element_refreshes: 0,
            maze_refreshes: 0,
        }
    }
}

impl Window for RideConstructionWindow {
    fn on_open(&mut self, ctx: &mut WindowContext<'_>) {
        ctx.manager.set_current_construction_ride(Some(self.ride));
    }

    fn on_close(&mut self, ctx: &mut WindowContext<'_>) {
        if ctx.manager.current_construction_ride() == Some(self.ride) {
            ctx.manager.set_current_construction_ride(None);
        }
        ctx.manager.host.track_design_remove_provisional();
        debug!(ride = %self.ride, "construction finished");
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn on_refresh(&mut self, _frame: &mut WindowFrame, refresh: Refresh) -> bool {
        let counter = match refresh {
            Refresh::CurrentTrack => &mut self.track_refreshes,
            Refresh::Pieces => &mut self.piece_refreshes,
            Refresh::ActiveElements => &mut self.element_refreshes,
            Refresh::Contents => &mut self.maze_refreshes,
            _ => return false,
        };
        *counter += 1;
        true
    }
}

/// Open the construction window of `class` for the current construction
/// ride, or ride 0 when nothing is being built.
pub fn open(mgr: &mut WindowManager, class: WindowClass) -> WindowHandle {
    let ride = mgr.current_construction_ride().unwrap_or(RideId(0));
    focus_or_create(mgr, class, |mgr| {
        let frame = stock_frame(mgr, class).with_number(u32::from(ride.0));
        mgr.create(frame, Box::new(RideConstructionWindow::new(ride)))
    })
}
