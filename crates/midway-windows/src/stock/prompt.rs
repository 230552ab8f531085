//! Confirmation prompts.

use midway_common::RideId;
use tracing::warn;

use crate::class::WindowClass;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::{focus_or_create, is_close_box, stock_frame};

pub const WIDX_SAVE: WidgetIndex = 3;
pub const WIDX_DONT_SAVE: WidgetIndex = 4;
pub const WIDX_CANCEL: WidgetIndex = 5;

pub const WIDX_YES: WidgetIndex = 3;
pub const WIDX_NO: WidgetIndex = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    Save,
    DontSave,
    Cancel,
}

/// Asks whether to save before quitting. Refuses to close until answered.
#[derive(Debug, Default)]
pub struct SavePromptWindow {
    pub answer: Option<PromptAnswer>,
}

impl Window for SavePromptWindow {
    fn can_close(&self) -> bool {
        self.answer.is_some()
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        let answer = match widget {
            WIDX_SAVE => PromptAnswer::Save,
            WIDX_DONT_SAVE => PromptAnswer::DontSave,
            WIDX_CANCEL => PromptAnswer::Cancel,
            _ if is_close_box(ctx, widget) => PromptAnswer::Cancel,
            _ => return,
        };
        self.answer = Some(answer);
        ctx.close_self();
    }
}

pub fn open_save_prompt(mgr: &mut WindowManager) -> WindowHandle {
    focus_or_create(mgr, WindowClass::SavePrompt, |mgr| {
        let frame = stock_frame(mgr, WindowClass::SavePrompt);
        mgr.create(frame, Box::new(SavePromptWindow::default()))
    })
}

/// Yes/no prompt about one ride (demolish, refurbish).
#[derive(Debug)]
pub struct RidePromptWindow {
    pub ride: RideId,
    pub confirmed: bool,
}

impl Window for RidePromptWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        match widget {
            WIDX_YES => {
                self.confirmed = true;
                ctx.close_self();
            }
            WIDX_NO => {
                ctx.close_self();
            }
            _ if is_close_box(ctx, widget) => {
                ctx.close_self();
            }
            _ => {}
        }
    }
}

/// Replace any open prompt of `class` with one about `ride`.
pub fn open_ride_prompt(mgr: &mut WindowManager, class: WindowClass, ride: u32) -> Option<WindowHandle> {
    let Ok(id) = u16::try_from(ride) else {
        warn!(%class, ride, "ride id out of range");
        return None;
    };
    mgr.close_by_class(class);
    let frame = stock_frame(mgr, class).with_number(ride);
    Some(mgr.create(
        frame,
        Box::new(RidePromptWindow {
            ride: RideId(id),
            confirmed: false,
        }),
    ))
}
