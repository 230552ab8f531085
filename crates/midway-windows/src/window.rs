//! The contract every window implements.
//!
//! The manager owns a window's [`WindowFrame`]; the boxed [`Window`] holds
//! only its own state. Hooks that may act on other windows get a
//! [`WindowContext`] with the manager; hooks that only touch their own
//! frame get the frame directly.

use std::any::Any;

use midway_common::{EntityId, ScreenCoords, ScreenRect};

use crate::frame::WindowFrame;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;

/// Extra title bar height added under the enlarged UI setting.
pub const ENLARGED_TITLE_BAR_DELTA: i32 = 12;

/// Downcasting support for boxed windows.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// What a broadcast asks a window to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Rebuild from scratch (map reset).
    Reset,
    /// Re-read list contents.
    Contents,
    /// Redraw the track piece under construction.
    CurrentTrack,
    Pieces,
    ActiveElements,
    SceneryInit,
    SceneryDefaults,
    Clipboard,
    Vehicle(EntityId),
    PaintReset,
    Page(u32),
    Buttons,
}

/// Hook access to the manager on behalf of one window.
pub struct WindowContext<'a> {
    pub handle: WindowHandle,
    pub manager: &'a mut WindowManager,
}

impl WindowContext<'_> {
    pub fn frame(&self) -> Option<&WindowFrame> {
        self.manager.frame(self.handle)
    }

    pub fn frame_mut(&mut self) -> Option<&mut WindowFrame> {
        self.manager.frame_mut(self.handle)
    }

    /// Close this window once the running hook returns. `true` means the
    /// close was requested; the window can still refuse it then.
    pub fn close_self(&mut self) -> bool {
        self.manager.close(self.handle)
    }

    pub fn invalidate_self(&mut self) {
        self.manager.invalidate(self.handle);
    }
}

/// Behaviour of a concrete window. Every hook has a no-op default.
pub trait Window: AsAny {
    fn on_open(&mut self, _ctx: &mut WindowContext<'_>) {}

    fn on_close(&mut self, _ctx: &mut WindowContext<'_>) {}

    /// Return false to refuse closing, e.g. while awaiting a choice.
    fn can_close(&self) -> bool {
        true
    }

    fn on_prepare_draw(&mut self, _frame: &mut WindowFrame) {}

    fn on_update(&mut self, _ctx: &mut WindowContext<'_>) {}

    fn on_draw(&mut self, _frame: &WindowFrame, _clip: ScreenRect) {}

    fn on_mouse_up(&mut self, _ctx: &mut WindowContext<'_>, _widget: WidgetIndex) {}

    fn on_mouse_down(&mut self, _ctx: &mut WindowContext<'_>, _widget: WidgetIndex) {}

    fn on_dropdown(&mut self, _ctx: &mut WindowContext<'_>, _widget: WidgetIndex, _item: i32) {}

    fn on_text_input(&mut self, _ctx: &mut WindowContext<'_>, _widget: WidgetIndex, _text: &str) {}

    fn on_scroll_mouse_down(
        &mut self,
        _ctx: &mut WindowContext<'_>,
        _scroll: usize,
        _pos: ScreenCoords,
    ) {
    }

    fn on_scroll_mouse_drag(
        &mut self,
        _ctx: &mut WindowContext<'_>,
        _scroll: usize,
        _pos: ScreenCoords,
    ) {
    }

    fn on_scroll_mouse_over(
        &mut self,
        _ctx: &mut WindowContext<'_>,
        _scroll: usize,
        _pos: ScreenCoords,
    ) {
    }

    /// React to a broadcast. Return true to have the window invalidated.
    fn on_refresh(&mut self, _frame: &mut WindowFrame, _refresh: Refresh) -> bool {
        false
    }

    /// Height added to the requested size at creation.
    fn title_bar_height_delta(&self, enlarged_ui: bool) -> i32 {
        if enlarged_ui {
            ENLARGED_TITLE_BAR_DELTA
        } else {
            0
        }
    }
}
