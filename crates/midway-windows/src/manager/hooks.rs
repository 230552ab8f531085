//! Calling into window behaviours.
//!
//! A behaviour is taken out of its registry slot for the duration of a
//! hook that receives the manager, and put back afterwards. A close
//! requested while the slot is empty is deferred until the put-back.

use midway_common::ScreenCoords;

use crate::frame::WindowFrame;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::WindowManager;

impl WindowManager {
    pub(crate) fn with_window<R>(
        &mut self,
        handle: WindowHandle,
        f: impl FnOnce(&mut dyn Window, &mut WindowContext<'_>) -> R,
    ) -> Option<R> {
        let mut behaviour = self.registry.get_mut(handle)?.behaviour.take()?;

        let result = {
            let mut ctx = WindowContext {
                handle,
                manager: &mut *self,
            };
            f(behaviour.as_mut(), &mut ctx)
        };

        let pending = match self.registry.get_mut(handle) {
            Some(entry) => {
                entry.behaviour = Some(behaviour);
                std::mem::take(&mut entry.pending_close)
            }
            None => false,
        };
        if pending {
            self.close(handle);
        }
        Some(result)
    }

    /// Call a hook that only needs the window's own frame.
    pub(crate) fn with_frame<R>(
        &mut self,
        handle: WindowHandle,
        f: impl FnOnce(&mut dyn Window, &mut WindowFrame) -> R,
    ) -> Option<R> {
        let entry = self.registry.get_mut(handle)?;
        let behaviour = entry.behaviour.as_deref_mut()?;
        Some(f(behaviour, &mut entry.frame))
    }

    fn live_hook(
        &mut self,
        handle: WindowHandle,
        f: impl FnOnce(&mut dyn Window, &mut WindowContext<'_>),
    ) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        self.with_window(handle, f).is_some()
    }

    pub fn mouse_up(&mut self, handle: WindowHandle, widget: WidgetIndex) -> bool {
        self.live_hook(handle, |w, ctx| w.on_mouse_up(ctx, widget))
    }

    pub fn mouse_down(&mut self, handle: WindowHandle, widget: WidgetIndex) -> bool {
        self.live_hook(handle, |w, ctx| w.on_mouse_down(ctx, widget))
    }

    pub fn dropdown(&mut self, handle: WindowHandle, widget: WidgetIndex, item: i32) -> bool {
        self.live_hook(handle, |w, ctx| w.on_dropdown(ctx, widget, item))
    }

    pub fn text_input(&mut self, handle: WindowHandle, widget: WidgetIndex, text: &str) -> bool {
        self.live_hook(handle, |w, ctx| w.on_text_input(ctx, widget, text))
    }

    pub fn scroll_mouse_down(&mut self, handle: WindowHandle, scroll: usize, pos: ScreenCoords) -> bool {
        self.live_hook(handle, |w, ctx| w.on_scroll_mouse_down(ctx, scroll, pos))
    }

    pub fn scroll_mouse_drag(&mut self, handle: WindowHandle, scroll: usize, pos: ScreenCoords) -> bool {
        self.live_hook(handle, |w, ctx| w.on_scroll_mouse_drag(ctx, scroll, pos))
    }

    pub fn scroll_mouse_over(&mut self, handle: WindowHandle, scroll: usize, pos: ScreenCoords) -> bool {
        self.live_hook(handle, |w, ctx| w.on_scroll_mouse_over(ctx, scroll, pos))
    }
}
