//! Per-frame update and draw passes, compaction and click routing.

use midway_common::{ScreenCoords, ScreenRect};
use tracing::trace;

use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;

use super::WindowManager;

impl WindowManager {
    /// Run `on_update` on every live window, back to front, and step
    /// white-border flashes.
    pub fn update_all(&mut self) {
        for handle in self.registry.live_handles() {
            if !self.is_live(handle) {
                continue;
            }
            let flash_ended = self
                .frame_mut(handle)
                .is_some_and(|f| f.flags.step_white_border());
            if flash_ended {
                self.invalidate(handle);
            }
            self.with_window(handle, |w, ctx| w.on_update(ctx));
        }
    }

    /// Prepare and draw every live window intersecting `clip`, back to
    /// front. Returns how many were drawn.
    pub fn draw_all(&mut self, clip: ScreenRect) -> usize {
        let mut drawn = 0;
        for handle in self.registry.live_handles() {
            let visible = self.frame(handle).is_some_and(|f| f.rect().intersects(&clip));
            if !visible {
                continue;
            }
            let ran = self.with_frame(handle, |w, frame| {
                w.on_prepare_draw(frame);
                w.on_draw(frame, clip);
            });
            if ran.is_some() {
                drawn += 1;
            }
        }
        trace!(drawn, "frame drawn");
        drawn
    }

    /// Drop closed windows from the registry. Called once per frame after
    /// update and draw.
    pub fn compact(&mut self) -> usize {
        let removed = self.registry.compact();
        if removed > 0 {
            trace!(removed, "registry compacted");
        }
        removed
    }

    /// Route a click: raise the window under `pos` and deliver mouse down
    /// and up to the widget hit, if any.
    pub fn click(&mut self, pos: ScreenCoords) -> Option<(WindowHandle, Option<WidgetIndex>)> {
        let handle = self.find_from_point(pos)?;
        self.bring_to_front(handle);
        let widget = self.find_widget_from_point(handle, pos);
        if let Some(index) = widget {
            self.mouse_down(handle, index);
            self.mouse_up(handle, index);
        }
        Some((handle, widget))
    }
}
