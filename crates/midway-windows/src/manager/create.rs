//! Window creation: sizing, auto placement, eviction and insertion.

use tracing::debug;

use crate::effects::SoundId;
use crate::flags::WindowFlags;
use crate::frame::WindowFrame;
use crate::placement;
use crate::registry::WindowHandle;
use crate::window::Window;

use super::WindowManager;

impl WindowManager {
    /// Insert a new window and run its `on_open` hook.
    ///
    /// `frame.pos` is used as given unless `AUTO_POSITION` is set. When the
    /// registry is at the window limit the oldest closable window is closed
    /// first, so creation never fails.
    pub fn create(&mut self, mut frame: WindowFrame, behaviour: Box<dyn Window>) -> WindowHandle {
        frame.size.height += behaviour.title_bar_height_delta(self.settings.enlarged_ui);

        if frame.flags.contains(WindowFlags::AUTO_POSITION) {
            let area = self.placement_area();
            let pos = if frame.flags.contains(WindowFlags::CENTRE_SCREEN) {
                placement::centre_position(&area, frame.size)
            } else {
                placement::auto_position(&area, &self.placed_windows(), frame.size)
            };
            frame.pos = placement::clamp_to_screen(&area, pos, frame.size);
        }

        self.evict_for_new_window();

        let index = self.registry.insertion_index(frame.flags);
        if !frame.is_sticky() {
            frame.flags |= WindowFlags::WHITE_BORDER_MASK;
            self.effects
                .play(SoundId::WindowOpen, frame.pos.x + frame.size.width / 2);
        }

        let rect = frame.rect();
        let class = frame.class;
        let number = frame.number;
        let handle = self.registry.insert(index, frame, behaviour);
        debug!(%handle, %class, number, index, "window created");

        self.effects.invalidate(rect);
        self.with_window(handle, |w, ctx| w.on_open(ctx));
        handle
    }

    /// Close the first closable window if the registry is full.
    fn evict_for_new_window(&mut self) {
        let live = self.registry.live_count() as u64;
        let cap = u64::from(self.settings.window_limit) + u64::from(self.settings.reserved_count);
        if live < cap {
            return;
        }
        match self.first_closable(None) {
            Some(victim) => {
                debug!(%victim, live, cap, "evicting window to stay under limit");
                self.close(victim);
            }
            None => debug!(live, cap, "window limit reached but nothing can be evicted"),
        }
    }
}
