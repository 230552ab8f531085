//! Z-order changes and moving windows out of each other's way.

use midway_common::{ScreenCoords, ScreenRect, ScreenSize};
use tracing::{debug, info};

use crate::class::{WindowClass, WindowNumber};
use crate::flags::WindowFlags;
use crate::placement;
use crate::registry::WindowHandle;

use super::WindowManager;

/// A window whose right edge ends left of this is nudged back on screen.
const MIN_VISIBLE_RIGHT: i32 = 20;

impl WindowManager {
    /// Raise a window to just behind the front-pinned band. Sticky
    /// windows do not move.
    pub fn bring_to_front(&mut self, handle: WindowHandle) -> bool {
        let Some(entry) = self.registry.get(handle) else {
            return false;
        };
        if !entry.is_live() {
            return false;
        }
        if entry.frame.is_sticky() {
            return true;
        }

        let target = self
            .registry
            .entries()
            .iter()
            .rposition(|e| e.is_live() && !e.frame.flags.contains(WindowFlags::STICK_TO_FRONT));
        if let (Some(from), Some(to)) = (self.registry.position(handle), target) {
            if from != to {
                self.registry.move_entry(from, to);
            }
        }
        self.invalidate(handle);

        if let Some(frame) = self.frame_mut(handle) {
            let right = frame.pos.x + frame.size.width;
            if right < MIN_VISIBLE_RIGHT {
                let shift = MIN_VISIBLE_RIGHT - frame.pos.x;
                frame.translate(ScreenCoords::new(shift, 0));
                self.invalidate(handle);
            }
        }
        debug!(%handle, "brought to front");
        true
    }

    /// Flag and raise the first window of `class`.
    pub fn bring_to_front_by_class_with_flags(
        &mut self,
        class: WindowClass,
        flags: WindowFlags,
    ) -> Option<WindowHandle> {
        let handle = self.find_by_class(class)?;
        if let Some(frame) = self.frame_mut(handle) {
            frame.flags |= flags;
        }
        self.invalidate(handle);
        self.bring_to_front(handle);
        Some(handle)
    }

    /// Raise the first window of `class` with a white border flash.
    pub fn bring_to_front_by_class(&mut self, class: WindowClass) -> Option<WindowHandle> {
        self.bring_to_front_by_class_with_flags(class, WindowFlags::WHITE_BORDER_MASK)
    }

    pub fn bring_to_front_by_number(
        &mut self,
        class: WindowClass,
        number: WindowNumber,
    ) -> Option<WindowHandle> {
        let handle = self.find_by_number(class, number)?;
        if let Some(frame) = self.frame_mut(handle) {
            frame.flags |= WindowFlags::WHITE_BORDER_MASK;
        }
        self.invalidate(handle);
        self.bring_to_front(handle);
        Some(handle)
    }

    /// Move overlapping windows to the right of `handle`.
    pub fn push_others_right(&mut self, handle: WindowHandle) {
        let Some(anchor) = self.frame(handle).map(|f| f.rect()) else {
            return;
        };
        let screen_width = self.settings.screen.width;
        if anchor.right + 13 >= screen_width {
            return;
        }
        self.push_overlapping(handle, |other| {
            ScreenCoords::new(anchor.right - other.left + 3, 0)
        });
    }

    /// Move overlapping windows below `handle`.
    pub fn push_others_below(&mut self, handle: WindowHandle) {
        let Some(anchor) = self.frame(handle).map(|f| f.rect()) else {
            return;
        };
        let screen_height = self.settings.screen.height;
        if anchor.bottom + 80 >= screen_height {
            return;
        }
        self.push_overlapping(handle, |other| {
            ScreenCoords::new(0, anchor.bottom - other.top + 3)
        });
    }

    fn push_overlapping(
        &mut self,
        handle: WindowHandle,
        offset: impl Fn(&ScreenRect) -> ScreenCoords,
    ) {
        let Some(anchor) = self.frame(handle).map(|f| f.rect()) else {
            return;
        };
        let movers: Vec<WindowHandle> = self
            .registry
            .iter_live()
            .filter(|e| e.handle != handle && !e.frame.is_sticky())
            .filter(|e| e.frame.rect().intersects(&anchor))
            .map(|e| e.handle)
            .collect();

        for other in movers {
            self.invalidate(other);
            if let Some(frame) = self.frame_mut(other) {
                let delta = offset(&frame.rect());
                frame.translate(delta);
            }
            self.invalidate(other);
        }
    }

    /// Re-clamp non-sticky windows after the screen changes size.
    pub fn relocate_windows(&mut self, screen: ScreenSize) {
        self.settings.screen = screen;
        let area = self.placement_area();
        let mut moved = 0;
        for handle in self.registry.live_handles() {
            let Some(frame) = self.frame_mut(handle) else {
                continue;
            };
            if frame.is_sticky() {
                continue;
            }
            let clamped = placement::clamp_to_screen(&area, frame.pos, frame.size);
            if clamped != frame.pos {
                let delta = clamped - frame.pos;
                frame.translate(delta);
                moved += 1;
            }
        }
        if moved > 0 {
            self.invalidate_all();
        }
        info!(%screen, moved, "windows relocated");
    }
}
