//! Finding windows by class, number and screen position.

use midway_common::ScreenCoords;

use crate::class::{WindowClass, WindowNumber};
use crate::flags::WindowFlags;
use crate::registry::WindowHandle;
use crate::widget::{WidgetIndex, WidgetType};

use super::WindowManager;

impl WindowManager {
    /// Back-most live window of `class`.
    pub fn find_by_class(&self, class: WindowClass) -> Option<WindowHandle> {
        self.registry.find(class)
    }

    pub fn find_by_number(&self, class: WindowClass, number: WindowNumber) -> Option<WindowHandle> {
        self.registry.find_number(class, number)
    }

    /// The main viewport window.
    pub fn main_window(&self) -> Option<WindowHandle> {
        self.find_by_class(WindowClass::MainWindow)
    }

    /// Front-most window under `pos`. Windows without a background only
    /// count where one of their widgets is hit.
    pub fn find_from_point(&mut self, pos: ScreenCoords) -> Option<WindowHandle> {
        let candidates: Vec<(WindowHandle, bool)> = self
            .registry
            .iter_live()
            .rev()
            .filter(|e| e.frame.rect().contains(pos))
            .map(|e| (e.handle, e.frame.flags.contains(WindowFlags::NO_BACKGROUND)))
            .collect();

        candidates.into_iter().find_map(|(handle, no_background)| {
            if no_background && self.find_widget_from_point(handle, pos).is_none() {
                None
            } else {
                Some(handle)
            }
        })
    }

    /// Top-most visible widget of `handle` under `pos`. A hit on a
    /// dropdown menu reports the button next to it.
    pub fn find_widget_from_point(
        &mut self,
        handle: WindowHandle,
        pos: ScreenCoords,
    ) -> Option<WidgetIndex> {
        self.with_frame(handle, |w, frame| w.on_prepare_draw(frame));

        let frame = self.frame(handle)?;
        let local = pos - frame.pos;
        let (index, widget) = frame
            .widgets
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_interactive() && w.contains(local))
            .last()?;

        if widget.kind == WidgetType::DropdownMenu {
            Some(index + 1)
        } else {
            Some(index)
        }
    }
}
