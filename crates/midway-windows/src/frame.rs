//! Manager-owned window data: identity, geometry, flags and widgets.

use midway_common::{ScreenCoords, ScreenRect, ScreenSize};
use serde::{Deserialize, Serialize};

use crate::class::{WindowClass, WindowNumber};
use crate::flags::WindowFlags;
use crate::widget::Widget;

/// A viewport attached to a window, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub pos: ScreenCoords,
    pub size: ScreenSize,
}

impl Viewport {
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::from_pos_size(self.pos, self.size)
    }
}

/// Scroll state for one scroll widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollArea {
    pub offset: ScreenCoords,
    pub content: ScreenSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub class: WindowClass,
    pub number: WindowNumber,
    pub pos: ScreenCoords,
    pub size: ScreenSize,
    pub min_size: ScreenSize,
    pub max_size: ScreenSize,
    pub flags: WindowFlags,
    pub widgets: Vec<Widget>,
    pub viewport: Option<Viewport>,
    pub page: u32,
    pub scrolls: Vec<ScrollArea>,
}

impl WindowFrame {
    pub fn new(class: WindowClass, size: ScreenSize) -> Self {
        Self {
            class,
            number: 0,
            pos: ScreenCoords::default(),
            size,
            min_size: size,
            max_size: size,
            flags: WindowFlags::empty(),
            widgets: Vec::new(),
            viewport: None,
            page: 0,
            scrolls: Vec::new(),
        }
    }

    pub fn with_number(mut self, number: WindowNumber) -> Self {
        self.number = number;
        self
    }

    pub fn at(mut self, pos: ScreenCoords) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_widgets(mut self, widgets: Vec<Widget>) -> Self {
        self.widgets = widgets;
        self
    }

    pub fn with_size_limits(mut self, min: ScreenSize, max: ScreenSize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn rect(&self) -> ScreenRect {
        ScreenRect::from_pos_size(self.pos, self.size)
    }

    pub fn is_dead(&self) -> bool {
        self.flags.contains(WindowFlags::DEAD)
    }

    pub fn is_sticky(&self) -> bool {
        self.flags.is_sticky()
    }

    /// Move the window and any attached viewport by `delta`.
    pub fn translate(&mut self, delta: ScreenCoords) {
        self.pos = self.pos + delta;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.pos = viewport.pos + delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let frame = WindowFrame::new(WindowClass::Ride, ScreenSize::new(316, 207))
            .with_number(4)
            .at(ScreenCoords::new(10, 40))
            .with_flags(WindowFlags::RESIZABLE);
        assert_eq!(frame.number, 4);
        assert_eq!(frame.rect(), ScreenRect::new(10, 40, 326, 247));
        assert!(frame.flags.contains(WindowFlags::RESIZABLE));
        assert!(!frame.is_dead());
    }

    #[test]
    fn translate_moves_viewport() {
        let mut frame = WindowFrame::new(WindowClass::Viewport, ScreenSize::new(100, 100))
            .with_viewport(Viewport {
                pos: ScreenCoords::new(5, 20),
                size: ScreenSize::new(90, 70),
            });
        frame.translate(ScreenCoords::new(3, -2));
        assert_eq!(frame.pos, ScreenCoords::new(3, -2));
        assert_eq!(frame.viewport.unwrap().pos, ScreenCoords::new(8, 18));
    }
}
