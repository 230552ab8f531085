use bitflags::bitflags;

bitflags! {
    /// Per-window state and behaviour bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const STICK_TO_BACK = 1 << 0;
        const STICK_TO_FRONT = 1 << 1;
        const NO_SCROLLING = 1 << 2;
        const SCROLLING_TO_LOCATION = 1 << 3;
        const TRANSPARENT = 1 << 4;
        /// Click-through except on widgets.
        const NO_BACKGROUND = 1 << 5;
        const DEAD = 1 << 6;
        const RESIZABLE = 1 << 8;
        /// Never evicted to make room under the window limit.
        const NO_AUTO_CLOSE = 1 << 9;
        const WHITE_BORDER_ONE = 1 << 12;
        const WHITE_BORDER_MASK = (1 << 12) | (1 << 13);
        const NO_SNAPPING = 1 << 15;
        const AUTO_POSITION = 1 << 16;
        const CENTRE_SCREEN = 1 << 17;

        const STICKY = Self::STICK_TO_BACK.bits() | Self::STICK_TO_FRONT.bits();
    }
}

impl WindowFlags {
    pub fn is_sticky(self) -> bool {
        self.intersects(WindowFlags::STICKY)
    }

    /// Step the white-border flash down by one frame. Returns true when
    /// the flash just ended.
    pub fn step_white_border(&mut self) -> bool {
        if !self.intersects(WindowFlags::WHITE_BORDER_MASK) {
            return false;
        }
        let border = self.bits() & WindowFlags::WHITE_BORDER_MASK.bits();
        let stepped = border - WindowFlags::WHITE_BORDER_ONE.bits();
        *self = WindowFlags::from_bits_retain(
            (self.bits() & !WindowFlags::WHITE_BORDER_MASK.bits()) | stepped,
        );
        stepped == 0
    }
}

bitflags! {
    /// Bottom toolbar sections that need repainting, accumulated by
    /// broadcasts and taken by the toolbar each frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BottomToolbarDirty: u8 {
        const MONEY = 1 << 0;
        const DATE = 1 << 1;
        const PEEP_COUNT = 1 << 2;
        const CLIMATE = 1 << 3;
        const PARK_RATING = 1 << 4;
    }
}

bitflags! {
    /// Options for `close_by_condition`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CloseFlags: u8 {
        /// Stop after the first match.
        const CLOSE_SINGLE = 1 << 0;
        /// Scan front-most first.
        const ITERATE_REVERSE = 1 << 1;
    }
}
