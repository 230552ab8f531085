//! The ordered window list, back-most first.
//!
//! Entries are soft-deleted by setting [`WindowFlags::DEAD`] and only
//! removed by [`WindowRegistry::compact`], so indices and handles stay
//! valid while close hooks run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::class::{WindowClass, WindowNumber};
use crate::flags::WindowFlags;
use crate::frame::WindowFrame;
use crate::window::Window;

/// Stable identity of a registry entry. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Entry {
    pub handle: WindowHandle,
    pub frame: WindowFrame,
    /// `None` only while one of the window's own hooks is running.
    pub(crate) behaviour: Option<Box<dyn Window>>,
    /// Set between `can_close` passing and the window being marked dead.
    pub(crate) closing: bool,
    /// Close requested while a hook of this window was running.
    pub(crate) pending_close: bool,
}

impl Entry {
    pub fn is_live(&self) -> bool {
        !self.frame.is_dead()
    }

    pub fn behaviour(&self) -> Option<&dyn Window> {
        self.behaviour.as_deref()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("handle", &self.handle)
            .field("class", &self.frame.class)
            .field("number", &self.frame.number)
            .field("flags", &self.frame.flags)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a new entry at `index` and return its handle.
    pub(crate) fn insert(
        &mut self,
        index: usize,
        frame: WindowFrame,
        behaviour: Box<dyn Window>,
    ) -> WindowHandle {
        let handle = WindowHandle(self.next_id.max(1));
        self.next_id = handle.0 + 1;
        let index = index.min(self.entries.len());
        self.entries.insert(
            index,
            Entry {
                handle,
                frame,
                behaviour: Some(behaviour),
                closing: false,
                pending_close: false,
            },
        );
        handle
    }

    pub fn position(&self, handle: WindowHandle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    pub fn get(&self, handle: WindowHandle) -> Option<&Entry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    pub(crate) fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.handle == handle)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn move_entry(&mut self, from: usize, to: usize) {
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
    }

    pub fn iter_live(&self) -> impl DoubleEndedIterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_live())
    }

    /// Live handles in z-order, back-most first.
    pub fn live_handles(&self) -> Vec<WindowHandle> {
        self.iter_live().map(|e| e.handle).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.iter_live().count()
    }

    pub fn find(&self, class: WindowClass) -> Option<WindowHandle> {
        self.iter_live()
            .find(|e| e.frame.class == class)
            .map(|e| e.handle)
    }

    pub fn find_number(&self, class: WindowClass, number: WindowNumber) -> Option<WindowHandle> {
        self.iter_live()
            .find(|e| e.frame.class == class && e.frame.number == number)
            .map(|e| e.handle)
    }

    /// Index a new window with `flags` goes to so that stick-to-back
    /// windows stay a prefix and stick-to-front windows stay a suffix.
    pub fn insertion_index(&self, flags: WindowFlags) -> usize {
        if flags.contains(WindowFlags::STICK_TO_BACK) {
            self.entries
                .iter()
                .rposition(|e| e.is_live() && e.frame.flags.contains(WindowFlags::STICK_TO_BACK))
                .map_or(0, |i| i + 1)
        } else if flags.contains(WindowFlags::STICK_TO_FRONT) {
            self.entries.len()
        } else {
            self.entries
                .iter()
                .position(|e| e.is_live() && e.frame.flags.contains(WindowFlags::STICK_TO_FRONT))
                .unwrap_or(self.entries.len())
        }
    }

    /// Whether live windows are ordered back-stickies, normal, front-stickies.
    pub fn is_ordered(&self) -> bool {
        let rank = |e: &Entry| {
            if e.frame.flags.contains(WindowFlags::STICK_TO_BACK) {
                0
            } else if e.frame.flags.contains(WindowFlags::STICK_TO_FRONT) {
                2
            } else {
                1
            }
        };
        let ranks: Vec<u8> = self.iter_live().map(rank).collect();
        ranks.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Physically drop dead entries. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.is_live() || e.behaviour.is_none());
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midway_common::ScreenSize;

    struct Blank;
    impl Window for Blank {}

    fn frame(class: WindowClass, flags: WindowFlags) -> WindowFrame {
        WindowFrame::new(class, ScreenSize::new(10, 10)).with_flags(flags)
    }

    fn push(reg: &mut WindowRegistry, class: WindowClass, flags: WindowFlags) -> WindowHandle {
        let index = reg.insertion_index(flags);
        reg.insert(index, frame(class, flags), Box::new(Blank))
    }

    #[test]
    fn handles_are_never_reused() {
        let mut reg = WindowRegistry::new();
        let a = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        reg.get_mut(a).unwrap().frame.flags.insert(WindowFlags::DEAD);
        assert_eq!(reg.compact(), 1);
        let b = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        assert_ne!(a, b);
        assert!(reg.get(a).is_none());
    }

    #[test]
    fn insertion_keeps_sticky_bands() {
        let mut reg = WindowRegistry::new();
        let top = push(&mut reg, WindowClass::TopToolbar, WindowFlags::STICK_TO_FRONT);
        let main = push(&mut reg, WindowClass::MainWindow, WindowFlags::STICK_TO_BACK);
        let map = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        let bg = push(&mut reg, WindowClass::Viewport, WindowFlags::STICK_TO_BACK);
        let order: Vec<_> = reg.entries().iter().map(|e| e.handle).collect();
        assert_eq!(order, vec![main, bg, map, top]);
        assert!(reg.is_ordered());
    }

    #[test]
    fn dead_entries_do_not_anchor_insertion() {
        let mut reg = WindowRegistry::new();
        let front = push(&mut reg, WindowClass::Tooltip, WindowFlags::STICK_TO_FRONT);
        reg.get_mut(front).unwrap().frame.flags.insert(WindowFlags::DEAD);
        assert_eq!(reg.insertion_index(WindowFlags::empty()), 1);
    }

    #[test]
    fn find_skips_dead() {
        let mut reg = WindowRegistry::new();
        let a = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        let b = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        assert_eq!(reg.find(WindowClass::Map), Some(a));
        reg.get_mut(a).unwrap().frame.flags.insert(WindowFlags::DEAD);
        assert_eq!(reg.find(WindowClass::Map), Some(b));
        assert_eq!(reg.live_count(), 1);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn move_entry_reorders() {
        let mut reg = WindowRegistry::new();
        let a = push(&mut reg, WindowClass::Map, WindowFlags::empty());
        let b = push(&mut reg, WindowClass::Finances, WindowFlags::empty());
        reg.move_entry(0, 1);
        assert_eq!(reg.position(a), Some(1));
        assert_eq!(reg.position(b), Some(0));
    }
}
