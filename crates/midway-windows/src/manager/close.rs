//! Closing windows.
//!
//! A closed window is marked `DEAD` and stays in the registry until the
//! next `compact`. Bulk closes collect their targets before closing any,
//! so windows opened by a close hook are never swept up by the same call.

use tracing::{debug, warn};

use crate::class::{WindowClass, WindowNumber};
use crate::flags::{CloseFlags, WindowFlags};
use crate::frame::WindowFrame;
use crate::registry::WindowHandle;
use crate::scene::{EditorStep, Scene};

use super::WindowManager;

/// Classes closed together when construction focus moves.
const CONSTRUCTION_CLASSES: [WindowClass; 4] = [
    WindowClass::RideConstruction,
    WindowClass::Footpath,
    WindowClass::TrackDesignList,
    WindowClass::TrackDesignPlace,
];

impl WindowManager {
    /// Close one window. Returns false if it was already closed or
    /// refused to close.
    ///
    /// Called from inside one of the window's own hooks, the close is only
    /// requested: `true` is returned at once and `can_close` is consulted
    /// when the hook returns, so the window may still refuse then.
    pub fn close(&mut self, handle: WindowHandle) -> bool {
        let Some(entry) = self.registry.get_mut(handle) else {
            return false;
        };
        if !entry.is_live() || entry.closing {
            return false;
        }
        let Some(behaviour) = entry.behaviour.as_deref() else {
            // One of this window's hooks is running; finish when it returns.
            entry.pending_close = true;
            return true;
        };
        if !behaviour.can_close() {
            debug!(%handle, class = %entry.frame.class, "window refused to close");
            return false;
        }
        entry.closing = true;

        self.with_window(handle, |w, ctx| w.on_close(ctx));

        let Some(entry) = self.registry.get_mut(handle) else {
            return true;
        };
        entry.frame.viewport = None;
        let rect = entry.frame.rect();
        entry.frame.flags.insert(WindowFlags::DEAD);
        entry.closing = false;
        debug!(%handle, class = %entry.frame.class, number = entry.frame.number, "window closed");
        self.effects.invalidate(rect);
        true
    }

    /// Close every live window matching `predicate`. Returns how many
    /// closed.
    pub fn close_by_condition(
        &mut self,
        predicate: impl Fn(&WindowFrame) -> bool,
        flags: CloseFlags,
    ) -> usize {
        let matches = self.registry.iter_live().filter(|e| predicate(&e.frame));
        let targets: Vec<WindowHandle> = match (
            flags.contains(CloseFlags::ITERATE_REVERSE),
            flags.contains(CloseFlags::CLOSE_SINGLE),
        ) {
            (false, false) => matches.map(|e| e.handle).collect(),
            (false, true) => matches.map(|e| e.handle).take(1).collect(),
            (true, false) => matches.rev().map(|e| e.handle).collect(),
            (true, true) => matches.rev().map(|e| e.handle).take(1).collect(),
        };

        targets.into_iter().filter(|&h| self.close(h)).count()
    }

    pub fn close_by_class(&mut self, class: WindowClass) -> usize {
        self.close_by_condition(|f| f.class == class, CloseFlags::empty())
    }

    pub fn close_by_number(&mut self, class: WindowClass, number: WindowNumber) -> usize {
        self.close_by_condition(
            |f| f.class == class && f.number == number,
            CloseFlags::empty(),
        )
    }

    /// Close the front-most non-sticky window. In the scenario editor this
    /// only works on the landscape step.
    pub fn close_top(&mut self) -> usize {
        self.close_by_class(WindowClass::Dropdown);

        if let Scene::ScenarioEditor { step } = self.scene {
            if step != EditorStep::LandscapeEditor {
                return 0;
            }
        }

        self.close_by_condition(
            |f| !f.is_sticky(),
            CloseFlags::CLOSE_SINGLE | CloseFlags::ITERATE_REVERSE,
        )
    }

    /// Close every non-sticky window.
    pub fn close_all(&mut self) -> usize {
        self.close_by_class(WindowClass::Dropdown);
        self.close_by_condition(|f| !f.is_sticky(), CloseFlags::empty())
    }

    pub fn close_all_except_class(&mut self, class: WindowClass) -> usize {
        self.close_by_class(WindowClass::Dropdown);
        self.close_by_condition(|f| f.class != class && !f.is_sticky(), CloseFlags::empty())
    }

    /// Close every window that has none of `flags`.
    pub fn close_all_except_flags(&mut self, flags: WindowFlags) -> usize {
        self.close_by_condition(|f| !f.flags.intersects(flags), CloseFlags::empty())
    }

    pub fn close_all_except_number_and_class(
        &mut self,
        number: WindowNumber,
        class: WindowClass,
    ) -> usize {
        self.close_by_class(WindowClass::Dropdown);
        self.close_by_condition(
            |f| !(f.number == number && f.class == class) && !f.is_sticky(),
            CloseFlags::empty(),
        )
    }

    pub fn close_construction_windows(&mut self) -> usize {
        self.close_by_condition(
            |f| CONSTRUCTION_CLASSES.contains(&f.class),
            CloseFlags::empty(),
        )
    }

    /// Close the oldest closable windows until at most `cap` remain
    /// beyond the reserved ones, sparing `avoid`.
    pub fn close_surplus(&mut self, cap: u32, avoid: Option<WindowClass>) -> usize {
        let live = self.registry.live_count() as i64;
        let excess = live - i64::from(self.settings.reserved_count) - i64::from(cap);
        let mut closed = 0;
        for _ in 0..excess.max(0) {
            let Some(victim) = self.first_closable(avoid) else {
                warn!(remaining = excess - closed as i64, "no closable window left for surplus");
                break;
            };
            if self.close(victim) {
                closed += 1;
            }
        }
        closed
    }

    /// Oldest live window that is neither sticky nor `NO_AUTO_CLOSE`, is
    /// not already closing, and would accept a close now.
    pub(crate) fn first_closable(&self, avoid: Option<WindowClass>) -> Option<WindowHandle> {
        self.registry
            .iter_live()
            .find(|e| {
                !e.frame.flags.intersects(WindowFlags::STICKY | WindowFlags::NO_AUTO_CLOSE)
                    && Some(e.frame.class) != avoid
                    && !e.closing
                    && !e.pending_close
                    && e.behaviour().is_some_and(|b| b.can_close())
            })
            .map(|e| e.handle)
    }
}
