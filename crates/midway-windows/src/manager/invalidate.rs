//! Marking windows and widgets for redraw.

use crate::class::{WindowClass, WindowNumber};
use crate::registry::{Entry, WindowHandle};
use crate::widget::WidgetIndex;

use super::WindowManager;

impl WindowManager {
    pub fn invalidate(&mut self, handle: WindowHandle) {
        if let Some(rect) = self.frame(handle).map(|f| f.rect()) {
            self.effects.invalidate(rect);
        }
    }

    pub fn invalidate_by_class(&mut self, class: WindowClass) {
        self.invalidate_where(|e| e.frame.class == class);
    }

    pub fn invalidate_by_number(&mut self, class: WindowClass, number: WindowNumber) {
        self.invalidate_where(|e| e.frame.class == class && e.frame.number == number);
    }

    pub fn invalidate_all(&mut self) {
        self.invalidate_where(|_| true);
    }

    fn invalidate_where(&mut self, predicate: impl Fn(&Entry) -> bool) {
        let rects: Vec<_> = self
            .registry
            .iter_live()
            .filter(|e| predicate(e))
            .map(|e| e.frame.rect())
            .collect();
        for rect in rects {
            self.effects.invalidate(rect);
        }
    }

    /// Mark one widget dirty. Unpositioned widgets are skipped.
    pub fn invalidate_widget(&mut self, handle: WindowHandle, widget: WidgetIndex) {
        let Some(frame) = self.frame(handle) else {
            return;
        };
        let Some(w) = frame.widgets.get(widget) else {
            return;
        };
        if !w.is_positioned() {
            return;
        }
        let rect = w.screen_rect(frame.pos);
        self.effects.invalidate(rect);
    }

    pub fn invalidate_widget_by_class(&mut self, class: WindowClass, widget: WidgetIndex) {
        let handles: Vec<_> = self
            .registry
            .iter_live()
            .filter(|e| e.frame.class == class)
            .map(|e| e.handle)
            .collect();
        for handle in handles {
            self.invalidate_widget(handle, widget);
        }
    }

    pub fn invalidate_widget_by_number(
        &mut self,
        class: WindowClass,
        number: WindowNumber,
        widget: WidgetIndex,
    ) {
        if let Some(handle) = self.find_by_number(class, number) {
            self.invalidate_widget(handle, widget);
        }
    }
}
