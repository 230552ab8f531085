//! Progress reporting for long-running operations.

use crate::class::WindowClass;
use crate::intent::CloseCallback;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::{is_close_box, stock_frame};

#[derive(Debug)]
pub struct ProgressWindow {
    pub text: String,
    pub caption: Option<String>,
    pub current: u32,
    pub total: u32,
    /// Runs when the user dismisses the window.
    callback: Option<CloseCallback>,
}

impl ProgressWindow {
    pub fn new(text: String, callback: Option<CloseCallback>) -> Self {
        Self {
            text,
            caption: None,
            current: 0,
            total: 0,
            callback,
        }
    }

    /// Completed fraction in `[0, 1]`; zero until a total is known.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.current.min(self.total) as f32) / (self.total as f32)
        }
    }
}

impl Window for ProgressWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if !is_close_box(ctx, widget) {
            return;
        }
        if let Some(callback) = self.callback.take() {
            callback.call(ctx.manager, ());
        }
        ctx.close_self();
    }
}

/// Show progress for an operation. An open progress window is reused with
/// the new text and callback.
pub fn open(mgr: &mut WindowManager, text: String, callback: Option<CloseCallback>) -> WindowHandle {
    if let Some(handle) = mgr.find_by_class(WindowClass::ProgressWindow) {
        if let Some(window) = mgr.window_as_mut::<ProgressWindow>(handle) {
            window.text = text;
            window.callback = callback;
            window.current = 0;
            window.total = 0;
        }
        mgr.invalidate(handle);
        return handle;
    }
    let frame = stock_frame(mgr, WindowClass::ProgressWindow);
    mgr.create(frame, Box::new(ProgressWindow::new(text, callback)))
}

/// Update the open progress window, if any.
pub fn update(
    mgr: &mut WindowManager,
    current: u32,
    total: u32,
    caption: Option<String>,
) -> Option<WindowHandle> {
    let handle = mgr.find_by_class(WindowClass::ProgressWindow)?;
    let window = mgr.window_as_mut::<ProgressWindow>(handle)?;
    window.current = current;
    window.total = total;
    if caption.is_some() {
        window.caption = caption;
    }
    mgr.invalidate(handle);
    Some(handle)
}
