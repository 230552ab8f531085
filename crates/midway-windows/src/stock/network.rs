//! Connection status and server password prompt.

use crate::class::WindowClass;
use crate::intent::CloseCallback;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::{is_close_box, stock_frame};

#[derive(Debug)]
pub struct NetworkStatusWindow {
    pub text: String,
    /// Shows the password box.
    pub password: bool,
    pub entered_password: Option<String>,
    callback: Option<CloseCallback>,
}

impl Window for NetworkStatusWindow {
    fn on_close(&mut self, ctx: &mut WindowContext<'_>) {
        if let Some(callback) = self.callback.take() {
            callback.call(ctx.manager, ());
        }
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn on_text_input(&mut self, ctx: &mut WindowContext<'_>, _widget: WidgetIndex, text: &str) {
        if self.password {
            self.entered_password = Some(text.to_string());
            ctx.close_self();
        }
    }
}

/// Show connection status, or a password prompt when `password` is set.
/// An open status window has its text and mode replaced.
pub fn open(
    mgr: &mut WindowManager,
    text: String,
    password: bool,
    callback: Option<CloseCallback>,
) -> WindowHandle {
    if let Some(handle) = mgr.find_by_class(WindowClass::NetworkStatus) {
        if let Some(window) = mgr.window_as_mut::<NetworkStatusWindow>(handle) {
            window.text = text;
            window.password = password;
            if callback.is_some() {
                window.callback = callback;
            }
        }
        mgr.invalidate(handle);
        return handle;
    }
    let frame = stock_frame(mgr, WindowClass::NetworkStatus);
    mgr.create(
        frame,
        Box::new(NetworkStatusWindow {
            text,
            password,
            entered_password: None,
            callback,
        }),
    )
}
