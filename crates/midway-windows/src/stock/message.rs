//! Windows that only display text.

use crate::class::WindowClass;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::{is_close_box, stock_frame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWindow {
    pub title: String,
    pub lines: Vec<String>,
}

impl Window for MessageWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }
}

/// Replace any open window of `class` with a new message window.
fn replace(mgr: &mut WindowManager, class: WindowClass, message: MessageWindow) -> WindowHandle {
    mgr.close_by_class(class);
    let frame = stock_frame(mgr, class);
    mgr.create(frame, Box::new(message))
}

pub fn open_error(mgr: &mut WindowManager, title: String, message: String) -> WindowHandle {
    replace(
        mgr,
        WindowClass::Error,
        MessageWindow {
            title,
            lines: vec![message],
        },
    )
}

/// List the objects `path` needs but that could not be loaded.
pub fn open_object_load_error(mgr: &mut WindowManager, path: String, objects: Vec<String>) -> WindowHandle {
    replace(
        mgr,
        WindowClass::ObjectLoadError,
        MessageWindow {
            title: path,
            lines: objects,
        },
    )
}

pub fn open_text(mgr: &mut WindowManager, class: WindowClass, text: String) -> WindowHandle {
    replace(
        mgr,
        class,
        MessageWindow {
            title: text,
            lines: Vec::new(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;
    use crate::settings::WindowManagerSettings;

    #[test]
    fn second_error_replaces_first() {
        let mut mgr = WindowManager::new(WindowManagerSettings::default());
        let first = open_error(&mut mgr, "Can't build".into(), "Not enough cash".into());
        let second = mgr
            .open_intent(Intent::Error {
                title: "Can't build".into(),
                message: "Too high".into(),
            })
            .unwrap();
        assert!(!mgr.is_live(first));
        let window = mgr.window_as::<MessageWindow>(second).unwrap();
        assert_eq!(window.lines, vec!["Too high".to_string()]);
    }

    #[test]
    fn object_load_error_lists_objects() {
        let mut mgr = WindowManager::new(WindowManagerSettings::default());
        let handle = mgr
            .open_intent(Intent::ObjectLoadError {
                path: "park.sv6".into(),
                objects: vec!["rct2.ride.wooden".into(), "rct2.scenery.tree".into()],
            })
            .unwrap();
        let window = mgr.window_as::<MessageWindow>(handle).unwrap();
        assert_eq!(window.title, "park.sv6");
        assert_eq!(window.lines.len(), 2);
    }
}
