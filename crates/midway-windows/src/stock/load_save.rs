//! File pickers: the load/save dialog and scenario selection.

use tracing::debug;

use crate::class::WindowClass;
use crate::intent::{LoadSaveAction, LoadSaveCallback, LoadSaveResult, LoadSaveType, ScenarioCallback};
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::widget::WidgetIndex;
use crate::window::{Window, WindowContext};

use super::{focus_or_create, is_close_box, stock_frame};

/// File name box of the load/save dialog.
pub const WIDX_FILENAME: WidgetIndex = 4;

#[derive(Debug)]
pub struct LoadSaveWindow {
    pub action: LoadSaveAction,
    pub kind: LoadSaveType,
    pub default_path: Option<String>,
    /// Design being saved when `kind` is a track.
    pub track_design: Option<String>,
    result: Option<LoadSaveResult>,
    callback: Option<LoadSaveCallback>,
}

impl Window for LoadSaveWindow {
    /// Report the outcome; closing without a choice is a cancel.
    fn on_close(&mut self, ctx: &mut WindowContext<'_>) {
        let result = self.result.take().unwrap_or(LoadSaveResult::Cancelled);
        debug!(action = ?self.action, kind = ?self.kind, ?result, "load/save finished");
        if let Some(callback) = self.callback.take() {
            callback.call(ctx.manager, result);
        }
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn on_text_input(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex, text: &str) {
        let path = text.trim();
        if widget != WIDX_FILENAME || path.is_empty() {
            return;
        }
        self.result = Some(LoadSaveResult::Chosen(path.to_string()));
        ctx.close_self();
    }
}

/// Open the dialog, cancelling any dialog already open.
pub fn open(
    mgr: &mut WindowManager,
    action: LoadSaveAction,
    kind: LoadSaveType,
    default_path: Option<String>,
    callback: Option<LoadSaveCallback>,
    track_design: Option<String>,
) -> WindowHandle {
    mgr.close_by_class(WindowClass::LoadSave);
    let frame = stock_frame(mgr, WindowClass::LoadSave);
    mgr.create(
        frame,
        Box::new(LoadSaveWindow {
            action,
            kind,
            default_path,
            track_design,
            result: None,
            callback,
        }),
    )
}

/// Submit `path` as if typed into the file name box.
pub fn choose(mgr: &mut WindowManager, handle: WindowHandle, path: &str) -> bool {
    mgr.text_input(handle, WIDX_FILENAME, path)
}

#[derive(Debug, Default)]
pub struct ScenarioSelectWindow {
    pub chosen: Option<String>,
    callback: Option<ScenarioCallback>,
}

impl Window for ScenarioSelectWindow {
    fn on_close(&mut self, ctx: &mut WindowContext<'_>) {
        if let (Some(path), Some(callback)) = (self.chosen.take(), self.callback.take()) {
            callback.call(ctx.manager, path);
        }
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn on_text_input(&mut self, ctx: &mut WindowContext<'_>, _widget: WidgetIndex, text: &str) {
        if text.is_empty() {
            return;
        }
        self.chosen = Some(text.to_string());
        ctx.close_self();
    }
}

/// Open scenario selection. An open window is raised and takes the new
/// callback, if one is given.
pub fn open_scenario_select(mgr: &mut WindowManager, callback: Option<ScenarioCallback>) -> WindowHandle {
    let handle = focus_or_create(mgr, WindowClass::ScenarioSelect, |mgr| {
        let frame = stock_frame(mgr, WindowClass::ScenarioSelect);
        mgr.create(frame, Box::new(ScenarioSelectWindow::default()))
    });
    if callback.is_some() {
        if let Some(window) = mgr.window_as_mut::<ScenarioSelectWindow>(handle) {
            window.callback = callback;
        }
    }
    handle
}
