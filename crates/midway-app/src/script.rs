//! Headless replay of window-manager operations from a JSON script.

use std::path::{Path, PathBuf};

use midway_common::{MidwayError, ScreenCoords, ScreenRect};
use midway_config::MidwayConfig;
use midway_windows::{
    Broadcast, Intent, Scene, WindowClass, WindowDetail, WindowManager, WindowNumber, WindowView,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// One scripted operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    OpenWindow { class: WindowClass },
    OpenView { view: WindowView },
    OpenDetails { detail: WindowDetail, id: u32 },
    Open { intent: Intent },
    Broadcast { broadcast: Broadcast },
    CloseClass { class: WindowClass },
    CloseNumber { class: WindowClass, number: WindowNumber },
    CloseTop,
    CloseAll,
    BringToFront { class: WindowClass },
    Click { x: i32, y: i32 },
    /// One host frame: update, draw the whole screen, compact.
    Frame,
    Scene { scene: Scene },
    SetWindowLimit { limit: u32 },
}

pub fn load_script(path: &Path) -> midway_common::Result<Vec<Step>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text).map_err(|e| MidwayError::Script(format!("{}: {e}", path.display())))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Applies steps to a manager and persists limit changes to the config
/// file the run was started with, if any.
pub struct Replay<'a> {
    manager: &'a mut WindowManager,
    config: &'a mut MidwayConfig,
    config_path: Option<PathBuf>,
}

impl<'a> Replay<'a> {
    pub fn new(
        manager: &'a mut WindowManager,
        config: &'a mut MidwayConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            manager,
            config,
            config_path,
        }
    }

    pub fn run(&mut self, steps: Vec<Step>) -> midway_common::Result<()> {
        let total = steps.len();
        for (index, step) in steps.into_iter().enumerate() {
            debug!(index, ?step, "replaying step");
            self.apply(step)?;
        }
        info!(steps = total, live = self.manager.live_count(), "script finished");
        Ok(())
    }

    pub fn apply(&mut self, step: Step) -> midway_common::Result<()> {
        let mgr = &mut *self.manager;
        match step {
            Step::OpenWindow { class } => {
                mgr.open_window(class);
            }
            Step::OpenView { view } => {
                mgr.open_view(view);
            }
            Step::OpenDetails { detail, id } => {
                mgr.open_details(detail, id);
            }
            Step::Open { intent } => {
                mgr.open_intent(intent);
            }
            Step::Broadcast { broadcast } => mgr.broadcast(broadcast),
            Step::CloseClass { class } => {
                mgr.close_by_class(class);
            }
            Step::CloseNumber { class, number } => {
                mgr.close_by_number(class, number);
            }
            Step::CloseTop => {
                mgr.close_top();
            }
            Step::CloseAll => {
                mgr.close_all();
            }
            Step::BringToFront { class } => {
                if mgr.bring_to_front_by_class(class).is_none() {
                    warn!(%class, "bring_to_front: no such window");
                }
            }
            Step::Click { x, y } => {
                let hit = mgr.click(ScreenCoords::new(x, y));
                debug!(x, y, ?hit, "click");
            }
            Step::Frame => {
                let screen = mgr.screen();
                mgr.update_all();
                mgr.draw_all(ScreenRect::new(0, 0, screen.width, screen.height));
                mgr.compact();
            }
            Step::Scene { scene } => mgr.set_scene(scene),
            Step::SetWindowLimit { limit } => {
                let applied = mgr.set_window_limit(limit);
                self.config.general.window_limit = applied;
                if let Some(path) = &self.config_path {
                    midway_config::save_config_to_path(self.config, path)?;
                    info!(path = %path.display(), applied, "window limit saved");
                }
            }
        }
        Ok(())
    }
}
