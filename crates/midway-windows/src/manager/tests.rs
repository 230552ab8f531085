use std::cell::RefCell;
use std::rc::Rc;

use midway_common::{AssertBehaviour, ScreenCoords, ScreenRect, ScreenSize};

use super::*;
use crate::class::WindowClass;
use crate::effects::SoundId;
use crate::error::WindowError;
use crate::flags::{BottomToolbarDirty, WindowFlags};
use crate::frame::WindowFrame;
use crate::intent::{Broadcast, Intent};
use crate::registry::WindowHandle;
use crate::scene::{EditorStep, Scene};
use crate::settings::WindowManagerSettings;
use crate::stock;
use crate::widget::{Widget, WidgetIndex, WidgetType};
use crate::window::{Window, WindowContext};

type Log = Rc<RefCell<Vec<String>>>;

/// Records hook calls and can be told to misbehave.
#[derive(Default)]
struct Probe {
    name: &'static str,
    log: Log,
    refuse_close: bool,
    /// Class of a window to open from `on_close`.
    open_on_close: Option<WindowClass>,
    close_self_on_click: bool,
}

impl Probe {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            ..Self::default()
        }
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{event}", self.name));
    }
}

impl Window for Probe {
    fn on_open(&mut self, _ctx: &mut WindowContext<'_>) {
        self.record("open");
    }

    fn on_close(&mut self, ctx: &mut WindowContext<'_>) {
        self.record("close");
        if let Some(class) = self.open_on_close {
            let frame = WindowFrame::new(class, ScreenSize::new(50, 50));
            ctx.manager.create(frame, Box::new(Probe::new("spawned", &self.log)));
        }
    }

    fn can_close(&self) -> bool {
        !self.refuse_close
    }

    fn on_update(&mut self, _ctx: &mut WindowContext<'_>) {
        self.record("update");
    }

    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        self.record(&format!("up{widget}"));
        if self.close_self_on_click {
            ctx.close_self();
            let still_live = ctx.manager.is_live(ctx.handle);
            self.record(&format!("live-after-close={still_live}"));
        }
    }
}

fn settings() -> WindowManagerSettings {
    WindowManagerSettings {
        screen: ScreenSize::new(800, 600),
        enlarged_ui: false,
        unroutable_intents: AssertBehaviour::Log,
        ..WindowManagerSettings::default()
    }
}

fn manager() -> WindowManager {
    WindowManager::new(settings())
}

fn plain(class: WindowClass, x: i32, y: i32) -> WindowFrame {
    WindowFrame::new(class, ScreenSize::new(100, 80)).at(ScreenCoords::new(x, y))
}

fn spawn(mgr: &mut WindowManager, frame: WindowFrame, name: &'static str, log: &Log) -> WindowHandle {
    mgr.create(frame, Box::new(Probe::new(name, log)))
}

fn order(mgr: &WindowManager) -> Vec<WindowHandle> {
    mgr.registry().live_handles()
}

// -- Ordering --

#[test]
fn sticky_bands_hold_under_mixed_creation() {
    let mut mgr = manager();
    let log = Log::default();
    let front = spawn(
        &mut mgr,
        plain(WindowClass::TopToolbar, 0, 0).with_flags(WindowFlags::STICK_TO_FRONT),
        "front",
        &log,
    );
    let a = spawn(&mut mgr, plain(WindowClass::Map, 10, 40), "a", &log);
    let back = spawn(
        &mut mgr,
        plain(WindowClass::MainWindow, 0, 0).with_flags(WindowFlags::STICK_TO_BACK),
        "back",
        &log,
    );
    let b = spawn(&mut mgr, plain(WindowClass::Land, 20, 40), "b", &log);

    assert_eq!(order(&mgr), vec![back, a, b, front]);
    assert!(mgr.registry().is_ordered());

    assert!(mgr.bring_to_front(a));
    assert_eq!(order(&mgr), vec![back, b, a, front]);
    assert!(mgr.bring_to_front(back));
    assert_eq!(order(&mgr), vec![back, b, a, front]);
}

#[test]
fn bring_to_front_nudges_offscreen_window() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = spawn(&mut mgr, plain(WindowClass::Map, -150, 100), "a", &log);
    mgr.bring_to_front(handle);
    assert_eq!(mgr.frame(handle).map(|f| f.pos.x), Some(20));
}

// -- Creation and placement --

#[test]
fn creation_flashes_plays_sound_and_opens() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = spawn(&mut mgr, plain(WindowClass::Map, 100, 50), "a", &log);

    let frame = mgr.frame(handle).unwrap();
    assert!(frame.flags.contains(WindowFlags::WHITE_BORDER_MASK));
    let sounds = mgr.effects_mut().take_sounds();
    assert_eq!(sounds.len(), 1);
    assert_eq!(sounds[0].sound, SoundId::WindowOpen);
    assert_eq!(sounds[0].pan_x, 150);
    assert_eq!(*log.borrow(), vec!["a:open"]);
    assert!(mgr
        .effects()
        .dirty()
        .contains(&ScreenRect::new(100, 50, 200, 130)));
}

#[test]
fn auto_position_fills_corners_first() {
    let mut mgr = manager();
    let log = Log::default();
    spawn(
        &mut mgr,
        WindowFrame::new(WindowClass::MainWindow, ScreenSize::new(800, 600))
            .with_flags(WindowFlags::STICK_TO_BACK),
        "main",
        &log,
    );
    let auto = || {
        WindowFrame::new(WindowClass::Map, ScreenSize::new(200, 100))
            .with_flags(WindowFlags::AUTO_POSITION)
    };
    let expected = [
        ScreenCoords::new(0, 30),
        ScreenCoords::new(600, 30),
        ScreenCoords::new(0, 466),
        ScreenCoords::new(600, 466),
        ScreenCoords::new(202, 30),
    ];
    for pos in expected {
        let handle = spawn(&mut mgr, auto(), "auto", &log);
        assert_eq!(mgr.frame(handle).map(|f| f.pos), Some(pos));
    }
}

#[test]
fn centred_windows_sit_mid_screen() {
    let mut mgr = manager();
    let log = Log::default();
    let frame = WindowFrame::new(WindowClass::About, ScreenSize::new(400, 300))
        .with_flags(WindowFlags::AUTO_POSITION | WindowFlags::CENTRE_SCREEN);
    let handle = spawn(&mut mgr, frame, "about", &log);
    assert_eq!(mgr.frame(handle).map(|f| f.pos), Some(ScreenCoords::new(200, 150)));
}

// -- Eviction and limits --

#[test]
fn full_registry_evicts_oldest_closable() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        window_limit: 2,
        ..settings()
    });
    let log = Log::default();
    for _ in 0..3 {
        spawn(
            &mut mgr,
            plain(WindowClass::TopToolbar, 0, 0).with_flags(WindowFlags::STICK_TO_FRONT),
            "sticky",
            &log,
        );
    }
    let pinned = spawn(
        &mut mgr,
        plain(WindowClass::ProgressWindow, 0, 40).with_flags(WindowFlags::NO_AUTO_CLOSE),
        "pinned",
        &log,
    );
    let a = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    assert_eq!(mgr.live_count(), 5);
    let b = spawn(&mut mgr, plain(WindowClass::Land, 0, 40), "b", &log);
    assert_eq!(mgr.live_count(), 6);

    let c = spawn(&mut mgr, plain(WindowClass::Water, 0, 40), "c", &log);
    assert!(mgr.is_live(pinned));
    assert!(!mgr.is_live(a));
    assert!(mgr.is_live(b) && mgr.is_live(c));
    assert_eq!(mgr.live_count(), 6);
}

#[test]
fn lowering_limit_closes_surplus_but_spares_options() {
    let mut mgr = manager();
    let log = Log::default();
    let options = spawn(&mut mgr, plain(WindowClass::Options, 0, 40), "options", &log);
    let mut others = Vec::new();
    for i in 0..7 {
        others.push(spawn(&mut mgr, plain(WindowClass::Viewport, i * 10, 40), "view", &log));
    }

    assert_eq!(mgr.set_window_limit(0), 4);
    assert_eq!(mgr.window_limit(), 4);
    // 8 live, limit 4 plus 4 reserved: nothing to close yet.
    assert_eq!(mgr.live_count(), 8);

    mgr.settings.reserved_count = 0;
    mgr.set_window_limit(5);
    mgr.set_window_limit(4);
    assert!(mgr.is_live(options));
    assert_eq!(mgr.live_count(), 4);
    assert!(!mgr.is_live(others[0]));
    assert!(mgr.is_live(others[6]));

    assert_eq!(mgr.set_window_limit(1000), 64);
}

#[test]
fn zero_limit_with_pinned_windows_evicts_exactly_one() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        reserved_count: 3,
        ..settings()
    });
    let log = Log::default();
    for class in [WindowClass::MainWindow, WindowClass::TopToolbar, WindowClass::BottomToolbar] {
        let flags = if class == WindowClass::MainWindow {
            WindowFlags::STICK_TO_BACK
        } else {
            WindowFlags::STICK_TO_FRONT
        };
        spawn(&mut mgr, plain(class, 0, 0).with_flags(flags), "pinned", &log);
    }
    let older = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "older", &log);
    let old = spawn(&mut mgr, plain(WindowClass::Land, 0, 40), "old", &log);
    mgr.settings.window_limit = 0;
    let live_before = mgr.live_count();

    let fresh = spawn(&mut mgr, plain(WindowClass::Water, 0, 40), "fresh", &log);
    assert!(!mgr.is_live(older));
    assert!(mgr.is_live(old) && mgr.is_live(fresh));
    assert_eq!(mgr.live_count(), live_before);
    assert!(mgr.registry().is_ordered());
}

#[test]
fn eviction_passes_over_window_that_refuses_to_close() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        window_limit: 2,
        reserved_count: 0,
        ..settings()
    });
    let log = Log::default();
    let stubborn = mgr.create(
        plain(WindowClass::SavePrompt, 0, 40),
        Box::new(Probe {
            refuse_close: true,
            ..Probe::new("stubborn", &log)
        }),
    );
    let a = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    let b = spawn(&mut mgr, plain(WindowClass::Land, 0, 40), "b", &log);

    assert!(mgr.is_live(stubborn));
    assert!(!mgr.is_live(a));
    assert!(mgr.is_live(b));
    assert_eq!(mgr.live_count(), 2);
}

#[test]
fn close_surplus_passes_over_window_that_refuses_to_close() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        reserved_count: 0,
        ..settings()
    });
    let log = Log::default();
    let stubborn = mgr.create(
        plain(WindowClass::SavePrompt, 0, 40),
        Box::new(Probe {
            refuse_close: true,
            ..Probe::new("stubborn", &log)
        }),
    );
    let others: Vec<_> = (0..3)
        .map(|i| spawn(&mut mgr, plain(WindowClass::Viewport, i * 10, 40), "view", &log))
        .collect();

    assert_eq!(mgr.close_surplus(1, None), 3);
    assert!(mgr.is_live(stubborn));
    assert!(others.iter().all(|&h| !mgr.is_live(h)));
    assert_eq!(mgr.live_count(), 1);
}

// -- Closing --

#[test]
fn closed_window_is_gone_from_lookups() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);

    assert!(mgr.close(handle));
    assert!(!mgr.close(handle));
    assert!(!mgr.is_live(handle));
    assert_eq!(mgr.find_by_class(WindowClass::Map), None);
    assert!(!mgr.bring_to_front(handle));
    assert!(!mgr.mouse_up(handle, 0));
    assert_eq!(*log.borrow(), vec!["a:open", "a:close"]);

    assert_eq!(mgr.compact(), 1);
    assert!(matches!(mgr.require(handle), Err(WindowError::HandleExpired(h)) if h == handle));
}

#[test]
fn refused_close_keeps_window() {
    let mut mgr = manager();
    let log = Log::default();
    let probe = Probe {
        refuse_close: true,
        ..Probe::new("stubborn", &log)
    };
    let handle = mgr.create(plain(WindowClass::SavePrompt, 0, 40), Box::new(probe));
    assert!(!mgr.close(handle));
    assert_eq!(mgr.close_by_class(WindowClass::SavePrompt), 0);
    assert!(mgr.is_live(handle));
}

#[test]
fn close_by_class_skips_windows_opened_while_closing() {
    let mut mgr = manager();
    let log = Log::default();
    let a = mgr.create(
        plain(WindowClass::Map, 0, 40),
        Box::new(Probe {
            open_on_close: Some(WindowClass::Map),
            ..Probe::new("a", &log)
        }),
    );
    let b = spawn(&mut mgr, plain(WindowClass::Map, 100, 40), "b", &log);

    assert_eq!(mgr.close_by_class(WindowClass::Map), 2);
    assert!(!mgr.is_live(a) && !mgr.is_live(b));
    let spawned = mgr.find_by_class(WindowClass::Map);
    assert!(spawned.is_some());
    assert!(mgr.registry().is_ordered());
}

#[test]
fn self_close_inside_hook_is_deferred() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = mgr.create(
        plain(WindowClass::Map, 0, 40),
        Box::new(Probe {
            close_self_on_click: true,
            ..Probe::new("a", &log)
        }),
    );
    assert!(mgr.mouse_up(handle, 1));
    assert!(!mgr.is_live(handle));
    assert_eq!(
        *log.borrow(),
        vec!["a:open", "a:up1", "a:live-after-close=true", "a:close"]
    );
}

#[test]
fn deferred_self_close_can_still_be_refused() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = mgr.create(
        plain(WindowClass::SavePrompt, 0, 40),
        Box::new(Probe {
            close_self_on_click: true,
            refuse_close: true,
            ..Probe::new("a", &log)
        }),
    );
    assert!(mgr.mouse_up(handle, 1));
    assert!(mgr.is_live(handle));
    assert_eq!(*log.borrow(), vec!["a:open", "a:up1", "a:live-after-close=true"]);
    assert_eq!(mgr.registry().get(handle).map(|e| e.pending_close), Some(false));
}

#[test]
fn close_top_respects_editor_step() {
    let mut mgr = manager();
    let log = Log::default();
    let a = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    let b = spawn(&mut mgr, plain(WindowClass::Land, 0, 40), "b", &log);

    mgr.set_scene(Scene::ScenarioEditor {
        step: EditorStep::ObjectSelection,
    });
    assert_eq!(mgr.close_top(), 0);

    mgr.set_scene(Scene::ScenarioEditor {
        step: EditorStep::LandscapeEditor,
    });
    assert_eq!(mgr.close_top(), 1);
    assert!(mgr.is_live(a));
    assert!(!mgr.is_live(b));
}

#[test]
fn close_all_leaves_sticky_windows() {
    let mut mgr = manager();
    stock::open_reserved(&mut mgr);
    mgr.open_window(WindowClass::Map);
    mgr.open_window(WindowClass::Finances);
    assert_eq!(mgr.close_all(), 2);
    assert_eq!(mgr.live_count(), 3);

    mgr.open_window(WindowClass::Map);
    mgr.open_window(WindowClass::Finances);
    assert_eq!(mgr.close_all_except_class(WindowClass::Map), 1);
    assert!(mgr.find_by_class(WindowClass::Map).is_some());
}

// -- Hit testing --

#[test]
fn dropdown_hit_reports_following_button() {
    let mut mgr = manager();
    let log = Log::default();
    let frame = plain(WindowClass::NewCampaign, 100, 100).with_widgets(vec![
        Widget::new(WidgetType::Frame, 0, 99, 0, 79),
        Widget::new(WidgetType::DropdownMenu, 10, 60, 20, 31),
        Widget::new(WidgetType::Button, 61, 71, 20, 31),
    ]);
    let handle = spawn(&mut mgr, frame, "a", &log);
    assert_eq!(mgr.find_widget_from_point(handle, ScreenCoords::new(120, 125)), Some(2));
    assert_eq!(mgr.find_widget_from_point(handle, ScreenCoords::new(105, 105)), Some(0));
}

#[test]
fn clicks_fall_through_toolbar_background() {
    let mut mgr = manager();
    stock::open_reserved(&mut mgr);
    let main = mgr.main_window().unwrap();
    let toolbar = mgr.find_by_class(WindowClass::TopToolbar).unwrap();

    assert_eq!(mgr.find_from_point(ScreenCoords::new(700, 10)), Some(main));
    assert_eq!(mgr.find_from_point(ScreenCoords::new(15, 10)), Some(toolbar));
}

#[test]
fn click_raises_and_routes() {
    let mut mgr = manager();
    let log = Log::default();
    let frame = |class| {
        plain(class, 100, 100).with_widgets(vec![Widget::new(WidgetType::Button, 0, 99, 0, 79)])
    };
    let a = spawn(&mut mgr, frame(WindowClass::Map), "a", &log);
    spawn(&mut mgr, frame(WindowClass::Land), "b", &log);

    mgr.bring_to_front(a);
    assert_eq!(mgr.click(ScreenCoords::new(150, 150)), Some((a, Some(0))));
    assert!(log.borrow().contains(&"a:up0".to_string()));
    assert_eq!(mgr.click(ScreenCoords::new(5, 5)), None);
}

// -- Dispatch --

#[test]
fn class_dispatch_is_total_and_deterministic() {
    for class in WindowClass::ALL {
        let outcomes: Vec<Option<WindowClass>> = (0..2)
            .map(|_| {
                let mut mgr = manager();
                mgr.open_intent(Intent::OpenClass { class: *class })
                    .and_then(|h| mgr.frame(h).map(|f| f.class))
            })
            .collect();
        assert_eq!(outcomes[0], outcomes[1], "{class}");
        let routable = manager().factories().class(*class).is_some();
        if routable {
            assert_eq!(outcomes[0], Some(*class), "{class}");
        } else {
            assert_eq!(outcomes[0], None, "{class}");
        }
    }
}

#[test]
fn open_window_without_factory_is_nonfatal() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        unroutable_intents: AssertBehaviour::Abort,
        ..settings()
    });
    assert_eq!(mgr.open_window(WindowClass::Ride), None);
    assert!(matches!(
        mgr.try_open_window(WindowClass::Ride),
        Err(WindowError::Unroutable(_))
    ));
}

#[test]
#[should_panic(expected = "assertion failed")]
fn unroutable_intent_aborts_when_configured() {
    let mut mgr = WindowManager::new(WindowManagerSettings {
        unroutable_intents: AssertBehaviour::Abort,
        ..settings()
    });
    mgr.open_intent(Intent::OpenClass {
        class: WindowClass::LoadSave,
    });
}

#[test]
fn empty_factory_table_routes_nothing() {
    let mut mgr = WindowManager::with_factories(settings(), crate::factories::WindowFactories::new());
    assert_eq!(mgr.open_view(crate::class::WindowView::ParkRating), None);
    assert_eq!(mgr.open_details(crate::class::WindowDetail::Banner, 1), None);
    assert_eq!(mgr.live_count(), 0);
}

// -- Broadcasts and per-frame passes --

#[test]
fn broadcasts_mark_toolbar_sections() {
    let mut mgr = manager();
    mgr.broadcast(Broadcast::UpdateCash);
    mgr.broadcast(Broadcast::UpdateDate);
    mgr.broadcast(Broadcast::UpdateGuestCount);
    let dirty = mgr.take_toolbar_dirty();
    assert_eq!(
        dirty,
        BottomToolbarDirty::MONEY | BottomToolbarDirty::DATE | BottomToolbarDirty::PEEP_COUNT
    );
    assert!(mgr.take_toolbar_dirty().is_empty());
}

#[test]
fn ticker_news_invalidates_toolbar_widget() {
    let mut mgr = manager();
    stock::open_reserved(&mut mgr);
    mgr.effects_mut().take_dirty();
    mgr.broadcast(Broadcast::InvalidateTickerNews);
    let dirty = mgr.effects_mut().take_dirty();
    assert_eq!(dirty, vec![ScreenRect::new(144, 568, 656, 600)]);
}

#[test]
fn update_ends_white_border_flash() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    for _ in 0..3 {
        mgr.update_all();
    }
    let flags = mgr.frame(handle).map(|f| f.flags).unwrap();
    assert!(!flags.intersects(WindowFlags::WHITE_BORDER_MASK));
    assert_eq!(log.borrow().iter().filter(|e| e.ends_with("update")).count(), 3);
}

#[test]
fn draw_skips_windows_outside_clip() {
    let mut mgr = manager();
    let log = Log::default();
    spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    spawn(&mut mgr, plain(WindowClass::Land, 500, 400), "b", &log);
    assert_eq!(mgr.draw_all(ScreenRect::new(0, 0, 200, 200)), 1);
    assert_eq!(mgr.draw_all(ScreenRect::new(0, 0, 800, 600)), 2);
}

#[test]
fn relocate_keeps_windows_on_smaller_screen() {
    let mut mgr = manager();
    let log = Log::default();
    let handle = spawn(&mut mgr, plain(WindowClass::Map, 700, 500), "a", &log);
    mgr.relocate_windows(ScreenSize::new(640, 480));
    assert_eq!(mgr.screen(), ScreenSize::new(640, 480));
    assert_eq!(mgr.frame(handle).map(|f| f.pos), Some(ScreenCoords::new(540, 400)));
}

#[test]
fn push_others_right_clears_overlap() {
    let mut mgr = manager();
    let log = Log::default();
    let anchor = spawn(&mut mgr, plain(WindowClass::Map, 0, 40), "a", &log);
    let other = spawn(&mut mgr, plain(WindowClass::Land, 50, 60), "b", &log);
    mgr.push_others_right(anchor);
    assert_eq!(mgr.frame(other).map(|f| f.pos), Some(ScreenCoords::new(103, 60)));
}

#[test]
fn snapshot_serialises_live_windows_in_order() {
    let mut mgr = manager();
    let log = Log::default();
    let a = spawn(&mut mgr, plain(WindowClass::Map, 0, 40).with_number(7), "a", &log);
    let b = spawn(&mut mgr, plain(WindowClass::Land, 0, 40), "b", &log);
    mgr.close(b);

    let snapshot = mgr.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].handle, a.0);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json[0]["class"], "map");
    assert_eq!(json[0]["number"], 7);
}
