//! Built-in window behaviours and the factories that open them.
//!
//! Most classes need nothing beyond a frame and a close box, so they share
//! [`StockWindow`]. Windows with their own state (rides, lists, prompts,
//! long-running operations) live in the submodules.

pub mod construction;
mod layout;
pub mod list;
pub mod load_save;
pub mod message;
pub mod network;
pub mod progress;
pub mod prompt;
pub mod ride;

pub use layout::{StockLayout, BOTTOM_TOOLBAR_HEIGHT, BOTTOM_TOOLBAR_NEWS, TOP_TOOLBAR_HEIGHT};

use midway_common::EntityId;

use crate::class::{WindowClass, WindowDetail, WindowNumber, WindowView};
use crate::factories::WindowFactories;
use crate::frame::WindowFrame;
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::scene::Scene;
use crate::widget::{WidgetIndex, WidgetType};
use crate::window::{Window, WindowContext, ENLARGED_TITLE_BAR_DELTA};

pub const PARK_PAGE_RATING: u32 = 1;
pub const PARK_PAGE_GUESTS: u32 = 2;
pub const PARK_PAGE_OBJECTIVE: u32 = 5;
pub const PARK_PAGE_AWARDS: u32 = 6;

pub const FINANCES_PAGE_MARKETING: u32 = 4;
pub const FINANCES_PAGE_RESEARCH: u32 = 5;

pub const CHANGELOG_PAGE_NEW_VERSION: u32 = 1;

/// Windows with no state of their own and at most one instance.
const SINGLETONS: &[WindowClass] = &[
    WindowClass::MainWindow,
    WindowClass::TopToolbar,
    WindowClass::BottomToolbar,
    WindowClass::Options,
    WindowClass::Themes,
    WindowClass::KeyboardShortcutList,
    WindowClass::About,
    WindowClass::Changelog,
    WindowClass::Cheats,
    WindowClass::Finances,
    WindowClass::ParkInformation,
    WindowClass::Research,
    WindowClass::RecentNews,
    WindowClass::Notifications,
    WindowClass::Scenery,
    WindowClass::Footpath,
    WindowClass::Land,
    WindowClass::Water,
    WindowClass::LandRights,
    WindowClass::ClearScenery,
    WindowClass::Map,
    WindowClass::TileInspector,
    WindowClass::Multiplayer,
    WindowClass::ServerList,
    WindowClass::ServerStart,
    WindowClass::EditorObjectSelection,
    WindowClass::EditorInventionList,
    WindowClass::EditorScenarioOptions,
    WindowClass::EditorObjectiveOptions,
    WindowClass::EditorBottomToolbar,
    WindowClass::TitleMenu,
    WindowClass::TitleExit,
    WindowClass::TitleOptions,
];

/// Fill `factories` with every built-in window.
pub fn register(factories: &mut WindowFactories) {
    for class in SINGLETONS {
        factories.register_class(*class, |mgr, class| Some(open_singleton(mgr, class)));
    }
    factories.register_class(WindowClass::Viewport, |mgr, _| Some(open_viewport(mgr)));
    for class in list::LIST_CLASSES {
        factories.register_class(*class, |mgr, class| Some(list::open(mgr, class)));
    }
    factories.register_class(WindowClass::RideConstruction, |mgr, class| {
        Some(construction::open(mgr, class))
    });
    factories.register_class(WindowClass::MazeConstruction, |mgr, class| {
        Some(construction::open(mgr, class))
    });
    factories.register_class(WindowClass::SavePrompt, |mgr, _| Some(prompt::open_save_prompt(mgr)));

    register_views(factories);
    register_details(factories);
}

fn register_views(factories: &mut WindowFactories) {
    use WindowClass as C;
    use WindowView as V;

    factories.register_view(V::ParkAwards, |mgr| {
        Some(open_page(mgr, C::ParkInformation, PARK_PAGE_AWARDS))
    });
    factories.register_view(V::ParkRating, |mgr| {
        Some(open_page(mgr, C::ParkInformation, PARK_PAGE_RATING))
    });
    factories.register_view(V::ParkObjective, |mgr| {
        Some(open_page(mgr, C::ParkInformation, PARK_PAGE_OBJECTIVE))
    });
    factories.register_view(V::ParkGuests, |mgr| {
        Some(open_page(mgr, C::ParkInformation, PARK_PAGE_GUESTS))
    });
    factories.register_view(V::FinancesResearch, |mgr| {
        Some(open_page(mgr, C::Finances, FINANCES_PAGE_RESEARCH))
    });
    factories.register_view(V::FinanceMarketing, |mgr| {
        Some(open_page(mgr, C::Finances, FINANCES_PAGE_MARKETING))
    });
    factories.register_view(V::RideResearch, |mgr| {
        if mgr.settings().toolbar_show_research {
            Some(open_singleton(mgr, C::Research))
        } else {
            Some(list::open_research_tab(mgr))
        }
    });
    factories.register_view(V::MazeConstruction, |mgr| {
        Some(construction::open(mgr, C::MazeConstruction))
    });
    factories.register_view(V::NetworkPassword, |mgr| {
        Some(network::open(mgr, "Password required".to_string(), true, None))
    });
    factories.register_view(V::EditorBottomToolbar, |mgr| {
        Some(open_singleton(mgr, C::EditorBottomToolbar))
    });
    factories.register_view(V::Changelog, |mgr| Some(open_page(mgr, C::Changelog, 0)));
    factories.register_view(V::NewVersionInfo, |mgr| {
        Some(open_page(mgr, C::Changelog, CHANGELOG_PAGE_NEW_VERSION))
    });
}

fn register_details(factories: &mut WindowFactories) {
    use WindowDetail as D;

    factories.register_detail(D::Banner, |mgr, id| Some(open_numbered(mgr, WindowClass::Banner, id)));
    factories.register_detail(D::Sign, |mgr, id| Some(open_numbered(mgr, WindowClass::Sign, id)));
    factories.register_detail(D::SignSmall, |mgr, id| {
        Some(open_numbered(mgr, WindowClass::SignSmall, id))
    });
    factories.register_detail(D::Player, |mgr, id| Some(open_numbered(mgr, WindowClass::Player, id)));
    factories.register_detail(D::NewCampaign, |mgr, id| Some(list::open_campaign(mgr, id)));
    factories.register_detail(D::DemolishRide, |mgr, id| {
        prompt::open_ride_prompt(mgr, WindowClass::DemolishRidePrompt, id)
    });
    factories.register_detail(D::RefurbishRide, |mgr, id| {
        prompt::open_ride_prompt(mgr, WindowClass::RefurbishRidePrompt, id)
    });
}

/// A window with no state beyond its frame. Its close box closes it.
#[derive(Debug, Clone, Copy)]
pub struct StockWindow {
    titled: bool,
}

impl StockWindow {
    pub fn new(titled: bool) -> Self {
        Self { titled }
    }
}

impl Window for StockWindow {
    fn on_mouse_up(&mut self, ctx: &mut WindowContext<'_>, widget: WidgetIndex) {
        if is_close_box(ctx, widget) {
            ctx.close_self();
        }
    }

    fn title_bar_height_delta(&self, enlarged_ui: bool) -> i32 {
        if self.titled && enlarged_ui {
            ENLARGED_TITLE_BAR_DELTA
        } else {
            0
        }
    }
}

pub(crate) fn is_close_box(ctx: &WindowContext<'_>, widget: WidgetIndex) -> bool {
    ctx.frame()
        .and_then(|frame| frame.widgets.get(widget))
        .is_some_and(|w| w.kind == WidgetType::CloseBox)
}

/// The default frame for `class` on the manager's current screen.
pub fn stock_frame(mgr: &WindowManager, class: WindowClass) -> WindowFrame {
    StockLayout::for_class(class, mgr.screen()).into_frame(class)
}

/// Create a new [`StockWindow`] of `class`, whether or not one exists.
pub fn create_stock(mgr: &mut WindowManager, class: WindowClass, number: WindowNumber) -> WindowHandle {
    let layout = StockLayout::for_class(class, mgr.screen());
    let titled = layout.titled;
    let frame = layout.into_frame(class).with_number(number);
    mgr.create(frame, Box::new(StockWindow::new(titled)))
}

/// Raise the existing window of `class`, or create one with `create`.
/// Sticky windows are returned as they are.
pub fn focus_or_create(
    mgr: &mut WindowManager,
    class: WindowClass,
    create: impl FnOnce(&mut WindowManager) -> WindowHandle,
) -> WindowHandle {
    match mgr.find_by_class(class) {
        Some(handle) if mgr.frame(handle).is_some_and(|f| f.is_sticky()) => handle,
        Some(handle) => mgr.bring_to_front_by_class(class).unwrap_or(handle),
        None => create(mgr),
    }
}

pub fn open_singleton(mgr: &mut WindowManager, class: WindowClass) -> WindowHandle {
    focus_or_create(mgr, class, |mgr| create_stock(mgr, class, 0))
}

/// Open a singleton and switch it to `page`.
pub fn open_page(mgr: &mut WindowManager, class: WindowClass, page: u32) -> WindowHandle {
    let handle = open_singleton(mgr, class);
    let changed = match mgr.frame_mut(handle) {
        Some(frame) if frame.page != page => {
            frame.page = page;
            true
        }
        _ => false,
    };
    if changed {
        mgr.invalidate(handle);
    }
    handle
}

/// Raise the window of `class` showing `number`, or create it.
pub fn open_numbered(mgr: &mut WindowManager, class: WindowClass, number: WindowNumber) -> WindowHandle {
    mgr.bring_to_front_by_number(class, number)
        .unwrap_or_else(|| create_stock(mgr, class, number))
}

pub fn open_peep(mgr: &mut WindowManager, peep: EntityId, staff: bool) -> WindowHandle {
    let class = if staff { WindowClass::Staff } else { WindowClass::Peep };
    open_numbered(mgr, class, peep.0)
}

/// Extra viewports are numbered so several can be open at once.
pub fn open_viewport(mgr: &mut WindowManager) -> WindowHandle {
    let number = mgr
        .registry()
        .iter_live()
        .filter(|e| e.frame.class == WindowClass::Viewport)
        .map(|e| e.frame.number + 1)
        .max()
        .unwrap_or(0);
    create_stock(mgr, WindowClass::Viewport, number)
}

/// Replaces any construction window; the list is numbered by ride type
/// and opens at the ride entry's page.
pub fn open_track_design_list(mgr: &mut WindowManager, ride_type: u8, entry: u16) -> WindowHandle {
    mgr.close_construction_windows();
    let handle = create_stock(mgr, WindowClass::TrackDesignList, u32::from(ride_type));
    if let Some(frame) = mgr.frame_mut(handle) {
        frame.page = u32::from(entry);
    }
    handle
}

/// The always-present windows for the current scene.
pub fn open_reserved(mgr: &mut WindowManager) -> Vec<WindowHandle> {
    let classes: &[WindowClass] = match mgr.scene() {
        Scene::TitleSequence => &[
            WindowClass::MainWindow,
            WindowClass::TitleMenu,
            WindowClass::TitleExit,
            WindowClass::TitleOptions,
        ],
        Scene::Playing => &[
            WindowClass::MainWindow,
            WindowClass::TopToolbar,
            WindowClass::BottomToolbar,
        ],
        Scene::ScenarioEditor { .. } | Scene::TrackDesigner | Scene::TrackManager => &[
            WindowClass::MainWindow,
            WindowClass::TopToolbar,
            WindowClass::EditorBottomToolbar,
        ],
    };
    classes.iter().map(|class| open_singleton(mgr, *class)).collect()
}
