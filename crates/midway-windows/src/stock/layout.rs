//! Default geometry, flags and widgets per window class.

use midway_common::{ScreenCoords, ScreenSize};

use crate::class::WindowClass;
use crate::flags::WindowFlags;
use crate::frame::{ScrollArea, Viewport, WindowFrame};
use crate::widget::{titled_frame, Widget, WidgetType};

/// Height of the top toolbar window.
pub const TOP_TOOLBAR_HEIGHT: i32 = 28;
/// Height of the bottom toolbar window.
pub const BOTTOM_TOOLBAR_HEIGHT: i32 = 32;
/// Width of the money and date panels either side of the news ticker.
const BOTTOM_PANEL_WIDTH: i32 = 142;

/// Widget index of the news ticker in the bottom toolbar.
pub const BOTTOM_TOOLBAR_NEWS: usize = 1;

const AUTO: WindowFlags = WindowFlags::AUTO_POSITION;
const CENTRE: WindowFlags = WindowFlags::AUTO_POSITION.union(WindowFlags::CENTRE_SCREEN);
const RESIZE: WindowFlags = WindowFlags::AUTO_POSITION.union(WindowFlags::RESIZABLE);
const PINNED: WindowFlags = CENTRE.union(WindowFlags::NO_AUTO_CLOSE);

#[derive(Debug, Clone, PartialEq)]
pub struct StockLayout {
    pub size: ScreenSize,
    pub pos: ScreenCoords,
    pub flags: WindowFlags,
    /// Has the standard caption and close box.
    pub titled: bool,
    pub widgets: Vec<Widget>,
    pub viewport: Option<Viewport>,
}

impl StockLayout {
    fn titled(width: i32, height: i32, flags: WindowFlags) -> Self {
        Self {
            size: ScreenSize::new(width, height),
            pos: ScreenCoords::default(),
            flags,
            titled: true,
            widgets: titled_frame(width, height),
            viewport: None,
        }
    }

    fn bare(pos: ScreenCoords, size: ScreenSize, flags: WindowFlags, widgets: Vec<Widget>) -> Self {
        Self {
            size,
            pos,
            flags,
            titled: false,
            widgets,
            viewport: None,
        }
    }

    fn with_extra(mut self, widgets: impl IntoIterator<Item = Widget>) -> Self {
        self.widgets.extend(widgets);
        self
    }

    pub fn for_class(class: WindowClass, screen: ScreenSize) -> Self {
        use WindowClass as C;
        let (sw, sh) = (screen.width, screen.height);
        match class {
            C::MainWindow => {
                let mut layout = Self::bare(
                    ScreenCoords::default(),
                    screen,
                    WindowFlags::STICK_TO_BACK,
                    vec![Widget::new(WidgetType::Viewport, 0, sw - 1, 0, sh - 1)],
                );
                layout.viewport = Some(Viewport {
                    pos: ScreenCoords::default(),
                    size: screen,
                });
                layout
            }
            C::TopToolbar => Self::bare(
                ScreenCoords::default(),
                ScreenSize::new(sw, TOP_TOOLBAR_HEIGHT),
                WindowFlags::STICK_TO_FRONT | WindowFlags::TRANSPARENT | WindowFlags::NO_BACKGROUND,
                (0..6)
                    .map(|i| Widget::new(WidgetType::ImageButton, i * 30, i * 30 + 29, 0, 27))
                    .collect(),
            ),
            C::BottomToolbar => Self::bare(
                ScreenCoords::new(0, sh - BOTTOM_TOOLBAR_HEIGHT),
                ScreenSize::new(sw, BOTTOM_TOOLBAR_HEIGHT),
                WindowFlags::STICK_TO_FRONT | WindowFlags::TRANSPARENT | WindowFlags::NO_BACKGROUND,
                vec![
                    Widget::new(WidgetType::ImageButton, 0, BOTTOM_PANEL_WIDTH - 1, 0, 31),
                    Widget::new(
                        WidgetType::ImageButton,
                        BOTTOM_PANEL_WIDTH + 2,
                        sw - BOTTOM_PANEL_WIDTH - 3,
                        0,
                        31,
                    ),
                    Widget::new(WidgetType::ImageButton, sw - BOTTOM_PANEL_WIDTH, sw - 1, 0, 31),
                ],
            ),
            C::EditorBottomToolbar => Self::bare(
                ScreenCoords::new(0, sh - BOTTOM_TOOLBAR_HEIGHT),
                ScreenSize::new(sw, BOTTOM_TOOLBAR_HEIGHT),
                WindowFlags::STICK_TO_FRONT | WindowFlags::TRANSPARENT | WindowFlags::NO_BACKGROUND,
                vec![
                    Widget::new(WidgetType::FlatButton, 0, 199, 0, 31),
                    Widget::new(WidgetType::FlatButton, sw - 200, sw - 1, 0, 31),
                ],
            ),
            C::Dropdown | C::Tooltip => Self::bare(
                ScreenCoords::default(),
                ScreenSize::new(120, 40),
                WindowFlags::STICK_TO_FRONT,
                vec![Widget::new(WidgetType::Frame, 0, 119, 0, 39)],
            ),
            C::TitleMenu => Self::bare(
                ScreenCoords::new((sw - 328) / 2, sh - 142),
                ScreenSize::new(328, 82),
                WindowFlags::STICK_TO_BACK | WindowFlags::TRANSPARENT | WindowFlags::NO_BACKGROUND,
                (0..4)
                    .map(|i| Widget::new(WidgetType::ImageButton, i * 82, i * 82 + 81, 0, 81))
                    .collect(),
            ),
            C::TitleExit => Self::bare(
                ScreenCoords::new(sw - 40, sh - 64),
                ScreenSize::new(40, 64),
                WindowFlags::STICK_TO_BACK | WindowFlags::TRANSPARENT,
                vec![Widget::new(WidgetType::ImageButton, 0, 39, 0, 63)],
            ),
            C::TitleOptions => Self::bare(
                ScreenCoords::new(sw - 80, 0),
                ScreenSize::new(80, 15),
                WindowFlags::STICK_TO_BACK | WindowFlags::TRANSPARENT,
                vec![Widget::new(WidgetType::Button, 0, 79, 0, 14)],
            ),
            C::Error => Self::titled(200, 42, WindowFlags::STICK_TO_FRONT | WindowFlags::TRANSPARENT | CENTRE),
            C::TextInput => Self::titled(250, 90, CENTRE)
                .with_extra([Widget::new(WidgetType::TextBox, 10, 239, 30, 43)]),

            C::Options => Self::titled(310, 332, CENTRE).with_extra(tabs(8)),
            C::Themes => Self::titled(320, 107, RESIZE),
            C::KeyboardShortcutList => Self::titled(420, 280, RESIZE).with_extra([scroll(420, 280)]),
            C::About => Self::titled(400, 330, CENTRE),
            C::Changelog => Self::titled(500, 400, CENTRE | WindowFlags::RESIZABLE)
                .with_extra([scroll(500, 400)]),
            C::Cheats => Self::titled(249, 300, AUTO).with_extra(tabs(4)),

            C::Finances => Self::titled(530, 257, AUTO).with_extra(tabs(6)),
            C::ParkInformation => Self::titled(230, 174, AUTO).with_extra(tabs(7)),
            C::Research => Self::titled(300, 196, AUTO).with_extra(tabs(2)),
            C::NewCampaign => Self::titled(350, 109, AUTO).with_extra([
                Widget::new(WidgetType::DropdownMenu, 100, 341, 24, 35),
                Widget::new(WidgetType::Button, 330, 340, 25, 34),
                Widget::new(WidgetType::Button, 14, 335, 89, 100),
            ]),
            C::RecentNews => Self::titled(400, 300, RESIZE).with_extra([scroll(400, 300)]),
            C::Notifications => Self::titled(400, 300, AUTO),

            C::GuestList => Self::titled(350, 330, RESIZE).with_extra([scroll(350, 330)]),
            C::StaffList => Self::titled(320, 270, RESIZE).with_extra([scroll(320, 270)]),
            C::Peep | C::Staff => Self::titled(192, 157, RESIZE).with_extra(tabs(4)),
            C::FirePrompt => Self::titled(200, 100, CENTRE).with_extra(yes_no()),

            C::RideList => Self::titled(340, 240, RESIZE).with_extra([scroll(340, 240)]),
            C::Ride => Self::titled(316, 207, RESIZE).with_extra(tabs(10)),
            C::ConstructRide => Self::titled(601, 382, AUTO)
                .with_extra(tabs(8))
                .with_extra([scroll(601, 382)]),
            C::RideConstruction => Self::titled(166, 394, AUTO | WindowFlags::NO_AUTO_CLOSE)
                .with_extra(construction_buttons(6)),
            C::MazeConstruction => Self::titled(166, 200, AUTO | WindowFlags::NO_AUTO_CLOSE)
                .with_extra(construction_buttons(4)),
            C::DemolishRidePrompt | C::RefurbishRidePrompt => {
                Self::titled(200, 100, CENTRE).with_extra(yes_no())
            }
            C::TrackDesignList => Self::titled(600, 432, AUTO).with_extra([scroll(600, 432)]),
            C::TrackDesignPlace => Self::titled(200, 124, AUTO),
            C::ManageTrackDesign => Self::titled(250, 44, CENTRE),
            C::InstallTrack => Self::titled(380, 460, CENTRE),

            C::Scenery => Self::titled(634, 180, RESIZE).with_extra(tabs(19)),
            C::Footpath => Self::titled(106, 381, AUTO),
            C::Land | C::Water | C::LandRights | C::ClearScenery => Self::titled(98, 94, AUTO)
                .with_extra([Widget::new(WidgetType::Spinner, 27, 70, 17, 48)]),
            C::Map => Self::titled(245, 259, RESIZE).with_extra([scroll(245, 259)]),
            C::TileInspector => Self::titled(400, 280, RESIZE).with_extra([scroll(400, 280)]),
            C::Viewport => Self::titled(240, 160, RESIZE)
                .with_extra([Widget::new(WidgetType::Viewport, 2, 237, 16, 157)]),

            C::Banner | C::Sign | C::SignSmall => Self::titled(113, 96, AUTO)
                .with_extra([Widget::new(WidgetType::Viewport, 3, 85, 17, 76)]),
            C::Player => Self::titled(240, 170, RESIZE).with_extra(tabs(2)),
            C::Multiplayer => Self::titled(340, 240, RESIZE).with_extra(tabs(4)),
            C::ServerList => Self::titled(340, 320, RESIZE).with_extra([scroll(340, 320)]),
            C::ServerStart => Self::titled(300, 154, CENTRE),
            C::NetworkStatus => Self::titled(420, 90, PINNED)
                .with_extra([Widget::new(WidgetType::TextBox, 10, 409, 50, 63)]),
            C::ProgressWindow => Self::titled(400, 110, PINNED),
            C::LoadSave => Self::titled(400, 350, PINNED | WindowFlags::RESIZABLE).with_extra([
                scroll(400, 350),
                Widget::new(WidgetType::TextBox, 4, 395, 330, 343),
            ]),
            C::SavePrompt => Self::titled(260, 54, PINNED).with_extra(save_buttons()),
            C::ScenarioSelect => Self::titled(734, 384, CENTRE)
                .with_extra(tabs(8))
                .with_extra([Widget::new(WidgetType::TextBox, 4, 729, 364, 377)]),
            C::ObjectLoadError => Self::titled(450, 400, CENTRE).with_extra([scroll(450, 400)]),

            C::EditorObjectSelection => Self::titled(600, 400, CENTRE | WindowFlags::RESIZABLE)
                .with_extra([scroll(600, 400)]),
            C::EditorInventionList => Self::titled(600, 400, RESIZE),
            C::EditorScenarioOptions => Self::titled(280, 148, AUTO).with_extra(tabs(3)),
            C::EditorObjectiveOptions => Self::titled(450, 229, AUTO).with_extra(tabs(2)),
        }
    }

    /// A frame ready for `WindowManager::create`.
    pub fn into_frame(self, class: WindowClass) -> WindowFrame {
        let mut frame = WindowFrame::new(class, self.size)
            .at(self.pos)
            .with_flags(self.flags)
            .with_widgets(self.widgets);
        frame.viewport = self.viewport;
        frame.scrolls = frame
            .widgets
            .iter()
            .filter(|w| w.kind == WidgetType::Scroll)
            .map(|_| ScrollArea::default())
            .collect();
        if frame.flags.contains(WindowFlags::RESIZABLE) {
            frame = frame.with_size_limits(
                ScreenSize::new(self.size.width / 2, self.size.height / 2),
                ScreenSize::new(self.size.width * 2, self.size.height * 2),
            );
        }
        frame
    }
}

fn tabs(count: i32) -> Vec<Widget> {
    (0..count)
        .map(|i| Widget::new(WidgetType::Tab, 3 + i * 31, 33 + i * 31, 17, 43))
        .collect()
}

fn scroll(width: i32, height: i32) -> Widget {
    Widget::new(WidgetType::Scroll, 3, width - 4, 46, height - 4)
}

fn yes_no() -> [Widget; 2] {
    [
        Widget::new(WidgetType::Button, 10, 94, 68, 81),
        Widget::new(WidgetType::Button, 105, 189, 68, 81),
    ]
}

fn save_buttons() -> [Widget; 3] {
    [
        Widget::new(WidgetType::Button, 10, 94, 35, 48),
        Widget::new(WidgetType::Button, 90, 174, 35, 48),
        Widget::new(WidgetType::Button, 170, 254, 35, 48),
    ]
}

fn construction_buttons(count: i32) -> Vec<Widget> {
    (0..count)
        .map(|i| Widget::new(WidgetType::FlatButton, 3 + i * 26, 26 + i * 26, 20, 43))
        .collect()
}
