//! Window classifications and the sub-view / detail selectors used by
//! open requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-class instance number. Two windows of one class differ by number.
pub type WindowNumber = u32;

macro_rules! window_classes {
    ($($variant:ident),+ $(,)?) => {
        /// The kind of a window.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum WindowClass {
            $($variant),+
        }

        impl WindowClass {
            /// Every class, in declaration order.
            pub const ALL: &'static [WindowClass] = &[$(WindowClass::$variant),+];
        }
    };
}

window_classes! {
    MainWindow,
    TopToolbar,
    BottomToolbar,
    Viewport,
    Dropdown,
    Tooltip,
    TextInput,
    Error,
    Options,
    Themes,
    KeyboardShortcutList,
    About,
    Changelog,
    Cheats,
    Finances,
    ParkInformation,
    Research,
    NewCampaign,
    RecentNews,
    Notifications,
    GuestList,
    StaffList,
    Peep,
    Staff,
    FirePrompt,
    RideList,
    Ride,
    ConstructRide,
    RideConstruction,
    MazeConstruction,
    DemolishRidePrompt,
    RefurbishRidePrompt,
    TrackDesignList,
    TrackDesignPlace,
    ManageTrackDesign,
    InstallTrack,
    Scenery,
    Footpath,
    Land,
    Water,
    LandRights,
    ClearScenery,
    Map,
    TileInspector,
    Banner,
    Sign,
    SignSmall,
    Player,
    Multiplayer,
    ServerList,
    ServerStart,
    NetworkStatus,
    ProgressWindow,
    LoadSave,
    SavePrompt,
    ScenarioSelect,
    ObjectLoadError,
    EditorObjectSelection,
    EditorInventionList,
    EditorScenarioOptions,
    EditorObjectiveOptions,
    EditorBottomToolbar,
    TitleMenu,
    TitleExit,
    TitleOptions,
}

impl fmt::Display for WindowClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Sub-views that are pages of another window rather than windows of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowView {
    ParkAwards,
    ParkRating,
    ParkObjective,
    ParkGuests,
    FinancesResearch,
    FinanceMarketing,
    RideResearch,
    MazeConstruction,
    NetworkPassword,
    EditorBottomToolbar,
    Changelog,
    NewVersionInfo,
}

impl WindowView {
    pub const ALL: &'static [WindowView] = &[
        WindowView::ParkAwards,
        WindowView::ParkRating,
        WindowView::ParkObjective,
        WindowView::ParkGuests,
        WindowView::FinancesResearch,
        WindowView::FinanceMarketing,
        WindowView::RideResearch,
        WindowView::MazeConstruction,
        WindowView::NetworkPassword,
        WindowView::EditorBottomToolbar,
        WindowView::Changelog,
        WindowView::NewVersionInfo,
    ];
}

/// Windows keyed by a single numeric id (banner index, ride id, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowDetail {
    Banner,
    NewCampaign,
    DemolishRide,
    RefurbishRide,
    Sign,
    SignSmall,
    Player,
}

impl WindowDetail {
    pub const ALL: &'static [WindowDetail] = &[
        WindowDetail::Banner,
        WindowDetail::NewCampaign,
        WindowDetail::DemolishRide,
        WindowDetail::RefurbishRide,
        WindowDetail::Sign,
        WindowDetail::SignSmall,
        WindowDetail::Player,
    ];

    /// The class of window a detail request opens.
    pub fn class(self) -> WindowClass {
        match self {
            WindowDetail::Banner => WindowClass::Banner,
            WindowDetail::NewCampaign => WindowClass::NewCampaign,
            WindowDetail::DemolishRide => WindowClass::DemolishRidePrompt,
            WindowDetail::RefurbishRide => WindowClass::RefurbishRidePrompt,
            WindowDetail::Sign => WindowClass::Sign,
            WindowDetail::SignSmall => WindowClass::SignSmall,
            WindowDetail::Player => WindowClass::Player,
        }
    }
}
