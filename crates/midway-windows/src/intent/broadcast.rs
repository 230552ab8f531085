use midway_common::{BannerIndex, EntityId, RideId};
use serde::{Deserialize, Serialize};

/// A game-state change announced to the window layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Broadcast {
    ResetMap,
    RefreshCampaignRideList,
    RefreshNewRides,
    RefreshRideList,
    UpdateMazeConstruction,
    /// Point ride construction at `ride`, reopening it if it is on
    /// another ride.
    RideConstructionFocus {
        ride: RideId,
    },
    RideConstructionUpdatePieces,
    RideConstructionUpdateActiveElements,
    InitScenery,
    SetDefaultSceneryConfig,
    RefreshScenery,
    InvalidateTickerNews,
    RefreshGuestList,
    RefreshStaffList,
    ClearTileInspectorClipboard,
    InvalidateVehicleWindow {
        ride: RideId,
        vehicle: EntityId,
    },
    RidePaintResetVehicle {
        ride: RideId,
    },
    UpdateClimate,
    UpdateGuestCount,
    UpdateParkRating,
    UpdateDate,
    UpdateCash,
    UpdateBanner {
        banner: BannerIndex,
    },
    UpdateResearch,
    UpdateVehicleSounds,
    SetMapTooltip {
        text: String,
    },
    TrackDesignRemoveProvisional,
    TrackDesignRestoreProvisional,
    SetTileInspectorPage {
        page: u32,
    },
    SetTileInspectorButtons,
}
