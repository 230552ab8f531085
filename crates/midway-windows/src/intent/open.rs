use midway_common::{EntityId, RideId};
use serde::{Deserialize, Serialize};

use super::callback::{CloseCallback, LoadSaveCallback, ScenarioCallback};
use crate::class::{WindowClass, WindowDetail, WindowView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSaveAction {
    Load,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSaveType {
    Park,
    Landscape,
    Scenario,
    Track,
    Heightmap,
}

/// Outcome handed to a load/save completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSaveResult {
    Chosen(String),
    Cancelled,
}

/// Which dispatch tier handles an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentTier {
    /// Opens a window of a given class with typed arguments.
    Class,
    /// Performs an operation that may return a window.
    Action,
    /// Picks a window by payload shape.
    Detail,
}

/// A request to open or operate on a window.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    // Class tier.
    OpenClass {
        class: WindowClass,
    },
    LoadSave {
        action: LoadSaveAction,
        kind: LoadSaveType,
        #[serde(default)]
        default_path: Option<String>,
        #[serde(skip)]
        callback: Option<LoadSaveCallback>,
        #[serde(default)]
        track_design: Option<String>,
    },
    Error {
        title: String,
        message: String,
    },
    ObjectLoadError {
        path: String,
        objects: Vec<String>,
    },
    Peep {
        peep: EntityId,
        #[serde(default)]
        staff: bool,
    },
    FirePrompt {
        peep: EntityId,
    },
    InstallTrack {
        path: String,
    },
    ManageTrackDesign {
        design: String,
    },
    TrackDesignPlace {
        design: String,
    },
    TrackDesignList {
        ride_type: u8,
        entry: u16,
    },
    ScenarioSelect {
        #[serde(skip)]
        callback: Option<ScenarioCallback>,
    },
    NetworkStatus {
        text: String,
        #[serde(skip)]
        callback: Option<CloseCallback>,
    },

    // Action tier.
    ProgressOpen {
        text: String,
        #[serde(skip)]
        callback: Option<CloseCallback>,
    },
    ProgressUpdate {
        current: u32,
        total: u32,
        #[serde(default)]
        caption: Option<String>,
    },
    ProgressClose,
    NewRideOfType {
        ride_type: u8,
    },

    // Detail tier.
    RideFromVehicle {
        ride: RideId,
        vehicle: EntityId,
    },
    RideFromTrack {
        ride: RideId,
    },
    View {
        view: WindowView,
    },
    Details {
        detail: WindowDetail,
        id: u32,
    },
}

impl Intent {
    pub fn tier(&self) -> IntentTier {
        match self {
            Intent::OpenClass { .. }
            | Intent::LoadSave { .. }
            | Intent::Error { .. }
            | Intent::ObjectLoadError { .. }
            | Intent::Peep { .. }
            | Intent::FirePrompt { .. }
            | Intent::InstallTrack { .. }
            | Intent::ManageTrackDesign { .. }
            | Intent::TrackDesignPlace { .. }
            | Intent::TrackDesignList { .. }
            | Intent::ScenarioSelect { .. }
            | Intent::NetworkStatus { .. } => IntentTier::Class,
            Intent::ProgressOpen { .. }
            | Intent::ProgressUpdate { .. }
            | Intent::ProgressClose
            | Intent::NewRideOfType { .. } => IntentTier::Action,
            Intent::RideFromVehicle { .. }
            | Intent::RideFromTrack { .. }
            | Intent::View { .. }
            | Intent::Details { .. } => IntentTier::Detail,
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Intent::OpenClass { class } => format!("open {class}"),
            Intent::View { view } => format!("view {view:?}"),
            Intent::Details { detail, id } => format!("detail {detail:?} #{id}"),
            other => format!("{:?} intent", other.tier()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_intent_deserialises_without_callback() {
        let intent: Intent = serde_json::from_str(
            r#"{"intent":"load_save","action":"load","kind":"park","default_path":"/parks"}"#,
        )
        .unwrap();
        match intent {
            Intent::LoadSave {
                action,
                kind,
                default_path,
                callback,
                track_design,
            } => {
                assert_eq!(action, LoadSaveAction::Load);
                assert_eq!(kind, LoadSaveType::Park);
                assert_eq!(default_path.as_deref(), Some("/parks"));
                assert!(callback.is_none());
                assert!(track_design.is_none());
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn tiers() {
        assert_eq!(
            Intent::OpenClass {
                class: WindowClass::Map
            }
            .tier(),
            IntentTier::Class
        );
        assert_eq!(Intent::ProgressClose.tier(), IntentTier::Action);
        assert_eq!(
            Intent::RideFromTrack { ride: RideId(1) }.tier(),
            IntentTier::Detail
        );
    }

    #[test]
    fn describe_names_class() {
        let intent = Intent::OpenClass {
            class: WindowClass::Finances,
        };
        assert_eq!(intent.describe(), "open Finances");
    }
}
