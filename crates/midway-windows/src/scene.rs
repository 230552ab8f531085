use serde::{Deserialize, Serialize};

/// Step of the scenario editor the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorStep {
    ObjectSelection,
    LandscapeEditor,
    InventionsListSetUp,
    OptionsSelection,
    ObjectiveSelection,
    SaveScenario,
    RollercoasterDesigner,
    DesignsManager,
}

/// What the game is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum Scene {
    TitleSequence,
    #[default]
    Playing,
    ScenarioEditor { step: EditorStep },
    TrackDesigner,
    TrackManager,
}

impl Scene {
    pub fn is_title_sequence(self) -> bool {
        matches!(self, Scene::TitleSequence)
    }
}
