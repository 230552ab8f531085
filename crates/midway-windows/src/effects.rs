//! Side effects the manager queues for the renderer and audio layer.

use midway_common::ScreenRect;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundId {
    WindowOpen,
}

/// A sound to play, panned to a screen x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundCue {
    pub sound: SoundId,
    pub pan_x: i32,
}

/// Dirty regions and sound cues accumulated since the last drain.
#[derive(Debug, Default)]
pub struct Effects {
    dirty: Vec<ScreenRect>,
    sounds: Vec<SoundCue>,
}

impl Effects {
    /// Mark a screen region for redraw. Empty regions are dropped.
    pub fn invalidate(&mut self, rect: ScreenRect) {
        if !rect.is_empty() {
            self.dirty.push(rect);
        }
    }

    pub fn play(&mut self, sound: SoundId, pan_x: i32) {
        self.sounds.push(SoundCue { sound, pan_x });
    }

    pub fn dirty(&self) -> &[ScreenRect] {
        &self.dirty
    }

    pub fn sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn take_dirty(&mut self) -> Vec<ScreenRect> {
        std::mem::take(&mut self.dirty)
    }

    pub fn take_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }
}
