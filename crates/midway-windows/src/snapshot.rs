use serde::{Deserialize, Serialize};

use crate::class::{WindowClass, WindowNumber};
use crate::registry::Entry;

/// Serialisable view of one live window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub handle: u64,
    pub class: WindowClass,
    pub number: WindowNumber,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub flags: u32,
}

impl From<&Entry> for WindowSnapshot {
    fn from(entry: &Entry) -> Self {
        let frame = &entry.frame;
        Self {
            handle: entry.handle.0,
            class: frame.class,
            number: frame.number,
            x: frame.pos.x,
            y: frame.pos.y,
            width: frame.size.width,
            height: frame.size.height,
            flags: frame.flags.bits(),
        }
    }
}
