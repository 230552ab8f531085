//! Widget table entries. Edges are relative to the window origin and
//! `right`/`bottom` are inclusive.

use midway_common::{ScreenCoords, ScreenRect};
use serde::{Deserialize, Serialize};

pub type WidgetIndex = usize;

/// `left` value marking a widget that has not been positioned yet.
pub const WIDGET_UNPOSITIONED: i32 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    Empty,
    Frame,
    Caption,
    CloseBox,
    Button,
    FlatButton,
    ImageButton,
    Tab,
    Label,
    Spinner,
    DropdownMenu,
    Checkbox,
    Scroll,
    Viewport,
    Groupbox,
    TextBox,
    Resize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub kind: WidgetType,
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    #[serde(default)]
    pub hidden: bool,
}

impl Widget {
    pub const fn new(kind: WidgetType, left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            kind,
            left,
            right,
            top,
            bottom,
            hidden: false,
        }
    }

    pub fn is_positioned(&self) -> bool {
        self.left != WIDGET_UNPOSITIONED
    }

    /// Whether the widget takes part in hit testing.
    pub fn is_interactive(&self) -> bool {
        self.kind != WidgetType::Empty && !self.hidden
    }

    /// Hit test against a point already made relative to the window.
    pub fn contains(&self, local: ScreenCoords) -> bool {
        local.x >= self.left && local.x <= self.right && local.y >= self.top && local.y <= self.bottom
    }

    /// Absolute dirty rectangle for a window at `origin`.
    pub fn screen_rect(&self, origin: ScreenCoords) -> ScreenRect {
        ScreenRect::new(
            origin.x + self.left,
            origin.y + self.top,
            origin.x + self.right + 1,
            origin.y + self.bottom + 1,
        )
    }
}

/// Background, caption and close box for a titled window of `width` x `height`.
pub fn titled_frame(width: i32, height: i32) -> Vec<Widget> {
    vec![
        Widget::new(WidgetType::Frame, 0, width - 1, 0, height - 1),
        Widget::new(WidgetType::Caption, 1, width - 2, 1, 14),
        Widget::new(WidgetType::CloseBox, width - 13, width - 3, 2, 13),
    ]
}

/// Index of the close box in a `titled_frame` table.
pub const WIDX_CLOSE: WidgetIndex = 2;
