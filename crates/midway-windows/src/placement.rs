//! Where new windows go.
//!
//! Pure functions over a snapshot of the live windows. Auto placement
//! tries, in order: the four screen corners, positions adjacent to an
//! existing window, positions overlapping an existing window, and
//! finally a cascade from the top-left anchor. Each tier is looser than
//! the last so the cascade always answers.

use midway_common::{ScreenCoords, ScreenRect, ScreenSize};

/// Top margin of the upper corner candidates and the cascade anchor.
pub const CORNER_TOP: i32 = 30;
/// Bottom margin of the lower corner candidates.
pub const CORNER_BOTTOM: i32 = 34;
/// Gap between a window and a neighbour placed next to it.
pub const ADJACENT_GAP: i32 = 2;
/// Cascade step.
pub const CASCADE_STEP: i32 = 5;

/// The screen a window is being placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementArea {
    pub screen: ScreenSize,
    pub toolbar_height: i32,
    /// No toolbar exists during the title sequence.
    pub title_sequence: bool,
}

impl PlacementArea {
    /// Smallest y a clamped window may take.
    pub fn toolbar_allowance(&self) -> i32 {
        if self.title_sequence {
            0
        } else {
            self.toolbar_height + 1
        }
    }

    fn clears_toolbar(&self, y: i32) -> bool {
        self.title_sequence || y > self.toolbar_height
    }
}

/// What placement needs to know about an existing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedWindow {
    pub pos: ScreenCoords,
    pub size: ScreenSize,
    pub stick_to_back: bool,
}

impl PlacedWindow {
    fn rect(&self) -> ScreenRect {
        ScreenRect::from_pos_size(self.pos, self.size)
    }
}

/// Screen centre, kept below the toolbar.
pub fn centre_position(area: &PlacementArea, size: ScreenSize) -> ScreenCoords {
    let x = (area.screen.width - size.width) / 2;
    let y = ((area.screen.height - size.height) / 2).max(area.toolbar_height + 1);
    ScreenCoords::new(x, y)
}

/// Fully on screen, clear of the toolbar and of every live window that
/// is not pinned to the back.
pub fn fits_within_space(
    area: &PlacementArea,
    windows: &[PlacedWindow],
    pos: ScreenCoords,
    size: ScreenSize,
) -> bool {
    if pos.x < 0 || !area.clears_toolbar(pos.y) {
        return false;
    }
    if pos.x + size.width > area.screen.width || pos.y + size.height > area.screen.height {
        return false;
    }
    let candidate = ScreenRect::from_pos_size(pos, size);
    windows
        .iter()
        .filter(|w| !w.stick_to_back)
        .all(|w| !candidate.intersects(&w.rect()))
}

/// Looser test: a window may hang a quarter of its width off the left
/// and right edges and a quarter of its height off the bottom.
pub fn fits_on_screen(area: &PlacementArea, pos: ScreenCoords, size: ScreenSize) -> bool {
    let overhang = size.width / 4;
    if pos.x < -overhang {
        return false;
    }
    if pos.x > area.screen.width - 2 * overhang {
        return false;
    }
    if !area.clears_toolbar(pos.y) {
        return false;
    }
    pos.y <= area.screen.height - size.height / 4
}

fn corners(area: &PlacementArea, size: ScreenSize) -> [ScreenCoords; 4] {
    let right = area.screen.width - size.width;
    let bottom = area.screen.height - CORNER_BOTTOM - size.height;
    [
        ScreenCoords::new(0, CORNER_TOP),
        ScreenCoords::new(right, CORNER_TOP),
        ScreenCoords::new(0, bottom),
        ScreenCoords::new(right, bottom),
    ]
}

/// Right, left, below, above, then the four diagonals.
fn neighbours(w: &PlacedWindow) -> [ScreenCoords; 8] {
    let dx = w.size.width + ADJACENT_GAP;
    let dy = w.size.height + ADJACENT_GAP;
    let offsets = [
        (dx, 0),
        (-dx, 0),
        (0, dy),
        (0, -dy),
        (dx, -dy),
        (-dx, -dy),
        (dx, dy),
        (-dx, dy),
    ];
    offsets.map(|(x, y)| w.pos + ScreenCoords::new(x, y))
}

/// Pick a position for a new window of `size`.
pub fn auto_position(
    area: &PlacementArea,
    windows: &[PlacedWindow],
    size: ScreenSize,
) -> ScreenCoords {
    if let Some(pos) = corners(area, size)
        .into_iter()
        .find(|&pos| fits_within_space(area, windows, pos, size))
    {
        return pos;
    }

    let others = || windows.iter().filter(|w| !w.stick_to_back);

    for w in others() {
        if let Some(pos) = neighbours(w)
            .into_iter()
            .find(|&pos| fits_within_space(area, windows, pos, size))
        {
            return pos;
        }
    }

    for w in others() {
        if let Some(pos) = neighbours(w)[..4]
            .iter()
            .copied()
            .find(|&pos| fits_on_screen(area, pos, size))
        {
            return pos;
        }
    }

    cascade(windows)
}

/// Single pass: every window sitting exactly on the candidate pushes it
/// on by one step. Earlier windows are not rechecked.
pub fn cascade(windows: &[PlacedWindow]) -> ScreenCoords {
    let step = ScreenCoords::new(CASCADE_STEP, CASCADE_STEP);
    windows
        .iter()
        .fold(ScreenCoords::new(0, CORNER_TOP), |pos, w| {
            if w.pos == pos {
                pos + step
            } else {
                pos
            }
        })
}

/// Keep a window on screen and below the toolbar.
pub fn clamp_to_screen(area: &PlacementArea, pos: ScreenCoords, size: ScreenSize) -> ScreenCoords {
    let screen = area.screen;
    let mut out = pos;

    if size.width > screen.width || out.x < 0 {
        out.x = 0;
    } else if out.x + size.width > screen.width {
        out.x = screen.width - size.width;
    }

    let allowance = area.toolbar_allowance();
    if out.y < allowance || size.height > screen.height - allowance {
        out.y = allowance;
    } else if out.y + size.height > screen.height {
        out.y = screen.height - size.height;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlacementArea {
        PlacementArea {
            screen: ScreenSize::new(800, 600),
            toolbar_height: 27,
            title_sequence: false,
        }
    }

    fn placed(x: i32, y: i32, w: i32, h: i32) -> PlacedWindow {
        PlacedWindow {
            pos: ScreenCoords::new(x, y),
            size: ScreenSize::new(w, h),
            stick_to_back: false,
        }
    }

    #[test]
    fn empty_screen_uses_top_left_corner() {
        let pos = auto_position(&area(), &[], ScreenSize::new(200, 100));
        assert_eq!(pos, ScreenCoords::new(0, 30));
    }

    #[test]
    fn corners_are_tried_in_order() {
        let size = ScreenSize::new(200, 100);
        let mut windows = vec![placed(0, 30, 200, 100)];
        assert_eq!(auto_position(&area(), &windows, size), ScreenCoords::new(600, 30));

        windows.push(placed(600, 30, 200, 100));
        assert_eq!(auto_position(&area(), &windows, size), ScreenCoords::new(0, 466));

        windows.push(placed(0, 466, 200, 100));
        assert_eq!(auto_position(&area(), &windows, size), ScreenCoords::new(600, 466));
    }

    #[test]
    fn back_pinned_windows_do_not_block() {
        let mut main = placed(0, 0, 800, 600);
        main.stick_to_back = true;
        let pos = auto_position(&area(), &[main], ScreenSize::new(200, 100));
        assert_eq!(pos, ScreenCoords::new(0, 30));
    }

    #[test]
    fn adjacent_tier_places_right_of_first_window() {
        let size = ScreenSize::new(200, 100);
        let windows = vec![
            placed(0, 30, 200, 100),
            placed(600, 30, 200, 100),
            placed(0, 466, 200, 100),
            placed(600, 466, 200, 100),
        ];
        let pos = auto_position(&area(), &windows, size);
        assert_eq!(pos, ScreenCoords::new(202, 30));
    }

    #[test]
    fn overlap_tier_ignores_other_windows() {
        // A 500x300 window fills too much of the screen for a 500x300
        // neighbour to fit anywhere cleanly.
        let size = ScreenSize::new(500, 300);
        let windows = vec![placed(150, 150, 500, 300)];
        let pos = auto_position(&area(), &windows, size);
        // Tier 3, first cardinal offset that is loosely on screen: below.
        assert_eq!(pos, ScreenCoords::new(150, 452));
        assert!(fits_on_screen(&area(), pos, size));
        assert!(!fits_within_space(&area(), &windows, pos, size));
    }

    #[test]
    fn cascade_single_pass() {
        let size = ScreenSize::new(800, 570);
        let windows = vec![
            placed(0, 30, 800, 570),
            placed(5, 35, 800, 570),
            placed(10, 40, 800, 570),
        ];
        assert_eq!(auto_position(&area(), &windows, size), ScreenCoords::new(15, 45));
    }

    #[test]
    fn cascade_does_not_recheck_earlier_windows() {
        let windows = vec![placed(5, 35, 10, 10), placed(0, 30, 10, 10)];
        assert_eq!(cascade(&windows), ScreenCoords::new(5, 35));
    }

    #[test]
    fn cascade_terminates_for_stacked_windows() {
        let windows: Vec<_> = (0..10).map(|_| placed(0, 30, 800, 570)).collect();
        let pos = cascade(&windows);
        assert_eq!(pos, ScreenCoords::new(5, 35));
    }

    #[test]
    fn toolbar_band_is_off_limits_except_in_title_sequence() {
        let size = ScreenSize::new(100, 100);
        assert!(!fits_within_space(&area(), &[], ScreenCoords::new(0, 27), size));
        assert!(fits_within_space(&area(), &[], ScreenCoords::new(0, 28), size));

        let title = PlacementArea {
            title_sequence: true,
            ..area()
        };
        assert!(fits_within_space(&title, &[], ScreenCoords::new(0, 0), size));
    }

    #[test]
    fn centre_stays_below_toolbar() {
        assert_eq!(
            centre_position(&area(), ScreenSize::new(200, 100)),
            ScreenCoords::new(300, 250)
        );
        assert_eq!(
            centre_position(&area(), ScreenSize::new(200, 590)),
            ScreenCoords::new(300, 28)
        );
    }

    #[test]
    fn clamp_pulls_windows_on_screen() {
        let a = area();
        let size = ScreenSize::new(200, 100);
        assert_eq!(clamp_to_screen(&a, ScreenCoords::new(-40, 10), size), ScreenCoords::new(0, 28));
        assert_eq!(
            clamp_to_screen(&a, ScreenCoords::new(700, 550), size),
            ScreenCoords::new(600, 500)
        );
        assert_eq!(
            clamp_to_screen(&a, ScreenCoords::new(30, 60), ScreenSize::new(900, 100)),
            ScreenCoords::new(0, 60)
        );
    }

    #[test]
    fn clamp_in_title_sequence_allows_top_edge() {
        let a = PlacementArea {
            title_sequence: true,
            ..area()
        };
        assert_eq!(
            clamp_to_screen(&a, ScreenCoords::new(0, -5), ScreenSize::new(100, 100)),
            ScreenCoords::new(0, 0)
        );
    }

    #[test]
    fn auto_then_clamp_is_always_on_screen() {
        let a = area();
        let mut windows = Vec::new();
        for (w, h) in [(200, 100), (400, 300), (800, 572), (50, 50), (640, 200), (300, 500)] {
            let size = ScreenSize::new(w, h);
            let pos = clamp_to_screen(&a, auto_position(&a, &windows, size), size);
            assert!(pos.x >= 0 && pos.x + w <= 800, "x out of range for {w}x{h}: {pos}");
            assert!(pos.y >= 28 && pos.y + h <= 600, "y out of range for {w}x{h}: {pos}");
            windows.push(PlacedWindow {
                pos,
                size,
                stick_to_back: false,
            });
        }
    }
}
