//! Rounded clip region covering the whole window

use super::geometry::{Point, Rect, Size};

/// Corner rounding of the widget silhouette
pub const DEFAULT_CORNER_RADIUS: i32 = 15;

/// Description of a rounded-rectangle window region in window-local
/// coordinates. The platform turns it into an OS region at assignment time,
/// after which the OS owns that region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRegion {
    bounds: Rect,
    corner_radius: i32,
}

impl ClipRegion {
    /// Region spanning (0,0)-(width,height) of a window of `size`
    pub fn rounded(size: Size, corner_radius: i32) -> Self {
        Self {
            bounds: Rect::from_origin_size(Point::new(0, 0), size),
            corner_radius: corner_radius.max(0),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn corner_radius(&self) -> i32 {
        self.corner_radius
    }
}
