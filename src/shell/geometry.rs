//! Window placement values fixed at creation time

use std::fmt;

use crate::error::ShellError;

/// Screen-space origin of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Edge coordinates, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Far edges saturate at `i32::MAX`
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x.saturating_add(size.width),
            bottom: origin.y.saturating_add(size.height),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.right - self.left, self.bottom - self.top)
    }
}

/// Origin and size of the widget. Only constructible with a positive size
/// whose far edges fit in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    origin: Point,
    size: Size,
}

impl WindowGeometry {
    pub fn new(origin: Point, size: Size) -> Result<Self, ShellError> {
        if size.width <= 0 || size.height <= 0 {
            return Err(ShellError::InvalidGeometry {
                width: size.width,
                height: size.height,
            });
        }
        if origin.x.checked_add(size.width).is_none() || origin.y.checked_add(size.height).is_none()
        {
            return Err(ShellError::GeometryOutOfRange {
                x: origin.x,
                y: origin.y,
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { origin, size })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Screen rectangle the window occupies
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Same size, different origin
    pub fn moved_to(self, origin: Point) -> Result<Self, ShellError> {
        Self::new(origin, self.size)
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            origin: Point::new(10, 10),
            size: Size::new(400, 500),
        }
    }
}

/// OS-level identification string for the window. Never drawn, since the
/// caption is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTitle(String);

impl WindowTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowTitle {
    fn default() -> Self {
        Self::new("Tamagotchi Duck")
    }
}

impl fmt::Display for WindowTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
