//! Integer screen geometry for monitor work areas.
//!
//! Coordinates are virtual-screen pixels with a top-left origin (y grows
//! downward); a monitor to the left of the primary has a negative `left`.

use std::fmt;

/// Pixel position in virtual-screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointPx {
    /// Horizontal coordinate in pixels.
    pub x: i32,
    /// Vertical coordinate in pixels.
    pub y: i32,
}

impl PointPx {
    /// Construct a point from raw coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PointPx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Usable rectangle of a monitor, edges in virtual-screen pixels.
///
/// `right` and `bottom` are exclusive, so a 1920x1080 primary monitor has a
/// work area of `(0, 0, 1920, 1080)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkArea {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl WorkArea {
    /// Construct a work area from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Construct from a top-left origin and a pixel size.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w as i32,
            bottom: y + h as i32,
        }
    }

    /// Top-left corner; the placement target for a window on this monitor.
    #[must_use]
    pub const fn origin(&self) -> PointPx {
        PointPx {
            x: self.left,
            y: self.top,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl fmt::Display for WorkArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{}",
            self.width(),
            self.height(),
            self.origin()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_and_extent() {
        let wa = WorkArea::new(1920, 0, 3840, 1080);
        assert_eq!(wa.origin(), PointPx::new(1920, 0));
        assert_eq!(wa.width(), 1920);
        assert_eq!(wa.height(), 1080);
    }

    #[test]
    fn from_origin_size_matches_edges() {
        let wa = WorkArea::from_origin_size(-1440, 240, 1440, 900);
        assert_eq!(wa, WorkArea::new(-1440, 240, 0, 1140));
    }

    #[test]
    fn display_formats() {
        let wa = WorkArea::new(0, 0, 1920, 1080);
        assert_eq!(wa.to_string(), "1920x1080@(0, 0)");
    }
}
