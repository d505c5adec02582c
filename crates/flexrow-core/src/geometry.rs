//! Geometric primitives shared by the layout crates.
//!
//! All values are `f64` in container coordinates (origin top-left, y grows
//! downward). Nothing here clamps or validates: negative extents are legal and
//! flow through unchanged.

use glam::DVec2;

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for DVec2 {
    fn from(s: Size) -> Self {
        DVec2::new(s.width, s.height)
    }
}

/// Axis-aligned rectangle: an item's computed frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Top-left corner
    pub x: f64,
    pub y: f64,
    /// Extent (may be negative for out-of-range specs)
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Content insets on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    /// Create insets in top/left/bottom/right order.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create uniform insets.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric insets.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// The space left inside `container` once the insets are removed.
    ///
    /// Not clamped: insets wider than the container give a negative extent.
    pub fn inset_size(&self, container: Size) -> Size {
        Size::new(
            container.width - self.horizontal(),
            container.height - self.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert!((bounds.right() - 110.0).abs() < 0.001);
        assert!((bounds.bottom() - 70.0).abs() < 0.001);
        assert_eq!(bounds.origin(), Point::new(10.0, 20.0));
        assert_eq!(bounds.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_bounds_from_vecs() {
        let bounds = Bounds::from_vecs(DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0));
        assert_eq!(bounds, Bounds::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(DVec2::from(bounds.size()), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn test_inset_size() {
        let insets = EdgeInsets::new(5.0, 10.0, 15.0, 20.0);
        let inner = insets.inset_size(Size::new(200.0, 100.0));
        assert!((inner.width - 170.0).abs() < 0.001);
        assert!((inner.height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_inset_size_goes_negative() {
        let inner = EdgeInsets::uniform(60.0).inset_size(Size::new(100.0, 100.0));
        assert!((inner.width + 20.0).abs() < 0.001);
    }

    #[test]
    fn test_symmetric_insets() {
        let insets = EdgeInsets::symmetric(4.0, 8.0);
        assert!((insets.horizontal() - 8.0).abs() < 0.001);
        assert!((insets.vertical() - 16.0).abs() < 0.001);
    }
}
