//! Pixel-space data area and conversions into normalized space.

use continuum_field::NormalizedPoint;

/// Pointer position in pixels, in the same coordinate frame as [`AreaRect`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPos {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate (grows downward)
    pub y: f64,
}

impl PointerPos {
    /// Construct from pixel coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the data area in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaRect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl AreaRect {
    /// Construct from position and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Area anchored at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    fn usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Pointer position relative to the area, unclamped. A collapsed area maps
    /// everything onto its center.
    pub fn normalize(&self, p: PointerPos) -> NormalizedPoint {
        if !self.usable() {
            return NormalizedPoint::new(0.5, 0.5);
        }
        NormalizedPoint::new((p.x - self.left) / self.width, (p.y - self.top) / self.height)
    }

    /// Pointer travel from `from` to `to` as fractions of the area size.
    /// A collapsed area yields no travel.
    pub fn delta(&self, from: PointerPos, to: PointerPos) -> (f64, f64) {
        if !self.usable() {
            return (0.0, 0.0);
        }
        ((to.x - from.x) / self.width, (to.y - from.y) / self.height)
    }

    /// Pixel position of a normalized point.
    pub fn to_pixels(&self, p: NormalizedPoint) -> PointerPos {
        PointerPos::new(self.left + p.x * self.width, self.top + p.y * self.height)
    }
}
