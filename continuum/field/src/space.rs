//! Normalized data-area space: the heatmap spans `[0,1] x [0,1]` whatever its pixel size.

/// Samples per axis used when averaging over a footprint.
pub const SAMPLES_PER_AXIS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise clamp into the unit square.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(unit(self.x), unit(self.y))
    }
}

#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Axis-aligned rectangle in normalized space, edges clamped to `[0,1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl NormRect {
    /// Rectangle of `width` x `height` centred on `center`, each edge clamped to `[0,1]`.
    #[must_use]
    pub fn around(center: NormalizedPoint, width: f64, height: f64) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            left: unit(center.x - hw),
            top: unit(center.y - hh),
            right: unit(center.x + hw),
            bottom: unit(center.y + hh),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Map a normalized point onto grid-space coordinates of a `rows` x `cols` grid.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_grid_space(p: NormalizedPoint, rows: usize, cols: usize) -> (f64, f64) {
    let x_span = cols.saturating_sub(1) as f64;
    let y_span = rows.saturating_sub(1) as f64;
    (p.x * x_span, p.y * y_span)
}

/// `n` evenly spaced values from `lo` to `hi` inclusive; `n == 1` yields `lo`.
#[allow(clippy::cast_precision_loss)]
pub fn lattice(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (hi - lo) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { hi } else { lo + step * i as f64 })
}
