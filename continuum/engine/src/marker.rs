//! User-placed rectangular markers and their footprint invariants.

use continuum_field::{NormRect, NormalizedPoint};

/// Footprint width when none is recorded.
pub const DEFAULT_WIDTH: f64 = 0.15;
/// Footprint height when none is recorded.
pub const DEFAULT_HEIGHT: f64 = 0.2;
/// Narrowest footprint that still fits the label.
pub const MIN_WIDTH: f64 = 0.12;
/// Shortest footprint that still fits the label.
pub const MIN_HEIGHT: f64 = 0.15;

/// Marker size as fractions of the data-area width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Fraction of the data-area width
    pub width: f64,
    /// Fraction of the data-area height
    pub height: f64,
}

impl Default for Footprint {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl Footprint {
    /// Construct from explicit sizes.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Resolve optional recorded sizes: absent or non-finite fields take the defaults,
    /// then the result is kept between the minimum footprint and the full area.
    pub fn resolve(width: Option<f64>, height: Option<f64>) -> Self {
        let w = width.filter(|v| v.is_finite()).unwrap_or(DEFAULT_WIDTH);
        let h = height.filter(|v| v.is_finite()).unwrap_or(DEFAULT_HEIGHT);
        Self::new(w.max(MIN_WIDTH).min(1.0), h.max(MIN_HEIGHT).min(1.0))
    }

    /// Half extents `(half_width, half_height)`.
    pub fn half(&self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// Largest footprint centred on `center` that stays inside the unit square.
    pub fn max_around(center: NormalizedPoint) -> Self {
        Self::new(2.0 * center.x.min(1.0 - center.x), 2.0 * center.y.min(1.0 - center.y))
    }

    /// Floor at the minimum footprint, then cap at the boundary maximum for `center`.
    /// When the two conflict the boundary wins.
    pub fn bounded(self, center: NormalizedPoint) -> Self {
        let max = Self::max_around(center);
        Self::new(
            self.width.max(MIN_WIDTH).min(max.width),
            self.height.max(MIN_HEIGHT).min(max.height),
        )
    }

    /// Clamp `p` so a rectangle of this footprint centred there stays in the unit square.
    pub fn clamp_center(&self, p: NormalizedPoint) -> NormalizedPoint {
        let (hw, hh) = self.half();
        let x = if p.x.is_nan() { 0.5 } else { p.x };
        let y = if p.y.is_nan() { 0.5 } else { p.y };
        NormalizedPoint::new(x.max(hw).min(1.0 - hw), y.max(hh).min(1.0 - hh))
    }
}

/// A named, resizable annotation on the heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Stable unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Center in normalized space, `None` until dropped onto the map
    pub center: Option<NormalizedPoint>,
    /// Size as fractions of the data area
    pub footprint: Footprint,
}

impl Marker {
    /// New unplaced marker with a fresh UUID and the default footprint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            center: None,
            footprint: Footprint::default(),
        }
    }

    /// Rebuild a marker from stored fields, re-establishing the placement invariants.
    pub fn restore(
        id: String,
        name: String,
        center: Option<NormalizedPoint>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        let footprint = Footprint::resolve(width, height);
        let center = center.map(|c| footprint.clamp_center(c));
        Self { id, name, center, footprint }
    }

    /// True once the marker has a center.
    pub fn is_placed(&self) -> bool {
        self.center.is_some()
    }

    /// Footprint rectangle in normalized space, `None` while unplaced.
    pub fn rect(&self) -> Option<NormRect> {
        self.center.map(|c| NormRect::around(c, self.footprint.width, self.footprint.height))
    }

    /// Center the marker on `p`, clamped so the footprint stays inside the area.
    pub(crate) fn place_at(&mut self, p: NormalizedPoint) {
        self.center = Some(self.footprint.clamp_center(p));
    }
}
