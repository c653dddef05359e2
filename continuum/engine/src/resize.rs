//! Resize handles and the footprint transition applied on every pointer move.

use std::fmt;
use std::str::FromStr;

use continuum_field::NormalizedPoint;

use crate::marker::Footprint;

/// One of the eight edge and corner grips around a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top edge
    N,
    /// Bottom edge
    S,
    /// Right edge
    E,
    /// Left edge
    W,
    /// Top-right corner
    NE,
    /// Top-left corner
    NW,
    /// Bottom-right corner
    SE,
    /// Bottom-left corner
    SW,
}

/// Unrecognised handle name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resize handle '{0}' (expected n, s, e, w, ne, nw, se or sw)")]
pub struct ParseHandleError(pub String);

impl ResizeHandle {
    /// All handles, edges first.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    /// Lowercase compass name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    /// +1 when the handle moves the right edge, -1 for the left edge, 0 otherwise.
    pub fn x_sign(self) -> f64 {
        match self {
            Self::E | Self::NE | Self::SE => 1.0,
            Self::W | Self::NW | Self::SW => -1.0,
            Self::N | Self::S => 0.0,
        }
    }

    /// +1 when the handle moves the bottom edge, -1 for the top edge, 0 otherwise.
    pub fn y_sign(self) -> f64 {
        match self {
            Self::S | Self::SE | Self::SW => 1.0,
            Self::N | Self::NE | Self::NW => -1.0,
            Self::E | Self::W => 0.0,
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == lower)
            .ok_or_else(|| ParseHandleError(s.to_string()))
    }
}

/// Footprint after dragging `handle` by normalized `(dx, dy)` from the interaction start.
///
/// The center stays put, so both half-extents move and each touched dimension
/// changes by twice the delta. Touched dimensions are floored at the minimum
/// footprint and capped so the rectangle cannot leave the area around `center`;
/// untouched dimensions keep their starting size.
pub fn resized(
    start: Footprint,
    handle: ResizeHandle,
    dx: f64,
    dy: f64,
    center: NormalizedPoint,
) -> Footprint {
    let sx = handle.x_sign();
    let sy = handle.y_sign();
    let grown = Footprint::new(start.width + 2.0 * sx * dx, start.height + 2.0 * sy * dy);
    let bounded = grown.bounded(center);
    Footprint::new(
        if sx == 0.0 { start.width } else { bounded.width },
        if sy == 0.0 { start.height } else { bounded.height },
    )
}
