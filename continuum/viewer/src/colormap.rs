//! Color ramps for the heatmap (viewer-only).
//!
//! - `.pal` continuous palette: `value #RRGGBB` per line
//! - piecewise-linear sampling per channel, in sRGB or in linear light
//!
//! Built-in ramps are embedded with include_str! so there is no runtime IO.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A single color stop along the palette domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Domain value (metric units, 0..100 for the built-in ramps)
    pub v: f64,
    /// sRGB 8-bit triplet
    pub rgb: [u8; 3],
}

/// Continuous palette: strictly increasing stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub stops: Vec<ColorStop>,
    pub vmin: f64,
    pub vmax: f64,
}

/// How channels are blended between stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Blend {
    /// Straight per-channel interpolation of the 8-bit sRGB values.
    #[default]
    Srgb,
    /// Gamma-correct interpolation through linear light.
    Linear,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error(".pal: line {0} missing value")]
    MissingValue(usize),
    #[error(".pal: line {line} bad value '{token}'")]
    BadValue { line: usize, token: String },
    #[error(".pal: line {0} missing color")]
    MissingColor(usize),
    #[error(".pal: line {line} {reason}")]
    BadColor { line: usize, reason: &'static str },
    #[error(".pal: no stops")]
    Empty,
    #[error(".pal: values must be strictly increasing at index {0}")]
    NotIncreasing(usize),
}

pub const CONTINUUM_STR: &str = include_str!("../assets/ramps/continuum.pal");
pub const BLUE_PURPLE_RED_STR: &str = include_str!("../assets/ramps/blue_purple_red.pal");
pub const BLUE_RED_STR: &str = include_str!("../assets/ramps/blue_red.pal");

impl Palette {
    /// Validate stops (non-empty, strictly increasing) and build a palette.
    pub fn from_stops(stops: Vec<ColorStop>) -> Result<Self, PaletteError> {
        let (first, last) = match (stops.first(), stops.last()) {
            (Some(f), Some(l)) => (f.v, l.v),
            _ => return Err(PaletteError::Empty),
        };
        for i in 1..stops.len() {
            if stops[i].v.partial_cmp(&stops[i - 1].v) != Some(std::cmp::Ordering::Greater) {
                return Err(PaletteError::NotIncreasing(i));
            }
        }
        Ok(Self { stops, vmin: first, vmax: last })
    }

    /// Color at domain value `x`, clamped to `[vmin, vmax]`.
    pub fn sample(&self, x: f64, blend: Blend) -> [u8; 3] {
        let n = self.stops.len();
        if n == 0 {
            return [0, 0, 0];
        }
        if n == 1 {
            return self.stops[0].rgb;
        }
        let x = if x.is_nan() { self.vmin } else { x.clamp(self.vmin, self.vmax) };
        // Find segment [i, i+1] such that v_i <= x <= v_{i+1}; linear scan is fine for small N
        let i = (0..n - 1).find(|&k| x <= self.stops[k + 1].v).unwrap_or(n - 2);
        let a = self.stops[i];
        let b = self.stops[i + 1];
        let t = if b.v > a.v { (x - a.v) / (b.v - a.v) } else { 0.0 };
        match blend {
            Blend::Srgb => [
                lerp_u8(a.rgb[0], b.rgb[0], t),
                lerp_u8(a.rgb[1], b.rgb[1], t),
                lerp_u8(a.rgb[2], b.rgb[2], t),
            ],
            Blend::Linear => {
                let la = srgb_u8_to_linear(a.rgb);
                let lb = srgb_u8_to_linear(b.rgb);
                let t = t as f32;
                [
                    linear_to_srgb_u8(la[0] + t * (lb[0] - la[0])),
                    linear_to_srgb_u8(la[1] + t * (lb[1] - la[1])),
                    linear_to_srgb_u8(la[2] + t * (lb[2] - la[2])),
                ]
            }
        }
    }

    /// Color for a metric `value` on the scale `[scale_min, scale_max]`.
    ///
    /// The value is normalized to an intensity in `[0,1]` and mapped onto the
    /// palette domain, so intensity 0 gives the first stop and 1 the last. A
    /// collapsed scale is widened to a unit range.
    pub fn color_for(&self, value: f64, scale_min: f64, scale_max: f64, blend: Blend) -> [u8; 3] {
        let range = scale_max - scale_min;
        let range = if range.is_finite() && range != 0.0 { range } else { 1.0 };
        let intensity = (value - scale_min) / range;
        let intensity = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
        self.sample(self.vmin + intensity * (self.vmax - self.vmin), blend)
    }
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    (a + t * (b - a)).round().clamp(0.0, 255.0) as u8
}

/// Parse a `.pal` continuous palette.
///
/// Format: lines of `value  #RRGGBB`, blank lines and `#` comments are ignored.
pub fn parse_pal(src: &str) -> Result<Palette, PaletteError> {
    let mut stops: Vec<ColorStop> = Vec::new();
    for (lineno, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = lineno + 1;
        // Value is the first token, color the first token starting with '#'; anything after is ignored
        let mut toks = line.split_whitespace();
        let v_str = toks.next().ok_or(PaletteError::MissingValue(lineno))?;
        let v: f64 = v_str
            .parse()
            .map_err(|_| PaletteError::BadValue { line: lineno, token: v_str.to_string() })?;
        let col_tok = toks.find(|t| t.starts_with('#')).ok_or(PaletteError::MissingColor(lineno))?;
        let rgb = parse_hex_rgb(col_tok).map_err(|reason| PaletteError::BadColor { line: lineno, reason })?;
        stops.push(ColorStop { v, rgb });
    }
    Palette::from_stops(stops)
}

#[inline]
fn parse_hex_rgb(tok: &str) -> Result<[u8; 3], &'static str> {
    let hex = tok.trim().strip_prefix('#').ok_or("expected #RRGGBB")?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("expected 6 hex digits");
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "bad R")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "bad G")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "bad B")?;
    Ok([r, g, b])
}

#[inline]
fn srgb_u8_to_linear(rgb: [u8; 3]) -> [f32; 3] {
    [srgb_to_linear(rgb[0]), srgb_to_linear(rgb[1]), srgb_to_linear(rgb[2])]
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let x = f32::from(c) / 255.0;
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb_u8(c: f32) -> u8 {
    let y = if c <= 0.003_130_8 { 12.92 * c } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 };
    (y.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

/// Built-in ramps selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteName {
    /// Dark blue to light green
    #[default]
    Continuum,
    BluePurpleRed,
    BlueRed,
}

static CONTINUUM: OnceLock<Palette> = OnceLock::new();
static BLUE_PURPLE_RED: OnceLock<Palette> = OnceLock::new();
static BLUE_RED: OnceLock<Palette> = OnceLock::new();

impl PaletteName {
    pub const ALL: [PaletteName; 3] =
        [PaletteName::Continuum, PaletteName::BluePurpleRed, PaletteName::BlueRed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continuum => "continuum",
            Self::BluePurpleRed => "blue-purple-red",
            Self::BlueRed => "blue-red",
        }
    }

    pub fn palette(self) -> &'static Palette {
        let (cell, src) = match self {
            Self::Continuum => (&CONTINUUM, CONTINUUM_STR),
            Self::BluePurpleRed => (&BLUE_PURPLE_RED, BLUE_PURPLE_RED_STR),
            Self::BlueRed => (&BLUE_RED, BLUE_RED_STR),
        };
        cell.get_or_init(|| parse_pal(src).unwrap_or_else(|e| panic!("{}.pal: {e}", self.as_str())))
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown palette '{0}' (expected continuum, blue-purple-red or blue-red)")]
pub struct UnknownPalette(pub String);

impl FromStr for PaletteName {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|p| p.as_str() == key).ok_or_else(|| UnknownPalette(s.to_string()))
    }
}
