use egui::{epaint::Shape, Color32, ColorImage, Pos2, Rect, Stroke};

use engine::aggregate::MarkerReadout;
use engine::resize::ResizeHandle;

use crate::colormap::{Blend, Palette};
use crate::pixel_map::footprint_rect;

/// What the pointer is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Body,
    Handle(ResizeHandle),
}

/// Marker under the pointer and the part that was hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    pub marker_id: String,
    pub target: HitTarget,
}

pub struct OverlayState {
    pub show_handles: bool,
    pub show_value_bar: bool,
    /// Side of the square resize grips, in points
    pub handle_px: f32,
    /// Segments used to draw each marker's gradient bar
    pub bar_segments: u32,
    pub outline: Stroke,

    // Cache management
    last_rect_key: Option<[f32; 4]>,
    last_readouts: Vec<MarkerReadout>,
    pub(crate) shapes_cache: Option<Vec<Shape>>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            show_handles: true,
            show_value_bar: true,
            handle_px: 8.0,
            bar_segments: 24,
            outline: Stroke::new(1.5, Color32::WHITE),
            last_rect_key: None,
            last_readouts: Vec::new(),
            shapes_cache: None,
        }
    }
}

fn rect_key(rect: Rect) -> [f32; 4] {
    [rect.left(), rect.top(), rect.right(), rect.bottom()]
}

/// Position of a marker value on its own 0..100 gradient bar, in `[0,1]`.
pub fn indicator_fraction(value: f64) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        (value / 100.0).clamp(0.0, 1.0) as f32
    }
}

/// Grip centres around a marker rectangle.
pub fn handle_positions(r: Rect) -> [(ResizeHandle, Pos2); 8] {
    let c = r.center();
    [
        (ResizeHandle::N, Pos2::new(c.x, r.top())),
        (ResizeHandle::S, Pos2::new(c.x, r.bottom())),
        (ResizeHandle::E, Pos2::new(r.right(), c.y)),
        (ResizeHandle::W, Pos2::new(r.left(), c.y)),
        (ResizeHandle::NE, r.right_top()),
        (ResizeHandle::NW, r.left_top()),
        (ResizeHandle::SE, r.right_bottom()),
        (ResizeHandle::SW, r.left_bottom()),
    ]
}

/// Topmost marker under `pos` (later markers draw over earlier ones).
/// Grips win over bodies so a grip overhanging a neighbour still resizes.
pub fn hit_test(pos: Pos2, readouts: &[MarkerReadout], rect: Rect, handle_px: f32) -> Option<Hit> {
    let half = handle_px * 0.5;
    for r in readouts.iter().rev() {
        let mr = footprint_rect(r.center, r.footprint, rect);
        for (h, p) in handle_positions(mr) {
            if (pos.x - p.x).abs() <= half && (pos.y - p.y).abs() <= half {
                return Some(Hit { marker_id: r.id.clone(), target: HitTarget::Handle(h) });
            }
        }
    }
    readouts.iter().rev().find(|r| footprint_rect(r.center, r.footprint, rect).contains(pos)).map(|r| Hit {
        marker_id: r.id.clone(),
        target: HitTarget::Body,
    })
}

pub fn build_marker_shapes(
    rect: Rect,
    readouts: &[MarkerReadout],
    palette: &Palette,
    blend: Blend,
    st: &OverlayState,
) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for r in readouts {
        let mr = footprint_rect(r.center, r.footprint, rect);
        shapes.push(Shape::rect_filled(mr, 4.0, Color32::from_black_alpha(96)));
        shapes.push(Shape::rect_stroke(mr, 4.0, st.outline));

        if st.show_value_bar {
            // Thin gradient strip along the bottom with a tick at the averaged value
            let bar_h = (mr.height() * 0.12).clamp(3.0, 10.0);
            let bar = Rect::from_min_max(
                Pos2::new(mr.left() + 4.0, mr.bottom() - 4.0 - bar_h),
                Pos2::new(mr.right() - 4.0, mr.bottom() - 4.0),
            );
            let n = st.bar_segments.max(1);
            let seg_w = bar.width() / n as f32;
            for i in 0..n {
                let t = (i as f64 + 0.5) / n as f64;
                let [cr, cg, cb] = palette.color_for(t * 100.0, 0.0, 100.0, blend);
                let x0 = bar.left() + seg_w * i as f32;
                let seg = Rect::from_min_max(Pos2::new(x0, bar.top()), Pos2::new(x0 + seg_w, bar.bottom()));
                shapes.push(Shape::rect_filled(seg, 0.0, Color32::from_rgb(cr, cg, cb)));
            }
            let x = bar.left() + indicator_fraction(r.value) * bar.width();
            shapes.push(Shape::line_segment(
                [Pos2::new(x, bar.top() - 2.0), Pos2::new(x, bar.bottom() + 2.0)],
                Stroke::new(2.0, Color32::WHITE),
            ));
        }

        if st.show_handles {
            for (_, p) in handle_positions(mr) {
                let grip = Rect::from_center_size(p, egui::vec2(st.handle_px, st.handle_px));
                shapes.push(Shape::rect_filled(grip, 1.0, Color32::WHITE));
            }
        }
    }
    shapes
}

impl OverlayState {
    /// Drop cached shapes; the next `shapes` call rebuilds them.
    pub fn invalidate(&mut self) {
        self.shapes_cache = None;
    }

    /// Marker shapes for `rect`, rebuilt only when the rectangle or the readouts change.
    pub fn shapes(&mut self, rect: Rect, readouts: &[MarkerReadout], palette: &Palette, blend: Blend) -> &[Shape] {
        let key = rect_key(rect);
        if self.last_rect_key != Some(key) || self.last_readouts.as_slice() != readouts {
            self.shapes_cache = None;
            self.last_rect_key = Some(key);
            self.last_readouts = readouts.to_vec();
        }
        if self.shapes_cache.is_none() {
            self.shapes_cache = Some(build_marker_shapes(rect, readouts, palette, blend, self));
        }
        self.shapes_cache.as_deref().unwrap_or_default()
    }
}

/// Draw one-pixel marker outlines straight into a raster (for exported images).
pub fn paint_outlines(img: &mut ColorImage, readouts: &[MarkerReadout], color: Color32) {
    let [w, h] = img.size;
    if w == 0 || h == 0 {
        return;
    }
    let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(w as f32, h as f32));
    for r in readouts {
        let mr = footprint_rect(r.center, r.footprint, area);
        let x0 = (mr.left().round().max(0.0) as usize).min(w - 1);
        let x1 = (mr.right().round().max(0.0) as usize).min(w - 1);
        let y0 = (mr.top().round().max(0.0) as usize).min(h - 1);
        let y1 = (mr.bottom().round().max(0.0) as usize).min(h - 1);
        for x in x0..=x1 {
            img.pixels[y0 * w + x] = color;
            img.pixels[y1 * w + x] = color;
        }
        for y in y0..=y1 {
            img.pixels[y * w + x0] = color;
            img.pixels[y * w + x1] = color;
        }
    }
}
