//! Pixel <-> grid and normalized-space mappings shared by the raster and overlay code.

use continuum_field::NormalizedPoint;
use egui::{Pos2, Rect};
use engine::geometry::AreaRect;
use engine::marker::Footprint;

/// Map pixel `(x, y)` of a `width` x `height` buffer to grid-space coordinates of a
/// `rows` x `cols` grid: `(x / width * (cols-1), y / height * (rows-1))`.
pub fn pixel_to_grid(x: usize, y: usize, width: usize, height: usize, rows: usize, cols: usize) -> (f64, f64) {
	let u = x as f64 / width.max(1) as f64;
	let v = y as f64 / height.max(1) as f64;
	(u * cols.saturating_sub(1) as f64, v * rows.saturating_sub(1) as f64)
}

/// Screen rectangle as the engine's data-area box.
pub fn area_rect(rect: Rect) -> AreaRect {
	AreaRect::new(rect.left() as f64, rect.top() as f64, rect.width() as f64, rect.height() as f64)
}

/// Screen position of a normalized point inside `rect`.
pub fn to_screen(p: NormalizedPoint, rect: Rect) -> Pos2 {
	Pos2::new(rect.left() + (p.x as f32) * rect.width(), rect.top() + (p.y as f32) * rect.height())
}

/// Screen rectangle covered by a footprint centred on `center`.
pub fn footprint_rect(center: NormalizedPoint, footprint: Footprint, rect: Rect) -> Rect {
	let c = to_screen(center, rect);
	let size = egui::vec2(footprint.width as f32 * rect.width(), footprint.height as f32 * rect.height());
	Rect::from_center_size(c, size)
}
