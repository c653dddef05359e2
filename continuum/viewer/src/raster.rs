use egui::{Color32, ColorImage};

use continuum_field::bilinear;
use engine::grid::MetricGrid;

use crate::colormap::{Blend, Palette};
use crate::pixel_map::pixel_to_grid;

/// Continuous heatmap of `grid` into a new `width` x `height` image.
pub fn render_field(grid: &MetricGrid, palette: &Palette, blend: Blend, width: usize, height: usize) -> ColorImage {
    let mut img = ColorImage::new([width, height], Color32::BLACK);
    render_into(&mut img, grid, palette, blend, width, height);
    img
}

/// Continuous heatmap of `grid` written into a caller-owned image, resized when its
/// size differs. Values are renormalized against this grid's own min/max before
/// coloring, so the full ramp is always used.
pub fn render_into(
    img: &mut ColorImage,
    grid: &MetricGrid,
    palette: &Palette,
    blend: Blend,
    width: usize,
    height: usize,
) {
    if img.size != [width, height] {
        *img = ColorImage::new([width, height], Color32::BLACK);
    }
    if width == 0 || height == 0 {
        return;
    }
    let t_start = std::time::Instant::now();

    let (rows, cols) = grid.shape();
    let (lo, hi) = grid.range();
    // Flat grids would divide by zero
    let span = if hi > lo { hi - lo } else { 1.0 };

    for y in 0..height {
        for x in 0..width {
            let (gx, gy) = pixel_to_grid(x, y, width, height, rows, cols);
            let raw = bilinear(grid, gx, gy);
            let pct = (raw - lo) / span * 100.0;
            let [r, g, b] = palette.color_for(pct, 0.0, 100.0, blend);
            img.pixels[y * width + x] = Color32::from_rgb(r, g, b);
        }
    }

    tracing::debug!(
        metric = grid.name(),
        width,
        height,
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        "raster build"
    );
}

/// Discrete table view: one flat `cell_px` square per cell, colored on the fixed 0..100 scale.
pub fn render_cells(grid: &MetricGrid, palette: &Palette, blend: Blend, cell_px: usize) -> ColorImage {
    let (rows, cols) = grid.shape();
    let w = cols * cell_px;
    let h = rows * cell_px;
    let mut img = ColorImage::new([w, h], Color32::BLACK);
    for y in 0..h {
        for x in 0..w {
            let v = grid.value(y / cell_px, x / cell_px).unwrap_or(0.0);
            let [r, g, b] = palette.color_for(v, 0.0, 100.0, blend);
            img.pixels[y * w + x] = Color32::from_rgb(r, g, b);
        }
    }
    img
}
