use egui::{Color32, ColorImage};
use engine::grid::{catalog::GridCatalog, MetricGrid};
use viewer::colormap::{Blend, PaletteName};
use viewer::pixel_map::pixel_to_grid;
use viewer::raster::{render_cells, render_field, render_into};

#[test]
fn constant_grid_renders_uniformly() {
    let flat = MetricGrid::from_rows("flat", [[33.0; 4]; 7]).unwrap();
    let pal = PaletteName::Continuum.palette();
    let img = render_field(&flat, pal, Blend::Srgb, 64, 48);
    assert_eq!(img.size, [64, 48]);
    let first = img.pixels[0];
    assert!(img.pixels.iter().all(|&p| p == first));
    assert_eq!(first.a(), 255);
}

#[test]
fn extremes_use_full_ramp_after_renormalization() {
    // Latency spans 15..98, yet the minimum cell renders as the first stop
    let grid = GridCatalog::builtin().metric("Latency").unwrap();
    let pal = PaletteName::BlueRed.palette();
    let img = render_field(grid, pal, Blend::Srgb, 40, 70);
    assert_eq!(img.pixels[0], Color32::from_rgb(0, 0, 255));
}

#[test]
fn every_pixel_is_opaque() {
    let grid = GridCatalog::builtin().metric("Mobility").unwrap();
    let img = render_field(grid, PaletteName::Continuum.palette(), Blend::Linear, 33, 21);
    assert!(img.pixels.iter().all(|p| p.a() == 255));
}

#[test]
fn render_into_resizes_caller_buffer() {
    let grid = MetricGrid::from_rows("checker", [[0.0, 100.0], [100.0, 0.0]]).unwrap();
    let pal = PaletteName::BlueRed.palette();
    let mut img = ColorImage::new([1, 1], Color32::TRANSPARENT);
    render_into(&mut img, &grid, pal, Blend::Srgb, 10, 10);
    assert_eq!(img.size, [10, 10]);
    assert_eq!(img.pixels.len(), 100);
    // pixel (5,5) maps to grid (0.5,0.5) -> 50
    let p = img.pixels[5 * 10 + 5];
    assert!(p.r() == 127 || p.r() == 128);
    assert_eq!(p.g(), 0);

    render_into(&mut img, &grid, pal, Blend::Srgb, 0, 3);
    assert_eq!(img.size, [0, 3]);
    assert!(img.pixels.is_empty());
}

#[test]
fn pixel_mapping_spans_index_range() {
    assert_eq!(pixel_to_grid(0, 0, 100, 50, 7, 4), (0.0, 0.0));
    assert_eq!(pixel_to_grid(50, 25, 100, 50, 7, 4), (1.5, 3.0));
    assert_eq!(pixel_to_grid(3, 3, 0, 0, 1, 1), (0.0, 0.0));
}

#[test]
fn cell_view_uses_fixed_scale() {
    let grid = GridCatalog::builtin().metric("Latency").unwrap();
    let pal = PaletteName::Continuum.palette();
    let img = render_cells(grid, pal, Blend::Srgb, 4);
    assert_eq!(img.size, [16, 28]);
    let [r, g, b] = pal.color_for(15.0, 0.0, 100.0, Blend::Srgb);
    assert_eq!(img.pixels[0], Color32::from_rgb(r, g, b));
    // bottom-right cell is 98
    let [r, g, b] = pal.color_for(98.0, 0.0, 100.0, Blend::Srgb);
    assert_eq!(img.pixels[28 * 16 - 1], Color32::from_rgb(r, g, b));
}
