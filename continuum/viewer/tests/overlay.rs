use egui::{Pos2, Rect};
use engine::aggregate::{readouts, MarkerReadout};
use engine::board::MarkerBoard;
use engine::grid::catalog::GridCatalog;
use engine::marker::Footprint;
use engine::resize::ResizeHandle;
use engine::NormalizedPoint;
use viewer::colormap::{Blend, PaletteName};
use viewer::overlay::{handle_positions, hit_test, indicator_fraction, HitTarget, OverlayState};
use viewer::pixel_map::{area_rect, footprint_rect};

fn screen() -> Rect {
    Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(400.0, 700.0))
}

fn readout(id: &str, x: f64, y: f64) -> MarkerReadout {
    MarkerReadout {
        id: id.into(),
        name: id.into(),
        center: NormalizedPoint::new(x, y),
        footprint: Footprint::default(),
        value: 50.0,
    }
}

#[test]
fn footprint_rect_scales_with_area() {
    let r = footprint_rect(NormalizedPoint::new(0.5, 0.5), Footprint::default(), screen());
    assert_eq!(r.center(), Pos2::new(300.0, 400.0));
    assert!((r.width() - 60.0).abs() < 1e-3);
    assert!((r.height() - 140.0).abs() < 1e-3);
}

#[test]
fn hit_prefers_handles_then_topmost_body() {
    let rs = vec![readout("a", 0.5, 0.5), readout("b", 0.55, 0.5)];
    let rect = screen();
    let center_b = footprint_rect(rs[1].center, rs[1].footprint, rect).center();
    let hit = hit_test(center_b, &rs, rect, 8.0).unwrap();
    assert_eq!(hit.marker_id, "b");
    assert_eq!(hit.target, HitTarget::Body);

    let ra = footprint_rect(rs[0].center, rs[0].footprint, rect);
    let hit = hit_test(ra.left_top(), &rs, rect, 8.0).unwrap();
    assert_eq!(hit.marker_id, "a");
    assert_eq!(hit.target, HitTarget::Handle(ResizeHandle::NW));

    assert!(hit_test(Pos2::new(101.0, 51.0), &rs, rect, 8.0).is_none());
}

#[test]
fn handles_sit_on_edges_and_corners() {
    let r = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 20.0));
    let hs = handle_positions(r);
    assert!(hs.contains(&(ResizeHandle::E, Pos2::new(10.0, 10.0))));
    assert!(hs.contains(&(ResizeHandle::SW, Pos2::new(0.0, 20.0))));
}

#[test]
fn indicator_is_clamped() {
    assert_eq!(indicator_fraction(50.0), 0.5);
    assert_eq!(indicator_fraction(-5.0), 0.0);
    assert_eq!(indicator_fraction(250.0), 1.0);
    assert_eq!(indicator_fraction(f64::NAN), 0.0);
}

#[test]
fn shapes_are_cached_until_inputs_change() {
    let pal = PaletteName::Continuum.palette();
    let mut st = OverlayState::default();
    let rs = vec![readout("a", 0.5, 0.5)];
    let n = st.shapes(screen(), &rs, pal, Blend::Srgb).len();
    // outline fill + stroke + bar segments + tick + 8 grips
    assert_eq!(n, 2 + st.bar_segments as usize + 1 + 8);
    st.show_handles = false;
    assert_eq!(st.shapes(screen(), &rs, pal, Blend::Srgb).len(), n);
    st.invalidate();
    assert_eq!(st.shapes(screen(), &rs, pal, Blend::Srgb).len(), n - 8);
    assert!(st.shapes(screen(), &[], pal, Blend::Srgb).is_empty());
}

#[test]
fn screen_interaction_drives_board() {
    let rect = screen();
    let area = area_rect(rect);
    let grid = GridCatalog::builtin().default_metric();
    let mut board = MarkerBoard::new();
    let id = board.add("edge").unwrap().id.clone();
    board.drop_at(&id, engine::geometry::PointerPos::new(300.0, 400.0), &area);

    let rs = readouts(board.list(), grid);
    let mr = footprint_rect(rs[0].center, rs[0].footprint, rect);
    let grip = Pos2::new(mr.right(), mr.center().y);
    let hit = hit_test(grip, &rs, rect, 8.0).unwrap();
    let HitTarget::Handle(h) = hit.target else { panic!("expected a grip") };
    let start = engine::geometry::PointerPos::new(grip.x as f64, grip.y as f64);
    assert!(board.begin_resize(&hit.marker_id, h, start));
    board.pointer_move(engine::geometry::PointerPos::new(start.x + 40.0, start.y), &area);
    board.pointer_up();
    // 40 px of a 400 px wide area on the east grip widens by 0.2
    assert!((board.get(&id).unwrap().footprint.width - 0.35).abs() < 1e-6);
}
