use engine::board::MarkerBoard;
use engine::geometry::{AreaRect, PointerPos};
use engine::marker::{Footprint, Marker, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use engine::NormalizedPoint;

const AREA: AreaRect = AreaRect::new(10.0, 20.0, 400.0, 700.0);

fn at(nx: f64, ny: f64) -> PointerPos {
    PointerPos::new(AREA.left + nx * AREA.width, AREA.top + ny * AREA.height)
}

#[test]
fn add_appends_unplaced_with_defaults() {
    let mut board = MarkerBoard::new();
    let a = board.add("  cache  ").unwrap().clone();
    let b = board.add("db").unwrap().clone();
    assert_eq!(a.name, "cache");
    assert!(!a.is_placed());
    assert_eq!(a.footprint, Footprint::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert_ne!(a.id, b.id);
    let names: Vec<&str> = board.list().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["cache", "db"]);
}

#[test]
fn blank_names_are_ignored() {
    let mut board = MarkerBoard::new();
    assert!(board.add("   ").is_none());
    assert!(board.is_empty());
}

#[test]
fn remove_unknown_is_noop() {
    let mut board = MarkerBoard::new();
    let id = board.add("x").unwrap().id.clone();
    assert!(!board.remove("nope"));
    assert_eq!(board.len(), 1);
    assert!(board.remove(&id));
    assert!(board.is_empty());
    assert!(!board.remove(&id));
}

#[test]
fn place_normalizes_against_area() {
    let mut board = MarkerBoard::new();
    let id = board.add("x").unwrap().id.clone();
    assert!(board.place(&id, at(0.5, 0.4), &AREA));
    let c = board.get(&id).unwrap().center.unwrap();
    assert!((c.x - 0.5).abs() < 1e-12);
    assert!((c.y - 0.4).abs() < 1e-12);
    assert_eq!(board.placed().count(), 1);
}

#[test]
fn place_clamps_footprint_inside_area() {
    let mut board = MarkerBoard::new();
    let id = board.add("x").unwrap().id.clone();
    for &(nx, ny) in &[(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0), (3.0, 0.5), (0.5, -0.2), (0.99, 0.01)] {
        board.place(&id, at(nx, ny), &AREA);
        let m = board.get(&id).unwrap();
        let c = m.center.unwrap();
        let (hw, hh) = m.footprint.half();
        assert!(c.x >= hw - 1e-12 && c.x <= 1.0 - hw + 1e-12, "x={} for {nx}", c.x);
        assert!(c.y >= hh - 1e-12 && c.y <= 1.0 - hh + 1e-12, "y={} for {ny}", c.y);
    }
}

#[test]
fn place_unknown_id_is_noop() {
    let mut board = MarkerBoard::new();
    board.add("x");
    assert!(!board.place("stale", at(0.5, 0.5), &AREA));
    assert!(board.placed().next().is_none());
}

#[test]
fn collapsed_area_places_at_center() {
    let mut board = MarkerBoard::new();
    let id = board.add("x").unwrap().id.clone();
    board.place(&id, PointerPos::new(5.0, 5.0), &AreaRect::from_size(0.0, 0.0));
    assert_eq!(board.get(&id).unwrap().center, Some(NormalizedPoint::new(0.5, 0.5)));
}

#[test]
fn drop_ends_drag_and_places() {
    let mut board = MarkerBoard::new();
    let id = board.add("x").unwrap().id.clone();
    assert!(board.begin_drag(&id));
    assert_eq!(board.interaction(), engine::interaction::InteractionState::Dragging(id.clone()));
    assert!(board.drop_at(&id, at(0.3, 0.3), &AREA));
    assert_eq!(board.interaction(), engine::interaction::InteractionState::Idle);
    assert!(board.get(&id).unwrap().is_placed());
}

#[test]
fn restore_fills_defaults_and_revalidates() {
    let m = Marker::restore("a".into(), "n".into(), Some(NormalizedPoint::new(0.0, 1.0)), None, None);
    assert_eq!(m.footprint, Footprint::default());
    let c = m.center.unwrap();
    assert!((c.x - DEFAULT_WIDTH / 2.0).abs() < 1e-12);
    assert!((c.y - (1.0 - DEFAULT_HEIGHT / 2.0)).abs() < 1e-12);
    let tiny = Marker::restore("b".into(), "n".into(), None, Some(0.01), Some(f64::NAN));
    assert_eq!(tiny.footprint, Footprint::new(0.12, DEFAULT_HEIGHT));
}
