use engine::board::MarkerBoard;
use engine::geometry::{AreaRect, PointerPos};
use engine::marker::{Footprint, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use engine::resize::ResizeHandle;
use engine::store::{
    decode_markers, encode_markers, load_markers, save_markers, FileStore, KeyValueStore,
    MemoryStore, StoreError, DEFAULT_KEY,
};
use engine::NormalizedPoint;

const AREA: AreaRect = AreaRect::from_size(640.0, 480.0);

#[test]
fn missing_key_loads_empty() {
    let store = MemoryStore::new();
    assert!(load_markers(&store, DEFAULT_KEY).is_empty());
}

#[test]
fn malformed_state_loads_empty() {
    for bad in ["{}", "42", "\"x\"", "not json", "[{\"id\": 1}]", "[{\"name\": \"no id\"}]"] {
        assert!(decode_markers(bad).is_empty(), "{bad}");
    }
}

#[test]
fn legacy_records_get_default_footprint() {
    let ms = decode_markers(r#"[{"id":"a","name":"A","x":null,"y":null},{"id":"b","name":"B","x":0.5,"y":0.5}]"#);
    assert_eq!(ms.len(), 2);
    assert!(!ms[0].is_placed());
    assert_eq!(ms[1].footprint, Footprint::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert_eq!(ms[1].center, Some(NormalizedPoint::new(0.5, 0.5)));
}

#[test]
fn half_specified_center_is_unplaced() {
    let ms = decode_markers(r#"[{"id":"a","name":"A","x":0.4,"y":null,"width":0.2,"height":0.3}]"#);
    assert_eq!(ms[0].center, None);
    assert_eq!(ms[0].footprint, Footprint::new(0.2, 0.3));
}

#[test]
fn round_trip_preserves_ids_positions_sizes() {
    let mut board = MarkerBoard::new();
    let a = board.add("alpha").unwrap().id.clone();
    board.add("beta");
    let c = board.add("gamma").unwrap().id.clone();
    board.place(&a, PointerPos::new(123.4, 321.7), &AREA);
    board.place(&c, PointerPos::new(600.0, 10.0), &AREA);
    board.begin_resize(&a, ResizeHandle::SE, PointerPos::new(0.0, 0.0));
    board.pointer_move(PointerPos::new(41.3, 17.9), &AREA);
    board.pointer_up();

    let text = encode_markers(board.list()).unwrap();
    let back = decode_markers(&text);
    assert_eq!(back, board.list());
}

#[test]
fn record_shape_matches_store_contract() {
    let mut board = MarkerBoard::new();
    board.add("solo");
    let v: serde_json::Value = serde_json::from_str(&encode_markers(board.list()).unwrap()).unwrap();
    let rec = &v.as_array().unwrap()[0];
    for k in ["id", "name", "x", "y", "width", "height"] {
        assert!(rec.get(k).is_some(), "missing {k}");
    }
    assert!(rec["x"].is_null());
}

#[test]
fn board_writes_through_on_every_change() {
    let store = MemoryStore::new();
    let mut board = MarkerBoard::open(Box::new(store.clone()), "k");
    let id = board.add("x").unwrap().id.clone();
    assert_eq!(load_markers(&store, "k").len(), 1);
    board.place(&id, PointerPos::new(320.0, 240.0), &AREA);
    assert!(load_markers(&store, "k")[0].is_placed());
    board.begin_resize(&id, ResizeHandle::E, PointerPos::new(320.0, 240.0));
    board.pointer_move(PointerPos::new(352.0, 240.0), &AREA);
    assert!((load_markers(&store, "k")[0].footprint.width - 0.25).abs() < 1e-12);
    board.pointer_up();
    board.remove(&id);
    assert!(load_markers(&store, "k").is_empty());

    let reopened = MarkerBoard::open(Box::new(store), "k");
    assert!(reopened.is_empty());
}

#[test]
fn file_store_persists_between_boards() -> Result<(), StoreError> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::new(dir.path().join("state"));
    assert_eq!(store.get(DEFAULT_KEY)?, None);
    let mut board = MarkerBoard::open(Box::new(store.clone()), DEFAULT_KEY);
    let id = board.add("edge cache").unwrap().id.clone();
    board.place(&id, PointerPos::new(100.0, 100.0), &AREA);
    let snapshot = board.list().to_vec();
    drop(board);

    let reopened = MarkerBoard::open(Box::new(store.clone()), DEFAULT_KEY);
    assert_eq!(reopened.list(), snapshot.as_slice());

    save_markers(&mut store, DEFAULT_KEY, &[])?;
    assert_eq!(store.get(DEFAULT_KEY)?.as_deref(), Some("[]"));
    assert!(store.path_for("a/b c").ends_with("a_b_c.json"));
    Ok(())
}

/// Store whose writes always fail.
struct Broken;

impl KeyValueStore for Broken {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(std::io::Error::other("offline").into())
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(std::io::Error::other("offline").into())
    }
}

#[test]
fn store_failures_never_reach_the_board() {
    let mut board = MarkerBoard::open(Box::new(Broken), DEFAULT_KEY);
    assert!(board.is_empty());
    let id = board.add("x").unwrap().id.clone();
    assert!(board.place(&id, PointerPos::new(1.0, 1.0), &AREA));
    assert_eq!(board.len(), 1);
}
