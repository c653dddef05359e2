//! Marker persistence through a simple key-value store.
//!
//! One key holds the whole ordered marker list as a JSON array of
//! `{id, name, x, y, width, height}` records; every change overwrites it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use continuum_field::NormalizedPoint;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::marker::Marker;

/// Key used when none is configured.
pub const DEFAULT_KEY: &str = "continuum.markers";

/// Errors from store backends.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Wrapper for standard I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Marker list could not be encoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.borrow().get(key).cloned())
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory (created on first write).
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// File backing `key`; characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Persisted shape of one marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Center x, `null` while unplaced
    #[serde(default)]
    pub x: Option<f64>,
    /// Center y, `null` while unplaced
    #[serde(default)]
    pub y: Option<f64>,
    /// Footprint width; absent in records written before resizing existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Footprint height; absent in records written before resizing existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl From<&Marker> for MarkerRecord {
    fn from(m: &Marker) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            x: m.center.map(|c| c.x),
            y: m.center.map(|c| c.y),
            width: Some(m.footprint.width),
            height: Some(m.footprint.height),
        }
    }
}

impl From<MarkerRecord> for Marker {
    fn from(r: MarkerRecord) -> Self {
        let center = match (r.x, r.y) {
            (Some(x), Some(y)) => Some(NormalizedPoint::new(x, y)),
            _ => None,
        };
        Marker::restore(r.id, r.name, center, r.width, r.height)
    }
}

/// Encode the ordered marker list.
pub fn encode_markers(markers: &[Marker]) -> Result<String, serde_json::Error> {
    let records: Vec<MarkerRecord> = markers.iter().map(MarkerRecord::from).collect();
    serde_json::to_string(&records)
}

/// Decode a stored marker list. Anything that is not an array of records
/// decodes to an empty list.
pub fn decode_markers(src: &str) -> Vec<Marker> {
    match serde_json::from_str::<Vec<MarkerRecord>>(src) {
        Ok(records) => records.into_iter().map(Marker::from).collect(),
        Err(e) => {
            warn!(error = %e, "discarding malformed marker list");
            Vec::new()
        }
    }
}

/// Read the marker list under `key`; a missing key or unreadable store gives an empty list.
pub fn load_markers(store: &dyn KeyValueStore, key: &str) -> Vec<Marker> {
    match store.get(key) {
        Ok(Some(text)) => decode_markers(&text),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, key, "marker store unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite `key` with the full marker list.
pub fn save_markers(
    store: &mut dyn KeyValueStore,
    key: &str,
    markers: &[Marker],
) -> Result<(), StoreError> {
    let text = encode_markers(markers)?;
    store.set(key, &text)
}
