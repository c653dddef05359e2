//! Viewer configuration (`continuum.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colormap::{Blend, PaletteName};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("cell_px must be within 1..={max}, got {0}", max = MAX_CELL_PX)]
    CellSize(usize),
}

/// Largest accepted `cell_px`.
pub const MAX_CELL_PX: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Metric shown on start; the catalog's first metric when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default)]
    pub palette: PaletteName,
    #[serde(default)]
    pub blend: Blend,
    /// Side of one grid cell on screen, in pixels
    #[serde(default = "ViewConfig::default_cell_px")]
    pub cell_px: usize,
    #[serde(default = "ViewConfig::default_store_dir")]
    pub store_dir: PathBuf,
    #[serde(default = "ViewConfig::default_store_key")]
    pub store_key: String,
    /// JSON catalog replacing the built-in tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl ViewConfig {
    fn default_cell_px() -> usize {
        96
    }
    fn default_store_dir() -> PathBuf {
        PathBuf::from(".continuum")
    }
    fn default_store_key() -> String {
        engine::store::DEFAULT_KEY.to_string()
    }

    /// Data-area size in pixels for a `rows` x `cols` grid: `(width, height)`.
    pub fn data_size(&self, rows: usize, cols: usize) -> (usize, usize) {
        (cols.saturating_mul(self.cell_px), rows.saturating_mul(self.cell_px))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&text)?;
        if cfg.cell_px == 0 || cfg.cell_px > MAX_CELL_PX {
            return Err(ConfigError::CellSize(cfg.cell_px));
        }
        Ok(cfg)
    }

    /// Load `path`; a missing file gives defaults, a broken one defaults plus a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "config unusable, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            metric: None,
            palette: PaletteName::default(),
            blend: Blend::default(),
            cell_px: Self::default_cell_px(),
            store_dir: Self::default_store_dir(),
            store_key: Self::default_store_key(),
            catalog_path: None,
        }
    }
}
