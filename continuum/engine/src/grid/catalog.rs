//! Ordered set of metric grids sharing one shape, plus the axis labels.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use super::{builtin, AxisLabel, GridError, MetricGrid};

/// Errors loading a catalog document.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Wrapper for standard I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Document is not valid catalog JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Document parsed but the grids are inconsistent
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Deserialize)]
struct CatalogDoc {
    levels: Vec<AxisLabel>,
    tiers: Vec<AxisLabel>,
    metrics: Vec<MetricDoc>,
}

#[derive(Deserialize)]
struct MetricDoc {
    name: String,
    values: Vec<Vec<f64>>,
}

/// Metric grids keyed by name, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCatalog {
    levels: Vec<AxisLabel>,
    tiers: Vec<AxisLabel>,
    metrics: Vec<MetricGrid>,
}

static BUILTIN: OnceLock<GridCatalog> = OnceLock::new();

impl GridCatalog {
    /// Validate and assemble a catalog. All metrics must share one shape equal to
    /// `levels.len()` rows by `tiers.len()` columns.
    pub fn new(
        levels: Vec<AxisLabel>,
        tiers: Vec<AxisLabel>,
        metrics: Vec<MetricGrid>,
    ) -> Result<Self, GridError> {
        let (rows, cols) = metrics.first().ok_or(GridError::NoMetrics)?.shape();
        let mut seen: HashSet<&str> = HashSet::new();
        for m in &metrics {
            let (r, c) = m.shape();
            if (r, c) != (rows, cols) {
                return Err(GridError::ShapeMismatch {
                    metric: m.name().to_string(),
                    rows: r,
                    cols: c,
                    expected_rows: rows,
                    expected_cols: cols,
                });
            }
            if !seen.insert(m.name()) {
                return Err(GridError::Duplicate(m.name().to_string()));
            }
        }
        if levels.len() != rows {
            return Err(GridError::AxisLength { axis: "level", found: levels.len(), expected: rows });
        }
        if tiers.len() != cols {
            return Err(GridError::AxisLength { axis: "tier", found: tiers.len(), expected: cols });
        }
        Ok(Self { levels, tiers, metrics })
    }

    /// The built-in level x tier tables.
    pub fn builtin() -> &'static GridCatalog {
        BUILTIN.get_or_init(|| {
            Self::from_builtin_tables().unwrap_or_else(|e| panic!("builtin catalog: {e}"))
        })
    }

    fn from_builtin_tables() -> Result<Self, GridError> {
        let levels = builtin::LEVELS.iter().map(|(id, name)| AxisLabel::new(*id, *name)).collect();
        let tiers = builtin::TIERS.iter().map(|(id, name)| AxisLabel::new(*id, *name)).collect();
        let metrics = builtin::METRICS
            .iter()
            .map(|(name, table)| MetricGrid::from_rows(*name, table.iter()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels, tiers, metrics)
    }

    /// Parse a JSON catalog: `{levels:[{id,name}], tiers:[{id,name}], metrics:[{name, values}]}`.
    pub fn from_json(src: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_json::from_str(src)?;
        let metrics = doc
            .metrics
            .into_iter()
            .map(|m| MetricGrid::from_rows(m.name, m.values))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(doc.levels, doc.tiers, metrics)?)
    }

    /// Read and parse a JSON catalog file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Look up a metric by exact name.
    pub fn metric(&self, name: &str) -> Option<&MetricGrid> {
        self.metrics.iter().find(|m| m.name() == name)
    }

    /// First metric in catalog order.
    pub fn default_metric(&self) -> &MetricGrid {
        // Non-empty by construction.
        &self.metrics[0]
    }

    /// Metric names in catalog order.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(MetricGrid::name)
    }

    /// All metrics in catalog order.
    pub fn metrics(&self) -> &[MetricGrid] {
        &self.metrics
    }

    /// Row labels (abstraction levels).
    pub fn levels(&self) -> &[AxisLabel] {
        &self.levels
    }

    /// Column labels (deployment tiers).
    pub fn tiers(&self) -> &[AxisLabel] {
        &self.tiers
    }

    /// Shared `(rows, cols)` shape.
    pub fn shape(&self) -> (usize, usize) {
        self.default_metric().shape()
    }

    /// Tooltip text for a cell: `"<tier> - <level>"`.
    pub fn cell_label(&self, row: usize, col: usize) -> Option<String> {
        let level = self.levels.get(row)?;
        let tier = self.tiers.get(col)?;
        Some(format!("{} - {}", tier.name, level.name))
    }

    /// Full hover text for a cell of `metric`: the cell label, then `"<metric>: <value>"`.
    pub fn cell_tooltip(&self, metric: &MetricGrid, row: usize, col: usize) -> Option<String> {
        let label = self.cell_label(row, col)?;
        let value = metric.value(row, col)?;
        Some(format!("{label}\n{}: {value}", metric.name()))
    }
}
