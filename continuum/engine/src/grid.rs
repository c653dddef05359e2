//! Metric grids: fixed rows x columns matrices of quality scores.
//!
//! Rows index the abstraction level axis (hardware at the top, user at the
//! bottom), columns the deployment tier axis (devices on the left, cloud on the
//! right). Grids are immutable once built.

pub mod builtin;
pub mod catalog;

use continuum_field::{bilinear, to_grid_space, value_range, NormalizedPoint, ScalarGrid};
use serde::{Deserialize, Serialize};

/// Errors raised while assembling grids and catalogs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Matrix has no rows or no columns
    #[error("metric '{0}' has no cells")]
    Empty(String),
    /// A row length differs from the first row
    #[error("metric '{metric}' row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Metric name
        metric: String,
        /// 0-based row index
        row: usize,
        /// Columns found in that row
        found: usize,
        /// Columns in row 0
        expected: usize,
    },
    /// Metric shape differs from the rest of the catalog
    #[error("metric '{metric}' is {rows}x{cols}, catalog shape is {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        /// Metric name
        metric: String,
        /// Rows of the offending metric
        rows: usize,
        /// Columns of the offending metric
        cols: usize,
        /// Rows shared by the catalog
        expected_rows: usize,
        /// Columns shared by the catalog
        expected_cols: usize,
    },
    /// Axis label count does not match the grid dimension
    #[error("{axis} axis has {found} labels, grids need {expected}")]
    AxisLength {
        /// "level" or "tier"
        axis: &'static str,
        /// Labels supplied
        found: usize,
        /// Grid dimension along that axis
        expected: usize,
    },
    /// Two metrics share a name
    #[error("duplicate metric '{0}'")]
    Duplicate(String),
    /// Catalog without any metric
    #[error("catalog has no metrics")]
    NoMetrics,
}

/// Identifier and display name of one axis position (a level or a tier).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabel {
    /// Short id, e.g. `L3` or `T2`
    pub id: String,
    /// Human readable name
    pub name: String,
}

impl AxisLabel {
    /// Build a label from id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// One named metric: a dense row-major matrix, conventionally on a 0..100 scale.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricGrid {
    name: String,
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl MetricGrid {
    /// Build from row slices. Every row must have the length of the first.
    pub fn from_rows<I, R>(name: impl Into<String>, rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let name = name.into();
        let mut values = Vec::new();
        let mut n_rows = 0usize;
        let mut n_cols = 0usize;
        for (r, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if r == 0 {
                n_cols = row.len();
            } else if row.len() != n_cols {
                return Err(GridError::Ragged {
                    metric: name,
                    row: r,
                    found: row.len(),
                    expected: n_cols,
                });
            }
            values.extend_from_slice(row);
            n_rows += 1;
        }
        if n_rows == 0 || n_cols == 0 {
            return Err(GridError::Empty(name));
        }
        Ok(Self { name, rows: n_rows, cols: n_cols, values })
    }

    /// Metric name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Stored cell value, `None` outside the matrix.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.values.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Row-major cell values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Bilinear sample at grid-space `(x, y)`; out-of-range coordinates saturate.
    pub fn interpolate(&self, x: f64, y: f64) -> f64 {
        bilinear(self, x, y)
    }

    /// Bilinear sample at a normalized data-area point.
    pub fn sample(&self, p: NormalizedPoint) -> f64 {
        let (gx, gy) = to_grid_space(p, self.rows, self.cols);
        bilinear(self, gx, gy)
    }

    /// Smallest and largest stored value.
    pub fn range(&self) -> (f64, f64) {
        value_range(self)
    }
}

impl ScalarGrid for MetricGrid {
    fn rows(&self) -> usize {
        self.rows
    }
    fn cols(&self) -> usize {
        self.cols
    }
    fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}
