// Pure functions only: no allocation, no state.

/// Read access to a rectangular matrix of scalar samples, row-major.
///
/// Rows index the vertical axis (y), columns the horizontal axis (x).
pub trait ScalarGrid {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Value at `(row, col)`. Callers guarantee the indices are in bounds.
    fn at(&self, row: usize, col: usize) -> f64;
}

impl<const R: usize, const C: usize> ScalarGrid for [[f64; C]; R] {
    fn rows(&self) -> usize {
        R
    }
    fn cols(&self) -> usize {
        C
    }
    fn at(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

impl ScalarGrid for Vec<Vec<f64>> {
    fn rows(&self) -> usize {
        self.len()
    }
    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
    fn at(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

#[inline]
fn saturate(v: f64, hi: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, hi)
    }
}

/// Bilinear sample at grid-space `(x, y)`, `x` in `[0, cols-1]`, `y` in `[0, rows-1]`.
///
/// Coordinates outside the index range saturate to the nearest edge. One-row or
/// one-column grids collapse to linear (or constant) blends because the upper
/// neighbour index is clamped onto the lower one. An empty grid samples as `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bilinear<G: ScalarGrid + ?Sized>(grid: &G, x: f64, y: f64) -> f64 {
    let rows = grid.rows();
    let cols = grid.cols();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let x = saturate(x, (cols - 1) as f64);
    let y = saturate(y, (rows - 1) as f64);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(cols - 1);
    let y1 = (y0 + 1).min(rows - 1);
    let xf = x - x0 as f64;
    let yf = y - y0 as f64;

    let top = grid.at(y0, x0) * (1.0 - xf) + grid.at(y0, x1) * xf;
    let bottom = grid.at(y1, x0) * (1.0 - xf) + grid.at(y1, x1) * xf;
    top * (1.0 - yf) + bottom * yf
}

/// Minimum and maximum over every cell; `(0.0, 0.0)` for an empty grid.
#[must_use]
pub fn value_range<G: ScalarGrid + ?Sized>(grid: &G) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let v = grid.at(r, c);
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        (0.0, 0.0)
    } else {
        (lo, hi)
    }
}
