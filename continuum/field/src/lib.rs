#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod bilinear;
mod space;

pub use bilinear::{bilinear, value_range, ScalarGrid};
pub use space::{lattice, to_grid_space, NormRect, NormalizedPoint, SAMPLES_PER_AXIS};

/// Mean of `f` evaluated on the `SAMPLES_PER_AXIS` x `SAMPLES_PER_AXIS` lattice spanning `rect`.
///
/// A rectangle with zero extent on an axis samples the same coordinate repeatedly
/// along that axis, so a point-sized rectangle yields `f(center)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lattice_mean<F: FnMut(NormalizedPoint) -> f64>(rect: NormRect, mut f: F) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for y in lattice(rect.top, rect.bottom, SAMPLES_PER_AXIS) {
        for x in lattice(rect.left, rect.right, SAMPLES_PER_AXIS) {
            sum += f(NormalizedPoint::new(x, y));
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
